// Shared purchase order fixtures. The default order is read from JSON so its
// shape stays aligned with what the store and seed files accept.

use crate::modules::material_tracking::core::order::{MaterialRecord, PurchaseOrder};
use crate::modules::material_tracking::core::status::{MaterialStatus, OrderStatus};
use std::fs;

pub struct PurchaseOrderBuilder {
    inner: PurchaseOrder,
}

impl Default for PurchaseOrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PurchaseOrderBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/purchase_order.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn order_id(mut self, v: impl Into<String>) -> Self {
        self.inner.order_id = v.into();
        self
    }

    pub fn customer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.customer_name = v.into();
        self
    }

    pub fn house_name(mut self, v: impl Into<String>) -> Self {
        self.inner.house_name = v.into();
        self
    }

    pub fn status(mut self, v: OrderStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn purchased_at(mut self, v: i64) -> Self {
        self.inner.purchased_at = v;
        self
    }

    pub fn total_amount(mut self, v: f64) -> Self {
        self.inner.total_amount = v;
        self
    }

    pub fn materials(mut self, v: Vec<MaterialRecord>) -> Self {
        self.inner.materials = v;
        self
    }

    pub fn build(self) -> PurchaseOrder {
        self.inner
    }
}

pub fn material(name: &str, status: MaterialStatus, updated_at: i64) -> MaterialRecord {
    MaterialRecord {
        name: name.to_string(),
        status,
        quantity: 20.0,
        unit: "pcs".to_string(),
        estimated_arrival: None,
        notes: None,
        updated_at,
    }
}

/// Order A: Besi pending, Semen shipped.
pub fn order_a() -> PurchaseOrder {
    PurchaseOrderBuilder::new()
        .order_id("ord-a")
        .customer_name("Budi Santoso")
        .house_name("Rumah Minimalis")
        .materials(vec![
            material("Besi", MaterialStatus::Pending, 1_000),
            material("Semen", MaterialStatus::Shipped, 2_000),
        ])
        .build()
}

/// Order B: Cat delivered, touched after everything in order A.
pub fn order_b() -> PurchaseOrder {
    PurchaseOrderBuilder::new()
        .order_id("ord-b")
        .customer_name("Siti Rahma")
        .house_name("Rumah Joglo")
        .materials(vec![material("Cat", MaterialStatus::Delivered, 3_000)])
        .build()
}

#[cfg(test)]
mod purchase_order_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = PurchaseOrderBuilder::default().build();
        assert_eq!(built.order_id, "ord-fixed-0001");
        assert_eq!(built.status, OrderStatus::Pending);
        assert_eq!(built.materials.len(), 1);
        assert_eq!(built.materials[0].estimated_arrival.unwrap().to_string(), "2026-11-02");
    }

    #[rstest]
    fn setters_override_fields() {
        let built = PurchaseOrderBuilder::new()
            .order_id("ord-x")
            .purchased_at(5)
            .total_amount(1.5)
            .materials(vec![])
            .build();
        assert_eq!(built.order_id, "ord-x");
        assert_eq!(built.purchased_at, 5);
        assert_eq!(built.total_amount, 1.5);
        assert!(built.materials.is_empty());
    }
}
