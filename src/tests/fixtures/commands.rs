use crate::modules::material_tracking::core::status::MaterialStatus;
use crate::modules::material_tracking::use_cases::transition_material_status::command::TransitionMaterialStatus;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionMaterialStatusDto {
    pub order_id: String,
    pub material_index: usize,
    pub status: MaterialStatus,
    pub event_id: String,
}

pub struct TransitionMaterialStatusBuilder {
    inner: TransitionMaterialStatus,
}

impl Default for TransitionMaterialStatusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TransitionMaterialStatusBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/json/transition_material_status.json")
                .unwrap();
        let dto: TransitionMaterialStatusDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: TransitionMaterialStatus {
                order_id: dto.order_id,
                material_index: dto.material_index,
                status: dto.status,
                requested_at: 1_700_000_000_000,
                event_id: dto.event_id,
            },
        }
    }

    pub fn order_id(mut self, v: impl Into<String>) -> Self {
        self.inner.order_id = v.into();
        self
    }

    pub fn material_index(mut self, v: usize) -> Self {
        self.inner.material_index = v;
        self
    }

    pub fn status(mut self, v: MaterialStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn requested_at(mut self, v: i64) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn event_id(mut self, v: impl Into<String>) -> Self {
        self.inner.event_id = v.into();
        self
    }

    pub fn build(self) -> TransitionMaterialStatus {
        self.inner
    }
}

#[cfg(test)]
mod transition_material_status_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = TransitionMaterialStatusBuilder::default()
            .order_id("ord-9")
            .material_index(3)
            .status(MaterialStatus::Shipped)
            .requested_at(42)
            .event_id("evt-9")
            .build();

        assert_eq!(custom.order_id, "ord-9");
        assert_eq!(custom.material_index, 3);
        assert_eq!(custom.status, MaterialStatus::Shipped);
        assert_eq!(custom.requested_at, 42);
        assert_eq!(custom.event_id, "evt-9");
    }
}
