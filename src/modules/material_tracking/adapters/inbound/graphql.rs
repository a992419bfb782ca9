// GraphQL output and input types shared by the material tracking use cases.
//
// Each use case owns its resolver object under `use_cases/*/inbound/graphql.rs`;
// the shell merges them into one schema.

use crate::modules::material_tracking::core::order::MaterialRecord;
use crate::modules::material_tracking::core::status::MaterialStatus;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq, Debug)]
#[graphql(name = "MaterialStatus")]
pub enum GqlMaterialStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl From<GqlMaterialStatus> for MaterialStatus {
    fn from(v: GqlMaterialStatus) -> Self {
        match v {
            GqlMaterialStatus::Pending => MaterialStatus::Pending,
            GqlMaterialStatus::Processing => MaterialStatus::Processing,
            GqlMaterialStatus::Shipped => MaterialStatus::Shipped,
            GqlMaterialStatus::Delivered => MaterialStatus::Delivered,
        }
    }
}

impl From<MaterialStatus> for GqlMaterialStatus {
    fn from(v: MaterialStatus) -> Self {
        match v {
            MaterialStatus::Pending => GqlMaterialStatus::Pending,
            MaterialStatus::Processing => GqlMaterialStatus::Processing,
            MaterialStatus::Shipped => GqlMaterialStatus::Shipped,
            MaterialStatus::Delivered => GqlMaterialStatus::Delivered,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Material")]
pub struct GqlMaterial {
    pub name: String,
    pub status: GqlMaterialStatus,
    pub quantity: f64,
    pub unit: String,
    /// `YYYY-MM-DD`
    pub estimated_arrival: Option<String>,
    pub notes: Option<String>,
    pub updated_at: i64,
}

impl From<MaterialRecord> for GqlMaterial {
    fn from(v: MaterialRecord) -> Self {
        Self {
            name: v.name,
            status: v.status.into(),
            quantity: v.quantity,
            unit: v.unit,
            estimated_arrival: v.estimated_arrival.map(|d| d.format("%Y-%m-%d").to_string()),
            notes: v.notes,
            updated_at: v.updated_at,
        }
    }
}
