use crate::modules::material_tracking::core::order::PurchaseOrder;
use crate::modules::material_tracking::core::status::MaterialStatus;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingFilter {
    pub search_text: Option<String>,
    pub status: Option<MaterialStatus>,
}

impl TrackingFilter {
    /// Search text matches house or customer name, case-insensitively. A
    /// status filter keeps an order if any of its materials has that status.
    pub fn matches(&self, order: &PurchaseOrder) -> bool {
        let text_matches = match self.search_text.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(text) => {
                let needle = text.to_lowercase();
                order.house_name.to_lowercase().contains(&needle)
                    || order.customer_name.to_lowercase().contains(&needle)
            }
        };
        let status_matches = match self.status {
            None => true,
            Some(status) => order.materials.iter().any(|m| m.status == status),
        };
        text_matches && status_matches
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Date,
    Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackingSort {
    pub by: SortBy,
    pub order: SortOrder,
}
