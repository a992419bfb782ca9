use crate::modules::material_tracking::adapters::outbound::order_store::OrderSnapshot;
use crate::modules::material_tracking::core::order::MaterialRecord;

/// What a subscriber of one order receives on every change.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialFeed {
    /// Full material list of the order, possibly empty.
    Materials(Vec<MaterialRecord>),
    /// The order does not exist (yet).
    NotFound,
    /// The feed itself failed; no further values follow.
    Error(String),
}

impl From<OrderSnapshot> for MaterialFeed {
    fn from(snapshot: OrderSnapshot) -> Self {
        match snapshot {
            OrderSnapshot::Present(order) => MaterialFeed::Materials(order.materials),
            OrderSnapshot::Missing => MaterialFeed::NotFound,
        }
    }
}
