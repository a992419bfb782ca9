use crate::modules::material_tracking::core::events::v1::material_status_changed::MaterialStatusChangedV1;
use crate::modules::material_tracking::core::intents::TrackingIntent;
use crate::modules::material_tracking::core::order::MaterialRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("order {order_id} has no material at index {material_index}")]
    MaterialNotFound {
        order_id: String,
        material_index: usize,
    },

    #[error("order {0} is cancelled")]
    Cancelled(String),
}

pub enum Decision {
    Accepted {
        /// The order's full material list with the transition spliced in.
        materials: Vec<MaterialRecord>,
        event: MaterialStatusChangedV1,
        intents: Vec<TrackingIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}
