use crate::modules::material_tracking::core::{
    events::v1::material_status_changed::MaterialStatusChangedV1, intents::TrackingIntent,
    order::PurchaseOrder,
};
use crate::modules::material_tracking::use_cases::transition_material_status::{
    command::TransitionMaterialStatus,
    decision::{DecideError, Decision},
};

pub fn decide_transition(order: &PurchaseOrder, command: TransitionMaterialStatus) -> Decision {
    if order.is_cancelled() {
        return Decision::Rejected {
            reason: DecideError::Cancelled(order.order_id.clone()),
        };
    }
    let Some(current) = order.materials.get(command.material_index) else {
        return Decision::Rejected {
            reason: DecideError::MaterialNotFound {
                order_id: order.order_id.clone(),
                material_index: command.material_index,
            },
        };
    };

    let event = MaterialStatusChangedV1 {
        event_id: command.event_id,
        order_id: order.order_id.clone(),
        material_index: command.material_index,
        status: command.status,
        previous_status: current.status,
        occurred_at: command.requested_at,
    };
    let mut materials = order.materials.clone();
    materials[command.material_index] = current.with_status(command.status, command.requested_at);

    Decision::Accepted {
        materials,
        event: event.clone(),
        intents: vec![TrackingIntent::PublishMaterialStatusChanged { payload: event }],
    }
}
