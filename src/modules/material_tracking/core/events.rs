// Versioned change events for material tracking.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version module.
// - Do not change the meaning of historical events.

pub mod v1 {
    pub mod material_status_changed;
}
