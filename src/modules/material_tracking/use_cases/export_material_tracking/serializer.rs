// Flat CSV rendering of the tracking projection.
//
// Fields are joined with commas and never quoted, so a comma inside a name
// shifts the columns of that row.

use crate::modules::material_tracking::use_cases::list_material_tracking::projection::OrderedMaterialView;
use chrono::{DateTime, NaiveDate};

pub const HEADER: &str =
    "House Name,Customer Name,Material Name,Quantity,Unit,Status,Estimated Arrival,Last Updated";

fn last_updated(updated_at: i64) -> String {
    DateTime::from_timestamp_millis(updated_at)
        .map(|at| at.format("%-d/%-m/%Y").to_string())
        .unwrap_or_default()
}

/// One header row, then one row per material in projection order.
pub fn serialize(views: &[OrderedMaterialView]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for view in views {
        for tracked in &view.materials {
            let m = &tracked.material;
            let row = [
                view.house_name.clone(),
                view.customer_name.clone(),
                m.name.clone(),
                m.quantity.to_string(),
                m.unit.clone(),
                m.status.to_string(),
                m.estimated_arrival
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                last_updated(m.updated_at),
            ];
            out.push_str(&row.join(","));
            out.push('\n');
        }
    }
    out
}

pub fn file_name(date: NaiveDate) -> String {
    format!("material_tracking_{}.csv", date.format("%Y-%m-%d"))
}
