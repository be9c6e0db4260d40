use serde_json::json;

use crate::store::{AttendanceRecord, AttendanceStore};

/// Full display model, rebuilt from the roster on every request. The frontend
/// replaces its list wholesale; there is no incremental diffing.
pub fn render_model(roster: &AttendanceStore) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = roster
        .all()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            json!({
                "index": i,
                "name": r.name,
                "time": r.time,
            })
        })
        .collect();
    let mut model = json!({
        "count": roster.len(),
        "rows": rows,
    });
    if roster.is_empty() {
        model["emptyMessage"] = json!("No students marked present yet.");
    }
    model
}

/// Toast payload; the frontend owns display and auto-dismissal.
pub fn notice(kind: &str, message: impl Into<String>) -> serde_json::Value {
    json!({
        "kind": kind,
        "message": message.into(),
    })
}

pub fn record_json(record: &AttendanceRecord) -> serde_json::Value {
    json!({
        "name": record.name,
        "time": record.time,
        "timestamp": record.timestamp,
    })
}
