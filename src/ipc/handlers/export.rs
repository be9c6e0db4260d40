use crate::export::{to_csv, write_csv_file, NothingToExport};
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::notice;
use crate::ipc::types::{AppState, Request};
use serde_json::json;
use std::path::Path;

fn handle_export(state: &mut AppState, req: &Request) -> serde_json::Value {
    if state.db.is_none() {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    }
    let Some(dir) = req.params.get("dir").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.dir", None);
    };
    let csv = match to_csv(state.roster.all()) {
        Ok(csv) => csv,
        Err(NothingToExport) => {
            return err(
                &req.id,
                "nothing_to_export",
                "No attendance data to export!",
                None,
            )
        }
    };
    match write_csv_file(Path::new(dir), &csv) {
        Ok(path) => ok(
            &req.id,
            json!({
                "path": path.to_string_lossy(),
                "rows": state.roster.len(),
                "notice": notice("success", "📊 Attendance exported as CSV!")
            }),
        ),
        Err(e) => err(&req.id, "export_failed", e.to_string(), None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "attendance.export" => Some(handle_export(state, req)),
        _ => None,
    }
}
