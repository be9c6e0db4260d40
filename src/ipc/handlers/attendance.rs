use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{notice, record_json, render_model};
use crate::ipc::types::{AppState, Request};
use crate::storage;
use crate::store::{AddError, AttendanceRecord, DEMO_STUDENTS};
use rusqlite::Connection;
use serde_json::json;

struct HandlerErr {
    code: &'static str,
    message: String,
}

impl HandlerErr {
    fn response(self, id: &str) -> serde_json::Value {
        err(id, self.code, self.message, None)
    }
}

/// Mutation postcondition: the persisted blob is re-synced immediately, then
/// the caller returns the rebuilt display model. No deferred flush.
fn persist(conn: &Connection, records: &[AttendanceRecord]) -> Result<(), HandlerErr> {
    storage::save(conn, records).map_err(|e| HandlerErr {
        code: "save_failed",
        message: e.to_string(),
    })
}

fn param_str<'a>(req: &'a Request, key: &str) -> &'a str {
    req.params.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

fn handle_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    match state.roster.add(param_str(req, "name")) {
        Ok(record) => {
            if let Err(e) = persist(conn, state.roster.all()) {
                return e.response(&req.id);
            }
            ok(
                &req.id,
                json!({
                    "record": record_json(&record),
                    "notice": notice("success", format!("✅ {} marked present!", record.name)),
                    "render": render_model(&state.roster)
                }),
            )
        }
        Err(AddError::EmptyName) => {
            err(&req.id, "empty_name", "Please enter a student name!", None)
        }
        Err(AddError::AlreadyPresent { name }) => err(
            &req.id,
            "already_present",
            format!("{} is already marked present!", name),
            None,
        ),
    }
}

/// Scan path: the frontend forwards each successfully decoded frame here.
/// Scanning is continuous, so duplicates and blank decodes are not errors;
/// they come back ok with `added:false` and at most a toast.
fn handle_scan(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    match state.roster.add(param_str(req, "text")) {
        Ok(record) => {
            if let Err(e) = persist(conn, state.roster.all()) {
                return e.response(&req.id);
            }
            ok(
                &req.id,
                json!({
                    "added": true,
                    "record": record_json(&record),
                    "notice": notice("success", format!("✅ Scanned: {}", record.name)),
                    "render": render_model(&state.roster)
                }),
            )
        }
        Err(AddError::EmptyName) => ok(
            &req.id,
            json!({
                "added": false,
                "render": render_model(&state.roster)
            }),
        ),
        Err(AddError::AlreadyPresent { name }) => ok(
            &req.id,
            json!({
                "added": false,
                "notice": notice("error", format!("{} is already marked present!", name)),
                "render": render_model(&state.roster)
            }),
        ),
    }
}

fn handle_add_demo(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let added = state.roster.add_many(DEMO_STUDENTS);
    if added > 0 {
        if let Err(e) = persist(conn, state.roster.all()) {
            return e.response(&req.id);
        }
    }
    let note = if added > 0 {
        notice("success", format!("✅ Added {} demo students!", added))
    } else {
        notice("info", "All demo students are already present")
    };
    ok(
        &req.id,
        json!({
            "added": added,
            "notice": note,
            "render": render_model(&state.roster)
        }),
    )
}

fn handle_remove_at(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let Some(index) = req.params.get("index").and_then(|v| v.as_i64()) else {
        return err(&req.id, "bad_params", "missing index", None);
    };
    // Negative or past-the-end indices are a silent no-op, not an error: the
    // frontend derives them from a list that may have just changed.
    let removed = usize::try_from(index)
        .ok()
        .and_then(|i| state.roster.remove_at(i));
    let result = match removed {
        Some(name) => {
            if let Err(e) = persist(conn, state.roster.all()) {
                return e.response(&req.id);
            }
            let note = notice("info", format!("{} removed from attendance", name));
            json!({
                "removed": name,
                "notice": note,
                "render": render_model(&state.roster)
            })
        }
        None => json!({
            "removed": serde_json::Value::Null,
            "render": render_model(&state.roster)
        }),
    };
    ok(&req.id, result)
}

fn handle_clear(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    if state.roster.is_empty() {
        return err(
            &req.id,
            "nothing_to_clear",
            "No attendance data to clear!",
            None,
        );
    }
    // The frontend asks for confirmation before calling; by the time the
    // request arrives the decision is made.
    state.roster.clear();
    if let Err(e) = persist(conn, state.roster.all()) {
        return e.response(&req.id);
    }
    ok(
        &req.id,
        json!({
            "notice": notice("info", "🗑️ All attendance records cleared"),
            "render": render_model(&state.roster)
        }),
    )
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    if state.db.is_none() {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    }
    ok(&req.id, json!({ "render": render_model(&state.roster) }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "attendance.add" => Some(handle_add(state, req)),
        "attendance.scan" => Some(handle_scan(state, req)),
        "attendance.addDemo" => Some(handle_add_demo(state, req)),
        "attendance.removeAt" => Some(handle_remove_at(state, req)),
        "attendance.clear" => Some(handle_clear(state, req)),
        "attendance.list" => Some(handle_list(state, req)),
        _ => None,
    }
}
