use crate::ipc::error::{err, ok};
use crate::ipc::helpers::notice;
use crate::ipc::types::{AppState, Request};
use crate::qr::{error_placeholder, CodeRenderer, SvgRenderer};
use crate::store::DEMO_STUDENTS;
use serde_json::json;

/// One display item per label, always with something visible in the `svg`
/// slot. A failed render gets the inline placeholder and never sinks the
/// request or the rest of a batch.
fn qr_item(renderer: &dyn CodeRenderer, label: &str) -> serde_json::Value {
    match renderer.render(label) {
        Ok(svg) => json!({
            "label": label,
            "svg": svg,
            "ok": true
        }),
        Err(e) => json!({
            "label": label,
            "svg": error_placeholder("QR Generation Failed"),
            "ok": false,
            "message": e.to_string()
        }),
    }
}

fn handle_generate(_state: &mut AppState, req: &Request) -> serde_json::Value {
    let text = req
        .params
        .get("text")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .trim();
    if text.is_empty() {
        return err(&req.id, "empty_input", "Please enter a student name!", None);
    }
    let renderer = SvgRenderer;
    ok(&req.id, json!({ "item": qr_item(&renderer, text) }))
}

fn handle_generate_demo(_state: &mut AppState, req: &Request) -> serde_json::Value {
    let renderer = SvgRenderer;
    let items: Vec<serde_json::Value> = DEMO_STUDENTS
        .iter()
        .map(|name| qr_item(&renderer, name))
        .collect();
    ok(
        &req.id,
        json!({
            "items": items,
            "notice": notice("success", "✅ Generated 5 demo QR codes!")
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "qr.generate" => Some(handle_generate(state, req)),
        "qr.generateDemo" => Some(handle_generate_demo(state, req)),
        _ => None,
    }
}
