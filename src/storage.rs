use crate::store::AttendanceRecord;
use anyhow::Context;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

pub const ATTENDANCE_KEY: &str = "attendance";

pub fn open_db(workspace: &Path) -> anyhow::Result<Connection> {
    std::fs::create_dir_all(workspace)?;
    let db_path = workspace.join("rollcall.sqlite3");
    let conn = Connection::open(db_path)?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(conn)
}

/// Reads the whole attendance blob. A missing key, unreadable row, or
/// malformed JSON all mean "start empty"; this never raises. Unknown fields
/// in stored rows are ignored and missing ones default, so older or newer
/// blobs stay readable.
pub fn load(conn: &Connection) -> Vec<AttendanceRecord> {
    let blob: Option<String> = conn
        .query_row(
            "SELECT value FROM kv WHERE key = ?",
            [ATTENDANCE_KEY],
            |r| r.get(0),
        )
        .optional()
        .unwrap_or(None);
    let Some(blob) = blob else {
        return Vec::new();
    };
    serde_json::from_str(&blob).unwrap_or_default()
}

/// Serializes the full list and overwrites the blob unconditionally. Every
/// mutation pays the whole-value cost; list sizes are tens to low hundreds.
pub fn save(conn: &Connection, records: &[AttendanceRecord]) -> anyhow::Result<()> {
    let blob = serde_json::to_string(records).context("serialize attendance list")?;
    conn.execute(
        "INSERT INTO kv(key, value) VALUES(?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (ATTENDANCE_KEY, &blob),
    )?;
    Ok(())
}
