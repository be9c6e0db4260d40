#[path = "../src/store.rs"]
mod store;

#[path = "../src/storage.rs"]
mod storage;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use store::{AttendanceRecord, AttendanceStore};

fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

fn raw_blob(conn: &rusqlite::Connection) -> Option<String> {
    conn.query_row(
        "SELECT value FROM kv WHERE key = ?",
        [storage::ATTENDANCE_KEY],
        |r| r.get(0),
    )
    .ok()
}

#[test]
fn missing_key_loads_as_empty() {
    let workspace = temp_dir("rollcall-storage-missing");
    let conn = storage::open_db(&workspace).expect("open db");
    assert!(storage::load(&conn).is_empty());
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn malformed_blob_falls_back_to_empty() {
    let workspace = temp_dir("rollcall-storage-malformed");
    let conn = storage::open_db(&workspace).expect("open db");
    conn.execute(
        "INSERT INTO kv(key, value) VALUES(?, ?)",
        (storage::ATTENDANCE_KEY, "{not json at all"),
    )
    .expect("insert garbage");
    assert!(storage::load(&conn).is_empty());
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn rows_with_missing_or_extra_fields_stay_readable() {
    let workspace = temp_dir("rollcall-storage-partial");
    let conn = storage::open_db(&workspace).expect("open db");
    conn.execute(
        "INSERT INTO kv(key, value) VALUES(?, ?)",
        (
            storage::ATTENDANCE_KEY,
            r#"[{"name":"Alice Johnson","extra":true},{"time":"9:00:00 AM"}]"#,
        ),
    )
    .expect("insert partial rows");
    let records = storage::load(&conn);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Alice Johnson");
    assert_eq!(records[0].timestamp, 0);
    assert_eq!(records[1].time, "9:00:00 AM");
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn save_load_roundtrip_preserves_order_and_fields() {
    let workspace = temp_dir("rollcall-storage-roundtrip");
    let conn = storage::open_db(&workspace).expect("open db");

    let mut roster = AttendanceStore::new();
    for name in ["Carol Davis", "bob wilson", "Emma Taylor"] {
        roster.add(name).expect("add");
    }
    storage::save(&conn, roster.all()).expect("save");

    let loaded = storage::load(&conn);
    assert_eq!(loaded, roster.all());
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn repeated_save_of_same_list_is_byte_identical() {
    let workspace = temp_dir("rollcall-storage-deterministic");
    let conn = storage::open_db(&workspace).expect("open db");

    let records = vec![
        AttendanceRecord {
            name: "Bob Wilson".to_string(),
            time: "10:00:00 AM".to_string(),
            timestamp: 1_700_000_000_000,
        },
        AttendanceRecord {
            name: "Carol Davis".to_string(),
            time: "10:00:05 AM".to_string(),
            timestamp: 1_700_000_005_000,
        },
    ];
    storage::save(&conn, &records).expect("first save");
    let first = raw_blob(&conn).expect("blob present");

    let reloaded = storage::load(&conn);
    storage::save(&conn, &reloaded).expect("second save");
    let second = raw_blob(&conn).expect("blob still present");

    assert_eq!(first, second);
    let _ = std::fs::remove_dir_all(workspace);
}
