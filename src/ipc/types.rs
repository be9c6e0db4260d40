use std::path::PathBuf;

use rusqlite::Connection;
use serde::Deserialize;

use crate::store::AttendanceStore;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Session-wide state: one workspace, one storage handle, one roster loaded
/// at workspace open. The roster never re-reads storage after that load;
/// another process writing the same workspace is seen only on a later open.
pub struct AppState {
    pub workspace: Option<PathBuf>,
    pub db: Option<Connection>,
    pub roster: AttendanceStore,
}
