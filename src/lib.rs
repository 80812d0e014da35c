pub mod app;
pub mod domain;
pub mod error;
pub mod infra;

use std::path::PathBuf;

/// DB path: `USERDB_PATH` env var, else the platform data dir.
pub fn resolve_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("USERDB_PATH") {
        return PathBuf::from(path);
    }
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("userdb").join("app.db")
}
