//! Environment-driven configuration for the shell binary.

/// Runtime configuration, read once at startup.
pub struct Config {
    /// Directory holding the database file. The storage layer also honors
    /// a `DATABASE_URL` override for the full path.
    pub data_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = std::env::var("METERBOOK_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        Self { data_dir }
    }
}
