use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Caretrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

pub fn default_log_filter() -> String {
    "caretrack=info,tower_http=warn".to_string()
}

/// Get the application data directory (~/Caretrack)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// Runtime settings, resolved from the environment with defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub database_path: PathBuf,
}

impl Settings {
    /// `CARETRACK_ADDR` overrides the bind address; `CARETRACK_DB`
    /// overrides the database path. Unparseable values are errors, not
    /// silent fallbacks.
    pub fn from_env() -> Result<Self, String> {
        let bind_addr = match std::env::var("CARETRACK_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| format!("Invalid CARETRACK_ADDR {raw:?}: {e}"))?,
            Err(_) => DEFAULT_BIND_ADDR.parse().expect("default addr parses"),
        };

        let database_path = std::env::var("CARETRACK_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| app_data_dir().join("caretrack.db"));

        Ok(Self { bind_addr, database_path })
    }
}
