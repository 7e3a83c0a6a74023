//! Configuration constants for the bot

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Bot token
/// Read from BOT_TOKEN, TELEGRAM_BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELEGRAM_BOT_TOKEN"))
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Database file path
/// Read from DATABASE_PATH, falling back to DATABASE_URL
/// Default: filestore.sqlite
pub static DATABASE_PATH: Lazy<String> = Lazy::new(|| resolve_database_path(|key| env::var(key).ok()));

/// Connection string of the former MongoDB backend; only reported at startup
pub static LEGACY_MONGODB_URL: Lazy<Option<String>> =
    Lazy::new(|| env::var("MONGODB_URL").ok().filter(|url| !url.trim().is_empty()));

/// Default database file when no variable names one
pub const DEFAULT_DATABASE_PATH: &str = "filestore.sqlite";

/// Picks the database file from DATABASE_PATH, then DATABASE_URL
///
/// MONGODB_URL is never used as a path: SQLite cannot open a `mongodb://` URL.
pub fn resolve_database_path(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["DATABASE_PATH", "DATABASE_URL"]
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
}

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Custom Bot API server (e.g. a local telegram-bot-api instance)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> =
    Lazy::new(|| env::var("BOT_API_URL").ok().filter(|url| !url.trim().is_empty()));

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls, including file downloads (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 300; // 5 minutes

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Database configuration
pub mod database {
    use super::Duration;

    /// Maximum number of pooled SQLite connections
    pub const POOL_MAX_SIZE: u32 = 10;

    /// How long SQLite waits on a locked database before failing (in seconds)
    pub const BUSY_TIMEOUT_SECS: u64 = 30;

    /// Busy timeout duration
    pub fn busy_timeout() -> Duration {
        Duration::from_secs(BUSY_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_database_path_prefers_database_path() {
        let lookup = lookup_in(&[("DATABASE_PATH", "/data/a.sqlite"), ("DATABASE_URL", "/data/b.sqlite")]);
        assert_eq!(resolve_database_path(lookup), "/data/a.sqlite");
    }

    #[test]
    fn test_database_path_falls_back_to_database_url() {
        let lookup = lookup_in(&[("DATABASE_PATH", ""), ("DATABASE_URL", "/data/b.sqlite")]);
        assert_eq!(resolve_database_path(lookup), "/data/b.sqlite");
    }

    #[test]
    fn test_database_path_ignores_mongodb_url() {
        let lookup = lookup_in(&[("MONGODB_URL", "mongodb://localhost:27017")]);
        assert_eq!(resolve_database_path(lookup), DEFAULT_DATABASE_PATH);
    }

    #[test]
    fn test_network_timeout_matches_constant() {
        assert_eq!(network::timeout(), Duration::from_secs(network::REQUEST_TIMEOUT_SECS));
    }

    #[test]
    fn test_database_busy_timeout_matches_constant() {
        assert_eq!(database::busy_timeout().as_secs(), database::BUSY_TIMEOUT_SECS);
        assert!(database::POOL_MAX_SIZE > 0);
    }
}
