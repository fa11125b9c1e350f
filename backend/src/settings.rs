//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from `TRIVIA_*` environment variables, an optional config
//! file, or command-line flags, in OrthoConfig's usual precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::{DEFAULT_POOL_MAX_SIZE, PoolConfig};

/// Address the server binds when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRIVIA")]
pub struct TriviaSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string; the in-memory store is used without it.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seed the six default categories into an empty in-memory store.
    pub seed_categories: Option<bool>,
}

impl TriviaSettings {
    /// Parse the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.trim()
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }

    /// Whether to seed the in-memory store, defaulting to `true`.
    pub fn seed_categories(&self) -> bool {
        self.seed_categories.unwrap_or(true)
    }

    /// Pool configuration when a database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url.as_deref().map(|url| {
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "TRIVIA_BIND_ADDR",
        "TRIVIA_DATABASE_URL",
        "TRIVIA_POOL_MAX_SIZE",
        "TRIVIA_SEED_CATEGORIES",
    ];

    fn load_from_empty_args() -> TriviaSettings {
        TriviaSettings::load_from_iter([OsString::from("trivia")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr(),
            Ok(DEFAULT_BIND_ADDR.parse().expect("default address parses"))
        );
        assert!(settings.database_url.is_none());
        assert!(settings.pool_config().is_none());
        assert_eq!(settings.seed_categories, None);
        assert!(settings.seed_categories());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TRIVIA_BIND_ADDR", Some("127.0.0.1:5000".to_owned())),
            (
                "TRIVIA_DATABASE_URL",
                Some("postgres://trivia@localhost/trivia".to_owned()),
            ),
            ("TRIVIA_POOL_MAX_SIZE", Some("4".to_owned())),
            ("TRIVIA_SEED_CATEGORIES", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr(),
            Ok("127.0.0.1:5000".parse().expect("address parses"))
        );
        let pool = settings.pool_config().expect("pool configured");
        assert_eq!(pool.database_url(), "postgres://trivia@localhost/trivia");
        assert_eq!(pool.max_size(), 4);
        assert_eq!(settings.seed_categories, Some(false));
        assert!(!settings.seed_categories());
    }

    #[rstest]
    fn malformed_bind_address_is_reported() {
        let _guard = lock_env([
            ("TRIVIA_BIND_ADDR", Some("localhost".to_owned())),
            ("TRIVIA_DATABASE_URL", None),
            ("TRIVIA_POOL_MAX_SIZE", None),
            ("TRIVIA_SEED_CATEGORIES", None),
        ]);

        let settings = load_from_empty_args();

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidBindAddr { .. })
        ));
    }
}
