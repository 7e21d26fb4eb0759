//! Application settings loaded via OrthoConfig.
//!
//! Settings come from command-line flags, `TRIVIA_`-prefixed environment
//! variables, or a configuration file, in that order of precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Runtime configuration for the trivia server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRIVIA")]
pub struct AppSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection URL. Without one the server runs on an
    /// in-memory store.
    pub database_url: Option<String>,
    /// Insert the starter question when the store is empty.
    #[ortho_config(default = false)]
    pub seed_on_start: bool,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl AppSettings {
    /// The bind address, defaulting to `0.0.0.0:8080`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or_else(default_bind_addr)
    }

    /// The database URL, falling back to the `DATABASE_URL` environment
    /// variable used by Diesel tooling.
    #[must_use]
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok())
    }

    /// The pool size cap, defaulting to 10.
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("trivia")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("TRIVIA_BIND_ADDR", None::<String>),
            ("TRIVIA_DATABASE_URL", None::<String>),
            ("TRIVIA_SEED_ON_START", None::<String>),
            ("TRIVIA_POOL_MAX_SIZE", None::<String>),
            ("DATABASE_URL", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), default_bind_addr());
        assert!(settings.database_url().is_none());
        assert!(!settings.seed_on_start);
        assert_eq!(settings.pool_max_size(), 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TRIVIA_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "TRIVIA_DATABASE_URL",
                Some("postgres://localhost/trivia".to_owned()),
            ),
            ("TRIVIA_SEED_ON_START", Some("true".to_owned())),
            ("TRIVIA_POOL_MAX_SIZE", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            "127.0.0.1:9000".parse().expect("socket addr")
        );
        assert_eq!(
            settings.database_url().as_deref(),
            Some("postgres://localhost/trivia")
        );
        assert!(settings.seed_on_start);
        assert_eq!(settings.pool_max_size(), 4);
    }

    #[rstest]
    fn diesel_database_url_is_the_fallback() {
        let _guard = lock_env([
            ("TRIVIA_DATABASE_URL", None::<String>),
            ("DATABASE_URL", Some("postgres://localhost/other".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url().as_deref(),
            Some("postgres://localhost/other")
        );
    }
}
