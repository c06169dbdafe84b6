use std::str::FromStr;
use std::time::Duration;

use roster_db::PoolConfig;

/// Deployment profile selected by `APP_ENV`.
///
/// The profile picks the default database, pool sizing and log verbosity. It
/// never changes API behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Testing,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }

    /// Database used when `DATABASE_URL` is unset. Production has none.
    pub fn default_database_url(self) -> Option<&'static str> {
        match self {
            Self::Development => Some("sqlite://roster.db?mode=rwc"),
            Self::Production => None,
            Self::Testing => Some("sqlite::memory:"),
        }
    }

    /// Pool sizing for this profile.
    pub fn pool_config(self) -> PoolConfig {
        let max_connections = match self {
            // 10 steady connections plus 20 overflow.
            Self::Production => 30,
            Self::Development | Self::Testing => 15,
        };
        PoolConfig {
            max_connections,
            recycle_after: Some(Duration::from_secs(300)),
            test_before_acquire: true,
        }
    }

    /// Tracing filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Self::Production => "roster_api=info,tower_http=info",
            Self::Development | Self::Testing => "roster_api=debug,roster_db=debug,tower_http=debug",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "testing" | "test" => Ok(Self::Testing),
            other => Err(format!(
                "unknown environment '{other}' (expected development, production or testing)"
            )),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// `DATABASE_URL` must be provided.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Deployment profile (default: `development`).
    pub environment: Environment,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Connection string for Postgres or SQLite.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A lone `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served for `/` and any unmatched path (default: `.`).
    /// Dotfiles and SQLite database files under it are never served, so the
    /// development `roster.db` and `.env` stay private.
    pub static_dir: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `APP_ENV`              | `development`                   |
    /// | `HOST`                 | `0.0.0.0`                       |
    /// | `PORT`                 | `5000`                          |
    /// | `DATABASE_URL`         | per [`Environment`]             |
    /// | `CORS_ORIGINS`         | `*`                             |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                            |
    /// | `STATIC_DIR`           | `.`                             |
    pub fn from_env() -> Self {
        let environment: Environment = std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".into())
            .parse()
            .unwrap_or_else(|e| panic!("APP_ENV is invalid: {e}"));

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| environment.default_database_url().map(String::from))
            .expect("DATABASE_URL must be set in production");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| ".".into());

        Self {
            environment,
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            static_dir,
        }
    }

    /// Whether any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_aliases() {
        assert_eq!("production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("Dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!(" test ".parse::<Environment>(), Ok(Environment::Testing));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn production_has_no_default_database() {
        assert_eq!(Environment::Production.default_database_url(), None);
        assert!(Environment::Testing
            .default_database_url()
            .is_some_and(roster_db::is_in_memory));
    }

    #[test]
    fn production_pool_is_larger() {
        assert_eq!(Environment::Production.pool_config().max_connections, 30);
        assert_eq!(Environment::Development.pool_config().max_connections, 15);
    }

    #[test]
    fn origins_are_trimmed_and_blank_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
