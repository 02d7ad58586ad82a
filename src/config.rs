//! Runtime configuration read from the environment

use tracing::warn;

const DEV_JWT_SECRET: &str = "dev-secret";

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. `None` runs the in-memory store.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub port: u16,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            warn!("JWT_SECRET not set; using insecure dev default");
            DEV_JWT_SECRET.to_string()
        });

        let port = lookup("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(5);

        Self {
            database_url,
            jwt_secret,
            port,
            db_max_connections,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.database_url, None);
        assert_eq!(config.jwt_secret, DEV_JWT_SECRET);
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_values_from_env() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://u:p@localhost/twit"),
            ("JWT_SECRET", "s3cret"),
            ("PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "12"),
        ]));
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://u:p@localhost/twit")
        );
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_max_connections, 12);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "  "),
            ("PORT", "not-a-port"),
            ("DB_MAX_CONNECTIONS", "0"),
        ]));
        assert_eq!(config.database_url, None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_max_connections, 5);
    }
}
