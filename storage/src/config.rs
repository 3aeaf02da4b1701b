//! Database configuration from environment variables.
//!
//! Variables and defaults: `DB_HOST`=localhost, `DB_PORT`=3306, `DB_NAME`=rental_system,
//! `DB_USER`=root, `DB_PASSWORD`="" (empty), `DB_SSL_MODE`=DISABLED (`REQUIRED`
//! enables SSL for cloud-hosted databases).

use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};
use std::env;

const DEFAULT_PORT: u16 = 3306;

/// MySQL connection parameters for the rental property database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub ssl_required: bool,
}

impl DatabaseConfig {
    /// Loads configuration from the environment, honoring a `.env` file when present.
    /// Every variable has a default; an unparsable `DB_PORT` falls back to 3306.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string());
        let port = lookup("DB_PORT")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let database = lookup("DB_NAME").unwrap_or_else(|| "rental_system".to_string());
        let user = lookup("DB_USER").unwrap_or_else(|| "root".to_string());
        let password = lookup("DB_PASSWORD").unwrap_or_default();
        let ssl_required = lookup("DB_SSL_MODE")
            .map(|mode| mode.eq_ignore_ascii_case("REQUIRED"))
            .unwrap_or(false);

        Self {
            host,
            port,
            database,
            user,
            password,
            ssl_required,
        }
    }

    /// Builds sqlx connect options from this configuration.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let ssl_mode = if self.ssl_required {
            MySqlSslMode::Required
        } else {
            MySqlSslMode::Disabled
        };

        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
            .ssl_mode(ssl_mode)
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DatabaseConfig::from_lookup(|_| None);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3306);
        assert_eq!(config.database, "rental_system");
        assert_eq!(config.user, "root");
        assert_eq!(config.password, "");
        assert!(!config.ssl_required);
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[("DB_PORT", "not-a-port")]));
        assert_eq!(config.port, 3306);
    }

    #[test]
    fn test_ssl_mode_required_case_insensitive() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[("DB_SSL_MODE", "required")]));
        assert!(config.ssl_required);

        let config = DatabaseConfig::from_lookup(lookup_from(&[("DB_SSL_MODE", "DISABLED")]));
        assert!(!config.ssl_required);
    }

    #[test]
    fn test_explicit_values() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("DB_HOST", "db.example.com"),
            ("DB_PORT", "25060"),
            ("DB_NAME", "rentals"),
            ("DB_USER", "bot"),
            ("DB_PASSWORD", "secret"),
        ]));
        assert_eq!(config.host, "db.example.com");
        assert_eq!(config.port, 25060);
        assert_eq!(config.database, "rentals");
        assert_eq!(config.user, "bot");
        assert_eq!(config.password, "secret");
    }
}
