//! Connection settings resolved from the environment.
//!
//! `DATABASE_URL` wins when set. Otherwise discrete variables are applied
//! on top of libpq-style defaults:
//!
//! | Variable      | Default       |
//! |---------------|---------------|
//! | `DB_USER`     | driver default |
//! | `DB_PASSWORD` | none          |
//! | `DB_HOST`     | `localhost`   |
//! | `DB_NAME`     | driver default |
//! | `DB_PORT`     | `5432`        |

use sqlx::postgres::PgConnectOptions;

use crate::error::{DbError, DbResult};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;

/// Resolved connection settings.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub database: Option<String>,
    pub port: u16,
}

impl DbConfig {
    /// Resolve settings from process environment variables.
    pub fn from_env() -> DbResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DbResult<Self> {
        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| DbError::config(format!("invalid DB_PORT '{raw}'")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            url: lookup("DATABASE_URL"),
            user: lookup("DB_USER"),
            password: lookup("DB_PASSWORD"),
            host: lookup("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            database: lookup("DB_NAME"),
            port,
        })
    }

    /// Build sqlx connect options for these settings.
    pub fn connect_options(&self) -> DbResult<PgConnectOptions> {
        if let Some(url) = &self.url {
            return url
                .parse::<PgConnectOptions>()
                .map_err(|err| DbError::config(format!("invalid DATABASE_URL: {err}")));
        }

        let mut options = PgConnectOptions::new().host(&self.host).port(self.port);
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = DbConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert!(config.url.is_none());
        assert!(config.user.is_none());
        assert!(config.database.is_none());
    }

    #[test]
    fn test_discrete_variables_applied() {
        let config = DbConfig::from_lookup(|key| match key {
            "DB_USER" => Some("tracker".to_owned()),
            "DB_PASSWORD" => Some("secret".to_owned()),
            "DB_HOST" => Some("db.internal".to_owned()),
            "DB_NAME" => Some("employees".to_owned()),
            "DB_PORT" => Some("5433".to_owned()),
            _ => None,
        })
        .unwrap();

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "tracker");
        assert_eq!(options.get_database(), Some("employees"));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = DbConfig::from_lookup(|key| match key {
            "DB_PORT" => Some("abc".to_owned()),
            _ => None,
        });
        assert!(matches!(result, Err(DbError::Config { .. })));
    }

    #[test]
    fn test_database_url_wins() {
        let config = DbConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://tracker@db.internal:5433/employees".to_owned()),
            "DB_HOST" => Some("ignored.example".to_owned()),
            _ => None,
        })
        .unwrap();

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_database(), Some("employees"));
    }
}
