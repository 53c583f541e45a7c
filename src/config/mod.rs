use std::{env, str::FromStr, time::Duration};

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
    pub max_concurrent_requests: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                host: env_or_default("HOST", "0.0.0.0"),
                port: env_or_parse("PORT", 5000)?,
                cors_allowed_origins: env_list("CORS_ALLOWED_ORIGINS", vec![]),
                max_concurrent_requests: env_or_parse("SERVER_MAX_CONCURRENT_REQUESTS", 100)?,
            },
            database: DatabaseConfig {
                url: env_required("DATABASE_URL")?,
                max_connections: env_or_parse("DB_MAX_CONNECTIONS", 10)?,
                min_connections: env_or_parse("DB_MIN_CONNECTIONS", 1)?,
                connect_timeout: Duration::from_secs(env_or_parse("DB_CONNECT_TIMEOUT_SECS", 10)?),
                idle_timeout: Duration::from_secs(env_or_parse("DB_IDLE_TIMEOUT_SECS", 300)?),
            },
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "DATABASE_URL must not be empty".into(),
            ));
        }

        if self.server.port == 0 {
            return Err(AppError::InvalidConfig("PORT must be positive".into()));
        }

        if self.server.max_concurrent_requests == 0 {
            return Err(AppError::InvalidConfig(
                "SERVER_MAX_CONCURRENT_REQUESTS must be positive".into(),
            ));
        }

        Ok(())
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(val) => parse_value(key, &val),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, val: &str) -> Result<T> {
    val.trim()
        .parse()
        .map_err(|_| AppError::InvalidConfig(format!("Invalid value for {key}")))
}

fn env_required(key: &str) -> Result<String> {
    env::var(key).map_err(|_| AppError::InvalidConfig(format!("{key} is required")))
}

fn env_list(key: &str, default: Vec<String>) -> Vec<String> {
    env::var(key)
        .map(|val| split_list(&val))
        .unwrap_or(default)
}

fn split_list(val: &str) -> Vec<String> {
    val.split(',')
        .map(|str_val| str_val.trim().to_string())
        .filter(|str_val| !str_val.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 5000,
                cors_allowed_origins: vec![],
                max_concurrent_requests: 10,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/quiz".into(),
                max_connections: 5,
                min_connections: 1,
                connect_timeout: Duration::from_secs(1),
                idle_timeout: Duration::from_secs(1),
            },
        }
    }

    #[test]
    fn parses_numeric_values() {
        let port: u16 = parse_value("PORT", " 8081 ").unwrap();
        assert_eq!(port, 8081);
    }

    #[test]
    fn rejects_unparseable_values_with_key_name() {
        let err = parse_value::<u16>("PORT", "five thousand").unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn splits_origin_list_and_drops_blanks() {
        assert_eq!(
            split_list("http://a.test, ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn validate_accepts_sample_config() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_database_url() {
        let mut config = sample();
        config.database.url = "  ".into();
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_zero_port() {
        let mut config = sample();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }
}
