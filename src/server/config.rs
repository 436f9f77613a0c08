//! Application configuration loaded from environment variables.

use crate::server::error::config::ConfigError;

/// Address the HTTP server listens on when `LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration of the server.
pub struct Config {
    /// Database connection URL (`DATABASE_URL`)
    pub database_url: String,
    /// Valkey/Redis URL for the session store (`VALKEY_URL`)
    pub valkey_url: String,
    /// Socket address to bind (`LISTEN_ADDR`)
    pub listen_addr: String,
    /// Bcrypt cost used when hashing passwords (`PASSWORD_HASH_COST`)
    pub password_hash_cost: u32,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `VALKEY_URL` not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `PASSWORD_HASH_COST` is not a valid bcrypt cost
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            listen_addr: optional("LISTEN_ADDR")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            password_hash_cost: match optional("PASSWORD_HASH_COST") {
                Some(value) => parse_hash_cost(&value)?,
                None => bcrypt::DEFAULT_COST,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_hash_cost(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvValue {
        var: "PASSWORD_HASH_COST".to_string(),
        reason: reason.to_string(),
    };

    let cost = value
        .parse::<u32>()
        .map_err(|_| invalid("expected an integer"))?;

    // Range accepted by bcrypt
    if !(4..=31).contains(&cost) {
        return Err(invalid("must be between 4 and 31"));
    }

    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_hash_cost() {
        assert_eq!(parse_hash_cost("10").unwrap(), 10);
    }

    #[test]
    fn rejects_non_numeric_hash_cost() {
        assert!(matches!(
            parse_hash_cost("ten"),
            Err(ConfigError::InvalidEnvValue { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_hash_cost() {
        assert!(parse_hash_cost("3").is_err());
        assert!(parse_hash_cost("32").is_err());
    }
}
