//! Password hashing policy (bcrypt, salted, configurable cost)
//!
//! bcrypt is CPU-bound by design, so both operations run on the blocking
//! thread pool and never stall the async workers.

use core_config::{ConfigError, FromEnv, env_parse_or_default};

use crate::error::{UserError, UserResult};

/// Cost used when `PASSWORD_HASH_COST` is unset.
pub const DEFAULT_HASH_COST: u32 = 10;

/// Lowest cost bcrypt accepts.
pub const MIN_HASH_COST: u32 = 4;

/// Highest cost bcrypt accepts.
pub const MAX_HASH_COST: u32 = 31;

/// bcrypt hashing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    cost: u32,
}

impl HashConfig {
    /// Fails when `cost` is outside bcrypt's accepted 4..=31 range.
    pub fn new(cost: u32) -> Result<Self, ConfigError> {
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) {
            return Err(ConfigError::ParseError {
                key: "PASSWORD_HASH_COST".to_string(),
                details: format!(
                    "cost {} is outside {}..={}",
                    cost, MIN_HASH_COST, MAX_HASH_COST
                ),
            });
        }
        Ok(Self { cost })
    }

    /// Cheapest cost bcrypt accepts, for tests.
    pub fn fast() -> Self {
        Self {
            cost: MIN_HASH_COST,
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            cost: DEFAULT_HASH_COST,
        }
    }
}

impl FromEnv for HashConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let cost = env_parse_or_default("PASSWORD_HASH_COST", &DEFAULT_HASH_COST.to_string())?;
        Self::new(cost)
    }
}

/// Hash `password` with a fresh salt.
pub async fn hash_password(password: &str, config: HashConfig) -> UserResult<String> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || bcrypt::hash(password, config.cost))
        .await
        .map_err(|e| UserError::PasswordHash(e.to_string()))?
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

/// Check `password` against a stored bcrypt hash.
pub async fn verify_password(password: &str, hash: &str) -> UserResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| UserError::PasswordHash(e.to_string()))?
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cost() {
        temp_env::with_var_unset("PASSWORD_HASH_COST", || {
            let config = HashConfig::from_env().unwrap();
            assert_eq!(config.cost(), 10);
        });
    }

    #[test]
    fn test_cost_from_env() {
        temp_env::with_var("PASSWORD_HASH_COST", Some("6"), || {
            assert_eq!(HashConfig::from_env().unwrap().cost(), 6);
        });
    }

    #[test]
    fn test_cost_out_of_range() {
        assert!(HashConfig::new(3).is_err());
        assert!(HashConfig::new(32).is_err());
        assert!(HashConfig::new(4).is_ok());
        assert_eq!(HashConfig::fast().cost(), MIN_HASH_COST);

        temp_env::with_var("PASSWORD_HASH_COST", Some("99"), || {
            assert!(HashConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_cost_not_a_number() {
        temp_env::with_var("PASSWORD_HASH_COST", Some("high"), || {
            let err = HashConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PASSWORD_HASH_COST"));
        });
    }

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("correct horse", HashConfig::fast())
            .await
            .unwrap();

        assert_ne!(hash, "correct horse");
        assert!(verify_password("correct horse", &hash).await.unwrap());
        assert!(!verify_password("battery staple", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_is_salted() {
        let a = hash_password("same-password", HashConfig::fast()).await.unwrap();
        let b = hash_password("same-password", HashConfig::fast()).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_hash_uses_configured_cost() {
        let hash = hash_password("password123", HashConfig::new(5).unwrap())
            .await
            .unwrap();
        assert!(hash.starts_with("$2b$05$"));
    }
}
