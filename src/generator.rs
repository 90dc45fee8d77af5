//! Identifier generation settings and method selection.

use clap::ValueEnum;

use crate::adapters::live::RandomUniqueIdGenerator;
use crate::error::{Error, Result};
use crate::ports::IdGenerator;

/// Characters drawn from when no charset is configured.
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Number of random characters per identifier when not configured.
pub const DEFAULT_ID_LENGTH: usize = 6;

/// Attempts per identifier when not configured.
pub const DEFAULT_RETRY_LIMIT: u32 = 100;

/// Strategy used to produce identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IdMethod {
    /// Uniform random sampling from the charset, rejecting already-issued values.
    #[default]
    #[value(name = "random_unique")]
    RandomUnique,
}

/// Immutable settings for an identifier generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Generation strategy.
    pub method: IdMethod,
    /// Number of characters drawn for the random suffix.
    pub id_length: usize,
    /// Candidate characters for the suffix. Repeated characters weigh more.
    pub charset: String,
    /// Maximum attempts before giving up on a single identifier.
    pub retry_limit: u32,
    /// Uppercase the drawn suffix. The prefix is left untouched.
    pub uppercase: bool,
    /// Literal text placed before every suffix.
    pub prefix: String,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            method: IdMethod::default(),
            id_length: DEFAULT_ID_LENGTH,
            charset: DEFAULT_CHARSET.to_string(),
            retry_limit: DEFAULT_RETRY_LIMIT,
            uppercase: false,
            prefix: String::new(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Checks that the settings can produce at least one identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a zero length, an empty charset or
    /// a zero retry limit.
    pub fn validate(&self) -> Result<()> {
        if self.id_length == 0 {
            return Err(Error::InvalidConfig("id length must be at least 1".to_string()));
        }
        if self.charset.is_empty() {
            return Err(Error::InvalidConfig("charset must not be empty".to_string()));
        }
        if self.retry_limit == 0 {
            return Err(Error::InvalidConfig("retry limit must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Builds the generator selected by `config.method`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] when the settings fail validation.
pub fn build(config: &GeneratorConfig) -> Result<Box<dyn IdGenerator>> {
    match config.method {
        IdMethod::RandomUnique => Ok(Box::new(RandomUniqueIdGenerator::new(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.id_length, 6);
        assert_eq!(config.retry_limit, 100);
        assert_eq!(config.charset.len(), 62);
        assert!(config.prefix.is_empty());
        assert!(!config.uppercase);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_length() {
        let config = GeneratorConfig {
            id_length: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_charset() {
        let config = GeneratorConfig {
            charset: String::new(),
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_retry_limit() {
        let config = GeneratorConfig {
            retry_limit: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn build_returns_working_generator() {
        let config = GeneratorConfig {
            seed: Some(1),
            ..GeneratorConfig::default()
        };
        let mut gen = build(&config).unwrap();
        assert_eq!(gen.generate_id().unwrap().len(), 6);
    }

    #[test]
    fn build_propagates_validation_errors() {
        let config = GeneratorConfig {
            charset: String::new(),
            ..GeneratorConfig::default()
        };
        assert!(build(&config).is_err());
    }
}
