//! Live adapter for the `IdGenerator` port.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::generator::GeneratorConfig;
use crate::ports::IdGenerator;

/// Draws random suffixes from a charset and rejects any candidate that was
/// already issued by this instance.
pub struct RandomUniqueIdGenerator<R = StdRng> {
    charset: Vec<char>,
    id_length: usize,
    retry_limit: u32,
    uppercase: bool,
    prefix: String,
    rng: R,
    issued: HashSet<String>,
}

impl RandomUniqueIdGenerator<StdRng> {
    /// Creates a generator seeded from `config.seed`, or from the OS when unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the settings fail validation.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> RandomUniqueIdGenerator<R> {
    /// Creates a generator drawing from the given random source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the settings fail validation.
    pub fn with_rng(config: &GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            charset: config.charset.chars().collect(),
            id_length: config.id_length,
            retry_limit: config.retry_limit,
            uppercase: config.uppercase,
            prefix: config.prefix.clone(),
            rng,
            issued: HashSet::new(),
        })
    }

    /// Number of identifiers issued so far.
    #[must_use]
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    /// Number of distinct identifiers this configuration can produce,
    /// saturating at `u64::MAX`.
    #[must_use]
    pub fn space_size(&self) -> u64 {
        let distinct = if self.uppercase {
            self.charset
                .iter()
                .map(|c| c.to_uppercase().collect::<String>())
                .collect::<HashSet<_>>()
                .len()
        } else {
            self.charset.iter().collect::<HashSet<_>>().len()
        };
        let distinct = u64::try_from(distinct).unwrap_or(u64::MAX);
        u32::try_from(self.id_length)
            .ok()
            .and_then(|exp| distinct.checked_pow(exp))
            .unwrap_or(u64::MAX)
    }

    fn draw_candidate(&mut self) -> String {
        let Self {
            charset,
            id_length,
            rng,
            ..
        } = self;
        let suffix: String =
            (0..*id_length).map(|_| charset[rng.random_range(0..charset.len())]).collect();
        let suffix = if self.uppercase {
            suffix.to_uppercase()
        } else {
            suffix
        };
        format!("{}{suffix}", self.prefix)
    }
}

impl<R: Rng> IdGenerator for RandomUniqueIdGenerator<R> {
    fn generate_id(&mut self) -> Result<String> {
        for attempt in 1..=self.retry_limit {
            let candidate = self.draw_candidate();
            if !self.issued.contains(&candidate) {
                self.issued.insert(candidate.clone());
                return Ok(candidate);
            }
            log::debug!("ID collision on attempt {attempt}/{}: {candidate}", self.retry_limit);
        }
        Err(Error::GenerationExhausted {
            retry_limit: self.retry_limit,
        })
    }

    fn capacity(&self) -> Option<u64> {
        Some(self.space_size())
    }
}
