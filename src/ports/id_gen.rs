//! ID generator port for producing unique identifiers.

use crate::error::Result;

/// Issues identifiers that are unique for the lifetime of the instance.
///
/// Generation mutates the issued-set, so callers that ever share a generator
/// across threads must serialize access to a single instance.
pub trait IdGenerator {
    /// Produces a fresh identifier never returned before by this instance.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GenerationExhausted`] when no unused
    /// identifier was found within the configured number of attempts.
    fn generate_id(&mut self) -> Result<String>;

    /// Number of distinct identifiers this generator can ever issue, when
    /// known.
    fn capacity(&self) -> Option<u64> {
        None
    }
}
