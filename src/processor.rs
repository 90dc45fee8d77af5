//! Assigns generated identifiers to a batch of records.

use clap::ValueEnum;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::ports::IdGenerator;

/// One structured entry of the input collection, with field order preserved.
pub type Record = Map<String, Value>;

/// Name of the identifier field when not configured.
pub const DEFAULT_ID_FIELD: &str = "id";

/// What happens when a record already has a field named like the identifier
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExistingIdPolicy {
    /// The generated identifier replaces the record's own value.
    #[default]
    Overwrite,
    /// The record's own value is kept; the generated identifier is discarded.
    Keep,
}

/// Settings for a [`RecordProcessor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorOptions {
    /// Field that receives the identifier. Always the first field of the output.
    pub id_field: String,
    /// Resolution for records that already carry `id_field`.
    pub on_existing: ExistingIdPolicy,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            id_field: DEFAULT_ID_FIELD.to_string(),
            on_existing: ExistingIdPolicy::default(),
        }
    }
}

/// Applies an [`IdGenerator`] to records in input order.
pub struct RecordProcessor<'g> {
    generator: &'g mut dyn IdGenerator,
    options: ProcessorOptions,
}

impl<'g> RecordProcessor<'g> {
    /// Creates a processor drawing identifiers from `generator`.
    #[must_use]
    pub fn new(generator: &'g mut dyn IdGenerator, options: ProcessorOptions) -> Self {
        Self { generator, options }
    }

    /// Returns the records with the identifier field inserted first.
    ///
    /// Exactly one identifier is generated per record. The output has the
    /// same length and order as the input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GenerationExhausted`] as soon as any record
    /// cannot be given a unique identifier; no records are returned in that
    /// case.
    pub fn process(&mut self, records: Vec<Record>) -> Result<Vec<Record>> {
        self.warn_if_near_capacity(records.len());

        let mut processed = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let id = self.generator.generate_id()?;
            processed.push(self.assign(index, id, record));
        }
        Ok(processed)
    }

    fn assign(&self, index: usize, id: String, record: Record) -> Record {
        let id_field = &self.options.id_field;
        let mut out = Record::new();
        out.insert(id_field.clone(), Value::String(id));

        for (key, value) in record {
            if key != *id_field {
                out.insert(key, value);
                continue;
            }
            match self.options.on_existing {
                ExistingIdPolicy::Overwrite => {
                    log::warn!("record {index}: replacing existing `{id_field}` value {value}");
                }
                ExistingIdPolicy::Keep => {
                    log::warn!("record {index}: keeping existing `{id_field}` value {value}");
                    out.insert(key, value);
                }
            }
        }
        out
    }

    fn warn_if_near_capacity(&self, batch: usize) {
        let Some(capacity) = self.generator.capacity() else {
            return;
        };
        let batch = u64::try_from(batch).unwrap_or(u64::MAX);
        if batch > capacity {
            log::warn!(
                "{batch} records but only {capacity} distinct identifiers exist; generation will fail"
            );
        } else if batch.saturating_mul(2) > capacity {
            log::warn!(
                "{batch} records use more than half of the {capacity} possible identifiers; \
                 expect collisions and retries"
            );
        }
    }
}
