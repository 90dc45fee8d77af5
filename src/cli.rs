//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::generator::{
    GeneratorConfig, IdMethod, DEFAULT_CHARSET, DEFAULT_ID_LENGTH, DEFAULT_RETRY_LIMIT,
};
use crate::processor::{ExistingIdPolicy, ProcessorOptions, DEFAULT_ID_FIELD};

/// Top-level CLI parser for `recid`.
///
/// Every option except the paths can also be set through a `RECID_*`
/// environment variable (or a `.env` file); flags take precedence.
#[derive(Debug, Parser)]
#[command(
    name = "recid",
    version,
    about = "Generate random IDs for records in a JSON or YAML file"
)]
pub struct Cli {
    /// Path to the input file.
    #[arg(long = "i", visible_alias = "input", value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Path to the output file. Missing directories are created.
    #[arg(long = "o", visible_alias = "output", value_name = "OUTPUT")]
    pub output_file: PathBuf,

    /// Name of the field where the ID is written.
    #[arg(long, env = "RECID_ID_FIELD", default_value = DEFAULT_ID_FIELD)]
    pub id_field: String,

    /// Number of random characters in each ID.
    #[arg(long, env = "RECID_ID_LENGTH", default_value_t = DEFAULT_ID_LENGTH)]
    pub id_length: usize,

    /// Method used to generate the ID.
    #[arg(long, env = "RECID_ID_METHOD", value_enum, default_value_t = IdMethod::RandomUnique)]
    pub id_method: IdMethod,

    /// Characters allowed in the ID (e.g. "ABCDEF0123456789").
    #[arg(long, env = "RECID_CHARSET", default_value = DEFAULT_CHARSET)]
    pub charset: String,

    /// Maximum number of attempts to avoid an ID collision.
    #[arg(long, env = "RECID_RETRY_LIMIT", default_value_t = DEFAULT_RETRY_LIMIT)]
    pub retry_limit: u32,

    /// Uppercase the random part of generated IDs.
    #[arg(long, env = "RECID_UPPER")]
    pub upper: bool,

    /// Literal prefix for every ID.
    #[arg(long, env = "RECID_PREFIX", default_value = "")]
    pub prefix: String,

    /// What to do when a record already has the ID field.
    #[arg(
        long,
        env = "RECID_ON_EXISTING",
        value_enum,
        default_value_t = ExistingIdPolicy::Overwrite
    )]
    pub on_existing: ExistingIdPolicy,

    /// Seed for the random source, for reproducible output.
    #[arg(long, env = "RECID_SEED")]
    pub seed: Option<u64>,
}

impl Cli {
    /// Generator settings described by the parsed arguments.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            method: self.id_method,
            id_length: self.id_length,
            charset: self.charset.clone(),
            retry_limit: self.retry_limit,
            uppercase: self.upper,
            prefix: self.prefix.clone(),
            seed: self.seed,
        }
    }

    /// Processor settings described by the parsed arguments.
    #[must_use]
    pub fn processor_options(&self) -> ProcessorOptions {
        ProcessorOptions {
            id_field: self.id_field.clone(),
            on_existing: self.on_existing,
        }
    }
}

#[cfg(test)]
impl Cli {
    /// Parses without consulting `RECID_*` variables of the test process.
    pub(crate) fn try_parse_isolated<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        use clap::{CommandFactory, FromArgMatches};

        let matches = Self::command()
            .mut_args(|arg| arg.env(None::<&'static str>))
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}
