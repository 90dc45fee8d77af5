//! Assign identifiers to every record of the input file.

use crate::cli::Cli;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::generator;
use crate::processor::RecordProcessor;
use crate::store::RecordStore;

/// Load, assign identifiers, and save.
///
/// The generator is built before any I/O so that invalid settings fail
/// without touching the filesystem. Nothing is written unless every record
/// received an identifier.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be
/// loaded, generation is exhausted, or the output cannot be written.
pub fn run_with_context(ctx: &ServiceContext, cli: &Cli) -> Result<()> {
    let config = cli.generator_config();
    let mut id_gen = generator::build(&config)?;
    log::info!("generator ready: {config:?}");

    let store = RecordStore::new(ctx);

    println!("Reading input file: {}", cli.input_file.display());
    let records = store.load(&cli.input_file)?;

    println!("Processing {} records...", records.len());
    let processed =
        RecordProcessor::new(&mut *id_gen, cli.processor_options()).process(records)?;

    println!("Writing output to: {}", cli.output_file.display());
    store.save(&cli.output_file, &processed)?;

    println!("Done! IDs have been successfully generated.");
    Ok(())
}
