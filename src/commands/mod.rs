//! Command dispatch and handlers.

pub mod assign;

use crate::cli::Cli;
use crate::context::ServiceContext;
use crate::error::Result;

/// Run the parsed command line against the live filesystem.
///
/// # Errors
///
/// Returns the first error raised while loading, processing or saving.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let ctx = ServiceContext::live();
    assign::run_with_context(&ctx, cli)
}
