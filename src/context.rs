//! Service context bundling the port trait objects a run needs.

use crate::adapters::live::LiveFileSystem;
use crate::ports::filesystem::FileSystem;

/// Bundles port trait objects into a single context.
///
/// The identifier generator is not part of the context: it is built per
/// run from the parsed configuration and owns its issued-set.
pub struct ServiceContext {
    /// Filesystem for reading input and writing output.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a context backed by the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
        }
    }

    /// Creates a context around the given filesystem.
    #[must_use]
    pub fn with_fs(fs: Box<dyn FileSystem>) -> Self {
        Self { fs }
    }
}
