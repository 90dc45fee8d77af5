//! Port traits defining external boundaries.
//!
//! Each trait separates the record pipeline from something it should not
//! own directly: the disk, and the source of identifiers. Implementations
//! live in `src/adapters/`.

pub mod filesystem;
pub mod id_gen;

pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
