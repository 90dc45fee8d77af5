//! Error type shared by every stage of a run.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a run.
///
/// Each variant maps to exit code 1 in the binary; the `Display` text is what
/// the user sees on stderr.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("Input file not found: {}", path.display())]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The input file is not valid JSON or YAML.
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parser diagnostic, including line and column when available.
        message: String,
    },

    /// The input parsed, but is not a sequence of records.
    #[error("Invalid input shape in {}: {message}", path.display())]
    Shape {
        /// Path of the offending file.
        path: PathBuf,
        /// What was expected and what was found.
        message: String,
    },

    /// Every attempt produced an identifier that was already issued.
    #[error(
        "Failed to generate a unique ID after {retry_limit} attempts. \
         Consider increasing the ID length or using a larger charset."
    )]
    GenerationExhausted {
        /// The configured per-identifier attempt limit.
        retry_limit: u32,
    },

    /// The input is not readable or the output location is not writable.
    #[error("Permission denied: {}", path.display())]
    Permission {
        /// Path that could not be accessed.
        path: PathBuf,
    },

    /// Any other I/O failure while reading or writing.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Records could not be rendered in the output format.
    #[error("Failed to serialize records for {}: {message}", path.display())]
    Serialize {
        /// Destination path.
        path: PathBuf,
        /// Serializer diagnostic.
        message: String,
    },

    /// The generator was configured with values it cannot work with.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Command-line arguments were rejected.
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// Classifies an I/O error raised while accessing `path`.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::Permission { path },
            _ => Self::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::Path;

    use super::*;

    #[test]
    fn io_kinds_map_to_dedicated_variants() {
        let path = Path::new("/data/records.json");

        let err = Error::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, Error::FileNotFound { .. }));

        let err = Error::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, Error::Permission { .. }));

        let err = Error::from_io(path, io::Error::other("disk on fire"));
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn permission_message_does_not_assume_a_write() {
        let path = Path::new("/data/records.json");
        let err = Error::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.to_string(), "Permission denied: /data/records.json");
    }

    #[test]
    fn exhaustion_message_names_the_limit() {
        let err = Error::GenerationExhausted { retry_limit: 7 };
        let msg = err.to_string();
        assert!(msg.contains("after 7 attempts"));
        assert!(msg.contains("increasing the ID length"));
    }
}
