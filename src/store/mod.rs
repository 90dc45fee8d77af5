//! Record store: loading and saving record collections.
//!
//! All I/O goes through the `FileSystem` port. The on-disk format follows
//! the file extension:
//!
//! ```text
//! *.yaml, *.yml  -> YAML sequence of mappings
//! anything else  -> JSON array of objects (pretty, 2-space indent)
//! ```

use std::path::Path;

use serde_json::Value;

use crate::context::ServiceContext;
use crate::error::{Error, Result};
use crate::processor::Record;

/// Serialization format of a record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// JSON array of objects.
    Json,
    /// YAML sequence of mappings.
    Yaml,
}

impl RecordFormat {
    /// Picks the format from the path's extension, defaulting to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Reads and writes record collections.
pub struct RecordStore<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecordStore<'a> {
    /// Creates a store on top of the context's filesystem.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Loads a sequence of records from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file is missing,
    /// [`Error::Permission`] if it cannot be read, [`Error::Parse`] if it is
    /// not well-formed, and [`Error::Shape`] if the top-level value is not a
    /// sequence of mappings.
    pub fn load(&self, path: &Path) -> Result<Vec<Record>> {
        if !self.ctx.fs.exists(path) {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = self.ctx.fs.read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        let parse_error = |message: String| Error::Parse {
            path: path.to_path_buf(),
            message,
        };
        let value: Value = match RecordFormat::from_path(path) {
            RecordFormat::Json => {
                serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
            }
            RecordFormat::Yaml => {
                serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
            }
        };
        into_records(path, value)
    }

    /// Writes `records` to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Permission`] if the location is not writable,
    /// [`Error::Serialize`] if encoding fails, and [`Error::Io`] otherwise.
    pub fn save(&self, path: &Path, records: &[Record]) -> Result<()> {
        let serialize_error = |message: String| Error::Serialize {
            path: path.to_path_buf(),
            message,
        };
        let contents = match RecordFormat::from_path(path) {
            RecordFormat::Json => {
                let mut json = serde_json::to_string_pretty(records)
                    .map_err(|e| serialize_error(e.to_string()))?;
                json.push('\n');
                json
            }
            RecordFormat::Yaml => {
                let sequence = records.iter().map(to_yaml).collect();
                serde_yaml::to_string(&serde_yaml::Value::Sequence(sequence))
                    .map_err(|e| serialize_error(e.to_string()))?
            }
        };
        self.ctx.fs.write(path, &contents).map_err(|e| Error::from_io(path, e))
    }
}

fn into_records(path: &Path, value: Value) -> Result<Vec<Record>> {
    let shape_error = |message: String| Error::Shape {
        path: path.to_path_buf(),
        message,
    };
    let Value::Array(items) = value else {
        return Err(shape_error(format!(
            "expected a list of records, found {}",
            kind_of(&value)
        )));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(shape_error(format!(
                "item {index} is {}, but every item must be a record",
                kind_of(&other)
            ))),
        })
        .collect()
}

/// Converts a record into a YAML mapping.
///
/// `serde_yaml` cannot serialize arbitrary-precision JSON numbers directly, so
/// numbers are narrowed to the widest YAML number that holds them. Integers
/// beyond 64 bits become floats.
fn to_yaml(record: &Record) -> serde_yaml::Value {
    let mapping = record
        .iter()
        .map(|(key, value)| (serde_yaml::Value::String(key.clone()), to_yaml_value(value)))
        .collect();
    serde_yaml::Value::Mapping(mapping)
}

fn to_yaml_value(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u.into()
            } else if let Some(i) = n.as_i64() {
                i.into()
            } else {
                n.as_f64().map_or(serde_yaml::Value::Null, Into::into)
            }
        }
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Array(items) => {
            serde_yaml::Value::Sequence(items.iter().map(to_yaml_value).collect())
        }
        Value::Object(record) => to_yaml(record),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
