//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use badr_domain::BadrError;
use serde_json::error::Category;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BadrError);

impl From<InfraError> for BadrError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BadrError> for InfraError {
    fn from(value: BadrError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoBadrError {
    fn into_badr(self) -> BadrError;
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → BadrError */
/* -------------------------------------------------------------------------- */

impl IntoBadrError for JsonError {
    fn into_badr(self) -> BadrError {
        let position = format!("line {} column {}", self.line(), self.column());
        match self.classify() {
            Category::Io => BadrError::Internal(format!("failed to read JSON: {self}")),
            Category::Eof => BadrError::InvalidInput(format!("truncated JSON at {position}")),
            Category::Syntax => BadrError::InvalidInput(format!("malformed JSON: {self}")),
            Category::Data => BadrError::InvalidInput(format!("unexpected JSON shape: {self}")),
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_badr())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → BadrError */
/* -------------------------------------------------------------------------- */

impl IntoBadrError for TomlError {
    fn into_badr(self) -> BadrError {
        BadrError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_badr())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → BadrError */
/* -------------------------------------------------------------------------- */

impl IntoBadrError for IoError {
    fn into_badr(self) -> BadrError {
        match self.kind() {
            ErrorKind::NotFound => BadrError::Config(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                BadrError::Config(format!("permission denied: {self}"))
            }
            ErrorKind::InvalidData => BadrError::InvalidInput(format!("invalid data: {self}")),
            kind => BadrError::Internal(format!("I/O failure ({kind:?}): {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_badr())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
