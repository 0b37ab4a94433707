use std::fmt;
use thiserror::Error;

/// Where an element was rejected. Shows up in the error message so callers can
/// tell a bad constructor argument from a bad batch or a single bad insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Initialization,
    Insert,
    Batch,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Initialization => write!(f, " at initialization"),
            Stage::Insert => Ok(()),
            Stage::Batch => write!(f, " while adding elements from array"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollectionError {
    #[error("Invalid type{stage}: expected {expected}, got {actual}")]
    InvalidType {
        stage: Stage,
        expected: String,
        actual: String,
    },

    #[error("Index {index} out of bounds for list of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("Failed to parse input: {0}")]
    Parse(String),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl CollectionError {
    pub fn invalid_type(stage: Stage, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::InvalidType {
            stage,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    pub fn is_invalid_type(&self) -> bool {
        matches!(self, Self::InvalidType { .. })
    }
}

impl From<serde_json::Error> for CollectionError {
    fn from(err: serde_json::Error) -> Self {
        CollectionError::Parse(format!("line {}, column {}: {err}", err.line(), err.column()))
    }
}

impl From<toml::de::Error> for CollectionError {
    fn from(err: toml::de::Error) -> Self {
        CollectionError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_type_message_names_both_types() {
        let err = CollectionError::invalid_type(Stage::Insert, "number", "string");
        assert_eq!(err.to_string(), "Invalid type: expected number, got string");
        assert!(err.is_invalid_type());
    }

    #[test]
    fn test_stage_is_part_of_message() {
        let init = CollectionError::invalid_type(Stage::Initialization, "number", "null");
        assert!(init.to_string().starts_with("Invalid type at initialization"));

        let batch = CollectionError::invalid_type(Stage::Batch, "number", "object");
        assert!(batch
            .to_string()
            .starts_with("Invalid type while adding elements from array"));
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = CollectionError::out_of_bounds(5, 2);
        assert_eq!(err.to_string(), "Index 5 out of bounds for list of size 2");
        assert!(!err.is_invalid_type());
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: CollectionError = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err().into();
        assert!(matches!(err, CollectionError::Parse(_)));
    }
}
