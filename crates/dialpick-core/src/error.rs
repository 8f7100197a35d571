// crates/dialpick-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading the directory or using its strict APIs.
///
/// Lookup misses on the default API never produce an error; they resolve to
/// [`UNKNOWN_COUNTRY`](crate::UNKNOWN_COUNTRY). Only the strict variants
/// (`require_by_code`) and the mode-dependent phone operations surface one.
#[derive(Debug, Error)]
pub enum PickerError {
    /// A bundled or user-supplied record is missing a required field.
    #[error("Dataset corrupt: record #{index} is missing `{field}`")]
    DatasetCorrupt { index: usize, field: &'static str },

    /// Two records share the same region code.
    #[error("Dataset corrupt: duplicate country code `{0}`")]
    DuplicateCode(String),

    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A strict lookup found nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The operation has no meaning under the current input policy.
    #[error("Unsupported in current mode: {0}")]
    UnsupportedInCurrentMode(&'static str),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_record_message_names_field() {
        let err = PickerError::DatasetCorrupt {
            index: 3,
            field: "dial_code",
        };
        assert_eq!(
            err.to_string(),
            "Dataset corrupt: record #3 is missing `dial_code`"
        );
    }

    #[test]
    fn json_errors_convert() {
        let err: PickerError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, PickerError::Json(_)));
    }
}
