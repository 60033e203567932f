use thiserror::Error;

use crate::model::error::ValidationError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse patent document: {details} (at line {line}, column {column})")]
    Parse {
        line: usize,
        column: usize,
        details: String,
    },

    #[error("failed to serialize patent document: {0}")]
    Serialize(String),

    #[error("patent document {record} is invalid: {source}")]
    Invalid {
        record: String,
        #[source]
        source: ValidationError,
    },
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            return Error::Io {
                source: e.into(),
            };
        }
        if e.is_data() || e.is_syntax() || e.is_eof() {
            return Error::Parse {
                line: e.line(),
                column: e.column(),
                details: e.to_string(),
            };
        }
        Error::Serialize(e.to_string())
    }
}

impl Error {
    /// Maps a failure from the JSON writer. Anything other than an I/O failure
    /// is a serialization fault rather than malformed input.
    pub(crate) fn serialize(e: serde_json::Error) -> Self {
        if e.is_io() {
            return Error::Io { source: e.into() };
        }
        Error::Serialize(e.to_string())
    }

    pub fn invalid(record: impl Into<String>, source: ValidationError) -> Self {
        Self::Invalid {
            record: record.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_errors_map_to_parse() {
        let e = serde_json::from_str::<serde_json::Value>("[1, 2").unwrap_err();
        assert!(matches!(Error::from(e), Error::Parse { line: 1, .. }));
    }

    #[test]
    fn invalid_display_names_record_and_cause() {
        let err = Error::invalid("claim 2", ValidationError::SelfReference { claim: 2 });
        assert_eq!(
            err.to_string(),
            "patent document claim 2 is invalid: claim 2: self reference in dependencies"
        );
    }
}
