//! Error types for structural analysis.
//!
//! Structural problems surface as [`ValidationError`]s from the model layer.
//! Failures of the external [`MoleculeMatcher`](super::MoleculeMatcher) are
//! wrapped with the structure and operation that triggered them; the engine
//! never retries them itself.

use thiserror::Error;

use super::matcher::MatcherError;
use crate::model::error::ValidationError;

/// Errors that can occur while analyzing claim sets and Markush structures.
#[derive(Debug, Error)]
pub enum Error {
    /// A structural invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The molecule matcher failed.
    ///
    /// Carries the matcher's own error as the source, unchanged.
    #[error("molecule matcher failed during {operation} for structure '{structure}'")]
    Matcher {
        /// Identifier of the structure being matched.
        structure: String,
        /// Matcher operation that failed.
        operation: &'static str,
        #[source]
        source: MatcherError,
    },

    /// Failed to parse an analysis configuration TOML.
    #[error("failed to parse analysis configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A setting parsed but holds a value outside its accepted range.
    #[error("invalid setting {key}: {value} is outside {range}")]
    InvalidSetting {
        key: &'static str,
        value: f64,
        range: &'static str,
    },
}

impl Error {
    /// Creates a [`Matcher`](Error::Matcher) error.
    ///
    /// # Arguments
    ///
    /// * `structure`: Identifier of the Markush structure being matched
    /// * `operation`: Name of the matcher operation that failed
    /// * `source`: The matcher's error
    pub fn matcher(
        structure: impl Into<String>,
        operation: &'static str,
        source: MatcherError,
    ) -> Self {
        Self::Matcher {
            structure: structure.into(),
            operation,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn validation_errors_are_transparent() {
        let err: Error = ValidationError::NoIndependentClaim.into();
        assert_eq!(err.to_string(), "claim set has no independent claim");
    }

    #[test]
    fn matcher_error_keeps_source() {
        let err = Error::matcher("MK-1", "is_substructure", "service unavailable".into());
        assert_eq!(
            err.to_string(),
            "molecule matcher failed during is_substructure for structure 'MK-1'"
        );
        assert_eq!(err.source().unwrap().to_string(), "service unavailable");
    }

    #[test]
    fn invalid_setting_names_key_and_range() {
        let err = Error::InvalidSetting {
            key: "coverage.min_confidence",
            value: 1.5,
            range: "0.0..=1.0",
        };
        assert_eq!(
            err.to_string(),
            "invalid setting coverage.min_confidence: 1.5 is outside 0.0..=1.0"
        );
    }
}
