//! Validation errors raised by model constructors and mutators.
//!
//! Every variant names the offending claim number, symbol, or identifier so
//! the caller can point the user at the exact input that broke a rule. These
//! errors are deterministic: retrying with the same input fails the same way.

use thiserror::Error;

use super::types::PatentStatus;

/// A structural invariant of a claim set or Markush structure was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Claim numbers start at 1.
    #[error("claim number must be positive (got {0})")]
    NonPositiveClaimNumber(u32),

    /// Claim text is outside the accepted length range after trimming.
    #[error("claim {claim}: text length {len} is outside {min}..={max} characters")]
    TextLength {
        claim: u32,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("claim {claim}: self reference in dependencies")]
    SelfReference { claim: u32 },

    /// A dependency points at the same or a higher-numbered claim.
    #[error("claim {claim}: forward reference to claim {target}")]
    ForwardReference { claim: u32, target: u32 },

    #[error("claim {claim}: duplicate dependency on claim {target}")]
    DuplicateDependency { claim: u32, target: u32 },

    #[error("claim {claim}: dependent claim has no dependencies")]
    MissingDependencies { claim: u32 },

    #[error("claim {claim}: independent claim cannot have dependencies")]
    UnexpectedDependencies { claim: u32 },

    #[error("claim {claim}: dependencies have already been set")]
    DependenciesAlreadySet { claim: u32 },

    #[error("claim {claim}: at least one element must be marked essential")]
    NoEssentialElement { claim: u32 },

    #[error("claim {claim}: duplicate element id '{element}'")]
    DuplicateElement { claim: u32, element: String },

    #[error("duplicate claim number {0}")]
    DuplicateClaimNumber(u32),

    #[error("claim set has no independent claim")]
    NoIndependentClaim,

    /// A dependency names a claim that is not part of the set.
    #[error("claim {claim}: reference to claim {target} does not resolve")]
    UnresolvedReference { claim: u32, target: u32 },

    /// Claim numbers must run 1..=max without holes.
    #[error("claim numbering has a gap: expected claim {expected}, found {found}")]
    NumberingGap { expected: u32, found: u32 },

    #[error("claim {0} not found")]
    UnknownClaim(u32),

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("structure '{structure}': duplicate position symbol '{symbol}'")]
    DuplicateSymbol { structure: String, symbol: String },

    #[error("position '{symbol}': linked position '{linked}' is not defined")]
    UnknownLinkedPosition { symbol: String, linked: String },

    #[error("position '{symbol}': required position has no substituents")]
    NoSubstituents { symbol: String },

    #[error("structure '{0}' has no variable positions")]
    NoPositions(String),

    #[error("substituent '{id}': carbon range {min}..{max} is inverted")]
    CarbonRange { id: String, min: u32, max: u32 },

    #[error("position '{symbol}': repeat range {min}..{max} is inverted")]
    RepeatRange { symbol: String, min: u32, max: u32 },

    #[error("duplicate Markush structure id '{0}'")]
    DuplicateStructure(String),

    #[error("structure '{structure}' refers to claim {claim}, which is not in the claim set")]
    StructureClaimNotFound { structure: String, claim: u32 },

    #[error("Markush structure '{0}' not found")]
    UnknownStructure(String),

    /// A claim lists a structure id that is not attached to the patent.
    #[error("claim {claim}: Markush structure '{structure}' is not attached")]
    DanglingStructureReference { claim: u32, structure: String },

    #[error("claim {claim}: Markush structure '{structure}' belongs to claim {owner}")]
    MisplacedStructureReference {
        claim: u32,
        structure: String,
        owner: u32,
    },

    #[error("invalid status transition {from} -> {to}")]
    InvalidTransition { from: PatentStatus, to: PatentStatus },
}

impl ValidationError {
    pub(crate) fn empty(field: &'static str) -> Self {
        Self::EmptyField { field }
    }

    /// Returns the claim number this error is about, when there is one.
    pub fn claim_number(&self) -> Option<u32> {
        match self {
            Self::NonPositiveClaimNumber(n)
            | Self::DuplicateClaimNumber(n)
            | Self::UnknownClaim(n) => Some(*n),
            Self::TextLength { claim, .. }
            | Self::SelfReference { claim }
            | Self::ForwardReference { claim, .. }
            | Self::DuplicateDependency { claim, .. }
            | Self::MissingDependencies { claim }
            | Self::UnexpectedDependencies { claim }
            | Self::DependenciesAlreadySet { claim }
            | Self::NoEssentialElement { claim }
            | Self::DuplicateElement { claim, .. }
            | Self::UnresolvedReference { claim, .. }
            | Self::StructureClaimNotFound { claim, .. }
            | Self::DanglingStructureReference { claim, .. }
            | Self::MisplacedStructureReference { claim, .. } => Some(*claim),
            Self::NumberingGap { expected, .. } => Some(*expected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_claim() {
        let err = ValidationError::ForwardReference { claim: 2, target: 3 };
        assert_eq!(err.to_string(), "claim 2: forward reference to claim 3");

        let err = ValidationError::SelfReference { claim: 2 };
        assert_eq!(err.to_string(), "claim 2: self reference in dependencies");
    }

    #[test]
    fn claim_number_is_extracted() {
        assert_eq!(
            ValidationError::UnresolvedReference { claim: 4, target: 9 }.claim_number(),
            Some(4)
        );
        assert_eq!(ValidationError::DuplicateClaimNumber(3).claim_number(), Some(3));
        assert_eq!(
            ValidationError::DanglingStructureReference {
                claim: 2,
                structure: "MK-404".into()
            }
            .claim_number(),
            Some(2)
        );
        assert_eq!(ValidationError::NoIndependentClaim.claim_number(), None);
        assert_eq!(ValidationError::empty("name").claim_number(), None);
    }

    #[test]
    fn transition_message_uses_display_names() {
        let err = ValidationError::InvalidTransition {
            from: PatentStatus::Granted,
            to: PatentStatus::Filed,
        };
        assert_eq!(err.to_string(), "invalid status transition granted -> filed");
    }
}
