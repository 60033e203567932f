//! Molecule matching against a Markush structure.
//!
//! Real chemistry (SMILES parsing, substructure search, fragment comparison) is
//! provided by an external engine behind the [`MoleculeMatcher`] trait. This
//! module only orchestrates the three matcher calls and interprets their results.

use std::collections::{BTreeMap, HashMap};

use super::error::Error;
use crate::model::markush::{MarkushStructure, Substituent};

/// Error type returned by [`MoleculeMatcher`] implementations.
pub type MatcherError = Box<dyn std::error::Error + Send + Sync>;

/// Cheminformatics capability consumed by [`MarkushStructure::matches_molecule`].
///
/// Implementations may perform I/O (for example an RPC to a chemistry service);
/// timeouts and retries are the implementation's or caller's business.
pub trait MoleculeMatcher {
    /// Whether `candidate` contains the `core` scaffold as a substructure.
    fn is_substructure(&self, core: &str, candidate: &str) -> Result<bool, MatcherError>;

    /// For a candidate that contains `core`, the fragment occupying each position.
    ///
    /// Keys are position symbols. Positions with nothing attached are omitted.
    fn extract_substituents(
        &self,
        core: &str,
        candidate: &str,
    ) -> Result<HashMap<String, String>, MatcherError>;

    /// Id of the alternative in `allowed` that `value` corresponds to, if any.
    fn match_substituent(
        &self,
        value: &str,
        allowed: &[Substituent],
    ) -> Result<Option<String>, MatcherError>;
}

/// Outcome of matching one candidate molecule against one structure.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub matched: bool,
    /// Fraction of positions satisfied, in `0.0..=1.0`.
    pub confidence: f64,
    /// Position symbol to matched substituent id.
    pub assignments: BTreeMap<String, String>,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self {
            matched: false,
            confidence: 0.0,
            assignments: BTreeMap::new(),
        }
    }

    pub fn exact() -> Self {
        Self {
            matched: true,
            confidence: 1.0,
            assignments: BTreeMap::new(),
        }
    }
}

impl MarkushStructure {
    /// Decides whether `candidate` falls within this genus.
    ///
    /// A candidate listed verbatim among the preferred examples matches with
    /// confidence 1.0 without consulting the matcher. Otherwise, with no matcher
    /// there is nothing more to check and the result is a non-match.
    ///
    /// With a matcher, the candidate must contain the core scaffold, every
    /// required position must carry one of its declared alternatives, and optional
    /// positions may be empty. Confidence is satisfied positions over total
    /// positions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Matcher`] wrapping the first matcher failure.
    pub fn matches_molecule(
        &self,
        candidate: &str,
        matcher: Option<&dyn MoleculeMatcher>,
    ) -> Result<MatchResult, Error> {
        if self.preferred_examples().iter().any(|e| e == candidate) {
            return Ok(MatchResult::exact());
        }

        let Some(matcher) = matcher else {
            return Ok(MatchResult::no_match());
        };

        let core = self.core_scaffold();
        let contains_core = matcher
            .is_substructure(core, candidate)
            .map_err(|e| Error::matcher(self.id(), "is_substructure", e))?;
        if !contains_core {
            return Ok(MatchResult::no_match());
        }

        let total = self.positions().len();
        if total == 0 {
            return Ok(MatchResult::exact());
        }

        let extracted = matcher
            .extract_substituents(core, candidate)
            .map_err(|e| Error::matcher(self.id(), "extract_substituents", e))?;

        let mut satisfied = 0usize;
        let mut assignments = BTreeMap::new();

        for position in self.positions() {
            let Some(value) = extracted.get(&position.symbol) else {
                if position.optional {
                    satisfied += 1;
                    continue;
                }
                return Ok(MatchResult::no_match());
            };

            let matched_id = matcher
                .match_substituent(value, &position.substituents)
                .map_err(|e| Error::matcher(self.id(), "match_substituent", e))?;

            match matched_id {
                Some(id) => {
                    satisfied += 1;
                    assignments.insert(position.symbol.clone(), id);
                }
                None if position.optional => {}
                None => return Ok(MatchResult::no_match()),
            }
        }

        Ok(MatchResult {
            matched: true,
            confidence: satisfied as f64 / total as f64,
            assignments,
        })
    }
}
