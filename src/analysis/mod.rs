//! Structural analysis of claim sets and Markush structures.
//!
//! - [`ClaimSet`] validates a patent's claims as a whole and walks the
//!   dependency graph ([`dependents_of`](ClaimSet::dependents_of),
//!   [`claim_tree`](ClaimSet::claim_tree)).
//! - [`MarkushStructure`](crate::MarkushStructure) gains
//!   [`enumerate_exemplary`](crate::MarkushStructure::enumerate_exemplary) and
//!   [`matches_molecule`](crate::MarkushStructure::matches_molecule) here.
//! - [`CoverageAnalyzer`] scores a molecule sample against several structures.
//! - [`Patent`] ties claims, structures, and lifecycle status together.
//!
//! Everything is synchronous and performs no I/O. The only external call is to
//! the caller-supplied [`MoleculeMatcher`].

mod config;
mod coverage;
mod enumerate;
mod error;
mod graph;
mod matcher;
mod patent;

pub use crate::model::combinatorics::{
    MAX_COMBINATIONS, count_combinations, position_multiplier,
};
pub use config::{CoverageConfig, EnumerationConfig, ScopeConfig, default_config, load_config};
pub use coverage::{CoverageAnalyzer, CoverageReport, MoleculeCoverage};
pub use enumerate::DEFAULT_ENUMERATION_LIMIT;
pub use error::Error;
pub use graph::ClaimSet;
pub use matcher::{MatchResult, MatcherError, MoleculeMatcher};
pub use patent::Patent;
