//! A pure Rust library for the structural analysis of chemical patents.
//! It models a patent's claims as a validated dependency graph, describes claimed
//! compound families as Markush structures, and measures how much of a molecule
//! sample those structures cover.
//!
//! # Features
//!
//! - **Claim graph**: Validated claim sets with dependency walks, inherited
//!   elements, and lifecycle status tracking
//! - **Markush structures**: Variable positions with optional, repeated, and
//!   linked substituents; saturating combination counts
//! - **Enumeration**: Bounded listing of representative compounds by placeholder
//!   substitution on the core scaffold
//! - **Matching and coverage**: Candidate molecules are checked through a
//!   caller-supplied [`MoleculeMatcher`], so any cheminformatics engine can be plugged in
//! - **Flexible I/O**: Lossless JSON patent documents, re-validated on load
//!
//! # Quick Start
//!
//! ```
//! use patent_scope::{Claim, ClaimCategory, ClaimSet, Patent, ValidationError};
//! use patent_scope::{MarkushStructure, Substituent, SubstituentClass, VariablePosition};
//!
//! let claims = ClaimSet::new(vec![
//!     Claim::independent(1, "A compound of formula (I) or a salt thereof.", ClaimCategory::Product)?,
//!     Claim::dependent(2, "The compound of claim 1 wherein R1 is methyl.", ClaimCategory::Product, vec![1])?,
//!     Claim::dependent(3, "The compound of claim 2 wherein R2 is fluoro.", ClaimCategory::Product, vec![2])?,
//! ])?;
//!
//! // Claim 1 and everything that refers back to it
//! let tree: Vec<u32> = claims.claim_tree(1)?.iter().map(|c| c.number()).collect();
//! assert_eq!(tree, vec![1, 2, 3]);
//!
//! let r1 = VariablePosition::new("R1", vec![
//!     Substituent::new("me", SubstituentClass::Alkyl, "methyl")?.with_fragment("C"),
//!     Substituent::new("et", SubstituentClass::Alkyl, "ethyl")?.with_fragment("CC"),
//!     Substituent::new("pr", SubstituentClass::Alkyl, "propyl")?.with_fragment("CCC"),
//! ]);
//! let r2 = VariablePosition::new("R2", vec![
//!     Substituent::new("f", SubstituentClass::Halogen, "fluoro")?.with_fragment("F"),
//!     Substituent::new("cl", SubstituentClass::Halogen, "chloro")?.with_fragment("Cl"),
//!     Substituent::new("br", SubstituentClass::Halogen, "bromo")?.with_fragment("Br"),
//!     Substituent::new("i", SubstituentClass::Halogen, "iodo")?.with_fragment("I"),
//! ]);
//! let structure = MarkushStructure::new("MK-1", "formula (I)", "c1cc([R1])ccc1[R2]", 1, vec![r1, r2])?;
//! assert_eq!(structure.total_combinations(), 12);
//!
//! let examples = structure.enumerate_exemplary(5);
//! assert_eq!(examples.len(), 5);
//! assert_eq!(examples[0], "c1cc(C)ccc1F");
//!
//! let mut patent = Patent::new("WO2024123456", claims)?;
//! patent.attach_structure(structure)?;
//! assert_eq!(patent.structures_for_claim(3)?.len(), 1);
//! # Ok::<(), ValidationError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: Reading and writing patent documents as JSON
//! - [`ClaimSet`], [`Patent`]: Set-level claim validation and the patent aggregate
//! - [`CoverageAnalyzer`]: Sample coverage across several structures
//! - [`ScopeConfig`]: Enumeration and coverage settings, loadable from TOML
//!
//! # Data Types
//!
//! ## Claims
//!
//! - [`Claim`]: A numbered claim with its dependencies and elements
//! - [`ClaimElement`]: One technical feature of a claim
//! - [`ClaimType`], [`ClaimCategory`]: Independent/dependent and product/method/use
//! - [`PatentStatus`]: Lifecycle status with a fixed transition table
//!
//! ## Markush Structures
//!
//! - [`MarkushStructure`]: Core scaffold plus variable positions
//! - [`VariablePosition`]: One R-group with its alternatives
//! - [`Substituent`]: One permitted alternative at a position
//! - [`SubstituentClass`]: Chemical class of a substituent
//! - [`RepeatRange`]: Repeat count bounds of a position
//!
//! ## Analysis Results
//!
//! - [`MatchResult`]: Verdict, confidence, and assignments for one candidate
//! - [`CoverageReport`], [`MoleculeCoverage`]: Sample-level and per-molecule coverage

mod analysis;
mod model;

pub mod io;

pub use model::claim::{Claim, ClaimElement, MAX_CLAIM_TEXT_LEN, MIN_CLAIM_TEXT_LEN};
pub use model::error::ValidationError;
pub use model::markush::{MarkushStructure, RepeatRange, Substituent, VariablePosition};
pub use model::types::{
    ClaimCategory, ClaimType, ParseClaimCategoryError, ParseClaimTypeError,
    ParsePatentStatusError, ParseSubstituentClassError, PatentStatus, SubstituentClass,
};

pub use analysis::{
    ClaimSet, CoverageAnalyzer, CoverageConfig, CoverageReport, DEFAULT_ENUMERATION_LIMIT,
    EnumerationConfig, MAX_COMBINATIONS, MatchResult, MatcherError, MoleculeCoverage,
    MoleculeMatcher, Patent, ScopeConfig, count_combinations, default_config, load_config,
    position_multiplier,
};

pub use analysis::Error as AnalysisError;
