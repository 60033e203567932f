//! Core data structures for patent claims and Markush genus structures.
//!
//! - [`types`] – Claim type/category, substituent classes, and patent status.
//! - [`claim`] – Claims and their technical elements, with validating constructors.
//! - [`markush`] – Substituents, variable positions, and Markush structures.
//! - [`combinatorics`] – Combination counts of a structure's positions.
//! - [`status`] – The patent lifecycle transition table.
//! - [`error`] – The [`ValidationError`](error::ValidationError) raised by every
//!   constructor and mutator.
//!
//! Set-level rules (claim numbering, reference resolution) live with the
//! algorithms in [`crate::analysis`].

pub mod claim;
pub mod combinatorics;
pub mod error;
pub mod markush;
pub mod status;
pub mod types;
