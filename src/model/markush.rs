//! Markush genus structures: a fixed scaffold with labelled variable positions.
//!
//! A [`MarkushStructure`] exclusively owns its [`VariablePosition`]s and their
//! [`Substituent`] alternatives. The claim it characterizes is recorded by number
//! only; the claim does not own the structure.

use std::collections::HashSet;

use super::error::ValidationError;
use super::types::SubstituentClass;
use super::combinatorics::count_combinations;

/// One chemical alternative allowed at a variable position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituent {
    pub id: String,
    pub class: SubstituentClass,
    pub name: String,
    /// Structural fragment (typically SMILES) substituted during enumeration.
    pub fragment: Option<String>,
    pub min_carbons: u32,
    pub max_carbons: u32,
    pub preferred: bool,
}

impl Substituent {
    pub fn new(
        id: impl Into<String>,
        class: SubstituentClass,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let substituent = Self {
            id: id.into(),
            class,
            name: name.into(),
            fragment: None,
            min_carbons: 0,
            max_carbons: 0,
            preferred: false,
        };
        substituent.validate()?;
        Ok(substituent)
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Sets the carbon-count range, e.g. `1..=6` for C1-C6 alkyl.
    pub fn with_carbon_range(mut self, min: u32, max: u32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::CarbonRange {
                id: self.id,
                min,
                max,
            });
        }
        self.min_carbons = min;
        self.max_carbons = max;
        Ok(self)
    }

    pub fn preferred(mut self) -> Self {
        self.preferred = true;
        self
    }

    /// Text placed into the scaffold when this alternative is chosen.
    pub fn token(&self) -> &str {
        self.fragment.as_deref().unwrap_or(&self.name)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::empty("substituent id"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty("substituent name"));
        }
        if self.fragment.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(ValidationError::empty("substituent fragment"));
        }
        if self.min_carbons > self.max_carbons {
            return Err(ValidationError::CarbonRange {
                id: self.id.clone(),
                min: self.min_carbons,
                max: self.max_carbons,
            });
        }
        Ok(())
    }
}

/// Inclusive repeat-count range of a variable position, such as `(CH2)n, n = 0-3`.
///
/// `[0, 0]` means the position is not repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RepeatRange {
    pub min: u32,
    pub max: u32,
}

impl RepeatRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn is_specified(&self) -> bool {
        self.min > 0 || self.max > 0
    }

    /// Number of distinct repeat counts, `max - min + 1`.
    #[inline]
    pub fn span(&self) -> u64 {
        u64::from(self.max.saturating_sub(self.min)) + 1
    }
}

/// A labelled attachment point on the scaffold (an R-group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariablePosition {
    pub symbol: String,
    pub substituents: Vec<Substituent>,
    pub optional: bool,
    pub repeat: RepeatRange,
    pub linked_positions: Vec<String>,
}

impl VariablePosition {
    pub fn new(symbol: impl Into<String>, substituents: Vec<Substituent>) -> Self {
        Self {
            symbol: symbol.into(),
            substituents,
            optional: false,
            repeat: RepeatRange::default(),
            linked_positions: Vec::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_repeat(mut self, min: u32, max: u32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::RepeatRange {
                symbol: self.symbol,
                min,
                max,
            });
        }
        self.repeat = RepeatRange::new(min, max);
        Ok(self)
    }

    pub fn linked_to(mut self, symbol: impl Into<String>) -> Self {
        self.linked_positions.push(symbol.into());
        self
    }

    /// Placeholder written in the core scaffold for this position, e.g. `[R1]`.
    pub fn placeholder(&self) -> String {
        format!("[{}]", self.symbol)
    }

    /// Checks the position on its own. Linked-position resolution needs the
    /// enclosing structure and is done by [`MarkushStructure`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::empty("position symbol"));
        }
        if self.substituents.is_empty() && !self.optional {
            return Err(ValidationError::NoSubstituents {
                symbol: self.symbol.clone(),
            });
        }
        if self.repeat.min > self.repeat.max {
            return Err(ValidationError::RepeatRange {
                symbol: self.symbol.clone(),
                min: self.repeat.min,
                max: self.repeat.max,
            });
        }
        for substituent in &self.substituents {
            substituent.validate()?;
        }
        Ok(())
    }
}

/// A combinatorial genus of compounds claimed by one patent claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkushStructure {
    id: String,
    name: String,
    core_scaffold: String,
    positions: Vec<VariablePosition>,
    constraints: Vec<String>,
    preferred_examples: Vec<String>,
    claim_number: u32,
    total_combinations: i64,
}

impl MarkushStructure {
    /// Builds and validates a structure.
    ///
    /// # Errors
    ///
    /// Fails when the id, name, or scaffold is empty, the claim number is 0, no
    /// positions are given, two positions share a symbol, a position is invalid on
    /// its own, or a linked-position symbol does not name a position declared
    /// before it.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        core_scaffold: impl Into<String>,
        claim_number: u32,
        positions: Vec<VariablePosition>,
    ) -> Result<Self, ValidationError> {
        let mut structure = Self {
            id: id.into(),
            name: name.into(),
            core_scaffold: core_scaffold.into(),
            positions,
            constraints: Vec::new(),
            preferred_examples: Vec::new(),
            claim_number,
            total_combinations: 0,
        };
        structure.validate()?;
        structure.total_combinations = count_combinations(&structure.positions);
        Ok(structure)
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn core_scaffold(&self) -> &str {
        &self.core_scaffold
    }

    #[inline]
    pub fn positions(&self) -> &[VariablePosition] {
        &self.positions
    }

    #[inline]
    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    #[inline]
    pub fn preferred_examples(&self) -> &[String] {
        &self.preferred_examples
    }

    #[inline]
    pub fn claim_number(&self) -> u32 {
        self.claim_number
    }

    /// Combination count cached at construction and after each added position.
    #[inline]
    pub fn total_combinations(&self) -> i64 {
        self.total_combinations
    }

    pub fn position(&self, symbol: &str) -> Option<&VariablePosition> {
        self.positions.iter().find(|p| p.symbol == symbol)
    }

    pub fn add_position(&mut self, position: VariablePosition) -> Result<(), ValidationError> {
        position.validate()?;
        if self.position(&position.symbol).is_some() {
            return Err(ValidationError::DuplicateSymbol {
                structure: self.id.clone(),
                symbol: position.symbol,
            });
        }
        for linked in &position.linked_positions {
            if linked == &position.symbol || self.position(linked).is_none() {
                return Err(ValidationError::UnknownLinkedPosition {
                    symbol: position.symbol.clone(),
                    linked: linked.clone(),
                });
            }
        }

        self.positions.push(position);
        self.total_combinations = count_combinations(&self.positions);
        Ok(())
    }

    pub fn add_constraint(&mut self, constraint: impl Into<String>) -> Result<(), ValidationError> {
        let constraint = constraint.into();
        if constraint.trim().is_empty() {
            return Err(ValidationError::empty("constraint"));
        }
        self.constraints.push(constraint);
        Ok(())
    }

    /// Adds a literal compound (e.g. a SMILES string) disclosed as an example.
    pub fn add_preferred_example(
        &mut self,
        example: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let example = example.into();
        if example.trim().is_empty() {
            return Err(ValidationError::empty("preferred example"));
        }
        self.preferred_examples.push(example);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::empty("structure id"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty("structure name"));
        }
        if self.core_scaffold.trim().is_empty() {
            return Err(ValidationError::empty("core scaffold"));
        }
        if self.claim_number == 0 {
            return Err(ValidationError::NonPositiveClaimNumber(self.claim_number));
        }
        if self.positions.is_empty() {
            return Err(ValidationError::NoPositions(self.id.clone()));
        }

        // Links may only name positions declared earlier, as with `add_position`.
        let mut seen = HashSet::with_capacity(self.positions.len());
        for position in &self.positions {
            position.validate()?;
            if seen.contains(position.symbol.as_str()) {
                return Err(ValidationError::DuplicateSymbol {
                    structure: self.id.clone(),
                    symbol: position.symbol.clone(),
                });
            }
            for linked in &position.linked_positions {
                if !seen.contains(linked.as_str()) {
                    return Err(ValidationError::UnknownLinkedPosition {
                        symbol: position.symbol.clone(),
                        linked: linked.clone(),
                    });
                }
            }
            seen.insert(position.symbol.as_str());
        }

        for constraint in &self.constraints {
            if constraint.trim().is_empty() {
                return Err(ValidationError::empty("constraint"));
            }
        }

        Ok(())
    }
}
