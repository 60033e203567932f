//! Size of the virtual compound library described by a Markush structure.
//!
//! The count is the product of one multiplier per position:
//!
//! - the number of substituent alternatives,
//! - plus one when the position is optional (substituent absent),
//! - times the repeat span `max - min + 1` when a repeat range is given.
//!
//! The repeat factor multiplies the whole alternative set by the number of
//! repeat counts. The result is an upper bound, not an exact library size.
//!
//! Multiplication saturates at [`MAX_COMBINATIONS`]; once reached, the count stays
//! there. A structure without positions counts 0, meaning "no combinatorial
//! structure", not "one compound".

use super::markush::{MarkushStructure, VariablePosition};

/// Ceiling returned when the library size overflows a signed 64-bit count.
pub const MAX_COMBINATIONS: i64 = i64::MAX;

/// Multiplier contributed by a single position, saturated at [`MAX_COMBINATIONS`].
pub fn position_multiplier(position: &VariablePosition) -> i64 {
    let mut base = position.substituents.len() as u64;
    if position.optional {
        base += 1;
    }
    if position.repeat.is_specified() {
        base = base.saturating_mul(position.repeat.span());
    }
    i64::try_from(base).unwrap_or(MAX_COMBINATIONS)
}

/// Saturating product of [`position_multiplier`] over `positions`.
pub fn count_combinations(positions: &[VariablePosition]) -> i64 {
    if positions.is_empty() {
        return 0;
    }

    let mut total: i64 = 1;
    for position in positions {
        let factor = position_multiplier(position);
        if total > 0 && factor > MAX_COMBINATIONS / total {
            tracing::warn!(
                position = %position.symbol,
                "combination count saturated at {}",
                MAX_COMBINATIONS
            );
            return MAX_COMBINATIONS;
        }
        total *= factor;
    }

    total
}

impl MarkushStructure {
    /// Recomputes the size of the compound library from the current positions.
    ///
    /// See [`count_combinations`] for the counting rules.
    pub fn calculate_combinations(&self) -> i64 {
        let total = count_combinations(self.positions());
        tracing::debug!(structure = %self.id(), total, "calculated combinations");
        total
    }

    /// Whether the library size hit the [`MAX_COMBINATIONS`] ceiling.
    pub fn is_saturated(&self) -> bool {
        self.total_combinations() == MAX_COMBINATIONS
    }
}
