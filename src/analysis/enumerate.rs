use crate::model::markush::{MarkushStructure, VariablePosition};

/// Number of examples returned when the caller passes a limit of 0.
pub const DEFAULT_ENUMERATION_LIMIT: usize = 10;

/// Token substituted for an optional position that has no declared alternatives.
const ABSENT_SUBSTITUENT: &str = "[H]";

impl MarkushStructure {
    /// Returns up to `max_count` example compounds drawn from the genus.
    ///
    /// Positions are expanded depth-first in declaration order and alternatives in
    /// list order; each choice replaces every occurrence of the position's
    /// placeholder (`[R1]` for `R1`) with the substituent's fragment, or its name
    /// when no fragment is given. The search stops as soon as `max_count` strings
    /// have been produced, so the full library is never materialized.
    ///
    /// A `max_count` of 0 means [`DEFAULT_ENUMERATION_LIMIT`].
    ///
    /// The output is plain text substitution and is not chemically validated.
    pub fn enumerate_exemplary(&self, max_count: usize) -> Vec<String> {
        let limit = if max_count == 0 {
            DEFAULT_ENUMERATION_LIMIT
        } else {
            max_count
        };

        let mut results = Vec::with_capacity(limit.min(64));
        expand(self.core_scaffold(), self.positions(), limit, &mut results);

        if results.len() == limit {
            tracing::debug!(structure = %self.id(), limit, "enumeration budget exhausted");
        }
        results
    }
}

fn expand(partial: &str, remaining: &[VariablePosition], limit: usize, out: &mut Vec<String>) {
    if out.len() >= limit {
        return;
    }

    let Some((position, rest)) = remaining.split_first() else {
        if !partial.is_empty() {
            out.push(partial.to_string());
        }
        return;
    };

    let placeholder = position.placeholder();

    if position.substituents.is_empty() {
        let next = partial.replace(&placeholder, ABSENT_SUBSTITUENT);
        expand(&next, rest, limit, out);
        return;
    }

    for substituent in &position.substituents {
        if out.len() >= limit {
            return;
        }
        let next = partial.replace(&placeholder, substituent.token());
        expand(&next, rest, limit, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::markush::Substituent;
    use crate::model::types::SubstituentClass;

    fn fragment(id: &str, smiles: &str) -> Substituent {
        Substituent::new(id, SubstituentClass::Custom, id)
            .unwrap()
            .with_fragment(smiles)
    }

    fn make_pyridine() -> MarkushStructure {
        MarkushStructure::new(
            "MK-1",
            "pyridines",
            "c1cc([R1])ncc1[R2]",
            1,
            vec![
                VariablePosition::new("R1", vec![fragment("me", "C"), fragment("et", "CC")]),
                VariablePosition::new(
                    "R2",
                    vec![fragment("f", "F"), fragment("cl", "Cl"), fragment("br", "Br")],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn enumerates_depth_first_in_declaration_order() {
        let examples = make_pyridine().enumerate_exemplary(100);
        assert_eq!(
            examples,
            vec![
                "c1cc(C)ncc1F",
                "c1cc(C)ncc1Cl",
                "c1cc(C)ncc1Br",
                "c1cc(CC)ncc1F",
                "c1cc(CC)ncc1Cl",
                "c1cc(CC)ncc1Br",
            ]
        );
    }

    #[test]
    fn stops_at_max_count() {
        let examples = make_pyridine().enumerate_exemplary(4);
        assert_eq!(examples.len(), 4);
        assert_eq!(examples[3], "c1cc(CC)ncc1F");
    }

    #[test]
    fn zero_limit_uses_default() {
        let positions: Vec<_> = (1..=3)
            .map(|i| {
                VariablePosition::new(
                    format!("R{i}"),
                    (0..5).map(|j| fragment(&format!("s{j}"), "C")).collect(),
                )
            })
            .collect();
        let s = MarkushStructure::new("MK", "big", "[R1][R2][R3]", 1, positions).unwrap();
        assert_eq!(s.total_combinations(), 125);
        assert_eq!(s.enumerate_exemplary(0).len(), DEFAULT_ENUMERATION_LIMIT);
    }

    #[test]
    fn large_library_is_not_materialized() {
        let positions: Vec<_> = (0..30)
            .map(|i| {
                VariablePosition::new(
                    format!("R{i}"),
                    (0..20).map(|j| fragment(&format!("s{j}"), "N")).collect(),
                )
            })
            .collect();
        let s = MarkushStructure::new("MK", "huge", "C[R0]", 1, positions).unwrap();
        assert!(s.is_saturated());

        let examples = s.enumerate_exemplary(25);
        assert_eq!(examples.len(), 25);
        assert!(examples.iter().all(|e| !e.is_empty()));
    }

    #[test]
    fn replaces_every_occurrence_and_uses_name_without_fragment() {
        let named = Substituent::new("ph", SubstituentClass::Aryl, "phenyl").unwrap();
        let s = MarkushStructure::new(
            "MK",
            "sym",
            "[R1]-O-[R1]",
            1,
            vec![VariablePosition::new("R1", vec![named])],
        )
        .unwrap();
        assert_eq!(s.enumerate_exemplary(5), vec!["phenyl-O-phenyl"]);
    }

    #[test]
    fn optional_position_without_alternatives_becomes_hydrogen() {
        let s = MarkushStructure::new(
            "MK",
            "opt",
            "c1ccccc1[R1]",
            1,
            vec![VariablePosition::new("R1", Vec::new()).optional()],
        )
        .unwrap();
        assert_eq!(s.enumerate_exemplary(3), vec!["c1ccccc1[H]"]);
    }
}
