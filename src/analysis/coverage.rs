//! Union coverage of a molecule sample by a patent's Markush structures.

use std::collections::BTreeMap;

use super::config::CoverageConfig;
use super::error::Error;
use super::matcher::MoleculeMatcher;
use crate::model::markush::MarkushStructure;

/// Coverage verdict for one sampled molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeCoverage {
    pub molecule: String,
    /// First structure (in input order) that matched, if any.
    pub structure_id: Option<String>,
    pub confidence: f64,
}

impl MoleculeCoverage {
    #[inline]
    pub fn is_covered(&self) -> bool {
        self.structure_id.is_some()
    }
}

/// Aggregate coverage statistics for a sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoverageReport {
    pub sampled: usize,
    pub matched: usize,
    /// `matched / sampled`, or 0 for an empty sample.
    pub coverage_rate: f64,
    /// Saturating sum of every structure's combination count.
    pub total_combinations: i64,
    pub molecules: Vec<MoleculeCoverage>,
    /// Molecules attributed to each structure id. Structures with no hits are listed with 0.
    pub hits_per_structure: BTreeMap<String, usize>,
}

impl CoverageReport {
    pub fn uncovered(&self) -> impl Iterator<Item = &str> {
        self.molecules
            .iter()
            .filter(|m| !m.is_covered())
            .map(|m| m.molecule.as_str())
    }
}

/// Scores a molecule sample against a set of Markush structures.
///
/// A molecule is covered when any structure matches it; the first matching
/// structure receives the attribution. Structure order therefore changes only
/// the attribution, never the covered/uncovered verdict.
pub struct CoverageAnalyzer<'a> {
    matcher: Option<&'a dyn MoleculeMatcher>,
    config: CoverageConfig,
}

impl<'a> CoverageAnalyzer<'a> {
    pub fn new(matcher: Option<&'a dyn MoleculeMatcher>) -> Self {
        Self {
            matcher,
            config: CoverageConfig::default(),
        }
    }

    /// Replaces the default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSetting`] if `config` does not pass
    /// [`CoverageConfig::validate`].
    pub fn with_config(mut self, config: CoverageConfig) -> Result<Self, Error> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Matches every molecule in `sample` against `structures`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Error::Matcher`] raised while matching.
    pub fn analyze<S: AsRef<str>>(
        &self,
        structures: &[MarkushStructure],
        sample: &[S],
    ) -> Result<CoverageReport, Error> {
        let mut report = CoverageReport {
            sampled: sample.len(),
            total_combinations: structures
                .iter()
                .fold(0i64, |acc, s| acc.saturating_add(s.total_combinations())),
            hits_per_structure: structures
                .iter()
                .map(|s| (s.id().to_string(), 0))
                .collect(),
            ..CoverageReport::default()
        };

        for molecule in sample {
            let molecule = molecule.as_ref();
            let coverage = self.cover(structures, molecule)?;
            if let Some(id) = &coverage.structure_id {
                report.matched += 1;
                *report.hits_per_structure.entry(id.clone()).or_insert(0) += 1;
            }
            report.molecules.push(coverage);
        }

        report.coverage_rate = if report.sampled == 0 {
            0.0
        } else {
            report.matched as f64 / report.sampled as f64
        };

        tracing::debug!(
            structures = structures.len(),
            sampled = report.sampled,
            matched = report.matched,
            rate = report.coverage_rate,
            "coverage analysis complete"
        );

        Ok(report)
    }

    fn cover(
        &self,
        structures: &[MarkushStructure],
        molecule: &str,
    ) -> Result<MoleculeCoverage, Error> {
        for structure in structures {
            let result = structure.matches_molecule(molecule, self.matcher)?;
            if result.matched && result.confidence >= self.config.min_confidence {
                return Ok(MoleculeCoverage {
                    molecule: molecule.to_string(),
                    structure_id: Some(structure.id().to_string()),
                    confidence: result.confidence,
                });
            }
        }

        Ok(MoleculeCoverage {
            molecule: molecule.to_string(),
            structure_id: None,
            confidence: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::combinatorics::MAX_COMBINATIONS;
    use crate::analysis::matcher::tests::{TableMatcher, make_structure};
    use crate::model::markush::{Substituent, VariablePosition};
    use crate::model::types::SubstituentClass;

    fn make_second_structure() -> MarkushStructure {
        let mut s = MarkushStructure::new(
            "MK-2",
            "benzenes",
            "c1ccccc1[R1]",
            2,
            vec![VariablePosition::new(
                "R1",
                vec![
                    Substituent::new("oh", SubstituentClass::Hydroxyl, "hydroxy")
                        .unwrap()
                        .with_fragment("O"),
                ],
            )],
        )
        .unwrap();
        s.add_preferred_example("c1ccccc1O").unwrap();
        s.add_preferred_example("c1cc(C)ncc1F").unwrap();
        s
    }

    #[test]
    fn empty_sample_has_zero_rate() {
        let structures = vec![make_structure()];
        let sample: [&str; 0] = [];
        let report = CoverageAnalyzer::new(None)
            .analyze(&structures, &sample)
            .unwrap();
        assert_eq!(report.sampled, 0);
        assert_eq!(report.matched, 0);
        assert_eq!(report.coverage_rate, 0.0);
        assert_eq!(report.total_combinations, 6);
        assert_eq!(report.hits_per_structure.get("MK-1"), Some(&0));
    }

    #[test]
    fn literal_examples_cover_without_matcher() {
        let structures = vec![make_structure(), make_second_structure()];
        let sample = ["c1cc(C)ncc1F", "c1ccccc1O", "CCO", "c1ccccc1N"];
        let report = CoverageAnalyzer::new(None)
            .analyze(&structures, &sample)
            .unwrap();

        assert_eq!(report.sampled, 4);
        assert_eq!(report.matched, 2);
        assert_eq!(report.coverage_rate, 0.5);
        assert_eq!(report.total_combinations, 6 + 1);
        assert_eq!(report.hits_per_structure["MK-1"], 1);
        assert_eq!(report.hits_per_structure["MK-2"], 1);

        let uncovered: Vec<_> = report.uncovered().collect();
        assert_eq!(uncovered, vec!["CCO", "c1ccccc1N"]);
    }

    #[test]
    fn order_changes_attribution_not_verdict() {
        let sample = vec!["c1cc(C)ncc1F".to_string(), "CCO".to_string()];

        let forward = CoverageAnalyzer::new(None)
            .analyze(&[make_structure(), make_second_structure()], &sample[..])
            .unwrap();
        let reverse = CoverageAnalyzer::new(None)
            .analyze(&[make_second_structure(), make_structure()], &sample[..])
            .unwrap();

        assert_eq!(forward.matched, reverse.matched);
        assert_eq!(forward.molecules[0].structure_id.as_deref(), Some("MK-1"));
        assert_eq!(reverse.molecules[0].structure_id.as_deref(), Some("MK-2"));
        assert!(!forward.molecules[1].is_covered());
        assert!(!reverse.molecules[1].is_covered());
    }

    #[test]
    fn matcher_based_coverage_and_confidence_threshold() {
        let matcher = TableMatcher::default()
            .with("c1cc(CC)ncc1Cl", &[("R1", "CC"), ("R2", "Cl")])
            .with("c1cc(C)ncc1I", &[("R1", "C"), ("R2", "I")]);
        let structures = vec![make_structure()];
        let sample = ["c1cc(CC)ncc1Cl", "c1cc(C)ncc1I"];

        let report = CoverageAnalyzer::new(Some(&matcher))
            .analyze(&structures, &sample)
            .unwrap();
        assert_eq!(report.matched, 2);
        assert_eq!(report.molecules[1].confidence, 0.5);

        let strict = CoverageAnalyzer::new(Some(&matcher))
            .with_config(CoverageConfig {
                min_confidence: 0.9,
            })
            .unwrap()
            .analyze(&structures, &sample)
            .unwrap();
        assert_eq!(strict.matched, 1);
        assert_eq!(strict.coverage_rate, 0.5);
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        for min_confidence in [1.5, -0.5, f64::NAN] {
            let result = CoverageAnalyzer::new(None).with_config(CoverageConfig { min_confidence });
            assert!(matches!(result, Err(Error::InvalidSetting { .. })));
        }
    }

    #[test]
    fn matcher_failure_aborts_analysis() {
        let matcher = TableMatcher {
            fail_on: Some("is_substructure"),
            ..TableMatcher::default()
        };
        let structures = vec![make_structure()];
        let err = CoverageAnalyzer::new(Some(&matcher))
            .analyze(&structures, &["CCO"])
            .unwrap_err();
        assert!(matches!(err, Error::Matcher { .. }));
    }

    #[test]
    fn total_combinations_saturates() {
        let positions: Vec<_> = (0..20)
            .map(|i| {
                VariablePosition::new(
                    format!("R{i}"),
                    (0..10)
                        .map(|j| {
                            Substituent::new(format!("s{j}"), SubstituentClass::Custom, "x")
                                .unwrap()
                        })
                        .collect(),
                )
            })
            .collect();
        let big = MarkushStructure::new("BIG", "big", "[R0]", 1, positions).unwrap();
        let structures = vec![big, make_structure()];
        let report = CoverageAnalyzer::new(None)
            .analyze::<&str>(&structures, &[])
            .unwrap();
        assert_eq!(report.total_combinations, MAX_COMBINATIONS);
    }
}
