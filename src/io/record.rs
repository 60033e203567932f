//! Transport records with a 1:1 field mapping onto the model types.
//!
//! Converting a record into the model re-runs every constructor and mutator, so
//! a document that deserializes cleanly is still rejected if it breaks a claim
//! or structure invariant.

use serde::{Deserialize, Serialize};

use super::error::Error;
use crate::analysis::{ClaimSet, Patent};
use crate::model::claim::{Claim, ClaimElement};
use crate::model::markush::{MarkushStructure, RepeatRange, Substituent, VariablePosition};
use crate::model::types::{ClaimCategory, ClaimType, PatentStatus, SubstituentClass};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatentRecord {
    pub number: String,
    #[serde(default)]
    pub status: PatentStatus,
    pub claims: Vec<ClaimRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markush_structures: Vec<MarkushRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub number: u32,
    pub text: String,
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    #[serde(default)]
    pub category: ClaimCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<ClaimElementRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markush_refs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimElementRecord {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub essential: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkushRecord {
    pub id: String,
    pub name: String,
    pub core_scaffold: String,
    pub claim_number: u32,
    pub positions: Vec<PositionRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_examples: Vec<String>,
    /// Informational on input; always recomputed from the positions.
    #[serde(default)]
    pub total_combinations: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub symbol: String,
    #[serde(default)]
    pub substituents: Vec<SubstituentRecord>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub repeat_min: u32,
    #[serde(default)]
    pub repeat_max: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_positions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstituentRecord {
    pub id: String,
    pub class: SubstituentClass,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
    #[serde(default)]
    pub min_carbons: u32,
    #[serde(default)]
    pub max_carbons: u32,
    #[serde(default)]
    pub preferred: bool,
}

impl From<&ClaimElement> for ClaimElementRecord {
    fn from(e: &ClaimElement) -> Self {
        Self {
            id: e.id.clone(),
            text: e.text.clone(),
            essential: e.essential,
        }
    }
}

impl From<&Claim> for ClaimRecord {
    fn from(c: &Claim) -> Self {
        Self {
            number: c.number(),
            text: c.text().to_string(),
            claim_type: c.claim_type(),
            category: c.category(),
            depends_on: c.depends_on().to_vec(),
            elements: c.elements().iter().map(ClaimElementRecord::from).collect(),
            markush_refs: c.markush_refs().to_vec(),
        }
    }
}

impl TryFrom<ClaimRecord> for Claim {
    type Error = Error;

    fn try_from(r: ClaimRecord) -> Result<Self, Self::Error> {
        let record = format!("claim {}", r.number);
        build_claim(r).map_err(|e| Error::invalid(record, e))
    }
}

fn build_claim(r: ClaimRecord) -> Result<Claim, crate::model::error::ValidationError> {
    let mut claim = Claim::new(r.number, r.text, r.claim_type, r.category)?;
    if !r.depends_on.is_empty() || r.claim_type == ClaimType::Dependent {
        claim.set_dependencies(r.depends_on)?;
    }
    for e in r.elements {
        claim.add_element(ClaimElement::new(e.id, e.text, e.essential)?)?;
    }
    for id in r.markush_refs {
        claim.add_markush_reference(id)?;
    }
    claim.validate()?;
    Ok(claim)
}

impl From<&Substituent> for SubstituentRecord {
    fn from(s: &Substituent) -> Self {
        Self {
            id: s.id.clone(),
            class: s.class,
            name: s.name.clone(),
            fragment: s.fragment.clone(),
            min_carbons: s.min_carbons,
            max_carbons: s.max_carbons,
            preferred: s.preferred,
        }
    }
}

impl From<SubstituentRecord> for Substituent {
    fn from(r: SubstituentRecord) -> Self {
        Self {
            id: r.id,
            class: r.class,
            name: r.name,
            fragment: r.fragment,
            min_carbons: r.min_carbons,
            max_carbons: r.max_carbons,
            preferred: r.preferred,
        }
    }
}

impl From<&VariablePosition> for PositionRecord {
    fn from(p: &VariablePosition) -> Self {
        Self {
            symbol: p.symbol.clone(),
            substituents: p.substituents.iter().map(SubstituentRecord::from).collect(),
            optional: p.optional,
            repeat_min: p.repeat.min,
            repeat_max: p.repeat.max,
            linked_positions: p.linked_positions.clone(),
        }
    }
}

impl From<PositionRecord> for VariablePosition {
    fn from(r: PositionRecord) -> Self {
        Self {
            symbol: r.symbol,
            substituents: r.substituents.into_iter().map(Substituent::from).collect(),
            optional: r.optional,
            repeat: RepeatRange::new(r.repeat_min, r.repeat_max),
            linked_positions: r.linked_positions,
        }
    }
}

impl From<&MarkushStructure> for MarkushRecord {
    fn from(s: &MarkushStructure) -> Self {
        Self {
            id: s.id().to_string(),
            name: s.name().to_string(),
            core_scaffold: s.core_scaffold().to_string(),
            claim_number: s.claim_number(),
            positions: s.positions().iter().map(PositionRecord::from).collect(),
            constraints: s.constraints().to_vec(),
            preferred_examples: s.preferred_examples().to_vec(),
            total_combinations: s.total_combinations(),
        }
    }
}

impl TryFrom<MarkushRecord> for MarkushStructure {
    type Error = Error;

    fn try_from(r: MarkushRecord) -> Result<Self, Self::Error> {
        let record = format!("structure '{}'", r.id);
        build_structure(r).map_err(|e| Error::invalid(record, e))
    }
}

fn build_structure(
    r: MarkushRecord,
) -> Result<MarkushStructure, crate::model::error::ValidationError> {
    let positions = r.positions.into_iter().map(VariablePosition::from).collect();
    let mut structure = MarkushStructure::new(r.id, r.name, r.core_scaffold, r.claim_number, positions)?;
    for constraint in r.constraints {
        structure.add_constraint(constraint)?;
    }
    for example in r.preferred_examples {
        structure.add_preferred_example(example)?;
    }
    Ok(structure)
}

impl From<&Patent> for PatentRecord {
    fn from(p: &Patent) -> Self {
        Self {
            number: p.number().to_string(),
            status: p.status(),
            claims: p.claims().claims().iter().map(ClaimRecord::from).collect(),
            markush_structures: p.structures().iter().map(MarkushRecord::from).collect(),
        }
    }
}

impl TryFrom<PatentRecord> for Patent {
    type Error = Error;

    fn try_from(r: PatentRecord) -> Result<Self, Self::Error> {
        let record = format!("patent {}", r.number);

        let claims = r
            .claims
            .into_iter()
            .map(Claim::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let claims = ClaimSet::new(claims).map_err(|e| Error::invalid(record.clone(), e))?;

        let mut patent = Patent::new(r.number, claims)
            .map_err(|e| Error::invalid(record.clone(), e))?
            .with_status(r.status);

        for structure in r.markush_structures {
            let structure = MarkushStructure::try_from(structure)?;
            patent
                .attach_structure(structure)
                .map_err(|e| Error::invalid(record.clone(), e))?;
        }
        patent
            .validate_structure_references()
            .map_err(|e| Error::invalid(record, e))?;

        Ok(patent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::error::ValidationError;

    fn make_record() -> PatentRecord {
        PatentRecord {
            number: "WO2024000001".into(),
            status: PatentStatus::Published,
            claims: vec![
                ClaimRecord {
                    number: 1,
                    text: "A compound of formula (I) or a salt thereof.".into(),
                    claim_type: ClaimType::Independent,
                    category: ClaimCategory::Product,
                    depends_on: Vec::new(),
                    elements: vec![ClaimElementRecord {
                        id: "core".into(),
                        text: "a pyridine core".into(),
                        essential: true,
                    }],
                    markush_refs: Vec::new(),
                },
                ClaimRecord {
                    number: 2,
                    text: "The compound of claim 1 wherein R1 is methyl.".into(),
                    claim_type: ClaimType::Dependent,
                    category: ClaimCategory::Product,
                    depends_on: vec![1],
                    elements: Vec::new(),
                    markush_refs: Vec::new(),
                },
            ],
            markush_structures: vec![MarkushRecord {
                id: "MK-1".into(),
                name: "pyridines".into(),
                core_scaffold: "c1cc([R1])ncc1".into(),
                claim_number: 1,
                positions: vec![PositionRecord {
                    symbol: "R1".into(),
                    substituents: vec![SubstituentRecord {
                        id: "me".into(),
                        class: SubstituentClass::Alkyl,
                        name: "methyl".into(),
                        fragment: Some("C".into()),
                        min_carbons: 1,
                        max_carbons: 1,
                        preferred: true,
                    }],
                    optional: true,
                    repeat_min: 0,
                    repeat_max: 0,
                    linked_positions: Vec::new(),
                }],
                constraints: vec!["R1 is not hydrogen when X is N".into()],
                preferred_examples: vec!["c1cc(C)ncc1".into()],
                total_combinations: 0,
            }],
        }
    }

    #[test]
    fn record_round_trip_is_lossless() {
        let patent = Patent::try_from(make_record()).unwrap();
        assert_eq!(patent.status(), PatentStatus::Published);
        assert_eq!(patent.structures()[0].total_combinations(), 2);

        let back = PatentRecord::from(&patent);
        assert_eq!(back.claims[0].markush_refs, vec!["MK-1".to_string()]);
        assert_eq!(back.markush_structures[0].total_combinations, 2);

        let again = Patent::try_from(back).unwrap();
        assert_eq!(again, patent);
    }

    #[test]
    fn invalid_claim_names_the_record() {
        let mut record = make_record();
        record.claims[1].depends_on = vec![2];
        let err = Patent::try_from(record).unwrap_err();
        match err {
            Error::Invalid { record, source } => {
                assert_eq!(record, "claim 2");
                assert_eq!(source, ValidationError::SelfReference { claim: 2 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn set_level_violation_names_the_patent() {
        let mut record = make_record();
        record.claims[1].number = 3;
        record.claims[1].depends_on = vec![1];
        let err = Patent::try_from(record).unwrap_err();
        assert!(matches!(
            err,
            Error::Invalid {
                source: ValidationError::NumberingGap { expected: 2, found: 3 },
                ..
            }
        ));
    }

    #[test]
    fn structure_on_missing_claim_is_rejected() {
        let mut record = make_record();
        record.markush_structures[0].claim_number = 5;
        let err = Patent::try_from(record).unwrap_err();
        assert!(matches!(
            err,
            Error::Invalid {
                source: ValidationError::StructureClaimNotFound { claim: 5, .. },
                ..
            }
        ));
    }

    #[test]
    fn dangling_structure_reference_is_rejected() {
        let mut record = make_record();
        record.markush_structures.clear();
        record.claims[1].markush_refs = vec!["MK-404".into()];
        let err = Patent::try_from(record).unwrap_err();
        match err {
            Error::Invalid { record, source } => {
                assert_eq!(record, "patent WO2024000001");
                assert_eq!(
                    source,
                    ValidationError::DanglingStructureReference {
                        claim: 2,
                        structure: "MK-404".into()
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn structure_reference_on_the_wrong_claim_is_rejected() {
        let mut record = make_record();
        record.claims[1].markush_refs = vec!["MK-1".into()];
        let err = Patent::try_from(record).unwrap_err();
        assert!(matches!(
            err,
            Error::Invalid {
                source: ValidationError::MisplacedStructureReference { claim: 2, owner: 1, .. },
                ..
            }
        ));
    }

    #[test]
    fn repeated_preferred_examples_survive_a_round_trip() {
        let mut record = make_record();
        record.markush_structures[0].preferred_examples =
            vec!["c1cc(C)ncc1".into(), "c1ccncc1".into(), "c1cc(C)ncc1".into()];
        let patent = Patent::try_from(record.clone()).unwrap();
        assert_eq!(patent.structures()[0].preferred_examples().len(), 3);

        let back = PatentRecord::from(&patent);
        assert_eq!(
            back.markush_structures[0].preferred_examples,
            record.markush_structures[0].preferred_examples
        );
    }

    #[test]
    fn inverted_carbon_range_is_rejected() {
        let mut record = make_record();
        let sub = &mut record.markush_structures[0].positions[0].substituents[0];
        sub.min_carbons = 6;
        sub.max_carbons = 1;
        let err = MarkushStructure::try_from(record.markush_structures.remove(0)).unwrap_err();
        assert!(matches!(
            err,
            Error::Invalid {
                source: ValidationError::CarbonRange { .. },
                ..
            }
        ));
    }
}
