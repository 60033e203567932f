//! The patent aggregate: a claim set, the Markush structures attached to its
//! claims, and the patent's lifecycle status.

use super::graph::ClaimSet;
use crate::model::claim::ClaimElement;
use crate::model::error::ValidationError;
use crate::model::markush::MarkushStructure;
use crate::model::types::PatentStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Patent {
    number: String,
    status: PatentStatus,
    claims: ClaimSet,
    structures: Vec<MarkushStructure>,
}

impl Patent {
    pub fn new(number: impl Into<String>, claims: ClaimSet) -> Result<Self, ValidationError> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err(ValidationError::empty("patent number"));
        }
        Ok(Self {
            number,
            status: PatentStatus::default(),
            claims,
            structures: Vec::new(),
        })
    }

    pub fn with_status(mut self, status: PatentStatus) -> Self {
        self.status = status;
        self
    }

    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    #[inline]
    pub fn status(&self) -> PatentStatus {
        self.status
    }

    #[inline]
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    #[inline]
    pub fn structures(&self) -> &[MarkushStructure] {
        &self.structures
    }

    pub fn structure(&self, id: &str) -> Option<&MarkushStructure> {
        self.structures.iter().find(|s| s.id() == id)
    }

    /// Moves the patent to `next` if the lifecycle table allows it.
    pub fn transition(&mut self, next: PatentStatus) -> Result<(), ValidationError> {
        self.status = self.status.transition(next)?;
        Ok(())
    }

    /// Associates `structure` with the claim named by its claim number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateStructure`] if a structure with the same
    /// id is already attached, or [`ValidationError::StructureClaimNotFound`] if the
    /// claim does not exist. Nothing is recorded on failure.
    pub fn attach_structure(&mut self, structure: MarkushStructure) -> Result<(), ValidationError> {
        if self.structure(structure.id()).is_some() {
            return Err(ValidationError::DuplicateStructure(structure.id().to_string()));
        }
        let claim = self.claims.get_mut(structure.claim_number()).ok_or_else(|| {
            ValidationError::StructureClaimNotFound {
                structure: structure.id().to_string(),
                claim: structure.claim_number(),
            }
        })?;

        claim.add_markush_reference(structure.id())?;
        self.structures.push(structure);
        Ok(())
    }

    /// Checks that every structure id listed on a claim names an attached
    /// structure owned by that same claim.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DanglingStructureReference`] for an id with no
    /// attached structure, or [`ValidationError::MisplacedStructureReference`] when
    /// the structure is attached to a different claim.
    pub fn validate_structure_references(&self) -> Result<(), ValidationError> {
        for claim in self.claims.claims() {
            for id in claim.markush_refs() {
                let structure = self.structure(id).ok_or_else(|| {
                    ValidationError::DanglingStructureReference {
                        claim: claim.number(),
                        structure: id.clone(),
                    }
                })?;
                if structure.claim_number() != claim.number() {
                    return Err(ValidationError::MisplacedStructureReference {
                        claim: claim.number(),
                        structure: id.clone(),
                        owner: structure.claim_number(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Structures that characterize claim `number`, directly or through the
    /// claims it depends on.
    pub fn structures_for_claim(&self, number: u32) -> Result<Vec<&MarkushStructure>, ValidationError> {
        let mut in_scope: Vec<u32> = self
            .claims
            .ancestors(number)?
            .iter()
            .map(|c| c.number())
            .collect();
        in_scope.push(number);

        Ok(self
            .structures
            .iter()
            .filter(|s| in_scope.contains(&s.claim_number()))
            .collect())
    }

    /// Claim elements characterized by structure `id`: the effective elements of
    /// the claim it is attached to.
    pub fn characterized_elements(&self, id: &str) -> Result<Vec<&ClaimElement>, ValidationError> {
        let structure = self
            .structure(id)
            .ok_or_else(|| ValidationError::UnknownStructure(id.to_string()))?;
        self.claims.effective_elements(structure.claim_number())
    }

    /// Saturating sum of the combination counts of all attached structures.
    pub fn total_combinations(&self) -> i64 {
        self.structures
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.total_combinations()))
    }
}
