//! Claim dependency graph.
//!
//! A [`ClaimSet`] is the validated collection of claims of one patent. Edges run
//! from a dependent claim to each claim it refers back to; since every reference
//! points at a strictly lower number, the graph is acyclic by construction.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::model::claim::{Claim, ClaimElement};
use crate::model::error::ValidationError;

/// The validated claims of one patent, ordered by claim number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSet {
    claims: Vec<Claim>,
}

impl ClaimSet {
    /// Validates `claims` individually and as a set.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in this order: a per-claim rule, a
    /// duplicate number, no independent claim, an unresolved or non-decreasing
    /// reference, a gap in the 1..=max numbering.
    pub fn new(mut claims: Vec<Claim>) -> Result<Self, ValidationError> {
        for claim in &claims {
            claim.validate()?;
        }

        let mut numbers = HashSet::with_capacity(claims.len());
        for claim in &claims {
            if !numbers.insert(claim.number()) {
                return Err(ValidationError::DuplicateClaimNumber(claim.number()));
            }
        }

        if !claims.iter().any(Claim::is_independent) {
            return Err(ValidationError::NoIndependentClaim);
        }

        for claim in &claims {
            for &target in claim.depends_on() {
                if !numbers.contains(&target) {
                    return Err(ValidationError::UnresolvedReference {
                        claim: claim.number(),
                        target,
                    });
                }
                if target >= claim.number() {
                    return Err(ValidationError::ForwardReference {
                        claim: claim.number(),
                        target,
                    });
                }
            }
        }

        claims.sort_by_key(Claim::number);
        for (expected, claim) in (1u32..).zip(&claims) {
            if claim.number() != expected {
                return Err(ValidationError::NumberingGap {
                    expected,
                    found: claim.number(),
                });
            }
        }

        tracing::debug!(claims = claims.len(), "claim set validated");
        Ok(Self { claims })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    #[inline]
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn get(&self, number: u32) -> Option<&Claim> {
        // Numbering is contiguous from 1, so the index is the number minus one.
        number
            .checked_sub(1)
            .and_then(|idx| self.claims.get(idx as usize))
    }

    pub(crate) fn get_mut(&mut self, number: u32) -> Option<&mut Claim> {
        number
            .checked_sub(1)
            .and_then(|idx| self.claims.get_mut(idx as usize))
    }

    pub fn contains(&self, number: u32) -> bool {
        self.get(number).is_some()
    }

    pub fn independent_claims(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter().filter(|c| c.is_independent())
    }

    pub fn dependent_claims(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter().filter(|c| !c.is_independent())
    }

    /// Claims whose dependency list directly contains `number`.
    pub fn dependents_of(&self, number: u32) -> Vec<&Claim> {
        self.claims
            .iter()
            .filter(|c| c.depends_on().contains(&number))
            .collect()
    }

    /// `root` followed by all of its transitive dependents in BFS level order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownClaim`] if `root` is not in the set.
    pub fn claim_tree(&self, root: u32) -> Result<Vec<&Claim>, ValidationError> {
        let root_claim = self.get(root).ok_or(ValidationError::UnknownClaim(root))?;

        let mut visited = HashSet::from([root]);
        let mut queue = VecDeque::from([root_claim]);
        let mut tree = Vec::new();

        while let Some(claim) = queue.pop_front() {
            tree.push(claim);
            for dependent in self.dependents_of(claim.number()) {
                if visited.insert(dependent.number()) {
                    queue.push_back(dependent);
                }
            }
        }

        Ok(tree)
    }

    /// Every claim whose limitations `number` incorporates, transitively, in
    /// ascending claim order. The claim itself is not included.
    pub fn ancestors(&self, number: u32) -> Result<Vec<&Claim>, ValidationError> {
        let claim = self.get(number).ok_or(ValidationError::UnknownClaim(number))?;

        let mut seen = BTreeSet::new();
        let mut stack: Vec<u32> = claim.depends_on().to_vec();
        while let Some(next) = stack.pop() {
            if seen.insert(next) {
                if let Some(parent) = self.get(next) {
                    stack.extend_from_slice(parent.depends_on());
                }
            }
        }

        Ok(seen.into_iter().filter_map(|n| self.get(n)).collect())
    }

    /// Elements that limit claim `number`: those of its ancestors first, then its own.
    pub fn effective_elements(&self, number: u32) -> Result<Vec<&ClaimElement>, ValidationError> {
        let claim = self.get(number).ok_or(ValidationError::UnknownClaim(number))?;
        let mut elements: Vec<&ClaimElement> = self
            .ancestors(number)?
            .into_iter()
            .flat_map(|c| c.elements())
            .collect();
        elements.extend(claim.elements());
        Ok(elements)
    }
}
