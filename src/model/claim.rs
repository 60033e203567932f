use super::error::ValidationError;
use super::types::{ClaimCategory, ClaimType};

/// Minimum claim text length in characters, after trimming.
pub const MIN_CLAIM_TEXT_LEN: usize = 10;
/// Maximum claim text length in characters, after trimming.
pub const MAX_CLAIM_TEXT_LEN: usize = 50_000;

/// Atomic technical feature recited by a claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimElement {
    pub id: String,
    pub text: String,
    pub essential: bool,
}

impl ClaimElement {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        essential: bool,
    ) -> Result<Self, ValidationError> {
        let element = Self {
            id: id.into(),
            text: text.into(),
            essential,
        };
        element.validate()?;
        Ok(element)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::empty("claim element id"));
        }
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty("claim element text"));
        }
        Ok(())
    }
}

/// A single legal claim.
///
/// Claims are built through [`Claim::new`] (or the [`independent`](Claim::independent)
/// and [`dependent`](Claim::dependent) shorthands), which validate the number and
/// text. Dependencies are assigned once through [`set_dependencies`](Claim::set_dependencies);
/// afterwards only elements and Markush references can be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    number: u32,
    text: String,
    claim_type: ClaimType,
    category: ClaimCategory,
    depends_on: Vec<u32>,
    elements: Vec<ClaimElement>,
    markush_refs: Vec<String>,
}

impl Claim {
    /// Creates a claim with no dependencies, elements, or Markush references.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveClaimNumber`] for claim number 0 and
    /// [`ValidationError::TextLength`] if the trimmed text is shorter than
    /// [`MIN_CLAIM_TEXT_LEN`] or longer than [`MAX_CLAIM_TEXT_LEN`] characters.
    pub fn new(
        number: u32,
        text: impl Into<String>,
        claim_type: ClaimType,
        category: ClaimCategory,
    ) -> Result<Self, ValidationError> {
        if number == 0 {
            return Err(ValidationError::NonPositiveClaimNumber(number));
        }

        let text = text.into().trim().to_string();
        check_text_len(number, &text)?;

        Ok(Self {
            number,
            text,
            claim_type,
            category,
            depends_on: Vec::new(),
            elements: Vec::new(),
            markush_refs: Vec::new(),
        })
    }

    pub fn independent(
        number: u32,
        text: impl Into<String>,
        category: ClaimCategory,
    ) -> Result<Self, ValidationError> {
        Self::new(number, text, ClaimType::Independent, category)
    }

    /// Creates a dependent claim and assigns its dependencies in one step.
    pub fn dependent(
        number: u32,
        text: impl Into<String>,
        category: ClaimCategory,
        depends_on: Vec<u32>,
    ) -> Result<Self, ValidationError> {
        let mut claim = Self::new(number, text, ClaimType::Dependent, category)?;
        claim.set_dependencies(depends_on)?;
        Ok(claim)
    }

    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn claim_type(&self) -> ClaimType {
        self.claim_type
    }

    #[inline]
    pub fn category(&self) -> ClaimCategory {
        self.category
    }

    #[inline]
    pub fn is_independent(&self) -> bool {
        self.claim_type == ClaimType::Independent
    }

    #[inline]
    pub fn depends_on(&self) -> &[u32] {
        &self.depends_on
    }

    #[inline]
    pub fn elements(&self) -> &[ClaimElement] {
        &self.elements
    }

    #[inline]
    pub fn markush_refs(&self) -> &[String] {
        &self.markush_refs
    }

    /// Assigns the claims this claim refers back to.
    ///
    /// The whole list is checked before anything is stored, so a rejected call
    /// leaves the claim untouched.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::DependenciesAlreadySet`] if dependencies were assigned before
    /// - [`ValidationError::UnexpectedDependencies`] for a non-empty list on an independent claim
    /// - [`ValidationError::MissingDependencies`] for an empty list on a dependent claim
    /// - [`ValidationError::SelfReference`], [`ValidationError::ForwardReference`],
    ///   [`ValidationError::DuplicateDependency`] for bad entries
    pub fn set_dependencies(&mut self, depends_on: Vec<u32>) -> Result<(), ValidationError> {
        if !self.depends_on.is_empty() {
            return Err(ValidationError::DependenciesAlreadySet { claim: self.number });
        }
        check_dependencies(self.number, self.claim_type, &depends_on)?;
        self.depends_on = depends_on;
        Ok(())
    }

    pub fn add_element(&mut self, element: ClaimElement) -> Result<(), ValidationError> {
        element.validate()?;
        if self.elements.iter().any(|e| e.id == element.id) {
            return Err(ValidationError::DuplicateElement {
                claim: self.number,
                element: element.id,
            });
        }
        self.elements.push(element);
        Ok(())
    }

    /// Records that a Markush structure characterizes this claim. Repeated ids are ignored.
    pub fn add_markush_reference(&mut self, id: impl Into<String>) -> Result<(), ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty("Markush structure id"));
        }
        if !self.markush_refs.contains(&id) {
            self.markush_refs.push(id);
        }
        Ok(())
    }

    /// Re-checks every per-claim invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.number == 0 {
            return Err(ValidationError::NonPositiveClaimNumber(self.number));
        }
        check_text_len(self.number, &self.text)?;
        check_dependencies(self.number, self.claim_type, &self.depends_on)?;

        for element in &self.elements {
            element.validate()?;
        }
        if !self.elements.is_empty() && !self.elements.iter().any(|e| e.essential) {
            return Err(ValidationError::NoEssentialElement { claim: self.number });
        }

        Ok(())
    }
}

fn check_text_len(number: u32, text: &str) -> Result<(), ValidationError> {
    let len = text.trim().chars().count();
    if !(MIN_CLAIM_TEXT_LEN..=MAX_CLAIM_TEXT_LEN).contains(&len) {
        return Err(ValidationError::TextLength {
            claim: number,
            len,
            min: MIN_CLAIM_TEXT_LEN,
            max: MAX_CLAIM_TEXT_LEN,
        });
    }
    Ok(())
}

fn check_dependencies(
    number: u32,
    claim_type: ClaimType,
    depends_on: &[u32],
) -> Result<(), ValidationError> {
    match claim_type {
        ClaimType::Independent if !depends_on.is_empty() => {
            return Err(ValidationError::UnexpectedDependencies { claim: number });
        }
        ClaimType::Dependent if depends_on.is_empty() => {
            return Err(ValidationError::MissingDependencies { claim: number });
        }
        _ => {}
    }

    for (idx, &target) in depends_on.iter().enumerate() {
        if target == number {
            return Err(ValidationError::SelfReference { claim: number });
        }
        if target == 0 {
            return Err(ValidationError::NonPositiveClaimNumber(target));
        }
        if target > number {
            return Err(ValidationError::ForwardReference {
                claim: number,
                target,
            });
        }
        if depends_on[..idx].contains(&target) {
            return Err(ValidationError::DuplicateDependency {
                claim: number,
                target,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "A compound of formula (I) or a salt thereof.";

    #[test]
    fn new_trims_and_accepts_valid_text() {
        let claim = Claim::new(1, format!("  {TEXT}  "), ClaimType::Independent, ClaimCategory::Product)
            .unwrap();
        assert_eq!(claim.number(), 1);
        assert_eq!(claim.text(), TEXT);
        assert!(claim.is_independent());
        assert!(claim.depends_on().is_empty());
        assert!(claim.validate().is_ok());
    }

    #[test]
    fn rejects_zero_number() {
        let err = Claim::independent(0, TEXT, ClaimCategory::Product).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveClaimNumber(0));
    }

    #[test]
    fn rejects_short_and_long_text() {
        let err = Claim::independent(1, "   short   ", ClaimCategory::Product).unwrap_err();
        assert!(matches!(err, ValidationError::TextLength { claim: 1, len: 5, .. }));

        let long = "x".repeat(MAX_CLAIM_TEXT_LEN + 1);
        let err = Claim::independent(1, long, ClaimCategory::Product).unwrap_err();
        assert!(matches!(err, ValidationError::TextLength { .. }));
    }

    #[test]
    fn text_length_counts_characters_not_bytes() {
        let text = "é".repeat(MIN_CLAIM_TEXT_LEN);
        assert!(Claim::independent(1, text, ClaimCategory::Use).is_ok());
    }

    #[test]
    fn dependent_with_valid_references() {
        let claim = Claim::dependent(3, TEXT, ClaimCategory::Product, vec![1, 2]).unwrap();
        assert_eq!(claim.depends_on(), &[1, 2]);
        assert!(!claim.is_independent());
    }

    #[test]
    fn forward_reference_is_rejected() {
        let err = Claim::dependent(2, TEXT, ClaimCategory::Product, vec![3]).unwrap_err();
        assert_eq!(err, ValidationError::ForwardReference { claim: 2, target: 3 });
        assert!(err.to_string().contains("forward reference"));
    }

    #[test]
    fn self_reference_is_rejected() {
        let err = Claim::dependent(2, TEXT, ClaimCategory::Product, vec![2]).unwrap_err();
        assert_eq!(err, ValidationError::SelfReference { claim: 2 });
        assert!(err.to_string().contains("self reference"));
    }

    #[test]
    fn duplicate_dependency_is_rejected() {
        let err = Claim::dependent(4, TEXT, ClaimCategory::Product, vec![1, 2, 1]).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateDependency { claim: 4, target: 1 });
    }

    #[test]
    fn dependent_without_dependencies_fails_validation() {
        let claim = Claim::new(2, TEXT, ClaimType::Dependent, ClaimCategory::Product).unwrap();
        assert_eq!(
            claim.validate(),
            Err(ValidationError::MissingDependencies { claim: 2 })
        );

        let mut claim = claim;
        assert_eq!(
            claim.set_dependencies(Vec::new()),
            Err(ValidationError::MissingDependencies { claim: 2 })
        );
    }

    #[test]
    fn independent_rejects_dependencies() {
        let mut claim = Claim::independent(2, TEXT, ClaimCategory::Product).unwrap();
        assert_eq!(
            claim.set_dependencies(vec![1]),
            Err(ValidationError::UnexpectedDependencies { claim: 2 })
        );
        assert!(claim.depends_on().is_empty());
    }

    #[test]
    fn dependencies_are_set_once() {
        let mut claim = Claim::dependent(3, TEXT, ClaimCategory::Product, vec![1]).unwrap();
        assert_eq!(
            claim.set_dependencies(vec![2]),
            Err(ValidationError::DependenciesAlreadySet { claim: 3 })
        );
        assert_eq!(claim.depends_on(), &[1]);
    }

    #[test]
    fn failed_set_leaves_claim_unchanged() {
        let mut claim = Claim::new(3, TEXT, ClaimType::Dependent, ClaimCategory::Product).unwrap();
        assert!(claim.set_dependencies(vec![1, 5]).is_err());
        assert!(claim.depends_on().is_empty());
        assert!(claim.set_dependencies(vec![1, 2]).is_ok());
    }

    #[test]
    fn elements_require_an_essential_one() {
        let mut claim = Claim::independent(1, TEXT, ClaimCategory::Product).unwrap();
        claim
            .add_element(ClaimElement::new("e1", "a pyridine core", false).unwrap())
            .unwrap();
        assert_eq!(
            claim.validate(),
            Err(ValidationError::NoEssentialElement { claim: 1 })
        );

        claim
            .add_element(ClaimElement::new("e2", "an R1 substituent", true).unwrap())
            .unwrap();
        assert!(claim.validate().is_ok());
        assert_eq!(claim.elements().len(), 2);
    }

    #[test]
    fn duplicate_element_is_rejected() {
        let mut claim = Claim::independent(1, TEXT, ClaimCategory::Product).unwrap();
        let element = ClaimElement::new("e1", "a pyridine core", true).unwrap();
        claim.add_element(element.clone()).unwrap();
        let err = claim.add_element(element).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateElement { claim: 1, .. }));
        assert_eq!(claim.elements().len(), 1);
    }

    #[test]
    fn element_requires_id_and_text() {
        assert!(ClaimElement::new("", "text", true).is_err());
        assert!(ClaimElement::new("e1", "  ", true).is_err());
    }

    #[test]
    fn markush_references_are_deduplicated() {
        let mut claim = Claim::independent(1, TEXT, ClaimCategory::Product).unwrap();
        claim.add_markush_reference("MK-1").unwrap();
        claim.add_markush_reference("MK-1").unwrap();
        claim.add_markush_reference("MK-2").unwrap();
        assert_eq!(claim.markush_refs(), &["MK-1".to_string(), "MK-2".to_string()]);
        assert!(claim.add_markush_reference(" ").is_err());
    }
}
