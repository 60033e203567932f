use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid claim type: '{0}'")]
pub struct ParseClaimTypeError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid claim category: '{0}'")]
pub struct ParseClaimCategoryError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid substituent class: '{0}'")]
pub struct ParseSubstituentClassError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid patent status: '{0}'")]
pub struct ParsePatentStatusError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Independent,
    Dependent,
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimType::Independent => write!(f, "independent"),
            ClaimType::Dependent => write!(f, "dependent"),
        }
    }
}

impl FromStr for ClaimType {
    type Err = ParseClaimTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "independent" | "ind" => Ok(ClaimType::Independent),
            "dependent" | "dep" => Ok(ClaimType::Dependent),
            _ => Err(ParseClaimTypeError(s.to_string())),
        }
    }
}

/// Statutory category of the claimed subject matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimCategory {
    #[default]
    Product,
    Method,
    Use,
}

impl fmt::Display for ClaimCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimCategory::Product => write!(f, "product"),
            ClaimCategory::Method => write!(f, "method"),
            ClaimCategory::Use => write!(f, "use"),
        }
    }
}

impl FromStr for ClaimCategory {
    type Err = ParseClaimCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "product" | "compound" | "composition" => Ok(ClaimCategory::Product),
            "method" | "process" => Ok(ClaimCategory::Method),
            "use" => Ok(ClaimCategory::Use),
            _ => Err(ParseClaimCategoryError(s.to_string())),
        }
    }
}

/// Chemical classification tag attached to a [`Substituent`](super::markush::Substituent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstituentClass {
    Hydrogen,
    Alkyl,
    Alkenyl,
    Alkynyl,
    Cycloalkyl,
    Aryl,
    Heteroaryl,
    Heterocyclyl,
    Halogen,
    Alkoxy,
    Hydroxyl,
    Amino,
    Nitro,
    Cyano,
    Carbonyl,
    Custom,
}

impl SubstituentClass {
    pub fn name(&self) -> &'static str {
        match self {
            SubstituentClass::Hydrogen => "hydrogen",
            SubstituentClass::Alkyl => "alkyl",
            SubstituentClass::Alkenyl => "alkenyl",
            SubstituentClass::Alkynyl => "alkynyl",
            SubstituentClass::Cycloalkyl => "cycloalkyl",
            SubstituentClass::Aryl => "aryl",
            SubstituentClass::Heteroaryl => "heteroaryl",
            SubstituentClass::Heterocyclyl => "heterocyclyl",
            SubstituentClass::Halogen => "halogen",
            SubstituentClass::Alkoxy => "alkoxy",
            SubstituentClass::Hydroxyl => "hydroxyl",
            SubstituentClass::Amino => "amino",
            SubstituentClass::Nitro => "nitro",
            SubstituentClass::Cyano => "cyano",
            SubstituentClass::Carbonyl => "carbonyl",
            SubstituentClass::Custom => "custom",
        }
    }

    /// Whether a carbon-count range is meaningful for this class.
    pub fn is_carbon_based(&self) -> bool {
        matches!(
            self,
            SubstituentClass::Alkyl
                | SubstituentClass::Alkenyl
                | SubstituentClass::Alkynyl
                | SubstituentClass::Cycloalkyl
                | SubstituentClass::Aryl
                | SubstituentClass::Alkoxy
        )
    }
}

impl fmt::Display for SubstituentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubstituentClass {
    type Err = ParseSubstituentClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hydrogen" | "h" => Ok(SubstituentClass::Hydrogen),
            "alkyl" => Ok(SubstituentClass::Alkyl),
            "alkenyl" => Ok(SubstituentClass::Alkenyl),
            "alkynyl" => Ok(SubstituentClass::Alkynyl),
            "cycloalkyl" => Ok(SubstituentClass::Cycloalkyl),
            "aryl" => Ok(SubstituentClass::Aryl),
            "heteroaryl" => Ok(SubstituentClass::Heteroaryl),
            "heterocyclyl" | "heterocycle" => Ok(SubstituentClass::Heterocyclyl),
            "halogen" | "halo" => Ok(SubstituentClass::Halogen),
            "alkoxy" => Ok(SubstituentClass::Alkoxy),
            "hydroxyl" | "hydroxy" => Ok(SubstituentClass::Hydroxyl),
            "amino" | "amine" => Ok(SubstituentClass::Amino),
            "nitro" => Ok(SubstituentClass::Nitro),
            "cyano" | "nitrile" => Ok(SubstituentClass::Cyano),
            "carbonyl" => Ok(SubstituentClass::Carbonyl),
            "custom" => Ok(SubstituentClass::Custom),
            _ => Err(ParseSubstituentClassError(s.to_string())),
        }
    }
}

/// Lifecycle state of the patent that owns a claim set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatentStatus {
    #[default]
    Draft,
    Filed,
    Published,
    UnderExamination,
    Granted,
    Rejected,
    Withdrawn,
    Abandoned,
    Lapsed,
    Expired,
    Revoked,
}

impl PatentStatus {
    pub fn name(&self) -> &'static str {
        match self {
            PatentStatus::Draft => "draft",
            PatentStatus::Filed => "filed",
            PatentStatus::Published => "published",
            PatentStatus::UnderExamination => "under_examination",
            PatentStatus::Granted => "granted",
            PatentStatus::Rejected => "rejected",
            PatentStatus::Withdrawn => "withdrawn",
            PatentStatus::Abandoned => "abandoned",
            PatentStatus::Lapsed => "lapsed",
            PatentStatus::Expired => "expired",
            PatentStatus::Revoked => "revoked",
        }
    }
}

impl fmt::Display for PatentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatentStatus {
    type Err = ParsePatentStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "draft" => Ok(PatentStatus::Draft),
            "filed" => Ok(PatentStatus::Filed),
            "published" => Ok(PatentStatus::Published),
            "under_examination" | "examination" => Ok(PatentStatus::UnderExamination),
            "granted" => Ok(PatentStatus::Granted),
            "rejected" => Ok(PatentStatus::Rejected),
            "withdrawn" => Ok(PatentStatus::Withdrawn),
            "abandoned" => Ok(PatentStatus::Abandoned),
            "lapsed" => Ok(PatentStatus::Lapsed),
            "expired" => Ok(PatentStatus::Expired),
            "revoked" => Ok(PatentStatus::Revoked),
            _ => Err(ParsePatentStatusError(s.to_string())),
        }
    }
}
