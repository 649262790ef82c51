use serde::{Deserialize, Serialize};

pub const OBJECT_IDENTIFIER: &str = "http://schemas.microsoft.com/identity/claims/objectidentifier";
pub const USER_GROUPS: &str = "USER_GROUPS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimEntry {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

impl ClaimEntry {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        ClaimEntry {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// The authenticated caller, as the ordered set of claims the identity
/// provider vouched for.
#[derive(Debug, Clone, Default)]
pub struct Principal {
    pub claims: Vec<ClaimEntry>,
}

impl Principal {
    #[must_use]
    pub fn new(claims: Vec<ClaimEntry>) -> Self {
        Principal { claims }
    }

    #[must_use]
    pub fn find_first(&self, claim_type: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|claim| claim.claim_type == claim_type)
            .map(|claim| claim.value.as_str())
    }

    #[must_use]
    pub fn object_id(&self) -> Option<&str> {
        self.find_first(OBJECT_IDENTIFIER)
    }
}

pub mod presenter;
