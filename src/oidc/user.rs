use crate::claims::{ClaimEntry, Principal, OBJECT_IDENTIFIER};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Short JWT claim names and the long claim types the web layer knows them by.
const INBOUND_CLAIM_TYPES: [(&str, &str); 6] = [
    ("oid", OBJECT_IDENTIFIER),
    ("tid", "http://schemas.microsoft.com/identity/claims/tenantid"),
    (
        "sub",
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier",
    ),
    ("name", "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name"),
    (
        "email",
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress",
    ),
    (
        "emails",
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress",
    ),
];

/// Raw userinfo document.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct UserInfo(pub Map<String, Value>);

impl UserInfo {
    #[must_use]
    pub fn into_principal(self) -> Principal {
        let mut claims = Vec::new();
        for (name, value) in self.0 {
            let claim_type = inbound_claim_type(&name);
            match value {
                Value::Array(values) => claims.extend(
                    values
                        .into_iter()
                        .filter_map(claim_value)
                        .map(|v| ClaimEntry::new(claim_type, v)),
                ),
                other => {
                    if let Some(v) = claim_value(other) {
                        claims.push(ClaimEntry::new(claim_type, v));
                    }
                }
            }
        }
        Principal::new(claims)
    }
}

fn inbound_claim_type(name: &str) -> &str {
    INBOUND_CLAIM_TYPES
        .iter()
        .find(|(short, _)| *short == name)
        .map_or(name, |(_, long)| *long)
}

fn claim_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
