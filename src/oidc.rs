use std::error::Error;

/// Failure to resolve a caller through the identity provider's userinfo endpoint.
#[derive(Debug)]
pub enum OIDCError {
    Unauthorized,
    ReqwestError(reqwest::Error),
    Unknown(reqwest::StatusCode),
}

impl Error for OIDCError {}

impl std::fmt::Display for OIDCError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OIDCError::Unauthorized => write!(f, "OIDC returned Unauthorized"),
            OIDCError::ReqwestError(re) => write!(f, "Reqwest Error: {re}"),
            OIDCError::Unknown(status) => write!(f, "Unknown OIDC Error ({status})"),
        }
    }
}

pub mod auth;
pub mod client;
pub mod user;
