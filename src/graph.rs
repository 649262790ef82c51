use reqwest::StatusCode;
use std::error::Error;

#[derive(Debug)]
pub enum TokenError {
    Rejected { status: StatusCode, body: String },
    Reqwest(reqwest::Error),
}

impl Error for TokenError {}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenError::Rejected { status, body } => {
                write!(f, "Token endpoint returned {status}: {body}")
            }
            TokenError::Reqwest(re) => write!(f, "Token request failed: {re}"),
        }
    }
}

impl From<reqwest::Error> for TokenError {
    fn from(e: reqwest::Error) -> Self {
        TokenError::Reqwest(e)
    }
}

#[derive(Debug)]
pub enum GraphError {
    Token(TokenError),
    /// Any non-success status from the directory; throttling, not-found and
    /// bad-request all land here.
    Api {
        status: StatusCode,
        body: serde_json::Value,
    },
    Reqwest(reqwest::Error),
    Json(serde_json::Error),
}

impl Error for GraphError {}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GraphError::Token(te) => write!(f, "{te}"),
            GraphError::Api { body, .. } => {
                let formatted =
                    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
                write!(f, "Error Calling the Graph API: \n{formatted}")
            }
            GraphError::Reqwest(re) => write!(f, "Reqwest Error: {re}"),
            GraphError::Json(je) => write!(f, "Malformed Graph API response: {je}"),
        }
    }
}

impl From<TokenError> for GraphError {
    fn from(e: TokenError) -> Self {
        GraphError::Token(e)
    }
}

impl From<reqwest::Error> for GraphError {
    fn from(e: reqwest::Error) -> Self {
        GraphError::Reqwest(e)
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::Json(e)
    }
}

pub mod client;
pub mod group;
pub mod token;
