use super::TokenError;
use crate::config::Config;
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

/// Source of bearer tokens for directory calls.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn acquire_token(&self) -> Result<String, TokenError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// OAuth2 client-credentials grant against the tenant's authority, asking for
/// a token scoped to the directory resource.
#[derive(Clone)]
pub struct ClientCredentials {
    http_client: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    resource: String,
}

impl ClientCredentials {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    #[must_use]
    pub fn with_client(config: &Config, http_client: reqwest::Client) -> Self {
        ClientCredentials {
            http_client,
            token_url: format!(
                "{}/{}/oauth2/token",
                config.authority_host.trim_end_matches('/'),
                config.tenant
            ),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            resource: config.graph_resource.clone(),
        }
    }
}

#[async_trait]
impl TokenProvider for ClientCredentials {
    async fn acquire_token(&self) -> Result<String, TokenError> {
        debug!("POST {}", self.token_url);

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("resource", self.resource.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TokenError::Rejected { status, body });
        }

        let token = response.json::<TokenResponse>().await?;
        Ok(token.access_token)
    }
}
