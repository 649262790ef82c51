use super::{user::UserInfo, OIDCError};
use std::time::Duration;

const USERINFO_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct OIDCClient {
    http_client: reqwest::Client,
    userinfo_url: String,
}

impl OIDCClient {
    #[must_use]
    pub fn new(userinfo_url: &str) -> Self {
        OIDCClient {
            http_client: reqwest::Client::new(),
            userinfo_url: userinfo_url.to_owned(),
        }
    }

    /// Asks the identity provider who the bearer of `token` is. Accepts the
    /// raw token or a full `Bearer ...` header value.
    pub async fn userinfo(&self, token: &str) -> Result<UserInfo, OIDCError> {
        let token = token.strip_prefix("Bearer ").unwrap_or(token).trim();

        let response = self
            .http_client
            .get(&self.userinfo_url)
            .bearer_auth(token)
            .timeout(USERINFO_TIMEOUT)
            .send()
            .await
            .map_err(OIDCError::ReqwestError)?;

        let status = response.status();
        if status.is_client_error() {
            return Err(OIDCError::Unauthorized);
        }
        if !status.is_success() {
            return Err(OIDCError::Unknown(status));
        }

        response
            .json::<UserInfo>()
            .await
            .map_err(OIDCError::ReqwestError)
    }
}
