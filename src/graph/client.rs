use super::group::{resolve_memberships, Group, GroupList, MemberGroups, MemberGroupsRequest};
use super::token::{ClientCredentials, TokenProvider};
use super::GraphError;
use crate::config::Config;
use log::{debug, info, trace};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use std::sync::Arc;

#[derive(Clone)]
pub struct GraphClient {
    http_client: reqwest::Client,
    tokens: Arc<dyn TokenProvider>,
    tenant_url: String,
    api_version: String,
}

impl GraphClient {
    /// Client authenticating with the app's own client credentials.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http_client = reqwest::Client::new();
        let tokens = ClientCredentials::with_client(config, http_client.clone());
        Self::with_token_provider(config, http_client, Arc::new(tokens))
    }

    #[must_use]
    pub fn with_token_provider(
        config: &Config,
        http_client: reqwest::Client,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        GraphClient {
            http_client,
            tokens,
            tenant_url: format!(
                "{}/{}",
                config.graph_endpoint.trim_end_matches('/'),
                config.tenant
            ),
            api_version: config.graph_api_version.clone(),
        }
    }

    /// Raw JSON of the first page of `/groups`.
    pub async fn get_all_groups(&self) -> Result<String, GraphError> {
        self.send_graph_get_request("/groups", None).await
    }

    /// Groups the user is a member of, in the order the directory reports the
    /// memberships. Fails as a whole if either directory call fails.
    pub async fn get_user_groups(&self, user_id: &str) -> Result<Vec<Group>, GraphError> {
        let listing: GroupList = serde_json::from_str(&self.get_all_groups().await?)?;

        let body = serde_json::to_string(&MemberGroupsRequest {
            security_enabled_only: true,
        })?;
        let response = self
            .send_graph_post_request(&member_groups_api(user_id), &body)
            .await?;
        let membership: MemberGroups = serde_json::from_str(&response)?;

        Ok(resolve_memberships(listing.groups, &membership.group_ids))
    }

    pub async fn send_graph_get_request(
        &self,
        api: &str,
        query: Option<&str>,
    ) -> Result<String, GraphError> {
        self.send(Method::GET, api, query, None).await
    }

    pub async fn send_graph_post_request(&self, api: &str, json: &str) -> Result<String, GraphError> {
        self.send(Method::POST, api, None, Some(json)).await
    }

    pub async fn send_graph_patch_request(
        &self,
        api: &str,
        json: &str,
    ) -> Result<String, GraphError> {
        self.send(Method::PATCH, api, None, Some(json)).await
    }

    pub async fn send_graph_delete_request(&self, api: &str) -> Result<String, GraphError> {
        self.send(Method::DELETE, api, None, None).await
    }

    fn url(&self, api: &str, query: Option<&str>) -> String {
        let mut url = format!("{}{}?{}", self.tenant_url, api, self.api_version);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('&');
            url.push_str(query);
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        api: &str,
        query: Option<&str>,
        json: Option<&str>,
    ) -> Result<String, GraphError> {
        let token = self.tokens.acquire_token().await?;
        let url = self.url(api, query);

        debug!("{method} {url}");
        trace!(
            "Authorization: Bearer {}...",
            token.chars().take(8).collect::<String>()
        );

        let mut request = self
            .http_client
            .request(method, &url)
            .bearer_auth(&token);
        if let Some(json) = json {
            trace!("{json}");
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(json.to_owned());
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error = response.text().await?;
            let body = serde_json::from_str(&error).unwrap_or(serde_json::Value::String(error));
            return Err(GraphError::Api { status, body });
        }

        info!("{status} {url}");
        Ok(response.text().await?)
    }
}

fn member_groups_api(user_id: &str) -> String {
    format!("/users/{}/getMemberGroups", urlencoding::encode(user_id))
}
