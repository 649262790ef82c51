#![allow(dead_code)]

use axum::extract::{Form, Path, Query};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use b2c_claims::config::Config;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const TENANT: &str = "contoso.onmicrosoft.com";
pub const ACCESS_TOKEN: &str = "directory-token-for-tests";
pub const CALLER_TOKEN: &str = "caller-token";

/// Serve `app` on an ephemeral local port.
pub async fn spawn(app: Router) -> SocketAddr {
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(async move {
        server.await.ok();
    });
    addr
}

/// Config pointing the authority, the directory and the userinfo endpoint at
/// a local mock.
pub fn config(addr: SocketAddr) -> Config {
    let base = format!("http://{addr}");
    Config::from_lookup(|key| match key {
        "B2C_CLIENT_ID" => Some(String::from("client-id")),
        "B2C_CLIENT_SECRET" => Some(String::from("client-secret")),
        "B2C_TENANT" => Some(TENANT.to_owned()),
        "OIDC_USERINFO_URL" => Some(format!("{base}/userinfo")),
        "GRAPH_ENDPOINT" => Some(base.clone()),
        "AUTHORITY_HOST" => Some(base.clone()),
        _ => None,
    })
    .unwrap()
}

pub fn group(id: &str, name: &str) -> Value {
    json!({
        "odata.type": "Microsoft.DirectoryServices.Group",
        "objectType": "Group",
        "objectId": id,
        "displayName": name,
        "securityEnabled": true
    })
}

pub fn odata_error(code: &str) -> Value {
    json!({
        "odata.error": {
            "code": code,
            "message": {"lang": "en", "value": "mock failure"}
        }
    })
}

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        == Some(format!("Bearer {ACCESS_TOKEN}").as_str())
}

fn version_ok(query: &HashMap<String, String>) -> bool {
    query.get("api-version").map(String::as_str) == Some("1.6")
}

/// In-process stand-in for the authority, the directory API and the identity
/// provider's userinfo endpoint.
#[derive(Clone)]
pub struct MockDirectory {
    pub token_status: StatusCode,
    pub groups_status: StatusCode,
    pub groups_body: Value,
    pub member_status: StatusCode,
    pub member_body: Value,
    pub userinfo: Value,
    pub userinfo_status: StatusCode,
    pub member_calls: Arc<AtomicUsize>,
    pub token_calls: Arc<AtomicUsize>,
}

impl MockDirectory {
    pub fn new(groups: Vec<Value>, member_ids: Vec<&str>) -> Self {
        MockDirectory {
            token_status: StatusCode::OK,
            groups_status: StatusCode::OK,
            groups_body: json!({ "odata.metadata": "mock", "value": groups }),
            member_status: StatusCode::OK,
            member_body: json!({ "value": member_ids }),
            userinfo: json!({}),
            userinfo_status: StatusCode::OK,
            member_calls: Arc::new(AtomicUsize::new(0)),
            token_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn member_calls(&self) -> usize {
        self.member_calls.load(Ordering::SeqCst)
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn router(&self) -> Router {
        let token = self.clone();
        let groups = self.clone();
        let members = self.clone();
        let userinfo = self.clone();

        Router::new()
            .route(
                &format!("/{TENANT}/oauth2/token"),
                post(move |Form(form): Form<HashMap<String, String>>| async move {
                    token.token_calls.fetch_add(1, Ordering::SeqCst);
                    let valid = form.get("grant_type").map(String::as_str)
                        == Some("client_credentials")
                        && form.get("client_id").map(String::as_str) == Some("client-id")
                        && form.get("client_secret").map(String::as_str) == Some("client-secret")
                        && form.get("resource").map(String::as_str)
                            == Some("https://graph.windows.net");
                    if !valid || !token.token_status.is_success() {
                        let status = if valid {
                            token.token_status
                        } else {
                            StatusCode::BAD_REQUEST
                        };
                        return (status, Json(json!({"error": "invalid_client"})));
                    }
                    (
                        StatusCode::OK,
                        Json(json!({
                            "token_type": "Bearer",
                            "expires_in": "3599",
                            "resource": "https://graph.windows.net",
                            "access_token": ACCESS_TOKEN
                        })),
                    )
                }),
            )
            .route(
                &format!("/{TENANT}/groups"),
                get(
                    move |headers: HeaderMap, Query(query): Query<HashMap<String, String>>| async move {
                        if !bearer_ok(&headers) || !version_ok(&query) {
                            return (StatusCode::UNAUTHORIZED, Json(odata_error("Authentication_Unauthorized")));
                        }
                        (groups.groups_status, Json(groups.groups_body.clone()))
                    },
                ),
            )
            .route(
                &format!("/{TENANT}/users/:id/getMemberGroups"),
                post(
                    move |Path(_id): Path<String>,
                          headers: HeaderMap,
                          Query(query): Query<HashMap<String, String>>,
                          Json(body): Json<Value>| async move {
                        members.member_calls.fetch_add(1, Ordering::SeqCst);
                        if !bearer_ok(&headers) || !version_ok(&query) {
                            return (StatusCode::UNAUTHORIZED, Json(odata_error("Authentication_Unauthorized")));
                        }
                        if body != json!({"securityEnabledOnly": true}) {
                            return (StatusCode::BAD_REQUEST, Json(odata_error("Request_BadRequest")));
                        }
                        (members.member_status, Json(members.member_body.clone()))
                    },
                ),
            )
            .route(
                &format!("/{TENANT}/users/:id"),
                patch(
                    |headers: HeaderMap,
                     Query(query): Query<HashMap<String, String>>,
                     Json(body): Json<Value>| async move {
                        if !bearer_ok(&headers) || !version_ok(&query) {
                            return (StatusCode::UNAUTHORIZED, Json(odata_error("Authentication_Unauthorized")));
                        }
                        (StatusCode::OK, Json(body))
                    },
                )
                .delete(
                    |headers: HeaderMap, Query(query): Query<HashMap<String, String>>| async move {
                        if !bearer_ok(&headers) || !version_ok(&query) {
                            return StatusCode::UNAUTHORIZED;
                        }
                        StatusCode::NO_CONTENT
                    },
                ),
            )
            .route(
                &format!("/{TENANT}/outage"),
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "upstream maintenance") }),
            )
            .route(
                "/userinfo",
                get(move |headers: HeaderMap| async move {
                    let presented = headers
                        .get(header::AUTHORIZATION)
                        .and_then(|h| h.to_str().ok())
                        .map(str::to_owned);
                    if presented != Some(format!("Bearer {CALLER_TOKEN}")) {
                        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid_token"})));
                    }
                    (userinfo.userinfo_status, Json(userinfo.userinfo.clone()))
                }),
            )
    }
}
