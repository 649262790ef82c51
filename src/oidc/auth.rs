use super::client::OIDCClient;
use super::OIDCError;
use crate::claims::Principal;
use axum::async_trait;
use axum::extract::{FromRequest, RequestParts};
use axum::http::StatusCode;
use axum::BoxError;
use log::warn;
use serde_json::json;

/// The authenticated caller of a request. Rejects the request when no valid
/// bearer token is presented.
pub struct ClaimsAuth(pub Principal);

#[async_trait]
impl<B> FromRequest<B> for ClaimsAuth
where
    B: axum::body::HttpBody + Send,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        // Grab the "Authorization" header from the request
        let header = match req
            .headers()
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
        {
            Some(header) => header.to_owned(),
            None => {
                return Err((
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({"error": "missing auth header"})),
                ))
            }
        };

        // Get the OIDCClient from the request global state
        let oidc_client = match req.extensions().get::<OIDCClient>() {
            Some(client) => client.clone(),
            None => {
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({"error": "identity provider not configured"})),
                ))
            }
        };

        match oidc_client.userinfo(&header).await {
            Ok(user) => Ok(Self(user.into_principal())),
            Err(OIDCError::Unauthorized) => Err((
                StatusCode::UNAUTHORIZED,
                axum::Json(json!({"error": "token invalid or expired"})),
            )),
            Err(e) => {
                warn!("Could not resolve caller: {e}");
                Err((
                    StatusCode::BAD_GATEWAY,
                    axum::Json(json!({"error": "identity provider unavailable"})),
                ))
            }
        }
    }
}
