use crate::claims::presenter::render_claims;
use crate::claims::ClaimEntry;
use crate::graph::client::GraphClient;
use crate::graph::GraphError;
use crate::oidc::auth::ClaimsAuth;
use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimsView {
    pub message: String,
    pub claims: Vec<ClaimEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorParams {
    pub message: Option<String>,
}

pub struct AppError(GraphError);

impl From<GraphError> for AppError {
    fn from(e: GraphError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("{}", self.0);
        let body = match self.0 {
            GraphError::Api { status, body } => json!({
                "error": format!("Directory returned {status}"),
                "details": body,
            }),
            GraphError::Token(te) => json!({"error": te.to_string()}),
            other => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": other.to_string()})),
                )
                    .into_response()
            }
        };
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "Sign in and visit /claims to see what the directory knows about you.",
        "claims": "/claims",
    }))
}

pub async fn claims(
    ClaimsAuth(principal): ClaimsAuth,
    Extension(graph): Extension<GraphClient>,
) -> Result<Json<ClaimsView>, AppError> {
    let claims = render_claims(&principal, &graph).await?;
    Ok(Json(ClaimsView {
        message: String::from("Your application description page."),
        claims,
    }))
}

pub async fn error(Query(params): Query<ErrorParams>) -> impl IntoResponse {
    Json(json!({ "message": params.message.unwrap_or_default() }))
}
