use crate::graph::client::GraphClient;
use crate::oidc::client::OIDCClient;
use axum::extract::Extension;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod home;

/// Map routes to handlers
pub fn router(graph_client: GraphClient, oidc_client: OIDCClient) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/claims", get(home::claims))
        .route("/error", get(home::error))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(graph_client))
                .layer(Extension(oidc_client)),
        )
}
