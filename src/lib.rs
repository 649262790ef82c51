pub mod claims;
pub mod config;
pub mod graph;
pub mod oidc;
pub mod routes;
