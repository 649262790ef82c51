use dotenvy::dotenv;
use log::info;
use std::env;
use std::error::Error;

use b2c_claims::config::Config;
use b2c_claims::graph::client as graph_client;
use b2c_claims::oidc::client as oidc_client;
use b2c_claims::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file
    dotenv().ok();
    // Set logging levels if not already set
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "b2c_claims=debug,tower_http=info");
    }

    // Initialize tracing with previously set logging levels
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    info!("Configuration loaded for tenant {}", config.tenant);

    // Create a directory client authenticating with the app's own credentials
    let graph_client = graph_client::GraphClient::new(&config);
    info!("Graph client initialized");

    // Create an OIDC client for resolving callers
    let oidc_client = oidc_client::OIDCClient::new(&config.userinfo_url);
    info!("OIDC client initialized");

    let app = routes::router(graph_client, oidc_client);

    // Bind and serve
    info!("Listening on http://{}", config.listen_addr);
    axum::Server::bind(&config.listen_addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
