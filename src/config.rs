use std::env;
use std::error::Error;
use std::net::SocketAddr;

pub const DEFAULT_GRAPH_ENDPOINT: &str = "https://graph.windows.net";
pub const DEFAULT_GRAPH_API_VERSION: &str = "api-version=1.6";
pub const DEFAULT_GRAPH_RESOURCE: &str = "https://graph.windows.net";
pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { var: &'static str, value: String },
}

impl Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "Missing environment variable {var}"),
            ConfigError::Invalid { var, value } => {
                write!(f, "Invalid value '{value}' for environment variable {var}")
            }
        }
    }
}

/// Everything the service needs to talk to the tenant's directory and to
/// authenticate its callers.
#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub tenant: String,
    pub graph_endpoint: String,
    pub graph_api_version: String,
    pub graph_resource: String,
    pub authority_host: String,
    pub userinfo_url: String,
    pub listen_addr: SocketAddr,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("tenant", &self.tenant)
            .field("graph_endpoint", &self.graph_endpoint)
            .field("graph_api_version", &self.graph_api_version)
            .field("graph_resource", &self.graph_resource)
            .field("authority_host", &self.authority_host)
            .field("userinfo_url", &self.userinfo_url)
            .field("listen_addr", &self.listen_addr)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(var))
        };
        let optional =
            |var: &'static str, default: &str| lookup(var).unwrap_or_else(|| default.to_owned());

        let listen_addr = optional("LISTEN_ADDR", DEFAULT_LISTEN_ADDR);
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                var: "LISTEN_ADDR",
                value: listen_addr.clone(),
            })?;

        Ok(Config {
            client_id: required("B2C_CLIENT_ID")?,
            client_secret: required("B2C_CLIENT_SECRET")?,
            tenant: required("B2C_TENANT")?,
            graph_endpoint: optional("GRAPH_ENDPOINT", DEFAULT_GRAPH_ENDPOINT),
            graph_api_version: optional("GRAPH_API_VERSION", DEFAULT_GRAPH_API_VERSION),
            graph_resource: optional("GRAPH_RESOURCE", DEFAULT_GRAPH_RESOURCE),
            authority_host: optional("AUTHORITY_HOST", DEFAULT_AUTHORITY_HOST),
            userinfo_url: required("OIDC_USERINFO_URL")?,
            listen_addr,
        })
    }
}
