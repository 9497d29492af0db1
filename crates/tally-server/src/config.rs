use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Runtime configuration for the HTTP server.
///
/// Every field has a default, so a partial TOML file (or an empty one) is
/// a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub bind_addr: SocketAddr,
    /// Load the bootstrap sources, products, users, and posts at start-up.
    pub seed_sample_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            seed_sample_data: true,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(raw: &str) -> ServerResult<Self> {
        toml::from_str(raw).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded server configuration");
        Self::from_toml_str(&raw)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert!(c.seed_sample_data);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let c = ServerConfig::from_toml_str("seed_sample_data = false\n").unwrap();
        assert_eq!(c.bind_addr, ServerConfig::default().bind_addr);
        assert!(!c.seed_sample_data);

        assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn invalid_address_is_a_config_error() {
        let err = ServerConfig::from_toml_str("bind_addr = \"not an address\"").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"0.0.0.0:3000\"").unwrap();

        let c = ServerConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert!(c.seed_sample_data);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }

    #[test]
    fn toml_output_parses_back() {
        let c = ServerConfig {
            bind_addr: "10.0.0.1:9000".parse().unwrap(),
            seed_sample_data: false,
        };
        let rendered = c.to_toml_string().unwrap();
        assert!(rendered.contains("bind_addr = \"10.0.0.1:9000\""));
        assert_eq!(ServerConfig::from_toml_str(&rendered).unwrap(), c);
    }
}
