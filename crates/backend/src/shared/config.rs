use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend (index.html + wasm bundle).
    pub dist_dir: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid server host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
dist_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for `cargo run`)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    for config_path in candidate_paths() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    paths.push(PathBuf::from("config.toml"));
    paths
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|source| ConfigError::InvalidHost {
            host: self.host.clone(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Resolves `dist_dir`: absolute paths as is, relative ones against the
    /// working directory.
    pub fn dist_path(&self) -> PathBuf {
        let dist = Path::new(&self.dist_dir);
        if dist.is_absolute() {
            return dist.to_path_buf();
        }
        std::env::current_dir()
            .map(|cwd| cwd.join(dist))
            .unwrap_or_else(|_| dist.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
    }

    #[test]
    fn test_socket_addr() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let addr = config.server.socket_addr().unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
    }

    #[test]
    fn test_invalid_host() {
        let server = ServerConfig {
            host: "localhost:80".to_string(),
            port: 3000,
            dist_dir: "dist".to_string(),
        };
        assert!(matches!(
            server.socket_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }

    #[test]
    fn test_absolute_dist_path_kept() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            dist_dir: "/srv/console/dist".to_string(),
        };
        assert_eq!(server.dist_path(), PathBuf::from("/srv/console/dist"));
    }
}
