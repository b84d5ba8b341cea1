use crate::error::{PaddockError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".paddock.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaddockConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// HTTP path of the GraphQL endpoint
    #[serde(default = "default_path")]
    pub path: String,

    /// Serve the GraphiQL console on GET requests to `path`
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "default_max_complexity")]
    pub max_complexity: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_path() -> String {
    "/graphql".to_string()
}

fn default_graphiql() -> bool {
    true
}

fn default_max_depth() -> usize {
    10
}

fn default_max_complexity() -> usize {
    1000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            graphiql: default_graphiql(),
            max_depth: default_max_depth(),
            max_complexity: default_max_complexity(),
        }
    }
}

impl ServerSettings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// How new driver and race ids are assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// Length of the collection plus one. Ids can repeat after a removal.
    Count,
    /// One past the highest id ever handed out in the collection.
    #[default]
    Monotonic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Populate the store with the built-in drivers and races on startup
    #[serde(default = "default_seed")]
    pub seed: bool,

    #[serde(default)]
    pub id_mode: IdMode,

    /// Reject `addRace` when the winner id matches no driver
    #[serde(default)]
    pub strict_winner: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            id_mode: IdMode::default(),
            strict_winner: false,
        }
    }
}

impl PaddockConfig {
    /// Load the nearest `.paddock.toml` above `start_path`, or defaults if there is none.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaddockError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config: PaddockConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.server.path.starts_with('/') {
            return Err(PaddockError::Config(format!(
                "server.path must start with '/', got '{}'",
                self.server.path
            )));
        }
        if self.server.path == "/health" {
            return Err(PaddockError::Config(
                "server.path cannot be '/health'".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_original_server() {
        let config = PaddockConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.path, "/graphql");
        assert!(config.server.graphiql);
        assert!(config.store.seed);
        assert_eq!(config.store.id_mode, IdMode::Monotonic);
        assert!(!config.store.strict_winner);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server]\nport = 4100\n\n[store]\nid_mode = \"count\"\n").unwrap();

        let config = PaddockConfig::load(&path).unwrap();
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.id_mode, IdMode::Count);
        assert!(config.store.seed);
    }

    #[test]
    fn test_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[store]\nseed = false\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = PaddockConfig::discover(&nested).unwrap();
        assert!(!config.store.seed);
    }

    #[test]
    fn test_invalid_path_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server]\npath = \"graphql\"\n").unwrap();

        assert!(matches!(
            PaddockConfig::load(&path),
            Err(PaddockError::Config(_))
        ));
    }
}
