use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DATABASE_FILE: &str = "articulos.db";

/// Returns the default data path based on build profile.
/// - Debug builds: `./data` (relative to project directory)
/// - Release builds: `/data` (absolute path for production)
pub fn default_data_path() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from("./data")
    }

    #[cfg(not(debug_assertions))]
    {
        PathBuf::from("/data")
    }
}

/// Origins allowed to make cross-origin requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorsOrigins {
    /// Any origin; the request origin is echoed back so credentials keep working
    #[default]
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse a comma separated origin list. Blank input or `*` means any origin.
    pub fn parse(s: &str) -> Self {
        let origins: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| origin.trim_end_matches('/').to_string())
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            Self::Any
        } else {
            Self::List(origins)
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_path: PathBuf,
    pub database_url: String,
    pub max_connections: u32,
    pub cors_allow_origins: CorsOrigins,
}

impl Config {
    pub fn new(data_path: impl AsRef<Path>) -> Self {
        let data_path = data_path.as_ref().to_path_buf();
        let database_url = format!(
            "sqlite:{}?mode=rwc",
            data_path.join(DATABASE_FILE).display()
        );
        Self {
            data_path,
            database_url,
            max_connections: 5,
            cors_allow_origins: CorsOrigins::Any,
        }
    }

    pub fn with_cors_allow_origins(mut self, origins: CorsOrigins) -> Self {
        self.cors_allow_origins = origins;
        self
    }

    /// Returns the path to the SQLite database file
    pub fn database_path(&self) -> PathBuf {
        self.data_path.join(DATABASE_FILE)
    }
}
