use crate::models::{CalculatorSummary, DocumentKey};
use crate::services::calculators::default_calculators;
use crate::services::documents::default_catalog;
use serde::Deserialize;
use service_core::config::{self as core_config, ServerConfig, TelemetryConfig};
use service_core::error::AppError;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub documents: DocumentsConfig,
    #[serde(default = "default_calculators")]
    pub calculators: Vec<CalculatorSummary>,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory that resource identifiers resolve under.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    /// Identifier to file name overrides, e.g. `primary-database: finance.sqlite`.
    /// Keys are lowercased on load; file names keep their case.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            aliases: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsConfig {
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,
    /// File name per document key; must cover every key.
    #[serde(default = "default_catalog")]
    pub catalog: HashMap<DocumentKey, String>,
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            catalog: default_catalog(),
        }
    }
}

impl PanelConfig {
    /// Reads `config/base.yaml` (if present) and `APP__*` overrides. Relative
    /// directories are anchored at the crate's root directory.
    pub fn load() -> Result<Self, AppError> {
        let root = service_root()?;
        let settings = core_config::builder(Some(&root.join("config").join("base.yaml"))).build()?;

        let mut config: PanelConfig = settings.try_deserialize()?;
        config.storage.base_dir = root.join(&config.storage.base_dir);
        config.documents.docs_dir = root.join(&config.documents.docs_dir);

        Ok(config)
    }

    /// Defaults with explicit directories, for embedding and tests.
    pub fn with_dirs(base_dir: impl Into<PathBuf>, docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig {
                base_dir: base_dir.into(),
                aliases: HashMap::new(),
            },
            documents: DocumentsConfig {
                docs_dir: docs_dir.into(),
                catalog: default_catalog(),
            },
            calculators: default_calculators(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

fn service_root() -> Result<PathBuf, AppError> {
    let base_path = std::env::current_dir()?;

    // Run either from the workspace root or from inside ops-panel.
    if base_path.ends_with("ops-panel") || !base_path.join("ops-panel").is_dir() {
        Ok(base_path)
    } else {
        Ok(base_path.join("ops-panel"))
    }
}
