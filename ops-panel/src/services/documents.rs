//! Static guides served by key through a closed catalog.

use crate::models::document::UnknownDocumentKey;
use crate::models::{DocumentKey, DocumentRecord};
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unknown document '{0}'")]
    UnknownDocument(String),

    #[error("document '{key}' unavailable at {path}: {source}")]
    Unavailable {
        key: DocumentKey,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("document catalog has no entry for '{0}'")]
    MissingCatalogEntry(DocumentKey),

    #[error("document catalog entry for '{key}' is not a plain file name: '{file_name}'")]
    InvalidFileName { key: DocumentKey, file_name: String },
}

impl DocumentError {
    /// Human-readable name of the document for client-facing messages.
    pub fn public_label(&self) -> &'static str {
        match self {
            DocumentError::Unavailable { key, .. }
            | DocumentError::MissingCatalogEntry(key)
            | DocumentError::InvalidFileName { key, .. } => key.label(),
            DocumentError::UnknownDocument(_) => "document",
        }
    }
}

impl From<UnknownDocumentKey> for DocumentError {
    fn from(err: UnknownDocumentKey) -> Self {
        DocumentError::UnknownDocument(err.0)
    }
}

/// Default file names, one per key.
pub fn default_catalog() -> HashMap<DocumentKey, String> {
    DocumentKey::ALL
        .into_iter()
        .map(|key| (key, key.default_file_name().to_string()))
        .collect()
}

#[derive(Debug, Clone)]
pub struct DocumentStore {
    docs_dir: PathBuf,
    files: BTreeMap<DocumentKey, String>,
}

impl DocumentStore {
    /// Fails unless every [`DocumentKey`] maps to a plain file name.
    pub fn new(
        docs_dir: impl Into<PathBuf>,
        catalog: &HashMap<DocumentKey, String>,
    ) -> Result<Self, DocumentError> {
        let mut files = BTreeMap::new();
        for key in DocumentKey::ALL {
            let file_name = catalog
                .get(&key)
                .ok_or(DocumentError::MissingCatalogEntry(key))?;
            if !is_plain_file_name(file_name) {
                return Err(DocumentError::InvalidFileName {
                    key,
                    file_name: file_name.clone(),
                });
            }
            files.insert(key, file_name.clone());
        }

        Ok(Self {
            docs_dir: docs_dir.into(),
            files,
        })
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    pub fn path_for(&self, key: DocumentKey) -> PathBuf {
        // Completeness is checked in `new`.
        let file_name = self
            .files
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_file_name());
        self.docs_dir.join(file_name)
    }

    /// Keys and titles in catalog order.
    pub fn catalog(&self) -> Vec<(DocumentKey, &'static str)> {
        self.files.keys().map(|key| (*key, key.title())).collect()
    }

    pub async fn fetch(&self, key: &str) -> Result<DocumentRecord, DocumentError> {
        let key: DocumentKey = key.parse()?;
        self.fetch_key(key).await
    }

    /// Reads the whole file on every call.
    pub async fn fetch_key(&self, key: DocumentKey) -> Result<DocumentRecord, DocumentError> {
        let path = self.path_for(key);
        let content = fs::read_to_string(&path)
            .await
            .map_err(|source| DocumentError::Unavailable { key, path, source })?;

        Ok(DocumentRecord {
            key,
            title: key.title(),
            content,
        })
    }

    /// Logs catalog entries whose files are missing. Content may be deployed
    /// after startup, so this never fails.
    pub async fn warn_missing(&self) {
        for key in DocumentKey::ALL {
            let path = self.path_for(key);
            if !fs::try_exists(&path).await.unwrap_or(false) {
                tracing::warn!(document = %key, path = %path.display(), "document file not found");
            }
        }
    }

    pub async fn is_ready(&self) -> bool {
        fs::metadata(&self.docs_dir)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && Path::new(name).is_relative()
}
