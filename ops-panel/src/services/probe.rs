//! Read-only existence and metadata checks for files under a fixed base directory.

use crate::models::{ResourceDescriptor, ResourceMetadata};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

const MAX_IDENTIFIER_LEN: usize = 128;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid resource identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("invalid file name '{0}'")]
    InvalidFileName(String),

    #[error("Failed to inspect {path}: {source}")]
    Failure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to inspect {path}: not a regular file")]
    NotAFile { path: PathBuf },

    #[error("Failed to inspect {path}: resolves outside the base directory")]
    OutsideBaseDir { path: PathBuf },
}

/// Resolves identifiers to `<base_dir>/<file>` and reports what is on disk.
#[derive(Debug, Clone)]
pub struct ResourceProbe {
    base_dir: PathBuf,
    aliases: HashMap<String, String>,
}

impl ResourceProbe {
    /// `aliases` map an identifier to a file name inside `base_dir`; identifiers
    /// without an alias resolve to a file of the same name.
    pub fn new(
        base_dir: impl AsRef<Path>,
        aliases: HashMap<String, String>,
    ) -> Result<Self, ProbeError> {
        let base_dir = base_dir.as_ref();
        let base_dir = std::path::absolute(base_dir).map_err(|source| ProbeError::Failure {
            path: base_dir.to_path_buf(),
            source,
        })?;

        for (identifier, file_name) in &aliases {
            validate_identifier(identifier)?;
            validate_file_name(file_name)?;
        }

        Ok(Self { base_dir, aliases })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn resolve(&self, identifier: &str) -> Result<PathBuf, ProbeError> {
        validate_identifier(identifier)?;
        let file_name = self
            .aliases
            .get(identifier)
            .map(String::as_str)
            .unwrap_or(identifier);
        Ok(self.base_dir.join(file_name))
    }

    /// Absence is a successful result with no metadata.
    pub async fn probe(&self, identifier: &str) -> Result<ResourceDescriptor, ProbeError> {
        let path = self.resolve(identifier)?;

        // Follows symlinks; a dangling link counts as absent.
        let metadata = match fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(identifier, path = %path.display(), "resource absent");
                return Ok(ResourceDescriptor::absent(identifier, path));
            }
            Err(source) => return Err(ProbeError::Failure { path, source }),
        };

        let path = self.ensure_within_base(path).await?;

        if metadata.is_dir() {
            return Err(ProbeError::NotAFile { path });
        }

        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(source) => return Err(ProbeError::Failure { path, source }),
        };

        Ok(ResourceDescriptor::present(
            identifier,
            path,
            ResourceMetadata {
                size_bytes: metadata.len(),
                last_modified: DateTime::<Utc>::from(modified),
            },
        ))
    }

    /// Symlinks must land inside the base directory.
    async fn ensure_within_base(&self, path: PathBuf) -> Result<PathBuf, ProbeError> {
        let link = match fs::symlink_metadata(&path).await {
            Ok(link) => link,
            Err(source) => return Err(ProbeError::Failure { path, source }),
        };
        if !link.file_type().is_symlink() {
            return Ok(path);
        }

        let target = match fs::canonicalize(&path).await {
            Ok(target) => target,
            Err(source) => return Err(ProbeError::Failure { path, source }),
        };
        let base = match fs::canonicalize(&self.base_dir).await {
            Ok(base) => base,
            Err(source) => return Err(ProbeError::Failure { path, source }),
        };

        if target.starts_with(&base) {
            Ok(path)
        } else {
            Err(ProbeError::OutsideBaseDir { path })
        }
    }
}

fn is_single_component(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_IDENTIFIER_LEN
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Identifiers are single lowercase path components drawn from `[a-z0-9._-]`.
/// Configuration keys are lowercased on load, so mixed-case identifiers could
/// never match an alias.
pub fn validate_identifier(identifier: &str) -> Result<(), ProbeError> {
    if is_single_component(identifier) && !identifier.chars().any(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ProbeError::InvalidIdentifier(identifier.to_string()))
    }
}

/// Alias targets are single path components; case is preserved.
pub fn validate_file_name(file_name: &str) -> Result<(), ProbeError> {
    if is_single_component(file_name) {
        Ok(())
    } else {
        Err(ProbeError::InvalidFileName(file_name.to_string()))
    }
}
