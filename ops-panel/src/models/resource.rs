use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Size and modification time of a resource that exists at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMetadata {
    pub size_bytes: u64,
    pub last_modified: DateTime<Utc>,
}

/// Point-in-time snapshot of a probed resource. Never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub identifier: String,
    pub resolved_path: PathBuf,
    /// `Some` exactly when the resource exists.
    pub metadata: Option<ResourceMetadata>,
}

impl ResourceDescriptor {
    pub fn absent(identifier: impl Into<String>, resolved_path: PathBuf) -> Self {
        Self {
            identifier: identifier.into(),
            resolved_path,
            metadata: None,
        }
    }

    pub fn present(
        identifier: impl Into<String>,
        resolved_path: PathBuf,
        metadata: ResourceMetadata,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            resolved_path,
            metadata: Some(metadata),
        }
    }

    pub fn exists(&self) -> bool {
        self.metadata.is_some()
    }

    pub fn size_bytes(&self) -> Option<u64> {
        self.metadata.as_ref().map(|m| m.size_bytes)
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.metadata.as_ref().map(|m| m.last_modified)
    }
}
