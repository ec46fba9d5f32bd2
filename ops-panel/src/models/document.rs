use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of documents the panel can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKey {
    AdminGuide,
    UserGuide,
}

impl DocumentKey {
    pub const ALL: [DocumentKey; 2] = [DocumentKey::AdminGuide, DocumentKey::UserGuide];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKey::AdminGuide => "admin-guide",
            DocumentKey::UserGuide => "user-guide",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DocumentKey::AdminGuide => "Admin Configuration & Operations Guide",
            DocumentKey::UserGuide => "User Guide",
        }
    }

    /// Lowercase name used in client-facing error messages.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKey::AdminGuide => "admin guide",
            DocumentKey::UserGuide => "user guide",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            DocumentKey::AdminGuide => "ADMIN_GUIDE.md",
            DocumentKey::UserGuide => "USER_GUIDE.md",
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDocumentKey(pub String);

impl FromStr for DocumentKey {
    type Err = UnknownDocumentKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownDocumentKey(s.to_string()))
    }
}

/// A guide as read from disk for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub key: DocumentKey,
    pub title: &'static str,
    pub content: String,
}
