use crate::models::{DocumentKey, DocumentRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub content: String,
    pub title: String,
}

impl From<DocumentRecord> for DocumentResponse {
    fn from(record: DocumentRecord) -> Self {
        Self {
            content: record.content,
            title: record.title.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub key: DocumentKey,
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentSummary>,
}
