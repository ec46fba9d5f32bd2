use crate::models::ResourceDescriptor;
use serde::{Deserialize, Serialize, Serializer};

/// Body of `GET /status/{identifier}`. Size and timestamp fields are omitted
/// when the resource does not exist.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStatusResponse {
    pub identifier: String,
    pub exists: bool,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(
        rename = "sizeKB",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_kb"
    )]
    pub size_kb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

/// Kilobytes rounded to two decimals.
pub fn size_in_kb(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round() / 100.0
}

/// Whole kilobyte values go out as integers (`2`, not `2.0`).
fn serialize_kb<S: Serializer>(size_kb: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match size_kb {
        Some(kb) if kb.fract() == 0.0 && *kb >= 0.0 && *kb <= u64::MAX as f64 => {
            serializer.serialize_u64(*kb as u64)
        }
        Some(kb) => serializer.serialize_f64(*kb),
        None => serializer.serialize_none(),
    }
}

impl From<ResourceDescriptor> for ResourceStatusResponse {
    fn from(descriptor: ResourceDescriptor) -> Self {
        let path = descriptor.resolved_path.display().to_string();
        let (size, size_kb, last_modified) = match descriptor.metadata {
            Some(metadata) => (
                Some(metadata.size_bytes),
                Some(size_in_kb(metadata.size_bytes)),
                Some(metadata.last_modified.to_rfc3339()),
            ),
            None => (None, None, None),
        };

        Self {
            identifier: descriptor.identifier,
            exists: size.is_some(),
            path,
            size,
            size_kb,
            last_modified,
        }
    }
}
