//! Fixtures for sample documents.
//!
//! Provides utilities to:
//! - Locate and copy the shared sample documents
//! - Build small compound documents inline for focused tests

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// Sample document manager.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    /// Create a new sample document manager.
    ///
    /// Assumes samples are in `crates/sideload-document/tests/samples/`.
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let samples_dir = manifest_dir
            .parent()
            .map(|crates| crates.join("sideload-document/tests/samples"))
            .unwrap_or_else(|| manifest_dir.join("samples"));

        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    /// Read a sample document's raw bytes.
    pub fn read(&self, sample_name: &str) -> Result<Vec<u8>> {
        let path = self.path(sample_name);
        fs::read(&path).with_context(|| format!("Missing sample: {}", path.display()))
    }

    /// Copy a sample document to a destination.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        let source = self.path(sample_name);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&source, dest).with_context(|| format!("Missing sample: {}", source.display()))?;
        Ok(())
    }
}

/// `{"type": ..., "id": ...}`
pub fn identifier(resource_type: &str, id: &str) -> Value {
    json!({"type": resource_type, "id": id})
}

/// Relationship wrapper around a linkage's inner `data`
pub fn linkage(data: Value) -> Value {
    json!({"data": data})
}

/// Collection with one widget whose `owner` points at users/9.
///
/// With `side_load_owner`, users/9 is included with name "Ada".
pub fn owned_widget_collection(side_load_owner: bool) -> Value {
    let included = if side_load_owner {
        json!([{"id": "9", "type": "users", "attributes": {"name": "Ada"}}])
    } else {
        json!([])
    };

    json!({
        "data": [{
            "id": "1",
            "type": "widgets",
            "attributes": {"name": "Sprocket", "active": "true", "count": 3},
            "relationships": {"owner": linkage(identifier("users", "9"))}
        }],
        "included": included
    })
}

/// Single widget with a to-many `tags` relationship over two tags.
pub fn tagged_widget() -> Value {
    json!({
        "data": {
            "id": "1",
            "type": "widgets",
            "relationships": {
                "tags": linkage(json!([identifier("tags", "1"), identifier("tags", "2")]))
            }
        }
    })
}
