use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Document represents one corpus entry: an opaque identifier plus its raw
/// text. The text is only needed while the index is being built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: String, text: String) -> Self {
        Self { id, text }
    }
}

/// Load all `*.txt` files from a directory as documents, using the filename
/// as the document identifier. Entries come back sorted by filename so the
/// corpus order is stable across runs.
pub fn load_directory<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read corpus directory {}", path.display()))?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry?;
        let file_path = entry.path();
        if file_path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let Some(name) = file_path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let text = fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read document {}", file_path.display()))?;
        documents.push(Document::new(name.to_string(), text.trim().to_string()));
    }

    documents.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(documents)
}
