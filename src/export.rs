use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::errors::{Result, XrefError};
use crate::types::CrossReferenceIndex;

/// Converts an index into a JSON document.
///
/// Each key is a `book|chapter|verse` string; each value is the ordered array
/// of `{ "book", "chapter", "verse" }` targets.
pub fn export_document(index: &CrossReferenceIndex) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(index)?)
}

/// Serializes an index to JSON text.
///
/// Keys come out in sorted order and non-ASCII book names are written
/// verbatim, so the same index always produces the same bytes. Pretty output
/// is indented by two spaces.
pub fn export_to_string(index: &CrossReferenceIndex, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(index)?
    } else {
        serde_json::to_string(index)?
    };
    Ok(json)
}

/// Parses a previously exported document back into an index.
pub fn load_index(json: &str) -> Result<CrossReferenceIndex> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses an exported index file.
pub fn load_index_file(path: &Path) -> Result<CrossReferenceIndex> {
    let contents = fs::read_to_string(path).map_err(|e| XrefError::File {
        message: format!("failed to read index: {}", e),
        path: path.display().to_string(),
    })?;
    load_index(&contents)
}

/// Compute the SHA-256 digest of exported content, hex encoded.
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Writes `content` to `path` through a sibling temporary file.
///
/// The temporary file is renamed over the destination only after it has been
/// fully written, so a failed run never leaves a truncated export behind.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| XrefError::File {
            message: format!("failed to create output directory: {}", e),
            path: parent.display().to_string(),
        })?;
    }

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, content).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        XrefError::File {
            message: format!("failed to write temporary file: {}", e),
            path: tmp_path.display().to_string(),
        }
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        XrefError::File {
            message: format!(
                "failed to rename temporary file '{}': {}",
                tmp_path.display(),
                e
            ),
            path: path.display().to_string(),
        }
    })?;

    Ok(())
}
