//! Store — reads the drinks document from disk and writes it back.
//!
//! The rendered form is 2-space pretty JSON with non-ASCII characters written
//! literally and no trailing newline, so a rewrite of an untouched document
//! only differs from a hand-formatted original in whitespace.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{PatchError, ProcessingError};

/// How [`save`] replaces the existing file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write a sibling temp file, then rename it over the target.
    #[default]
    Atomic,
    /// Truncate and write the target directly.
    InPlace,
}

impl WriteMode {
    pub fn from_atomic(atomic: bool) -> Self {
        if atomic {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        }
    }
}

/// Read and parse the document at `path`.
pub fn load(path: &Path) -> Result<Value, PatchError> {
    if !path.exists() {
        return Err(PatchError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| ProcessingError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = serde_json::from_str(&text).map_err(ProcessingError::Parse)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "loaded document");
    Ok(doc)
}

/// Render `doc` the way [`save`] writes it.
pub fn render(doc: &Value) -> Result<String, ProcessingError> {
    serde_json::to_string_pretty(doc).map_err(ProcessingError::Serialize)
}

/// Overwrite `path` with the rendered `doc`.
pub fn save(path: &Path, doc: &Value, mode: WriteMode) -> Result<(), PatchError> {
    let text = render(doc)?;
    match mode {
        WriteMode::Atomic => write_atomic(path, text.as_bytes()),
        WriteMode::InPlace => fs::write(path, &text).map_err(|source| write_error(path, source)),
    }?;
    tracing::info!(path = %path.display(), bytes = text.len(), ?mode, "saved document");
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ProcessingError> {
    let dir = parent_dir(path);
    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| write_error(path, e))?;
    tmp.write_all(bytes).map_err(|e| write_error(path, e))?;
    tmp.as_file().sync_all().map_err(|e| write_error(path, e))?;

    // Temp files are created 0600; keep the original's mode.
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions()).map_err(|e| write_error(path, e))?;
    }

    tmp.persist(path).map_err(|e| write_error(path, e.error))?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn write_error(path: &Path, source: std::io::Error) -> ProcessingError {
    ProcessingError::Write {
        path: path.to_path_buf(),
        source,
    }
}
