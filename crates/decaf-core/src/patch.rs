//! The `normalize` operation: load → normalize → save, on one path.

use std::path::Path;

use crate::error::PatchError;
use crate::normalizer::{normalize_document, NormalizeReport};
use crate::store::{self, WriteMode};

/// Knobs for [`normalize_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchOptions {
    pub write_mode: WriteMode,
}

/// Normalize the document at `path` with default options.
pub fn normalize(path: &Path) -> Result<NormalizeReport, PatchError> {
    normalize_with(path, &PatchOptions::default())
}

/// Normalize the document at `path` and overwrite it.
///
/// The file is written even when nothing changed. On any error before the
/// write the file on disk is left exactly as it was.
pub fn normalize_with(path: &Path, options: &PatchOptions) -> Result<NormalizeReport, PatchError> {
    let mut doc = store::load(path)?;
    let report = normalize_document(&mut doc)?;
    store::save(path, &doc, options.write_mode)?;

    tracing::info!(
        path = %path.display(),
        updated = report.updated,
        brands = report.brand_count(),
        "normalized document"
    );
    Ok(report)
}
