use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::splice::{Anchor, splice_document};

/// Result of splicing a content file into a target file, before any write.
#[derive(Debug)]
pub struct ApplyOutcome {
    pub document: String,
    pub offset: usize,
    pub inserted: usize,
    pub used_fallback: bool,
}

/// Reads both files and splices in memory. Nothing is written here, so a
/// failed resolution leaves the target exactly as it was on disk.
pub fn splice_files(target: &Path, content_file: &Path, anchor: &Anchor) -> Result<ApplyOutcome> {
    let document = fs::read_to_string(target)
        .with_context(|| format!("failed to read target file {}", target.display()))?;
    let content = fs::read_to_string(content_file)
        .with_context(|| format!("failed to read content file {}", content_file.display()))?;

    let splice = splice_document(&document, &content, anchor)?;
    Ok(ApplyOutcome {
        inserted: splice.document.len() - document.len(),
        offset: splice.offset,
        used_fallback: splice.used_fallback,
        document: splice.document,
    })
}

pub fn write_result(destination: &Path, document: &str) -> Result<()> {
    fs::write(destination, document)
        .with_context(|| format!("failed to write {}", destination.display()))
}
