use thiserror::Error;

/// The pair of marker patterns used to locate the insertion point.
///
/// `primary` is a multi-line pattern that begins with a line terminator, so a
/// match at byte `i` puts the start of the following line at `i + 1`.
/// `fallback` is a single-line substring of the primary, consulted only when
/// the primary is absent.
#[derive(Debug, Clone)]
pub struct Anchor {
    pub primary: String,
    pub fallback: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    // Covers both "no marker present" and "marker resolves to offset 0";
    // inserting ahead of a file's opening line is rejected as unsafe.
    #[error("anchor not found in target document")]
    AnchorNotFound,
}

/// A successful splice: the new document plus where the content landed.
#[derive(Debug)]
pub struct Splice {
    pub document: String,
    pub offset: usize,
    pub used_fallback: bool,
}

/// Converts every line ending in `content` to `\n`.
///
/// A lone `\r` is folded as well, so the output never contains `\r` and a
/// second pass is a no-op.
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Finds the insertion offset for `anchor` in `document`, or `None` when
/// neither marker occurs.
///
/// First occurrence only, case-sensitive. A primary match at `i` resolves to
/// `i + 1`; a fallback match backtracks to the start of the line containing
/// it, which is offset 0 when the match sits on the first line.
pub fn resolve_anchor(document: &str, anchor: &Anchor) -> Option<usize> {
    if let Some(i) = document.find(&anchor.primary) {
        return Some(i + 1);
    }
    let j = document.find(&anchor.fallback)?;
    match document[..j].rfind('\n') {
        Some(nl) => Some(nl + 1),
        None => Some(0),
    }
}

/// Inserts `content` into `document` at `offset`.
///
/// Plain three-segment concatenation; `offset` must lie on a char boundary
/// within `0..=document.len()`.
pub fn splice_at(document: &str, offset: usize, content: &str) -> String {
    let mut out = String::with_capacity(document.len() + content.len());
    out.push_str(&document[..offset]);
    out.push_str(content);
    out.push_str(&document[offset..]);
    out
}

/// Inserts `new_content` (newline-normalized first) into `document`
/// immediately before the anchor line.
///
/// Fails with [`SpliceError::AnchorNotFound`] when neither marker occurs or
/// when the resolved offset is 0; the input is never touched on the failure
/// path. Re-running on the output inserts the content a second time — the
/// anchor text survives the splice.
pub fn splice_document(
    document: &str,
    new_content: &str,
    anchor: &Anchor,
) -> Result<Splice, SpliceError> {
    let content = normalize_newlines(new_content);
    let offset = resolve_anchor(document, anchor).ok_or(SpliceError::AnchorNotFound)?;
    if offset == 0 {
        return Err(SpliceError::AnchorNotFound);
    }
    Ok(Splice {
        used_fallback: !document.contains(&anchor.primary),
        document: splice_at(document, offset, &content),
        offset,
    })
}
