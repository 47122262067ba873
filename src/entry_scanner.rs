//! Entry boundary detection for catalogue exports.
//!
//! A catalogue export is a concatenation of entry blocks, each starting on a
//! line whose first character is `@`. This module locates those boundaries with
//! the SIMD-accelerated `memchr` crate and hands back the trimmed blocks.
//!
//! # Example
//!
//! ```
//! use bibshelf::entry_scanner::split_entries;
//!
//! let blob = "@book{a,\n title = {One}\n}\n@article{b,\n title = {Two}\n}\n";
//! let blocks = split_entries(blob);
//!
//! assert_eq!(blocks.len(), 2);
//! assert!(blocks[1].starts_with("@article"));
//! ```

use unicode_normalization::UnicodeNormalization;

/// The byte that opens every entry block when it starts a line.
const ENTRY_MARKER: u8 = b'@';

/// Scan a blob for entry start offsets.
///
/// Returns the byte offsets of every `@` that sits at the start of a line.
/// Text before the first marker is not part of any entry.
#[must_use]
pub fn scan_entry_starts(blob: &str) -> Vec<usize> {
    let bytes = blob.as_bytes();
    memchr::memchr_iter(ENTRY_MARKER, bytes)
        .filter(|&pos| pos == 0 || bytes[pos - 1] == b'\n')
        .collect()
}

/// Split a blob into trimmed, non-empty entry blocks.
///
/// Any text blob splits into zero or more entries; a blob without markers
/// yields an empty vector.
#[must_use]
pub fn split_entries(blob: &str) -> Vec<&str> {
    let starts = scan_entry_starts(blob);
    let mut blocks = Vec::with_capacity(starts.len());

    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(blob.len());
        let block = blob[start..end].trim();
        if !block.is_empty() {
            blocks.push(block);
        }
    }

    log::debug!("Split input into {} entry blocks", blocks.len());
    blocks
}

/// Normalize a raw export to Unicode NFC before splitting.
///
/// Catalogue exports mix precomposed and decomposed Cyrillic (`й` vs `и` +
/// combining breve), which would otherwise break value deduplication.
#[must_use]
pub fn normalize_export(blob: &str) -> String {
    blob.nfc().collect()
}
