//! Page text acquisition.
//!
//! Decoding PDF bytes is left to an external tool; this module only reads the
//! text it leaves behind and normalizes it before extraction.

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

const PAGE_BREAK: char = '\u{000C}';

/// Yields the ordered page texts of one report.
pub trait PageSource {
    fn read_pages(&self, path: &Path) -> Result<Vec<String>>;
}

/// Reads text already decoded from a report.
///
/// `.json` files hold an array of page strings. Anything else is read as
/// UTF-8 with pages separated by form feeds, the layout `pdftotext` writes.
#[derive(Debug, Clone, Default)]
pub struct TextDumpSource;

impl PageSource for TextDumpSource {
    fn read_pages(&self, path: &Path) -> Result<Vec<String>> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading page text: {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let pages: Vec<String> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing page array: {}", path.display()))?;
            return Ok(pages);
        }

        Ok(split_pages(&raw))
    }
}

/// Splits a text dump on form feeds. The empty tail after a final form feed is
/// not a page.
pub fn split_pages(raw: &str) -> Vec<String> {
    let mut pages: Vec<String> = raw.split(PAGE_BREAK).map(str::to_string).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}

pub fn normalize_page(text: &str, unicode: bool) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    if unicode {
        text.nfkc().collect::<String>()
    } else {
        text
    }
}

pub fn read_manual_entry(path: &Path) -> Result<crate::record::ManualEntry> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading manual entry: {}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| anyhow!("invalid manual entry {}: {e}", path.display()))
}
