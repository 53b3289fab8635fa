//! Worksheet naming.
//!
//! Product names are arbitrary text, while xlsx worksheet names must be at
//! most 31 characters, must not contain `/ \ ? * : [ ]`, must not begin or
//! end with an apostrophe, and must be unique within the workbook ignoring
//! case. `History` is reserved by Excel.

use std::collections::HashSet;

pub const MAX_SHEET_NAME_CHARS: usize = 31;

const FORBIDDEN: [char; 7] = ['/', '\\', '?', '*', ':', '[', ']'];
const REPLACEMENT: char = '|';
const RESERVED: &str = "history";

/// Replaces forbidden characters with `|`, drops control characters,
/// truncates to [`MAX_SHEET_NAME_CHARS`], and strips surrounding apostrophes
/// and whitespace. May return an empty string.
#[must_use]
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| if FORBIDDEN.contains(&c) { REPLACEMENT } else { c })
        .collect();
    let truncated: String = cleaned.trim().chars().take(MAX_SHEET_NAME_CHARS).collect();
    truncated
        .trim_matches(|c: char| c == '\'' || c.is_whitespace())
        .to_owned()
}

/// Hands out valid, unique worksheet names for one workbook.
#[derive(Debug)]
pub struct SheetNamer {
    used: HashSet<String>,
}

impl Default for SheetNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetNamer {
    #[must_use]
    pub fn new() -> Self {
        let mut used = HashSet::new();
        used.insert(RESERVED.to_owned());
        Self { used }
    }

    /// Returns a worksheet name for `product_name`.
    ///
    /// Names that sanitize to nothing become `Product {position}`. A name
    /// already handed out gets a ` (2)`, ` (3)`, ... suffix, shortening the
    /// base so the result still fits.
    pub fn unique_name(&mut self, product_name: &str, position: usize) -> String {
        let mut base = sanitize_sheet_name(product_name);
        if base.is_empty() {
            base = format!("Product {position}");
        }
        if self.used.insert(base.to_lowercase()) {
            return base;
        }

        let mut k = 2usize;
        loop {
            let suffix = format!(" ({k})");
            let room = MAX_SHEET_NAME_CHARS.saturating_sub(suffix.chars().count());
            let stem: String = base.chars().take(room).collect();
            let candidate = format!("{}{suffix}", stem.trim_end());
            if self.used.insert(candidate.to_lowercase()) {
                return candidate;
            }
            k += 1;
        }
    }
}
