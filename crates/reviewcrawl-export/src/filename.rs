//! Output filename normalization.

const EXTENSION: &str = "xlsx";

/// Used when the requested name is blank.
pub const DEFAULT_OUTPUT_FILE: &str = "reviews.xlsx";

/// Makes sure `name` carries the `.xlsx` extension the writer produces.
///
/// - `reviews.xlsx` is kept as is (extension matched case-insensitively).
/// - `reviews.xls` is rewritten to `reviews.xlsx`.
/// - `reviews.` gets `xlsx` appended.
/// - anything else gets `.xlsx` appended.
#[must_use]
pub fn normalize_output_filename(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_OUTPUT_FILE.to_owned();
    }

    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".xlsx") {
        name.to_owned()
    } else if lower.ends_with(".xls") {
        format!("{}.{EXTENSION}", &name[..name.len() - ".xls".len()])
    } else if name.ends_with('.') {
        format!("{name}{EXTENSION}")
    } else {
        format!("{name}.{EXTENSION}")
    }
}
