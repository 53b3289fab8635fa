pub mod error;
pub mod filename;
pub mod sheet_name;
pub mod writer;

pub use error::ExportError;
pub use filename::normalize_output_filename;
pub use sheet_name::{sanitize_sheet_name, SheetNamer, MAX_SHEET_NAME_CHARS};
pub use writer::{write_workbook, HEADER, HEADER_TRANSLATED};
