use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write workbook {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("failed to fill worksheet \"{sheet}\": {source}")]
    Worksheet {
        sheet: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
