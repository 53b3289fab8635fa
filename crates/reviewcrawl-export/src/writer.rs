//! Workbook output: one worksheet per product, a bold header row, then one
//! row per review. Every value is written as a string cell.

use std::path::Path;

use reviewcrawl_core::{ProductJob, ReviewRecord};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error::ExportError;
use crate::sheet_name::SheetNamer;

pub const HEADER: [&str; 5] = ["Name", "Date", "Stars", "Title", "Content"];

pub const HEADER_TRANSLATED: [&str; 7] = [
    "Name",
    "Date",
    "Stars",
    "Title",
    "Trans_title",
    "Content",
    "Trans_content",
];

const WIDTHS: [f64; 5] = [20.0, 12.0, 7.0, 32.0, 80.0];
const WIDTHS_TRANSLATED: [f64; 7] = [20.0, 12.0, 7.0, 32.0, 32.0, 80.0, 80.0];

/// Workbook under construction; [`write_workbook`] is the public entry point.
struct ReviewWorkbook {
    workbook: Workbook,
    namer: SheetNamer,
    header_format: Format,
    include_translation: bool,
    sheet_names: Vec<String>,
}

impl ReviewWorkbook {
    /// Starts an empty workbook. With `include_translation` every sheet gets
    /// the seven-column layout carrying `Trans_title` and `Trans_content`.
    fn new(include_translation: bool) -> Self {
        Self {
            workbook: Workbook::new(),
            namer: SheetNamer::new(),
            header_format: Format::new().set_bold(),
            include_translation,
            sheet_names: Vec::new(),
        }
    }

    /// Appends a worksheet for `job`. A job without records still gets a
    /// sheet holding only the header.
    fn add_product(&mut self, job: &ProductJob) -> Result<(), ExportError> {
        let position = self.sheet_names.len() + 1;
        let sheet = self.namer.unique_name(&job.product_name, position);

        let worksheet = self.workbook.add_worksheet();
        fill_worksheet(
            worksheet,
            &sheet,
            &job.records,
            self.include_translation,
            &self.header_format,
        )
        .map_err(|source| ExportError::Worksheet {
            sheet: sheet.clone(),
            source,
        })?;

        tracing::debug!(
            sheet = %sheet,
            rows = job.records.len(),
            "worksheet written"
        );
        self.sheet_names.push(sheet);
        Ok(())
    }

    /// Writes the workbook to `path`, replacing any existing file, and
    /// returns the worksheet names in order.
    fn save(mut self, path: &Path) -> Result<Vec<String>, ExportError> {
        self.workbook
            .save(path)
            .map_err(|source| ExportError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(
            path = %path.display(),
            sheets = self.sheet_names.len(),
            "workbook saved"
        );
        Ok(self.sheet_names)
    }
}

/// Writes every job to a new workbook at `path`, in order, and returns the
/// worksheet names used.
///
/// # Errors
///
/// Returns [`ExportError`] if any sheet or the file itself cannot be written.
pub fn write_workbook(
    path: &Path,
    jobs: &[ProductJob],
    include_translation: bool,
) -> Result<Vec<String>, ExportError> {
    let mut workbook = ReviewWorkbook::new(include_translation);
    for job in jobs {
        workbook.add_product(job)?;
    }
    workbook.save(path)
}

fn fill_worksheet(
    worksheet: &mut Worksheet,
    sheet: &str,
    records: &[ReviewRecord],
    include_translation: bool,
    header_format: &Format,
) -> Result<(), XlsxError> {
    worksheet.set_name(sheet)?;

    let (header, widths): (&[&str], &[f64]) = if include_translation {
        (&HEADER_TRANSLATED, &WIDTHS_TRANSLATED)
    } else {
        (&HEADER, &WIDTHS)
    };
    for ((col, title), width) in (0u16..).zip(header).zip(widths) {
        worksheet.write_string_with_format(0, col, *title, header_format)?;
        worksheet.set_column_width(col, *width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (row, record) in (1u32..).zip(records) {
        for (col, value) in (0u16..).zip(row_values(record, include_translation)) {
            // Empty strings stay blank cells.
            if !value.is_empty() {
                worksheet.write_string(row, col, value)?;
            }
        }
    }
    Ok(())
}

fn row_values(record: &ReviewRecord, include_translation: bool) -> Vec<&str> {
    if include_translation {
        vec![
            record.customer_name.as_str(),
            record.date.as_str(),
            record.stars.as_str(),
            record.title.as_str(),
            record.trans_title.as_deref().unwrap_or_default(),
            record.content.as_str(),
            record.trans_content.as_deref().unwrap_or_default(),
        ]
    } else {
        vec![
            record.customer_name.as_str(),
            record.date.as_str(),
            record.stars.as_str(),
            record.title.as_str(),
            record.content.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_values_follow_plain_header_order() {
        let record = ReviewRecord::new("Ann", "5/2/2019", "5.0", "Great", "Loved it");
        assert_eq!(
            row_values(&record, false),
            ["Ann", "5/2/2019", "5.0", "Great", "Loved it"]
        );
    }

    #[test]
    fn row_values_interleave_translations() {
        let record = ReviewRecord::new("Ann", "5/2/2019", "5.0", "Great", "Loved it")
            .with_translation("很棒".to_owned(), "喜欢".to_owned());
        assert_eq!(
            row_values(&record, true),
            ["Ann", "5/2/2019", "5.0", "Great", "很棒", "Loved it", "喜欢"]
        );
    }

    #[test]
    fn untranslated_record_leaves_translation_columns_empty() {
        let record = ReviewRecord::new("Ann", "5/2/2019", "5.0", "Great", "Loved it");
        let values = row_values(&record, true);
        assert_eq!(values.len(), HEADER_TRANSLATED.len());
        assert_eq!(values[4], "");
        assert_eq!(values[6], "");
    }

    #[test]
    fn add_product_records_unique_sheet_names_in_order() {
        let mut workbook = ReviewWorkbook::new(false);
        workbook.add_product(&ProductJob::new("http://a", "Box Fan")).unwrap();
        workbook.add_product(&ProductJob::new("http://b", "box fan")).unwrap();
        workbook.add_product(&ProductJob::new("http://c", "")).unwrap();
        assert_eq!(workbook.sheet_names, ["Box Fan", "box fan (2)", "Product 3"]);
    }
}
