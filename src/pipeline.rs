use std::path::Path;

use log::info;

use crate::categories::extract_unique_categories;
use crate::errors::ExtractError;
use crate::output::write_categories_file;
use crate::record::SubjectRecord;
use crate::source::RecordSource;

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Rows consumed from the split.
    pub rows: usize,
    /// Unique categories written to the output file.
    pub categories: usize,
}

/// Load one split, collect its unique subject categories, write them out.
///
/// Single linear pass: fetch rows, validate each subject field, union the
/// labels, serialize the sorted result. Any failure aborts the run.
pub fn run_extraction(
    source: &dyn RecordSource,
    split: &str,
    out_path: &Path,
) -> Result<ExtractionReport, ExtractError> {
    info!("Loading split '{split}' from {}", source.describe());
    let raw_rows = source.fetch_rows(split)?;
    info!("Loaded {} row(s)", raw_rows.len());

    let mut subject_lists = Vec::with_capacity(raw_rows.len());
    for (index, row) in raw_rows.iter().enumerate() {
        subject_lists.push(SubjectRecord::from_row(row, index)?.subjects);
    }

    let categories = extract_unique_categories(subject_lists);
    let written = write_categories_file(&categories, out_path)?;
    info!("Wrote {written} unique categories to {}", out_path.display());

    Ok(ExtractionReport {
        rows: raw_rows.len(),
        categories: written,
    })
}
