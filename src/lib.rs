//! Tooling for the `siacus/dv_subject` dataset: load a split, collect the
//! unique subject categories across all records, and write them as a sorted
//! JSON array.

/// Category set-union and ordering.
pub mod categories;
/// Error taxonomy shared by sources, parsing, and output.
pub mod errors;
/// JSON output writer.
pub mod output;
/// The load -> parse -> extract -> write pipeline.
pub mod pipeline;
/// Per-row subject field validation.
pub mod record;
/// Dataset sources (Hugging Face Hub, local files).
pub mod source;

pub use categories::extract_unique_categories;
pub use errors::ExtractError;
pub use output::write_categories_file;
pub use pipeline::{run_extraction, ExtractionReport};
pub use record::{SubjectRecord, SUBJECT_FIELD};
pub use source::{HubDataset, JsonFileSource, RecordSource};
