//! Output generation for synthetic clinical record datasets.
//!
//! - **Bundles**: order-preserving containers addressed by `urn:uuid:<id>`
//! - **Resource files**: one validated JSON document per resource, grouped
//!   into per-subject folders
//! - **Summaries**: one CSV row of demographics and vitals per subject

pub mod bundle;
mod error;
mod export;
mod options;
mod summary;

pub use bundle::{Bundle, BundleEntry, BundleType, bundle, full_url};
pub use error::{OutputError, Result};
pub use export::{
    DATASET_BUNDLE_FILE, DatasetExport, Exporter, SUBJECT_BUNDLE_FILE, SubjectExport,
    subject_folder_name,
};
pub use options::ExportOptions;
pub use summary::{
    SUMMARY_HEADERS, SummaryRow, export_csv_summary, summarize, summary_row, write_summary_csv,
};
