//! Resource-directory ingestion.
//!
//! Reads previously exported resource files back so they can be wrapped in
//! a new Bundle. Malformed files are skipped, never fatal.

pub mod discovery;
pub mod error;
pub mod loader;

pub use discovery::list_json_files;
pub use error::{IngestError, Result};
pub use loader::{IngestResult, SkipReason, SkippedFile, load_resources_from_dir};
