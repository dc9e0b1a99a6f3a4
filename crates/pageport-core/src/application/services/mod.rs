//! Application services - orchestrate use cases.
//!
//! `ExportService` handles export requests; `invocation` and `vfs_reader`
//! are the two steps it delegates to.

pub mod export_service;
pub mod invocation;
pub mod vfs_reader;

pub use export_service::ExportService;
pub use invocation::{ExportOutcome, invoke_export};
pub use vfs_reader::extract_first_file;
