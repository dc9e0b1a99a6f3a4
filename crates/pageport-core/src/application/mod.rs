//! Application layer for Pageport.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ExportService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer and the ports; data
//! rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ExportOutcome, ExportService, extract_first_file, invoke_export};

// Re-export port traits (for adapter implementation)
pub use ports::{App, DataHost, EngineError, ExportEngine, Host, SaveFileOptions, VirtualFilesystem};

pub use error::ApplicationError;
