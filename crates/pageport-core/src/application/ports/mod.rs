//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `pageport-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Host`: App lookup, logging, save dialog, file writes
//!   - `App`: Outbound messages to a UI surface
//!   - `DataHost`: Project lookup
//!   - `ExportEngine`: Project rendering
//!   - `VirtualFilesystem`: Reading what the engine rendered
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `ExportService::handle` (driven by the message bus)

pub mod output;

pub use output::{
    App, DataHost, EngineError, ExportEngine, FileFilter, Host, SaveFileOptions,
    VirtualFilesystem,
};

#[cfg(test)]
pub use output::{MockDataHost, MockExportEngine};
