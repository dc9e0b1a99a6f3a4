//! Pageport Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for exporting a
//! design project as a standalone HTML file, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   pageport-cli (CLI / message bus)      │
//! │     (Drives ExportService::handle)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ExportService, invoke_export,         │
//! │   extract_first_file)                   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Host, App, DataHost, ExportEngine,     │
//! │  VirtualFilesystem)                     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   pageport-adapters (Infrastructure)    │
//! │ (LocalHost, ChannelApp, TemplateEngine, │
//! │  InMemoryProjectStore, MemoryFilesystem)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Data)        │
//! │ (Project, Message, FsOutcome, ids)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pageport_core::prelude::*;
//!
//! let service = ExportService::new(host, data_host, engine, Some(location));
//! service
//!     .handle(ExportHtmlProject::new(app_id, project_id).with_path("site.html"))
//!     .await;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExportService,
        ports::{App, DataHost, EngineError, ExportEngine, Host, SaveFileOptions, VirtualFilesystem},
    };
    pub use crate::domain::{
        AppId, ErrorReport, ExportHtmlProject, ExportLocation, FailureNotification, FsOutcome,
        HostType, Message, Project, ProjectId, ShowError, TransactionId, VfsError,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
