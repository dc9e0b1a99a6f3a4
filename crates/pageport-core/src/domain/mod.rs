// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Pageport.
//!
//! This module contains the pure data of an export: identifiers, projects,
//! bus messages, and the outcome types used at the filesystem boundary.
//! All I/O is reached through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
pub mod entities;
pub mod error;
pub mod outcome;
pub mod value_objects;

pub use entities::{
    message::{ExportHtmlProject, ExportHtmlProjectPayload, FailureNotification, Message, ShowError},
    project::Project,
};

pub use error::{DomainError, ErrorCategory};

pub use outcome::{ErrorReport, FsOutcome, VfsError};

pub use value_objects::{AppId, ExportLocation, HostType, MessageId, ProjectId, TransactionId};
