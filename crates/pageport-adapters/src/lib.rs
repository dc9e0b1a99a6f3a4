//! Infrastructure adapters for Pageport.
//!
//! This crate implements the ports defined in `pageport-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod bus;
pub mod engine;
pub mod host;
pub mod store;
pub mod vfs;

// Re-export commonly used adapters
pub use bus::ChannelApp;
pub use engine::{DEFAULT_TEMPLATE, RenderContext, TemplateEngine};
pub use host::{FixedDialog, LocalHost, NoDialog, SaveDialog};
pub use store::InMemoryProjectStore;
pub use vfs::MemoryFilesystem;
