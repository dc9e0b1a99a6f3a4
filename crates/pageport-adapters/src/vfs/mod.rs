//! Virtual filesystem adapters.

mod memory;

pub use memory::MemoryFilesystem;
