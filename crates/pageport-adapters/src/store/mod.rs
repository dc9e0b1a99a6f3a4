//! Project store adapters.

mod memory;

pub use memory::InMemoryProjectStore;
