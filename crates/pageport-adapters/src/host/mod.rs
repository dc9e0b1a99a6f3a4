//! Host adapters.

mod dialog;
pub mod disk;
mod local;

pub use dialog::{FixedDialog, NoDialog, SaveDialog};
pub use local::LocalHost;
