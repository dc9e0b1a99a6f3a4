pub mod message;
pub mod project;
