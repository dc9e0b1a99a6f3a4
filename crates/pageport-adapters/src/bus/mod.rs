//! Message bus adapters.

mod channel;

pub use channel::ChannelApp;
