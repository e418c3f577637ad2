//! Infrastructure layer
//!
//! Concrete collaborator implementations.

pub mod memory;

pub use memory::{BufferedNotifier, InMemoryTransmitter, Notification, TracingNotifier};
