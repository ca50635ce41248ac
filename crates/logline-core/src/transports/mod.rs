//! Transports: pluggable sinks for formatted log lines
//!
//! This module provides:
//! - `Transport` trait for implementing custom sinks
//! - Built-in implementations: `ConsoleTransport`, `FileTransport`, `MemoryTransport`, `NoOpTransport`
//! - A registry for creating transports by name

mod traits;
mod console;
mod file;
mod memory;
mod noop;
mod registry;

pub use traits::{Transport, BoxedTransport, SharedTransport};
pub use console::ConsoleTransport;
pub use file::FileTransport;
pub use memory::{MemoryTransport, LogRecord};
pub use noop::NoOpTransport;
pub use registry::{
    register_transport, create_transport, list_transports,
    has_transport, unregister_transport, TransportDefinition, TransportFactory,
};
