//! Transport registry for discovering and creating transports by name
//!
//! Config files refer to custom transports (network sinks, channels) by the
//! name they were registered under.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::console::ConsoleTransport;
use super::noop::NoOpTransport;
use super::traits::SharedTransport;

/// Factory function type for creating transports
pub type TransportFactory = Box<dyn Fn() -> SharedTransport + Send + Sync>;

/// Definition of a registered transport
pub struct TransportDefinition {
    /// Unique name for this transport
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: TransportFactory,
}

impl std::fmt::Debug for TransportDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Global registry of transports
static REGISTRY: Lazy<RwLock<HashMap<String, TransportDefinition>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Register built-in transports
    map.insert(
        "console".to_string(),
        TransportDefinition {
            name: "console".to_string(),
            description: "stdout for trace/debug/info, stderr for warn/error".to_string(),
            factory: Box::new(|| Arc::new(ConsoleTransport::new()) as SharedTransport),
        },
    );

    map.insert(
        "noop".to_string(),
        TransportDefinition {
            name: "noop".to_string(),
            description: "Discard every line".to_string(),
            factory: Box::new(|| Arc::new(NoOpTransport::new()) as SharedTransport),
        },
    );

    RwLock::new(map)
});

/// Register a new transport type, replacing any previous one with that name
///
/// # Example
///
/// ```
/// use logline_core::transports::{register_transport, create_transport, NoOpTransport, SharedTransport};
/// use std::sync::Arc;
///
/// register_transport(
///     "quiet",
///     "Silent sink",
///     Box::new(|| Arc::new(NoOpTransport::new()) as SharedTransport),
/// );
/// assert!(create_transport("quiet").is_some());
/// ```
pub fn register_transport(name: &str, description: &str, factory: TransportFactory) {
    let mut registry = REGISTRY.write();
    registry.insert(
        name.to_string(),
        TransportDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a transport by name
///
/// # Returns
/// The created transport, or None if the name is not registered
pub fn create_transport(name: &str) -> Option<SharedTransport> {
    let registry = REGISTRY.read();
    registry.get(name).map(|def| (def.factory)())
}

/// List all registered transports as (name, description) pairs
pub fn list_transports() -> Vec<(String, String)> {
    let registry = REGISTRY.read();
    registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect()
}

/// Check if a transport is registered
pub fn has_transport(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Unregister a transport (mainly for testing)
pub fn unregister_transport(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}
