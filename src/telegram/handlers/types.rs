//! Handler types and dependencies

use std::sync::Arc;

use crate::storage::files::FileStore;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub store: Arc<dyn FileStore>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }
}
