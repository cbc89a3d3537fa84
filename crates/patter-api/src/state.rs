//! Application state shared by the REST API handlers.
//!
//! AppState holds the in-memory session registry and the loaded
//! configuration. The CLI chat loop does not use it; a single interactive
//! conversation owns its log directly.

use patter_core::session::SessionRegistry;

use crate::config::{load_config, resolve_data_dir, AppConfig};

/// Shared application state.
///
/// Cheap to clone; the registry is a shared view backed by `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub registry: SessionRegistry,
    pub config: AppConfig,
}

impl AppState {
    /// Initialize the application state: load config, start with an empty
    /// session registry.
    pub async fn init() -> Self {
        let data_dir = resolve_data_dir();
        let config = load_config(&data_dir).await;

        Self {
            registry: SessionRegistry::new(),
            config,
        }
    }
}
