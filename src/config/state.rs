// Application state module
// Immutable runtime state shared across connections

use super::types::Config;

/// Application state
///
/// Holds the loaded configuration for the lifetime of the server. Requests
/// share it behind an `Arc` and never mutate it.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}
