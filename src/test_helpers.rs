use axum::Router;

use crate::{config::AppConfig, routes, state::AppState};

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        log_level: "warn".to_string(),
    }
}

/// Fresh app with an empty store, the same layer stack the binary serves.
pub fn test_router() -> Router {
    routes::app(AppState::new(test_config()))
}
