use std::sync::Arc;

use axum::{Router, middleware};

use crate::middleware::{catch_panic_layer, json_error_middleware};
use crate::state::AppState;

pub mod public;
pub mod to_do_list;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(to_do_list::router(state))
}

/// Routes plus the error-shaping and panic layers, served by main and the
/// integration tests alike.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}
