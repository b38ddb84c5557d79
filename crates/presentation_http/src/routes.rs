//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// The catch-all `/{cep}` route must stay last so fixed routes like
/// `/health` take precedence.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/{cep}", get(handlers::weather::search_weather))
        .with_state(state)
}
