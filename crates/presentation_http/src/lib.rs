//! HTTP presentation layer
//!
//! Exposes the weather lookup use case as a small JSON API.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
