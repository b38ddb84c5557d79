//! Application layer - Use cases and orchestration
//!
//! Contains the weather lookup use case and the port definitions its
//! upstream resolvers must implement. Orchestrates domain objects and
//! infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
