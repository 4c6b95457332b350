pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::error::{ApiError, Result as ApiResult};
pub use api::events::AppState;
pub use config::{Config, LogLevel};
pub use error::{Result, ServerError};
pub use routes::build_router;
