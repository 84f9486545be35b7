pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

pub use api::{ApiClient, DEFAULT_TOP_N};
pub use config::Config;
pub use error::ApiError;
pub use routes::{Route, Router, ViewName, Views};
pub use state::AppState;
