pub mod api;
pub mod config;
pub mod error;
pub mod languages;
pub mod openai;
pub mod speech;
pub mod translate;

pub use api::routes::{create_router, AppState};
pub use config::Config;
