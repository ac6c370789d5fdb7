pub mod config;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod swagger;

pub use config::Config;
pub use error::{AppError, AppResult};
