pub mod clients;
pub mod error;
pub mod http;
pub mod models;
pub mod prompt;
pub mod services;

pub use error::{AppError, Result};
