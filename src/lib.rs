pub mod catalog;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

pub use error::{AppError, AppResult};
