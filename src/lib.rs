pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod nav;
pub mod ui;

pub use error::{AppError, NavError, Result};
