//! Configuration domain module

mod app_config;
mod clipboard_backend;

pub use app_config::AppConfig;
pub use clipboard_backend::ClipboardBackend;
