//! tutorly-common — Shared configuration and error types used across all Tutorly crates.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::ApiError;
