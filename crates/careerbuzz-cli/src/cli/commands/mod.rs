//! CLI command handlers.

pub mod analyze;
pub mod config;
pub mod landing;
pub mod theme;
