//! CareerBuzz core library (service client, config, preferences, theme).

pub mod analysis;
pub mod api;
pub mod config;
pub mod logging;
pub mod preferences;
pub mod theme;
