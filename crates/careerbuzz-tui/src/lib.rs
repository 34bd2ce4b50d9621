//! Full-screen landing page for CareerBuzz.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};
use std::sync::Arc;

use anyhow::Result;
use careerbuzz_core::api::HttpCareerApi;
use careerbuzz_core::config::Config;
use careerbuzz_core::preferences::TomlPreferenceStore;
pub use runtime::{SessionController, TuiRuntime};

/// Runs the interactive landing page against the configured service.
///
/// # Errors
/// Returns an error if stderr is not a terminal, the API URL is invalid, or
/// the terminal cannot be driven.
pub fn run_landing(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The landing page requires a terminal.\n\
             Use `careerbuzz analyze --skills '...'` for non-interactive use."
        );
    }

    let api = HttpCareerApi::from_config(config)?;
    tracing::info!(base_url = api.base_url(), "Starting landing session");

    let store = TomlPreferenceStore::at_default_path();
    let mut runtime = TuiRuntime::new(Arc::new(api), Arc::new(store))?;
    runtime.run()?;
    drop(runtime);

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
