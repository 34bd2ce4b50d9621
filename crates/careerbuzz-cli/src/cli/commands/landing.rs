//! Interactive landing page command.

use anyhow::Result;
use careerbuzz_core::config::Config;

#[cfg(feature = "tui")]
pub fn run(config: &Config) -> Result<()> {
    careerbuzz_tui::run_landing(config)
}

#[cfg(not(feature = "tui"))]
pub fn run(_config: &Config) -> Result<()> {
    anyhow::bail!(
        "This build has no terminal UI.\n\
         Use `careerbuzz analyze --skills '...'` instead."
    )
}
