//! Theme preference commands.

use std::sync::Arc;

use anyhow::Result;
use careerbuzz_core::preferences::TomlPreferenceStore;
use careerbuzz_core::theme::{NoPresentation, ThemeController};

fn controller() -> ThemeController {
    ThemeController::load(
        Arc::new(TomlPreferenceStore::at_default_path()),
        Arc::new(NoPresentation),
    )
}

pub fn show() -> Result<()> {
    println!("{}", controller().current());
    Ok(())
}

pub fn toggle() -> Result<()> {
    let theme = controller().toggle();
    println!("Theme set to {theme}");
    Ok(())
}
