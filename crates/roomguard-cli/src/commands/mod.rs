//! CLI command implementations.

pub mod check;
pub mod list;
pub mod show;

pub use check::run_check;
pub use list::run_list;
pub use show::run_show;

use std::path::Path;

use anyhow::{Context, Result};
use roomguard_core::Config;

/// Load the config from `path`, or from the default location.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load_default().context("Failed to load default config"),
    }
}
