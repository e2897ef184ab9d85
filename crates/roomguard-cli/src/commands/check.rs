//! Check command - validate a config against the registered protections.

use std::path::PathBuf;

use anyhow::Result;
use roomguard_core::ConfigError;
use roomguard_protections::ProtectionRegistry;

use crate::ui;

/// Check command arguments.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Config file override.
    pub config: Option<PathBuf>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let registry = ProtectionRegistry::builtin()?;
    let config = super::load_config(args.config.as_deref())?;

    ui::header("Config Check");

    if config.protections.is_empty() {
        ui::warning("No protections configured");
        return Ok(());
    }

    let mut problems = 0usize;
    for name in config.protections.keys() {
        let Some(descriptor) = registry.get(name) else {
            ui::error(&format!("{name}: unknown protection"));
            problems += 1;
            continue;
        };

        tracing::debug!(protection = %name, "Checking protection config");
        let mut protection = descriptor.instantiate();
        match config.apply(name, protection.settings_mut()) {
            Ok(()) if config.is_enabled(name) => ui::success(name),
            Ok(()) => ui::success(&format!("{name} (disabled)")),
            Err(ConfigError::Rejected(rejections)) => {
                for rejection in &rejections {
                    ui::error(&rejection.to_string());
                }
                problems += rejections.len();
            }
            Err(e) => {
                ui::error(&e.to_string());
                problems += 1;
            }
        }
    }

    println!();
    if problems > 0 {
        anyhow::bail!("{problems} problem(s) found");
    }
    ui::success("Config is valid");
    Ok(())
}
