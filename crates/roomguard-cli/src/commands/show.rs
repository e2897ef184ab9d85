//! Show command - print a protection's settings after config overrides.

use std::path::PathBuf;

use anyhow::Result;
use roomguard_protections::ProtectionRegistry;

use crate::ui;

/// Show command arguments.
#[derive(Debug, Clone)]
pub struct ShowArgs {
    /// Protection name.
    pub name: String,
    /// Config file override.
    pub config: Option<PathBuf>,
}

/// Run the show command.
pub fn run_show(args: ShowArgs) -> Result<()> {
    let registry = ProtectionRegistry::builtin()?;
    let config = super::load_config(args.config.as_deref())?;

    let descriptor = registry
        .get(&args.name)
        .ok_or_else(|| anyhow::anyhow!("Unknown protection: {}", args.name))?;
    let mut protection = descriptor.instantiate();
    config.apply(descriptor.name(), protection.settings_mut())?;

    ui::header(descriptor.name());
    println!("  {}", descriptor.description());
    println!();

    let enabled = if config.is_enabled(descriptor.name()) {
        "yes"
    } else {
        "no"
    };
    ui::kv("Enabled", enabled);

    let settings = protection.settings();
    if settings.is_empty() {
        ui::info("This protection has no settings");
        return Ok(());
    }

    for (name, setting) in settings.iter() {
        ui::kv(
            name,
            &format!("{} ({})", setting.value_json(), setting.type_name()),
        );
    }

    Ok(())
}
