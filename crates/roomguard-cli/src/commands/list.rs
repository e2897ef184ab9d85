//! List command - enumerate available protections.

use anyhow::Result;
use roomguard_protections::ProtectionRegistry;

use crate::ui;

/// Run the list command.
pub fn run_list() -> Result<()> {
    let registry = ProtectionRegistry::builtin()?;

    ui::header("Available Protections");
    for descriptor in registry.iter() {
        ui::entry(descriptor.name(), descriptor.description());
    }
    println!();
    ui::info(&format!("{} protection(s) registered", registry.len()));

    Ok(())
}
