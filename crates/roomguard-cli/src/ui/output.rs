//! Formatted output utilities.

use console::style;

/// Print a success message with checkmark.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message with X.
pub fn error(msg: &str) {
    println!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header/section title.
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a protection name with its description underneath.
pub fn entry(name: &str, description: &str) {
    println!("  {}", style(name).cyan().bold());
    println!("    {}", style(description).dim());
}

/// Print a key-value pair.
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).bold(), value);
}
