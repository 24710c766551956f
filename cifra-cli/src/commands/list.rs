//! List command implementation

use crate::commands::ListCommands;
use crate::error::CliResult;
use cifra_core::{alphabet_preset, available_alphabets, available_maps, map_preset};

/// Execute a list subcommand
pub fn execute(subcommand: &ListCommands) -> CliResult<()> {
    match subcommand {
        ListCommands::Alphabets => list_alphabets(),
        ListCommands::Maps => list_maps(),
        ListCommands::Formats => list_formats(),
    }

    Ok(())
}

fn list_alphabets() {
    println!("Available alphabet presets:");
    for name in available_alphabets() {
        if let Ok(preset) = alphabet_preset(name) {
            println!("  {:<10} {}", name, preset.metadata.description);
        }
    }
}

fn list_maps() {
    println!("Available map presets:");
    for name in available_maps() {
        if let Ok(preset) = map_preset(name) {
            println!("  {:<10} {}", name, preset.metadata.description);
        }
    }
}

fn list_formats() {
    println!("Available output formats:");
    println!("  {:<10} {}", "text", "translated text only");
    println!(
        "  {:<10} {}",
        "json", "JSON array with input, output and direction"
    );
}
