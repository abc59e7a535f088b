// ABOUTME: Output helpers for bodycomp-cli
// ABOUTME: Prints rendered series and import results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use body_comp_tracker::formatters::FormattedOutput;

/// Print rendered output, ensuring a trailing newline
pub fn print_output(output: &FormattedOutput) {
    if output.data.ends_with('\n') {
        print!("{}", output.data);
    } else {
        println!("{}", output.data);
    }
}

/// Display the outcome of an import
pub fn display_import_result(provider: &str, received: usize, added: usize, path: &Path) {
    println!("\nImport from {provider} complete");
    println!("{}", "=".repeat(50));
    println!("   Measurements received: {received}");
    println!("   New entries added:     {added}");
    println!("   Store:                 {}", path.display());

    if received > 0 && added == 0 {
        println!("\nAll received measurements were already stored.");
    } else if received == 0 {
        println!("\nNo new measurements available.");
    }
}
