//! Console output helpers.
//!
//! Pure display functions, no user interaction. All state changes are
//! reported through these so the main flow stays readable.

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Display the proposed version change.
///
/// # Arguments
/// * `old` - The version currently stored in the config file
/// * `new` - The version it will be bumped to
pub fn display_version_change(old: &str, new: &str) {
    println!("\n\x1b[1mVersion Change:\x1b[0m");
    println!("  From: \x1b[31m{}\x1b[0m", old);
    println!("  To:   \x1b[32m{}\x1b[0m", new);
}

/// Display the suggested git commands for the release.
///
/// The commands are printed, never executed.
///
/// # Arguments
/// * `commands` - Fully rendered command lines (add, commit, tag)
pub fn display_git_instructions(commands: &[String]) {
    println!("\nDon't forget to commit these changes and create a git tag:");
    for command in commands {
        println!("  \x1b[36m{}\x1b[0m", command);
    }
}
