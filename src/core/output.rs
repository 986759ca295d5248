//! Colored console messages for the moments den is not drawing the terminal
//! session: `--reset`, startup failures and failed launches after exit.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_helpers_do_not_panic() {
        print_error("Test error message");
        print_success("Configuration has been reset.");
    }
}
