//! Terminal output helpers for the git-versioning binary.
//!
//! The display version itself goes to stdout unstyled so it can be
//! captured by scripts; everything else goes to stderr.

use console::style;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Format a status message with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

/// Print the computed display version, or nothing when there is none.
pub fn display_version(version: Option<&str>) {
    if let Some(version) = version {
        println!("{}", version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_contains_message() {
        console::set_colors_enabled(false);
        assert_eq!(format_error("bad config"), "ERROR: bad config");
    }

    #[test]
    fn test_format_status_contains_message() {
        console::set_colors_enabled(false);
        assert_eq!(format_status("Loading"), "→ Loading");
    }
}
