//! Colored diagnostic prefixes for stderr messages.

use owo_colors::OwoColorize;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for recoverable per-line problems.
pub fn warning_prefix() -> String {
    if use_colors() {
        "WARNING:".yellow().bold().to_string()
    } else {
        "WARNING:".to_string()
    }
}

/// Prefix for fatal problems and fallback-triggering metadata gaps.
pub fn error_prefix() -> String {
    if use_colors() {
        "ERROR:".red().bold().to_string()
    } else {
        "ERROR:".to_string()
    }
}

/// Bold a section title for terminal output.
pub fn title(text: &str) -> String {
    if use_colors() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
