//! Color utilities for CLI output
//!
//! Provides consistent color styling for mount states.

use console::{Style, StyledObject};

/// Style a mount state string with appropriate colors
///
/// - "mounted" -> green bold
/// - "not mounted" -> red
/// - other -> dim
pub fn mount_state_style(state: &str) -> StyledObject<String> {
    let style = match state {
        "mounted" => Style::new().green().bold(),
        "not mounted" => Style::new().red(),
        _ => Style::new().dim(),
    };
    style.apply_to(state.to_string())
}
