//! Output utilities for CLI commands
//!
//! This module provides terminal output helpers: color utilities for
//! consistent mount-state styling and the centralized error formatter used
//! by every command's failure path.

pub mod colors;
pub mod errors;

pub use colors::mount_state_style;
pub use errors::show_error;
