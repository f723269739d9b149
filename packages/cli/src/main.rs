//! nasctl CLI - Manage a NAS share mount
//!
//! This is the main entry point for the nasctl binary.

use anyhow::Result;

fn main() -> Result<()> {
    nasctl::run()
}
