//! Subcommand implementations for the Shelfwatch CLI.

pub mod onboard;
pub mod report;
pub mod status;
