pub mod cli;
pub mod startup_message;

pub const APP_NAME: &str = "slashwatch";
pub const SLASHWATCH_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validator index passed to the configured scripts by `test-scripts`.
pub const TEST_SCRIPTS_VALIDATOR_INDEX: u64 = 12345678;
