pub mod config;
pub mod errors;
pub mod report;
pub mod service;

pub use config::{RunMode, SlashingsConfig};
pub use errors::{ConfigError, SlashingsError};
pub use report::BlockReport;
pub use service::{HeadSubscription, Outcome, SlashingsService};
