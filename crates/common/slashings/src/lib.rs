#![warn(clippy::unwrap_used)]

pub mod detector;
pub mod errors;
pub mod event;
pub mod intersection;
pub mod notifier;
