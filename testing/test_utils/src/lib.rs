//! In-memory stand-ins for the chain client and metrics sink, shared by the workspace's tests.

pub mod blocks;
pub mod metrics;
pub mod providers;
