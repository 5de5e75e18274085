use std::net::{IpAddr, SocketAddr};

use clap::Args;

use crate::cli::constants::{DEFAULT_METRICS_ADDRESS, DEFAULT_METRICS_PORT};

#[derive(Debug, Clone, Args)]
pub struct MetricsArgs {
    /// Serve prometheus metrics
    #[arg(long = "metrics", env = "SLASHWATCH_METRICS")]
    pub enable_metrics: bool,

    /// Address the metrics server listens on
    #[arg(long, env = "SLASHWATCH_METRICS_ADDRESS", default_value = DEFAULT_METRICS_ADDRESS)]
    pub metrics_address: IpAddr,

    /// Port the metrics server listens on
    #[arg(long, env = "SLASHWATCH_METRICS_PORT", default_value_t = DEFAULT_METRICS_PORT)]
    pub metrics_port: u16,
}

impl MetricsArgs {
    pub fn socket_address(&self) -> SocketAddr {
        SocketAddr::new(self.metrics_address, self.metrics_port)
    }
}
