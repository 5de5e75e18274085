use clap::Parser;

use super::{beacon_api::BeaconApiArgs, metrics::MetricsArgs, scripts::ScriptArgs};

#[derive(Debug, Parser)]
pub struct WatchConfig {
    #[command(flatten)]
    pub beacon_api: BeaconApiArgs,

    #[command(flatten)]
    pub scripts: ScriptArgs,

    #[command(flatten)]
    pub metrics: MetricsArgs,
}
