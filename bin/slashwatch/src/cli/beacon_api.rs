use std::time::Duration;

use clap::Args;
use url::Url;

use crate::cli::constants::{DEFAULT_BEACON_API_ENDPOINT, DEFAULT_REQUEST_TIMEOUT};

#[derive(Debug, Clone, Args)]
pub struct BeaconApiArgs {
    #[arg(
        long,
        env = "SLASHWATCH_BEACON_API_ENDPOINT",
        help = "Set HTTP url of the beacon api endpoint",
        default_value = DEFAULT_BEACON_API_ENDPOINT
    )]
    pub beacon_api_endpoint: Url,

    #[arg(
        long,
        env = "SLASHWATCH_REQUEST_TIMEOUT",
        help = "Set HTTP request timeout for beacon api calls, in seconds",
        default_value = DEFAULT_REQUEST_TIMEOUT,
        value_parser = duration_parser
    )]
    pub request_timeout: Duration,
}

pub fn duration_parser(duration_string: &str) -> Result<Duration, String> {
    Ok(Duration::from_secs(duration_string.parse().map_err(
        |err| format!("Could not parse the request timeout: {err:?}"),
    )?))
}
