pub mod beacon_api;
pub mod constants;
pub mod metrics;
pub mod scripts;
pub mod test_block;
pub mod watch;

use clap::{Parser, Subcommand};
use constants::DEFAULT_VERBOSITY;
use scripts::ScriptArgs;
use test_block::TestBlockConfig;
use watch::WatchConfig;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level, 0 (off) to 5 (trace)
    #[arg(
        short,
        long,
        global = true,
        env = "SLASHWATCH_VERBOSITY",
        default_value_t = DEFAULT_VERBOSITY,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub verbosity: u8,
}

impl Cli {
    /// Log filter directive for the configured verbosity.
    pub fn directive(&self) -> &'static str {
        match self.verbosity {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Follow the chain head and react to slashings
    #[command(name = "watch")]
    Watch(Box<WatchConfig>),

    /// Process a single block and exit
    #[command(name = "test-block")]
    TestBlock(Box<TestBlockConfig>),

    /// Run the configured scripts with validator index 12345678 and exit
    #[command(name = "test-scripts")]
    TestScripts(ScriptArgs),
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsStr, path::PathBuf, time::Duration};

    use clap::CommandFactory;
    use rstest::rstest;
    use slashwatch_beacon_api_client::block_id::BlockId;

    use super::*;

    #[test]
    fn test_cli_watch_defaults() {
        let cli = Cli::parse_from(["slashwatch", "watch"]);

        assert_eq!(cli.verbosity, 3);
        assert_eq!(cli.directive(), "info");
        let Commands::Watch(config) = cli.command else {
            panic!("expected the watch command");
        };
        assert_eq!(
            config.beacon_api.beacon_api_endpoint.as_str(),
            "http://localhost:5052/"
        );
        assert_eq!(config.beacon_api.request_timeout, Duration::from_secs(120));
        assert_eq!(config.scripts.attester_slashed_script, None);
        assert_eq!(config.scripts.proposer_slashed_script, None);
        assert!(!config.metrics.enable_metrics);
        assert_eq!(config.metrics.socket_address().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_cli_watch_options() {
        let cli = Cli::parse_from([
            "slashwatch",
            "watch",
            "--beacon-api-endpoint",
            "http://beacon:5052",
            "--request-timeout",
            "30",
            "--attester-slashed-script",
            "/opt/attester.sh",
            "--metrics",
            "--metrics-port",
            "9100",
            "-v",
            "5",
        ]);

        assert_eq!(cli.directive(), "trace");
        let Commands::Watch(config) = cli.command else {
            panic!("expected the watch command");
        };
        assert_eq!(config.beacon_api.beacon_api_endpoint.host_str(), Some("beacon"));
        assert_eq!(config.beacon_api.request_timeout, Duration::from_secs(30));
        assert_eq!(
            config.scripts.attester_slashed_script,
            Some(PathBuf::from("/opt/attester.sh"))
        );
        assert!(config.metrics.enable_metrics);
        assert_eq!(config.metrics.metrics_port, 9100);
    }

    #[rstest]
    #[case("head", BlockId::Head)]
    #[case("finalized", BlockId::Finalized)]
    #[case("1234", BlockId::Slot(1234))]
    fn test_cli_test_block(#[case] block: &str, #[case] expected: BlockId) {
        let cli = Cli::parse_from(["slashwatch", "test-block", "--block", block]);

        let Commands::TestBlock(config) = cli.command else {
            panic!("expected the test-block command");
        };
        assert_eq!(config.block, expected);
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        assert!(Cli::try_parse_from(["slashwatch", "test-block"]).is_err());
        assert!(Cli::try_parse_from(["slashwatch", "test-block", "--block", "latest"]).is_err());
        assert!(Cli::try_parse_from(["slashwatch", "watch", "--request-timeout", "soon"]).is_err());
        assert!(Cli::try_parse_from(["slashwatch", "watch", "--verbosity", "6"]).is_err());
    }

    #[rstest]
    #[case("watch", "beacon_api_endpoint", "SLASHWATCH_BEACON_API_ENDPOINT")]
    #[case("watch", "request_timeout", "SLASHWATCH_REQUEST_TIMEOUT")]
    #[case("watch", "metrics_port", "SLASHWATCH_METRICS_PORT")]
    #[case("test-block", "block", "SLASHWATCH_TEST_BLOCK")]
    #[case("test-scripts", "attester_slashed_script", "SLASHWATCH_ATTESTER_SLASHED_SCRIPT")]
    #[case("test-scripts", "proposer_slashed_script", "SLASHWATCH_PROPOSER_SLASHED_SCRIPT")]
    fn test_cli_environment_fallbacks(
        #[case] command: &str,
        #[case] argument: &str,
        #[case] variable: &str,
    ) {
        let cli = Cli::command();
        let subcommand = cli
            .find_subcommand(command)
            .expect("subcommand is registered");
        let arg = subcommand
            .get_arguments()
            .find(|arg| arg.get_id() == argument)
            .expect("argument is registered");

        assert_eq!(arg.get_env(), Some(OsStr::new(variable)));
    }
}
