use std::{env, process::ExitCode, sync::Arc};

use anyhow::{anyhow, bail};
use clap::Parser;
use slashwatch::{
    APP_NAME, SLASHWATCH_VERSION, TEST_SCRIPTS_VALIDATOR_INDEX,
    cli::{Cli, Commands, scripts::ScriptArgs, test_block::TestBlockConfig, watch::WatchConfig},
    startup_message::startup_message,
};
use slashwatch_beacon_api_client::BeaconApiClient;
use slashwatch_head_watcher::{Outcome, RunMode, SlashingsConfig, SlashingsService};
use slashwatch_metrics::{MetricsSink, PrometheusMetrics, set_ready, set_release};
use slashwatch_slashings::{
    event::SlashingKind,
    notifier::{Notifier, ScriptOutcome},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Entry point for slashwatch. Initializes logging, parses CLI arguments and runs the selected
/// command. Watching stops on Ctrl-C.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set the default log level based on verbosity flag or RUST_LOG env var
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = match rust_log.is_empty() {
        true => EnvFilter::builder().parse_lossy(cli.directive()),
        false => EnvFilter::builder().parse_lossy(rust_log),
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    info!("\n{}", startup_message());

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .thread_name(APP_NAME)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("Unable to create tokio runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(async {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C received, shutting down...");
                Ok(())
            }
            result = run_command(cli.command) => result,
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Watch(config) => run_watch(*config).await,
        Commands::TestBlock(config) => run_test_block(*config).await,
        Commands::TestScripts(scripts) => run_test_scripts(scripts).await,
    }
}

/// Follows the chain head until the event feed ends.
pub async fn run_watch(config: WatchConfig) -> anyhow::Result<()> {
    info!("starting up slashing watcher...");

    let metrics: Option<Arc<dyn MetricsSink>> = if config.metrics.enable_metrics {
        let address = config.metrics.socket_address();
        prometheus_exporter::start(address)
            .map_err(|err| anyhow!("Failed to start prometheus exporter: {err:?}"))?;
        info!("Serving prometheus metrics on {address}");
        set_release(SLASHWATCH_VERSION);
        set_ready(false);
        Some(Arc::new(PrometheusMetrics))
    } else {
        None
    };

    let beacon_api_client = Arc::new(BeaconApiClient::new(
        config.beacon_api.beacon_api_endpoint,
        config.beacon_api.request_timeout,
    )?);
    let service = SlashingsService::new(SlashingsConfig {
        block_provider: Some(beacon_api_client.clone()),
        events_provider: Some(beacon_api_client),
        metrics,
        scripts: config.scripts.into(),
        mode: RunMode::Live,
    })?;
    let subscription = service.subscribe()?;

    set_ready(true);
    info!("All services operational");

    let outcome = subscription.run().await;
    set_ready(false);
    info!("Slashing watcher finished: {outcome:?}");

    Ok(())
}

/// Processes a single block, printing what was found.
pub async fn run_test_block(config: TestBlockConfig) -> anyhow::Result<()> {
    let beacon_api_client = Arc::new(BeaconApiClient::new(
        config.beacon_api.beacon_api_endpoint,
        config.beacon_api.request_timeout,
    )?);
    let service = SlashingsService::new(SlashingsConfig {
        block_provider: Some(beacon_api_client),
        scripts: config.scripts.into(),
        mode: RunMode::ReplayOnce(config.block),
        ..Default::default()
    })?;

    let Outcome::Replayed(report) = service.run().await? else {
        bail!("Replay of block {} did not produce a report", config.block);
    };

    println!(
        "Block {} at slot {}: {} slashing(s)",
        report.block_id,
        report.slot,
        report.events.len()
    );
    for rejected in &report.rejected {
        println!("  skipped: {rejected}");
    }
    for outcome in &report.outcomes {
        let script = match &outcome.script {
            ScriptOutcome::NotConfigured => "no script".to_string(),
            ScriptOutcome::Succeeded(output) => format!("script succeeded: {}", output.output.trim()),
            ScriptOutcome::Failed(err) => format!("script failed: {err}"),
        };
        println!(
            "  {} slashing of validator {}: {script}",
            outcome.event.kind, outcome.event.validator_index
        );
    }

    Ok(())
}

/// Runs each configured script once with a fixed validator index.
pub async fn run_test_scripts(scripts: ScriptArgs) -> anyhow::Result<()> {
    let notifier = Notifier::new(scripts.into(), None);

    for (kind, label) in [
        (SlashingKind::Attester, "Attester"),
        (SlashingKind::Proposer, "Proposer"),
    ] {
        if notifier.scripts().script_for(kind).is_none() {
            println!("No {kind} slashing script");
            continue;
        }

        println!(
            "Testing {kind} slashing script with validator index {TEST_SCRIPTS_VALIDATOR_INDEX}"
        );
        match notifier.run_script(kind, TEST_SCRIPTS_VALIDATOR_INDEX).await {
            Some(Ok(output)) => print!("{}", output.output),
            Some(Err(err)) => {
                println!("{label} slashing script failed: {err}");
                if let Some(output) = err.output() {
                    print!("{output}");
                }
                return Ok(());
            }
            None => println!("No {kind} slashing script"),
        }
    }

    Ok(())
}
