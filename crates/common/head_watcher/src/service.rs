use std::sync::Arc;

use futures::StreamExt;
use slashwatch_beacon_api_client::{
    BlockProvider, EventStream, EventsProvider, block_id::BlockId, errors::FetchError,
};
use slashwatch_events_beacon::{BeaconEvent, EventTopic, event::chain::HeadEvent};
use slashwatch_metrics::MetricsSink;
use slashwatch_slashings::{detector::detect, notifier::Notifier};
use tokio::task::JoinSet;
use tracing::{Instrument, Span, debug, error, info, info_span, warn};

use crate::{
    config::{RunMode, SlashingsConfig},
    errors::{ConfigError, SlashingsError},
    report::BlockReport,
};

#[derive(Debug)]
pub enum Outcome {
    /// The head event feed ended and every in-flight block was handled.
    Stopped,
    Replayed(BlockReport),
}

/// Fetch, detect and notify for one block. Shared by every in-flight head event.
struct BlockPipeline {
    block_provider: Arc<dyn BlockProvider>,
    notifier: Notifier,
    metrics: Option<Arc<dyn MetricsSink>>,
}

impl BlockPipeline {
    async fn process(&self, block_id: BlockId) -> Result<BlockReport, FetchError> {
        let signed_block = self.block_provider.signed_beacon_block(&block_id).await?;
        let slot = signed_block.message.slot;
        let detection = detect(&signed_block.message);

        for rejected in &detection.rejected {
            warn!(slot, %block_id, "Skipping malformed slashing: {rejected}");
        }

        let mut outcomes = Vec::with_capacity(detection.events.len());
        for event in &detection.events {
            info!(
                validator_index = event.validator_index,
                kind = %event.kind,
                slot,
                %block_id,
                "Found slashing"
            );
            outcomes.push(self.notifier.notify(event).await);
        }

        if let Some(metrics) = &self.metrics {
            metrics.block_processed();
        }
        debug!(slot, %block_id, slashings = detection.events.len(), "Processed block");

        Ok(BlockReport {
            block_id,
            slot,
            events: detection.events,
            rejected: detection.rejected,
            outcomes,
        })
    }

    async fn handle_head(&self, head: HeadEvent) {
        let block_id = BlockId::Root(head.block);
        debug!(slot = head.slot, %block_id, "Received head event");

        if let Err(err) = self.process(block_id).await {
            error!(slot = head.slot, %block_id, "Failed to process head block: {err}");
        }
    }
}

/// Slashing detection service, validated and ready to either follow the head or replay a block.
pub struct SlashingsService {
    pipeline: Arc<BlockPipeline>,
    events_provider: Option<Arc<dyn EventsProvider>>,
    mode: RunMode,
    span: Span,
}

impl SlashingsService {
    pub fn new(config: SlashingsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let SlashingsConfig {
            block_provider,
            events_provider,
            metrics,
            scripts,
            mode,
        } = config;

        Ok(Self {
            pipeline: Arc::new(BlockPipeline {
                block_provider: block_provider.ok_or(ConfigError::MissingBlockProvider)?,
                notifier: Notifier::new(scripts, metrics.clone()),
                metrics,
            }),
            events_provider,
            mode,
            span: info_span!("slashings_service", service = "slashings", "impl" = "head"),
        })
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Opens the head event feed.
    pub fn subscribe(self) -> Result<HeadSubscription, SlashingsError> {
        let events_provider = self
            .events_provider
            .as_ref()
            .ok_or(ConfigError::MissingEventsProvider)?;
        let events = events_provider.events(&[EventTopic::Head])?;
        self.span.in_scope(|| info!("Subscribed to head events"));

        Ok(HeadSubscription {
            pipeline: self.pipeline,
            events,
            span: self.span,
        })
    }

    /// Runs the pipeline once for `block_id`. A fetch failure is returned since there is no later
    /// event to wait for.
    pub async fn replay(&self, block_id: BlockId) -> Result<BlockReport, SlashingsError> {
        self.span.in_scope(|| info!(%block_id, "Replaying block"));
        let report = self
            .pipeline
            .process(block_id)
            .instrument(self.span.clone())
            .await?;

        Ok(report)
    }

    pub async fn run(self) -> Result<Outcome, SlashingsError> {
        match self.mode {
            RunMode::Live => Ok(self.subscribe()?.run().await),
            RunMode::ReplayOnce(block_id) => Ok(Outcome::Replayed(self.replay(block_id).await?)),
        }
    }
}

/// A live subscription to head events.
pub struct HeadSubscription {
    pipeline: Arc<BlockPipeline>,
    events: EventStream,
    span: Span,
}

impl HeadSubscription {
    /// Handles head events until the feed ends.
    ///
    /// Every head event is processed on its own task, so a slow fetch or a hanging script never
    /// delays later heads. Events found in a single block are still notified in order.
    pub async fn run(mut self) -> Outcome {
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                event = self.events.next() => {
                    let Some(event) = event else {
                        break;
                    };

                    let head = match event.and_then(BeaconEvent::into_head) {
                        Ok(head) => head,
                        Err(err) => {
                            self.span.in_scope(|| warn!("Discarding event: {err}"));
                            continue;
                        }
                    };

                    let pipeline = self.pipeline.clone();
                    in_flight.spawn(
                        async move { pipeline.handle_head(head).await }.instrument(self.span.clone()),
                    );
                }
                Some(result) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(err) = result {
                        self.span.in_scope(|| error!("Head event handler failed: {err}"));
                    }
                }
            }
        }

        self.span.in_scope(|| {
            info!(
                in_flight = in_flight.len(),
                "Head event feed ended, waiting for in-flight blocks"
            )
        });
        while let Some(result) = in_flight.join_next().await {
            if let Err(err) = result {
                self.span.in_scope(|| error!("Head event handler failed: {err}"));
            }
        }

        Outcome::Stopped
    }
}
