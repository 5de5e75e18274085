use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use futures::{StreamExt, stream};
use slashwatch_beacon_api_client::{
    BlockProvider, EventStream, EventsProvider,
    block_id::BlockId,
    errors::{FetchError, SubscriptionError},
};
use slashwatch_consensus_beacon::beacon_block::SignedBeaconBlock;
use slashwatch_events_beacon::{BeaconEvent, EventTopic};
use tokio::sync::Notify;

#[derive(Debug, Clone)]
enum FakeResponse {
    Block(Box<SignedBeaconBlock>),
    Status(u16),
}

/// Serves blocks from memory. Unknown identifiers answer [`FetchError::NotFound`].
#[derive(Debug, Default)]
pub struct FakeBlockProvider {
    responses: HashMap<BlockId, FakeResponse>,
    gates: HashMap<BlockId, Arc<Notify>>,
    requests: Mutex<Vec<BlockId>>,
}

impl FakeBlockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, block_id: BlockId, block: SignedBeaconBlock) -> Self {
        self.responses
            .insert(block_id, FakeResponse::Block(Box::new(block)));
        self
    }

    /// Answers requests for `block_id` with the given HTTP status.
    pub fn with_status(mut self, block_id: BlockId, status: u16) -> Self {
        self.responses
            .insert(block_id, FakeResponse::Status(status));
        self
    }

    /// Holds requests for `block_id` until `gate` is notified.
    pub fn with_gate(mut self, block_id: BlockId, gate: Arc<Notify>) -> Self {
        self.gates.insert(block_id, gate);
        self
    }

    /// Every identifier requested so far, in arrival order.
    pub fn requests(&self) -> Vec<BlockId> {
        self.requests.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl BlockProvider for FakeBlockProvider {
    async fn signed_beacon_block(
        &self,
        block_id: &BlockId,
    ) -> Result<SignedBeaconBlock, FetchError> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(*block_id);

        if let Some(gate) = self.gates.get(block_id) {
            gate.notified().await;
        }

        match self.responses.get(block_id) {
            Some(FakeResponse::Block(block)) => Ok(*block.clone()),
            Some(FakeResponse::Status(404)) | None => Err(FetchError::NotFound(*block_id)),
            Some(FakeResponse::Status(status)) => Err(FetchError::UnexpectedStatus {
                block_id: *block_id,
                status: *status,
            }),
        }
    }
}

#[derive(Debug, Clone)]
enum FakeEvent {
    Decoded(BeaconEvent),
    Raw { event_type: String, data: String },
}

/// Replays a fixed list of events to every subscriber, then ends the stream.
#[derive(Debug, Default)]
pub struct FakeEventsProvider {
    events: Vec<FakeEvent>,
    refuse_subscription: bool,
    subscriptions: AtomicUsize,
    topics: Mutex<Vec<EventTopic>>,
}

impl FakeEventsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event(mut self, event: BeaconEvent) -> Self {
        self.events.push(FakeEvent::Decoded(event));
        self
    }

    /// Queues a frame that is decoded only when the stream is read, so it may fail to decode.
    pub fn with_raw_event(mut self, event_type: &str, data: &str) -> Self {
        self.events.push(FakeEvent::Raw {
            event_type: event_type.to_string(),
            data: data.to_string(),
        });
        self
    }

    pub fn refusing_subscriptions(mut self) -> Self {
        self.refuse_subscription = true;
        self
    }

    pub fn subscriptions(&self) -> usize {
        self.subscriptions.load(Ordering::SeqCst)
    }

    /// Topics requested by the most recent subscription.
    pub fn topics(&self) -> Vec<EventTopic> {
        self.topics.lock().expect("lock poisoned").clone()
    }
}

impl EventsProvider for FakeEventsProvider {
    fn events(&self, topics: &[EventTopic]) -> Result<EventStream, SubscriptionError> {
        self.subscriptions.fetch_add(1, Ordering::SeqCst);
        *self.topics.lock().expect("lock poisoned") = topics.to_vec();

        if self.refuse_subscription {
            return Err(SubscriptionError::EventSource(
                "subscription refused".to_string(),
            ));
        }

        let events = self.events.clone();
        Ok(stream::iter(events)
            .map(|event| match event {
                FakeEvent::Decoded(event) => Ok(event),
                FakeEvent::Raw { event_type, data } => BeaconEvent::from_parts(&event_type, &data),
            })
            .boxed())
    }
}
