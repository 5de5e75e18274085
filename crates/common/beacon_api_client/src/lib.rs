pub mod block_id;
pub mod errors;
pub mod http_client;
pub mod response;

use std::time::Duration;

use async_trait::async_trait;
use block_id::BlockId;
use errors::{FetchError, SubscriptionError};
use eventsource_client::{Client, ClientBuilder, ReconnectOptions, SSE};
use futures::{StreamExt, stream::BoxStream};
use http_client::ClientWithBaseUrl;
use reqwest::{StatusCode, Url};
use response::BeaconVersionedResponse;
use slashwatch_consensus_beacon::beacon_block::SignedBeaconBlock;
use slashwatch_events_beacon::{BeaconEvent, EventTopic, EventTypeError};
use tracing::{debug, error, info};

const EVENT_STREAM_RECONNECT_DELAY: Duration = Duration::from_secs(1);
const EVENT_STREAM_MAX_RECONNECT_DELAY: Duration = Duration::from_secs(60);

/// Decoded events from a beacon node's event feed. Frames that cannot be decoded are kept as
/// errors so the consumer decides what to do with them.
pub type EventStream = BoxStream<'static, Result<BeaconEvent, EventTypeError>>;

/// A chain client that can hand out full blocks.
#[async_trait]
pub trait BlockProvider: Send + Sync {
    async fn signed_beacon_block(
        &self,
        block_id: &BlockId,
    ) -> Result<SignedBeaconBlock, FetchError>;
}

/// A chain client that can stream node events.
pub trait EventsProvider: Send + Sync {
    fn events(&self, topics: &[EventTopic]) -> Result<EventStream, SubscriptionError>;
}

/// Client for the standard beacon node REST API.
pub struct BeaconApiClient {
    http_client: ClientWithBaseUrl,
}

impl BeaconApiClient {
    pub fn new(beacon_api_endpoint: Url, request_timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            http_client: ClientWithBaseUrl::new(beacon_api_endpoint, request_timeout)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        self.http_client.base_url()
    }

    pub fn events_url(&self, topics: &[EventTopic]) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            self.http_client.url("/eth/v1/events")?.as_str(),
            topics.iter().map(|topic| ("topics", topic.to_string())),
        )
    }

    pub fn get_event_stream(&self, topics: &[EventTopic]) -> Result<EventStream, SubscriptionError> {
        let client = ClientBuilder::for_url(self.events_url(topics)?.as_str())
            .map_err(|err| SubscriptionError::EventSource(format!("{err:?}")))?
            .reconnect(
                ReconnectOptions::reconnect(true)
                    .retry_initial(true)
                    .delay(EVENT_STREAM_RECONNECT_DELAY)
                    .backoff_factor(2)
                    .delay_max(EVENT_STREAM_MAX_RECONNECT_DELAY)
                    .build(),
            )
            .build();

        Ok(client
            .stream()
            .filter_map(|event| async move {
                match event {
                    Ok(SSE::Event(event)) => Some(BeaconEvent::try_from(event)),
                    Ok(SSE::Connected(connection_details)) => {
                        info!("Connected to SSE stream: {connection_details:?}");
                        None
                    }
                    Ok(SSE::Comment(comment)) => {
                        debug!("Received comment: {comment:?}");
                        None
                    }
                    Err(err) => {
                        error!("Error receiving event: {err:?}");
                        None
                    }
                }
            })
            .boxed())
    }
}

#[async_trait]
impl BlockProvider for BeaconApiClient {
    async fn signed_beacon_block(
        &self,
        block_id: &BlockId,
    ) -> Result<SignedBeaconBlock, FetchError> {
        let response = self
            .http_client
            .get_json(&format!("/eth/v2/beacon/blocks/{block_id}"))?
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(*block_id));
        }
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                block_id: *block_id,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let response: BeaconVersionedResponse<SignedBeaconBlock> = serde_json::from_slice(&body)
            .map_err(|source| FetchError::Decode {
                block_id: *block_id,
                source,
            })?;
        debug!(
            %block_id,
            slot = response.data.message.slot,
            version = response.version.as_deref().unwrap_or("unknown"),
            "Obtained block"
        );

        Ok(response.data)
    }
}

impl EventsProvider for BeaconApiClient {
    fn events(&self, topics: &[EventTopic]) -> Result<EventStream, SubscriptionError> {
        self.get_event_stream(topics)
    }
}
