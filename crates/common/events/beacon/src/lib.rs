pub mod event;

use std::str::FromStr;

#[cfg(feature = "eventsource-client")]
use eventsource_client::Event;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::event::chain::{BlockEvent, HeadEvent};

/// Topics of the node event feed that this crate can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTopic {
    Block,
    Head,
}

#[derive(Debug, Error)]
pub enum EventTypeError {
    #[error("Invalid event topic: {0}")]
    UnknownTopic(String),

    #[error("Malformed {topic} event payload: {source}")]
    MalformedPayload {
        topic: EventTopic,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a {expected} event, received {received}")]
    UnexpectedTopic {
        expected: EventTopic,
        received: EventTopic,
    },
}

impl FromStr for EventTopic {
    type Err = EventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "block" => EventTopic::Block,
            "head" => EventTopic::Head,
            _ => return Err(EventTypeError::UnknownTopic(s.to_string())),
        })
    }
}

impl std::fmt::Display for EventTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EventTopic::Block => "block",
                EventTopic::Head => "head",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum BeaconEvent {
    Head(HeadEvent),
    Block(BlockEvent),
}

impl BeaconEvent {
    fn from_json<T: DeserializeOwned>(
        topic: EventTopic,
        json: &str,
        constructor: impl FnOnce(T) -> Self,
    ) -> Result<Self, EventTypeError> {
        serde_json::from_str(json)
            .map(constructor)
            .map_err(|source| EventTypeError::MalformedPayload { topic, source })
    }

    /// Decodes a server-sent event from its `event:` name and `data:` payload.
    pub fn from_parts(event_type: &str, data: &str) -> Result<Self, EventTypeError> {
        let topic = EventTopic::from_str(event_type)?;
        match topic {
            EventTopic::Block => Self::from_json(topic, data, Self::Block),
            EventTopic::Head => Self::from_json(topic, data, Self::Head),
        }
    }

    pub fn topic(&self) -> EventTopic {
        match self {
            BeaconEvent::Head(_) => EventTopic::Head,
            BeaconEvent::Block(_) => EventTopic::Block,
        }
    }

    /// Unwraps a head event, rejecting every other topic.
    pub fn into_head(self) -> Result<HeadEvent, EventTypeError> {
        match self {
            BeaconEvent::Head(head) => Ok(head),
            other => Err(EventTypeError::UnexpectedTopic {
                expected: EventTopic::Head,
                received: other.topic(),
            }),
        }
    }
}

#[cfg(feature = "eventsource-client")]
impl TryFrom<Event> for BeaconEvent {
    type Error = EventTypeError;

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        Self::from_parts(event.event_type.as_str(), event.data.as_str())
    }
}
