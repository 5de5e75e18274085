use thiserror::Error;

use crate::block_id::BlockId;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid beacon API url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Block {0} not found")]
    NotFound(BlockId),

    #[error("Beacon node answered {status} for block {block_id}")]
    UnexpectedStatus { block_id: BlockId, status: u16 },

    #[error("Failed to decode block {block_id}: {source}")]
    Decode {
        block_id: BlockId,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("Invalid beacon API url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to configure event source: {0}")]
    EventSource(String),
}
