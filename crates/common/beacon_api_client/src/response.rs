use serde::{Deserialize, Serialize};

/// Envelope the beacon API wraps versioned objects in.
///
/// # Example
/// {
///  "version": "electra",
///  "execution_optimistic": false,
///  "finalized": true,
///  "data": T
/// }
#[derive(Debug, Serialize, Deserialize)]
pub struct BeaconVersionedResponse<T> {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub execution_optimistic: Option<bool>,
    #[serde(default)]
    pub finalized: Option<bool>,
    pub data: T,
}
