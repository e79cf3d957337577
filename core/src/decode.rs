//! JSON decoding into the caller's result type.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Deserialize `body` as `T`. No partial decoding: any mismatch is an
/// `ApiError::Decode`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::Decode)
}
