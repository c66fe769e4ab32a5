//! JSON document codec.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::StoreError;

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(value).map_err(|e| StoreError::Serialization {
        message: e.to_string(),
    })
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Serialization {
        message: e.to_string(),
    })
}
