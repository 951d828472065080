use bucket_relay_core::contract::ObjectListing;
use thiserror::Error;

/// Failure reported by the storage provider, carrying its message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub trait ObjectStore {
    /// Lists the first page of objects in `bucket`.
    fn list_objects(&self, bucket: &str) -> Result<ObjectListing, StoreError>;

    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), StoreError>;
}
