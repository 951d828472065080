use bucket_relay_core::config::RelayConfig;
use bucket_relay_core::contract::MessageBody;
use bucket_relay_core::storage_keys::{format_timestamp, relay_object_body, relay_object_key};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::adapters::object_store::{ObjectStore, StoreError};
use crate::observability::RelayLog;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("failed to list objects in bucket '{bucket}': {source}")]
    Listing {
        bucket: String,
        #[source]
        source: StoreError,
    },
    #[error("failed to write object '{key}' to bucket '{bucket}': {source}")]
    Write {
        bucket: String,
        key: String,
        #[source]
        source: StoreError,
    },
}

impl RelayError {
    pub fn site(&self) -> &'static str {
        match self {
            Self::Listing { .. } => "listing",
            Self::Write { .. } => "write",
        }
    }

    pub fn store_error(&self) -> &StoreError {
        match self {
            Self::Listing { source, .. } | Self::Write { source, .. } => source,
        }
    }
}

/// Handles one invocation: lists the source bucket, writes the relay object
/// to the destination bucket, and reports the listed keys.
///
/// The event payload is accepted but never inspected. Every failure maps to
/// a 500 response carrying the provider's message.
pub fn handle_relay_event(
    _event: &Value,
    config: &RelayConfig,
    now: DateTime<Utc>,
    store: &impl ObjectStore,
    log: &impl RelayLog,
) -> ApiGatewayResponse {
    match relay_objects(config, now, store, log) {
        Ok(summary) => message_response(200, &MessageBody::success(summary)),
        Err(error) => {
            log.error(
                "relay_failed",
                json!({
                    "site": error.site(),
                    "error": error.to_string(),
                }),
            );
            message_response(
                500,
                &MessageBody::internal_error(&error.store_error().message),
            )
        }
    }
}

fn relay_objects(
    config: &RelayConfig,
    now: DateTime<Utc>,
    store: &impl ObjectStore,
    log: &impl RelayLog,
) -> Result<Option<String>, RelayError> {
    let listing = store
        .list_objects(&config.source_bucket)
        .map_err(|source| RelayError::Listing {
            bucket: config.source_bucket.clone(),
            source,
        })?;

    for key in listing.keys() {
        log.info("object_listed", json!({ "key": key }));
    }
    log.info(
        "listing_completed",
        json!({
            "bucket": config.source_bucket.clone(),
            "object_count": listing.object_count(),
            "has_contents": listing.has_contents(),
        }),
    );

    let summary = listing.summary();

    // One timestamp per invocation so the key and body always agree.
    let timestamp = format_timestamp(now);
    let key = relay_object_key(&timestamp);
    let body = relay_object_body(&timestamp);

    store
        .put_object(&config.destination_bucket, &key, body.as_bytes())
        .map_err(|source| RelayError::Write {
            bucket: config.destination_bucket.clone(),
            key: key.clone(),
            source,
        })?;

    log.info(
        "object_written",
        json!({
            "bucket": config.destination_bucket.clone(),
            "key": key,
            "bytes": body.len(),
        }),
    );

    Ok(summary)
}

fn message_response(status_code: u16, body: &MessageBody) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: json!({ "message": body.message }).to_string(),
    }
}
