//! Shared bucket relay primitives.
//!
//! This crate owns the response contract, the relay object naming rules, and
//! configuration loading. It intentionally excludes AWS SDK and Lambda runtime
//! concerns, which live in `bucket_relay_lambda`.

pub mod config;
pub mod contract;
pub mod storage_keys;
