//! AWS-oriented adapters and handlers for the bucket relay function.
//!
//! This crate owns runtime integration details (the Lambda handler, the S3
//! storage adapter, and log sinks). Naming rules, the response contract, and
//! configuration come from `bucket_relay_core`.

pub mod adapters;
pub mod handlers;
pub mod observability;
