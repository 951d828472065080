use bucket_relay_core::config::RelayConfig;
use bucket_relay_lambda::adapters::s3::S3ObjectStore;
use bucket_relay_lambda::handlers::relay::{handle_relay_event, ApiGatewayResponse};
use bucket_relay_lambda::observability::{init_tracing, TracingRelayLog};
use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

struct RuntimeDependencies {
    config: RelayConfig,
    store: S3ObjectStore,
}

async fn handle_request(
    event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<ApiGatewayResponse, Error> {
    let span = tracing::info_span!("relay_invocation", request_id = %event.context.request_id);
    let response = span.in_scope(|| {
        handle_relay_event(
            &event.payload,
            &deps.config,
            Utc::now(),
            &deps.store,
            &TracingRelayLog,
        )
    });
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing()?;

    let config = RelayConfig::from_env()?;
    tracing::info!(
        source_bucket = %config.source_bucket,
        destination_bucket = %config.destination_bucket,
        region = %config.region,
        "relay configuration loaded"
    );

    let deps = RuntimeDependencies {
        store: S3ObjectStore::from_config(&config).await,
        config,
    };

    lambda_runtime::run(service_fn(|event| handle_request(event, &deps))).await
}
