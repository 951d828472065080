use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::primitives::ByteStream;
use bucket_relay_core::config::RelayConfig;
use bucket_relay_core::contract::{ObjectDescriptor, ObjectListing};

use crate::adapters::object_store::{ObjectStore, StoreError};

#[derive(Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }

    pub async fn from_config(config: &RelayConfig) -> Self {
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        Self::new(aws_sdk_s3::Client::new(&aws_config))
    }
}

impl ObjectStore for S3ObjectStore {
    fn list_objects(&self, bucket: &str) -> Result<ObjectListing, StoreError> {
        let bucket = bucket.to_string();
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .list_objects_v2()
                    .bucket(bucket)
                    .send()
                    .await
                    .map(listing_from_output)
                    .map_err(|error| StoreError::new(describe_sdk_error(&error)))
            })
        })
    }

    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), StoreError> {
        let bucket = bucket.to_string();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .body(ByteStream::from(body_bytes))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| StoreError::new(describe_sdk_error(&error)))
            })
        })
    }
}

pub fn listing_from_output(output: ListObjectsV2Output) -> ObjectListing {
    ObjectListing {
        objects: output.contents.map(|objects| {
            objects
                .into_iter()
                .map(|object| ObjectDescriptor { key: object.key })
                .collect()
        }),
    }
}

// Service errors carry the provider's message (falling back to the error
// code); transport and construction failures only have their context chain.
fn describe_sdk_error<E, R>(error: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    error
        .as_service_error()
        .and_then(|service_error| service_error.message().or_else(|| service_error.code()))
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(error).to_string())
}
