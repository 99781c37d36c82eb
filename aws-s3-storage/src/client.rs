/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::metrics::ClientMetrics;
use crate::Config;
use std::sync::Arc;

/// Object store client for Amazon Simple Storage Service.
///
/// A client owns exactly one configured connection to S3 for its whole lifetime and keeps no
/// bucket or object state locally, every operation is a fresh round trip.
///
/// `Client` is cheap to clone and is `Send + Sync`. Clones share the same underlying
/// connection and metrics, so a single client can be used from many tasks concurrently.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, metrics, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
    pub(crate) metrics: ClientMetrics,
}

impl Drop for Handle {
    fn drop(&mut self) {
        tracing::debug!(
            "Client metrics summary - requests sent: {}, failed: {}, bytes uploaded: {}, bytes downloaded: {}",
            self.metrics.requests_sent(),
            self.metrics.requests_failed(),
            self.metrics.bytes_uploaded(),
            self.metrics.bytes_downloaded()
        );
    }
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle {
            config,
            metrics: ClientMetrics::new(),
        });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Returns the client's metrics
    pub fn metrics(&self) -> &ClientMetrics {
        &self.handle.metrics
    }

    /// List every bucket owned by the configured credentials.
    ///
    /// Constructs a fluent builder for the
    /// [`ListBuckets`](crate::operation::list_buckets::ListBucketsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn bucket_names(
    ///     client: &aws_s3_storage::Client,
    /// ) -> Result<Vec<String>, aws_s3_storage::error::Error> {
    ///     let output = client.list_buckets().send().await?;
    ///     Ok(output.buckets().iter().map(|b| b.name().to_owned()).collect())
    /// }
    /// ```
    pub fn list_buckets(&self) -> crate::operation::list_buckets::ListBucketsFluentBuilder {
        crate::operation::list_buckets::ListBucketsFluentBuilder::new(self.handle.clone())
    }

    /// Create a bucket.
    ///
    /// Whether re-creating an existing bucket is a no-op is decided by the service.
    ///
    /// Constructs a fluent builder for the
    /// [`CreateBucket`](crate::operation::create_bucket::CreateBucketFluentBuilder) operation.
    pub fn create_bucket(&self) -> crate::operation::create_bucket::CreateBucketFluentBuilder {
        crate::operation::create_bucket::CreateBucketFluentBuilder::new(self.handle.clone())
    }

    /// Delete a bucket, optionally deleting every object in it first.
    ///
    /// Constructs a fluent builder for the
    /// [`DeleteBucket`](crate::operation::delete_bucket::DeleteBucketFluentBuilder) operation.
    pub fn delete_bucket(&self) -> crate::operation::delete_bucket::DeleteBucketFluentBuilder {
        crate::operation::delete_bucket::DeleteBucketFluentBuilder::new(self.handle.clone())
    }

    /// Upload a single object.
    ///
    /// Constructs a fluent builder for the
    /// [`PutObject`](crate::operation::put_object::builders::PutObjectFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn put(client: &aws_s3_storage::Client) -> Result<(), aws_s3_storage::error::Error> {
    ///     client
    ///         .put_object()
    ///         .bucket("my-bucket")
    ///         .key("my-key")
    ///         .body("this is a test")
    ///         .title("the title")
    ///         .send()
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn put_object(&self) -> crate::operation::put_object::builders::PutObjectFluentBuilder {
        crate::operation::put_object::builders::PutObjectFluentBuilder::new(self.handle.clone())
    }

    /// Download a single object into memory.
    ///
    /// The response body is fully drained before the operation completes.
    ///
    /// Constructs a fluent builder for the
    /// [`GetObject`](crate::operation::get_object::builders::GetObjectFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_storage::error::ErrorKind;
    ///
    /// async fn get(client: &aws_s3_storage::Client) -> Result<(), aws_s3_storage::error::Error> {
    ///     match client.get_object().bucket("my-bucket").key("my-key").send().await {
    ///         Ok(object) => println!("{} bytes titled {:?}", object.body().len(), object.title()),
    ///         Err(err) if err.kind() == &ErrorKind::NotFound => println!("no such object"),
    ///         Err(err) => return Err(err),
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn get_object(&self) -> crate::operation::get_object::builders::GetObjectFluentBuilder {
        crate::operation::get_object::builders::GetObjectFluentBuilder::new(self.handle.clone())
    }

    /// Delete a single object.
    ///
    /// The service does not report whether the object existed beforehand.
    ///
    /// Constructs a fluent builder for the
    /// [`DeleteObject`](crate::operation::delete_object::DeleteObjectFluentBuilder) operation.
    pub fn delete_object(&self) -> crate::operation::delete_object::DeleteObjectFluentBuilder {
        crate::operation::delete_object::DeleteObjectFluentBuilder::new(self.handle.clone())
    }

    /// List every object in a bucket.
    ///
    /// Results are produced lazily, one page at a time, transparently following continuation
    /// tokens until the listing is exhausted.
    ///
    /// Constructs a fluent builder for the
    /// [`ListObjects`](crate::operation::list_objects::builders::ListObjectsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn total_size(client: &aws_s3_storage::Client) -> Result<u64, aws_s3_storage::error::Error> {
    ///     let mut stream = client.list_objects().bucket("my-bucket").into_stream()?;
    ///     let mut total = 0;
    ///     while let Some(object) = stream.next().await {
    ///         total += object?.size();
    ///     }
    ///     Ok(total)
    /// }
    /// ```
    pub fn list_objects(
        &self,
    ) -> crate::operation::list_objects::builders::ListObjectsFluentBuilder {
        crate::operation::list_objects::builders::ListObjectsFluentBuilder::new(
            self.handle.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Client;

    fn assert_send_sync<T: Send + Sync + Clone + 'static>() {}

    #[test]
    fn test_client_is_shareable() {
        assert_send_sync::<Client>();
    }
}
