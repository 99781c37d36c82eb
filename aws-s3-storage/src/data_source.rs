/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;

use crate::error::Error;
use crate::operation::put_object::PutObjectOutput;
use crate::types::StoredObject;
use crate::Client;

const DEFAULT_CONTENT: &str = "this is a test";
const DEFAULT_TITLE: &str = "the title";

/// Batch data-access layer over a [`Client`].
///
/// Fetch and store operations come in two flavours. The plain ones (`fetch_one`, `fetch_many`,
/// `store_one`, `store_many`) absorb failures into `None`/`false` and only log them at debug
/// level, since the client has already reported every failure once. The `try_` variants return
/// the classified [`Error`] for each key instead.
///
/// Batches process keys sequentially in the order given. A failure on one key never prevents
/// the remaining keys from being attempted.
///
/// Every store writes the same [`StoredObject`], fixed at construction.
#[derive(Debug, Clone)]
pub struct DataSource {
    client: Client,
    content: StoredObject,
}

impl DataSource {
    /// Create a data source that stores the default payload `"this is a test"` titled
    /// `"the title"`.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            content: StoredObject::new(DEFAULT_CONTENT).with_title(DEFAULT_TITLE),
        }
    }

    /// Replace the object written by the store operations
    pub fn with_content(mut self, content: StoredObject) -> Self {
        self.content = content;
        self
    }

    /// The underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The object written by the store operations
    pub fn content(&self) -> &StoredObject {
        &self.content
    }

    /// Fetch a single object's content, `None` if it could not be fetched for any reason.
    pub async fn fetch_one(&self, bucket: &str, key: &str) -> Option<Bytes> {
        absorb(bucket, key, self.try_fetch_one(bucket, key).await)
    }

    /// Fetch a single object's content.
    pub async fn try_fetch_one(&self, bucket: &str, key: &str) -> Result<Bytes, Error> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;
        Ok(output.into_body())
    }

    /// Fetch several objects, one result per key in the same order as `keys`.
    ///
    /// Keys that could not be fetched are `None`.
    pub async fn fetch_many<K: AsRef<str>>(&self, bucket: &str, keys: &[K]) -> Vec<Option<Bytes>> {
        let results = self.try_fetch_many(bucket, keys).await;
        keys.iter()
            .zip(results)
            .map(|(key, result)| absorb(bucket, key.as_ref(), result))
            .collect()
    }

    /// Fetch several objects, one result per key in the same order as `keys`.
    pub async fn try_fetch_many<K: AsRef<str>>(
        &self,
        bucket: &str,
        keys: &[K],
    ) -> Vec<Result<Bytes, Error>> {
        let mut results = Vec::with_capacity(keys.len());
        for key in keys {
            results.push(self.try_fetch_one(bucket, key.as_ref()).await);
        }
        results
    }

    /// Store the configured content under `key`, returning whether the write succeeded.
    pub async fn store_one(&self, bucket: &str, key: &str) -> bool {
        absorb(bucket, key, self.try_store_one(bucket, key).await).is_some()
    }

    /// Store the configured content under `key`.
    pub async fn try_store_one(&self, bucket: &str, key: &str) -> Result<PutObjectOutput, Error> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .object(self.content.clone())
            .send()
            .await
    }

    /// Store the configured content under every key, returning whether all writes succeeded.
    ///
    /// Every key is attempted even after a failure. An empty batch trivially succeeds.
    pub async fn store_many<K: AsRef<str>>(&self, bucket: &str, keys: &[K]) -> bool {
        let results = self.try_store_many(bucket, keys).await;
        keys.iter()
            .zip(results)
            .fold(true, |all_stored, (key, result)| {
                absorb(bucket, key.as_ref(), result).is_some() && all_stored
            })
    }

    /// Store the configured content under every key, one result per key in the same order as
    /// `keys`.
    pub async fn try_store_many<K: AsRef<str>>(
        &self,
        bucket: &str,
        keys: &[K],
    ) -> Vec<Result<PutObjectOutput, Error>> {
        let mut results = Vec::with_capacity(keys.len());
        for key in keys {
            results.push(self.try_store_one(bucket, key.as_ref()).await);
        }
        results
    }
}

/// Collapse a result into an `Option`, noting the failure at debug level.
fn absorb<T>(bucket: &str, key: &str, result: Result<T, Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!("ignoring failure for s3://{bucket}/{key}: {err}");
            None
        }
    }
}
