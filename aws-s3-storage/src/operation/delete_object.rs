/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_smithy_types::error::operation::BuildError;

use crate::error::Error;
use crate::operation::OperationContext;

/// Output type for deleting a single object
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectOutput {
    /// Whether a delete marker was created (versioned buckets only)
    pub delete_marker: bool,

    /// Version ID of the delete marker created, if any
    pub version_id: Option<String>,
}

impl DeleteObjectOutput {
    /// Whether a delete marker was created (versioned buckets only)
    pub fn delete_marker(&self) -> bool {
        self.delete_marker
    }

    /// Version ID of the delete marker created, if any
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }
}

/// Fluent builder for deleting a single object
#[derive(Debug)]
pub struct DeleteObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    key: Option<String>,
}

impl DeleteObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            key: None,
        }
    }

    /// The bucket name containing the object.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket name containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Key of the object to delete.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the object to delete.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the object to delete.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Delete the object.
    ///
    /// Deleting a key that does not exist succeeds, the service does not report whether the
    /// object existed beforehand.
    pub async fn send(self) -> Result<DeleteObjectOutput, Error> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket name is required"))?;
        let key = self
            .key
            .ok_or_else(|| BuildError::missing_field("key", "An object key is required"))?;

        let ctx = OperationContext::new(self.handle, "DeleteObject");
        ctx.run(delete_object(ctx.client(), bucket, key)).await
    }
}

pub(crate) async fn delete_object(
    client: &aws_sdk_s3::Client,
    bucket: String,
    key: String,
) -> Result<DeleteObjectOutput, Error> {
    let resp = client
        .delete_object()
        .bucket(&bucket)
        .key(&key)
        .send()
        .await?;

    tracing::debug!("deleted s3://{bucket}/{key}");
    Ok(DeleteObjectOutput {
        delete_marker: resp.delete_marker.unwrap_or_default(),
        version_id: resp.version_id,
    })
}
