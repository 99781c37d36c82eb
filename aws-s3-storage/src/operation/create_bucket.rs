/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::config::Region;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_smithy_types::error::operation::BuildError;

use crate::config::DEFAULT_REGION;
use crate::error::{self, Error};
use crate::operation::OperationContext;
use crate::types::validate_bucket_name;

/// Output type for creating a bucket
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct CreateBucketOutput {
    /// The location of the created bucket, as reported by the service
    pub location: Option<String>,
}

impl CreateBucketOutput {
    /// The location of the created bucket, as reported by the service
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Fluent builder for creating a bucket
#[derive(Debug)]
pub struct CreateBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl CreateBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Set the name of the bucket to create.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the name of the bucket to create.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The name of the bucket to create
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Create the bucket.
    ///
    /// The name is checked against the S3 naming rules before any request is sent. Outside of
    /// `us-east-1` the client's region is sent as the bucket's location constraint.
    pub async fn send(self) -> Result<CreateBucketOutput, Error> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket name is required"))?;
        validate_bucket_name(&bucket).map_err(error::invalid_input)?;

        let ctx = OperationContext::new(self.handle, "CreateBucket");
        ctx.run(create_bucket(ctx.client(), bucket)).await
    }
}

async fn create_bucket(
    client: &aws_sdk_s3::Client,
    bucket: String,
) -> Result<CreateBucketOutput, Error> {
    let output = client
        .create_bucket()
        .bucket(&bucket)
        .set_create_bucket_configuration(location_constraint(client.config().region()))
        .send()
        .await?;

    tracing::debug!("created bucket {bucket}");
    Ok(CreateBucketOutput {
        location: output.location,
    })
}

/// Buckets outside of `us-east-1` must name their region explicitly.
fn location_constraint(region: Option<&Region>) -> Option<CreateBucketConfiguration> {
    let region = region.map(Region::as_ref).filter(|r| *r != DEFAULT_REGION)?;
    Some(
        CreateBucketConfiguration::builder()
            .location_constraint(BucketLocationConstraint::from(region))
            .build(),
    )
}
