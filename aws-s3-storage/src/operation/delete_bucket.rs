/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_smithy_types::error::operation::BuildError;

use crate::error::Error;
use crate::operation::list_objects::{ListObjectsInput, ListObjectsStream};
use crate::operation::OperationContext;

/// Output type for deleting a bucket
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketOutput {
    /// Number of objects deleted before the bucket itself (only non-zero with `force`)
    pub objects_deleted: u64,
}

impl DeleteBucketOutput {
    /// Number of objects deleted before the bucket itself
    pub fn objects_deleted(&self) -> u64 {
        self.objects_deleted
    }
}

/// Fluent builder for deleting a bucket
#[derive(Debug)]
pub struct DeleteBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    force: bool,
}

impl DeleteBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            force: false,
        }
    }

    /// Set the name of the bucket to delete.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the name of the bucket to delete.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The name of the bucket to delete
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Delete every object in the bucket before deleting the bucket.
    ///
    /// Without this the service rejects deleting a bucket that is not empty.
    pub fn force(mut self, input: bool) -> Self {
        self.force = input;
        self
    }

    /// Whether objects are deleted before the bucket
    pub fn get_force(&self) -> bool {
        self.force
    }

    /// Delete the bucket.
    ///
    /// With `force`, the first object that fails to delete aborts the operation and the bucket is
    /// left in place.
    pub async fn send(self) -> Result<DeleteBucketOutput, Error> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket name is required"))?;

        let objects_deleted = if self.force {
            empty_bucket(&self.handle, &bucket).await?
        } else {
            0
        };

        let ctx = OperationContext::new(self.handle, "DeleteBucket");
        ctx.run(delete_bucket(ctx.client(), &bucket)).await?;
        Ok(DeleteBucketOutput { objects_deleted })
    }
}

/// Delete every object in the bucket, returning how many were deleted.
async fn empty_bucket(handle: &Arc<crate::client::Handle>, bucket: &str) -> Result<u64, Error> {
    let input = ListObjectsInput::builder().bucket(bucket).build()?;
    let mut objects =
        ListObjectsStream::new(OperationContext::new(handle.clone(), "ListObjects"), input);
    let delete_ctx = OperationContext::new(handle.clone(), "DeleteObject");

    let mut deleted = 0;
    while let Some(object) = objects.next().await {
        let key = object?.key;
        delete_ctx
            .run(super::delete_object::delete_object(
                delete_ctx.client(),
                bucket.to_owned(),
                key,
            ))
            .await?;
        deleted += 1;
    }

    tracing::debug!("deleted {deleted} objects from bucket {bucket}");
    Ok(deleted)
}

async fn delete_bucket(client: &aws_sdk_s3::Client, bucket: &str) -> Result<(), Error> {
    client.delete_bucket().bucket(bucket).send().await?;
    tracing::debug!("deleted bucket {bucket}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::operation::delete_bucket::{DeleteBucketError, DeleteBucketOutput};
    use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
    use aws_sdk_s3::types::Object;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    use crate::error::ErrorKind;

    fn client_with(rules: &[&aws_smithy_mocks::Rule]) -> crate::Client {
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, rules);
        crate::Client::new(crate::Config::builder().client(s3).build())
    }

    #[tokio::test]
    async fn test_delete_empty_bucket() {
        let rule = mock!(aws_sdk_s3::Client::delete_bucket)
            .match_requests(|r| r.bucket() == Some("test-bucket"))
            .then_output(|| DeleteBucketOutput::builder().build());
        let client = client_with(&[&rule]);

        let output = client
            .delete_bucket()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();
        assert_eq!(0, output.objects_deleted());
        assert_eq!(1, rule.num_calls());
    }

    #[tokio::test]
    async fn test_delete_non_empty_bucket_without_force() {
        let rule = mock!(aws_sdk_s3::Client::delete_bucket).then_error(|| {
            DeleteBucketError::generic(
                ErrorMetadata::builder()
                    .code("BucketNotEmpty")
                    .message("The bucket you tried to delete is not empty")
                    .build(),
            )
        });
        let client = client_with(&[&rule]);

        let err = client
            .delete_bucket()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::ServiceError, err.kind());
        assert_eq!(Some("BucketNotEmpty"), err.code());
    }

    #[tokio::test]
    async fn test_force_delete_empties_every_page() {
        let page1 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token().is_none())
            .then_output(|| {
                ListObjectsV2Output::builder()
                    .contents(Object::builder().key("k1").build())
                    .is_truncated(true)
                    .next_continuation_token("token1")
                    .build()
            });
        let delete_k1 = mock!(aws_sdk_s3::Client::delete_object)
            .match_requests(|r| r.key() == Some("k1"))
            .then_output(|| DeleteObjectOutput::builder().build());
        let page2 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token() == Some("token1"))
            .then_output(|| {
                ListObjectsV2Output::builder()
                    .contents(Object::builder().key("k2").build())
                    .build()
            });
        let delete_k2 = mock!(aws_sdk_s3::Client::delete_object)
            .match_requests(|r| r.key() == Some("k2"))
            .then_output(|| DeleteObjectOutput::builder().build());
        let delete_bucket = mock!(aws_sdk_s3::Client::delete_bucket)
            .then_output(|| DeleteBucketOutput::builder().build());
        let client = client_with(&[&page1, &delete_k1, &page2, &delete_k2, &delete_bucket]);

        let output = client
            .delete_bucket()
            .bucket("test-bucket")
            .force(true)
            .send()
            .await
            .unwrap();

        assert_eq!(2, output.objects_deleted());
        assert_eq!(1, delete_k1.num_calls());
        assert_eq!(1, delete_k2.num_calls());
        assert_eq!(1, delete_bucket.num_calls());
    }

    #[tokio::test]
    async fn test_missing_bucket_name() {
        let rule = mock!(aws_sdk_s3::Client::delete_bucket)
            .then_output(|| DeleteBucketOutput::builder().build());
        let client = client_with(&[&rule]);

        let err = client.delete_bucket().force(true).send().await.unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
        assert_eq!(0, rule.num_calls());
    }
}
