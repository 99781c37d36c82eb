/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use std::sync::Arc;

use crate::error::Error;
use crate::operation::OperationContext;
/// Request type for single object downloads
pub use input::{GetObjectInput, GetObjectInputBuilder};
/// Response type for single object downloads
pub use output::GetObjectOutput;

/// Operation struct for single object download
#[derive(Clone, Default, Debug)]
pub(crate) struct GetObject;

impl GetObject {
    /// Execute a single `GetObject` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: GetObjectInput,
    ) -> Result<GetObjectOutput, Error> {
        let ctx = OperationContext::new(handle, "GetObject");
        let output = ctx.run(get_object(ctx.client(), &input)).await?;
        ctx.metrics().add_bytes_downloaded(output.body().len() as u64);
        Ok(output)
    }
}

/// Send the request and drain the response body into memory.
async fn get_object(
    client: &aws_sdk_s3::Client,
    input: &GetObjectInput,
) -> Result<GetObjectOutput, Error> {
    let resp = client
        .get_object()
        .bucket(&input.bucket)
        .key(&input.key)
        .set_version_id(input.version_id.clone())
        .send()
        .await?;

    let body = resp.body.collect().await?.into_bytes();
    tracing::debug!(
        "downloaded {} bytes from s3://{}/{}",
        body.len(),
        input.bucket,
        input.key
    );

    Ok(GetObjectOutput {
        body,
        metadata: resp.metadata.unwrap_or_default(),
        content_type: resp.content_type,
        e_tag: resp.e_tag,
        version_id: resp.version_id,
        last_modified: resp.last_modified,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::task::Poll;
    use std::time::Duration;

    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
    use aws_sdk_s3::primitives::ByteStream;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};
    use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
    use aws_smithy_types::body::SdkBody;
    use bytes::Bytes;

    use crate::error::ErrorKind;

    fn client_with(rules: &[&aws_smithy_mocks::Rule]) -> crate::Client {
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, rules);
        crate::Client::new(crate::Config::builder().client(s3).build())
    }

    /// Response body that never yields a frame
    struct StalledBody;

    impl http_body_1x::Body for StalledBody {
        type Data = Bytes;
        type Error = std::io::Error;

        fn poll_frame(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> Poll<Option<Result<http_body_1x::Frame<Self::Data>, Self::Error>>> {
            Poll::Pending
        }
    }

    #[tokio::test]
    async fn test_get_object_drains_body_and_metadata() {
        let rule = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.bucket() == Some("test-bucket") && r.key() == Some("test-key"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"this is a test"))
                    .set_metadata(Some(HashMap::from([(
                        "title".to_owned(),
                        "the title".to_owned(),
                    )])))
                    .e_tag("test-etag")
                    .build()
            });
        let client = client_with(&[&rule]);

        let output = client
            .get_object()
            .bucket("test-bucket")
            .key("test-key")
            .send()
            .await
            .unwrap();

        assert_eq!(&b"this is a test"[..], &output.body()[..]);
        assert_eq!(Some("the title"), output.title());
        assert_eq!(Some("test-etag"), output.e_tag());
        assert_eq!(14, client.metrics().bytes_downloaded());
    }

    #[tokio::test]
    async fn test_get_object_no_such_key() {
        let rule = mock!(aws_sdk_s3::Client::get_object).then_error(|| {
            GetObjectError::generic(
                ErrorMetadata::builder()
                    .code("NoSuchKey")
                    .message("The specified key does not exist.")
                    .build(),
            )
        });
        let client = client_with(&[&rule]);

        let result = client
            .get_object()
            .bucket("test-bucket")
            .key("missing")
            .send()
            .await;

        let err = result.as_ref().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(Some("The specified key does not exist."), err.message());
        // callers that only care about presence collapse the error into `None`
        assert!(result.ok().is_none());
    }

    #[tokio::test]
    async fn test_get_object_requires_key() {
        let rule = mock!(aws_sdk_s3::Client::get_object)
            .then_output(|| GetObjectOutput::builder().build());
        let client = client_with(&[&rule]);

        let err = client
            .get_object()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
        assert_eq!(0, rule.num_calls());
    }

    #[tokio::test]
    async fn test_get_object_times_out_while_draining_body() {
        let (_guard, rx) = capture_test_logs();
        let rule = mock!(aws_sdk_s3::Client::get_object).then_output(|| {
            GetObjectOutput::builder()
                .body(ByteStream::new(SdkBody::from_body_1_x(StalledBody)))
                .build()
        });
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&rule]);
        let client = crate::Client::new(
            crate::Config::builder()
                .client(s3)
                .operation_timeout(Some(Duration::from_millis(50)))
                .build(),
        );

        let err = client
            .get_object()
            .bucket("test-bucket")
            .key("stalled")
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::Timeout, err.kind());
        assert!(err.is_retryable());
        assert_eq!(1, rule.num_calls());
        assert_eq!(1, client.metrics().requests_failed());
        assert_eq!(0, client.metrics().bytes_downloaded());

        let logs = rx.contents();
        assert_eq!(1, logs.matches("GetObject failed").count());
    }
}
