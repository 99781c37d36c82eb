/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use crate::error::{Error, ErrorKind};
use crate::operation::OperationContext;
/// Request type for single object uploads
pub use input::{PutObjectBody, PutObjectInput, PutObjectInputBuilder};
/// Response type for single object uploads
pub use output::{PutObjectOutput, PutObjectOutputBuilder};

/// Operation struct for single object upload
#[derive(Clone, Default, Debug)]
pub(crate) struct PutObject;

impl PutObject {
    /// Execute a single `PutObject` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: PutObjectInput,
    ) -> Result<PutObjectOutput, Error> {
        let ctx = OperationContext::new(handle, "PutObject");
        let output = ctx.run(put_object(ctx.client(), &input)).await?;
        ctx.metrics().add_bytes_uploaded(output.content_length());
        Ok(output)
    }
}

async fn read_body(body: &PutObjectBody) -> Result<Bytes, Error> {
    match body {
        PutObjectBody::Bytes(bytes) => Ok(bytes.clone()),
        PutObjectBody::Path(path) => tokio::fs::read(path).await.map(Bytes::from).map_err(|err| {
            Error::new(
                ErrorKind::IOError,
                format!("failed to read upload source {}: {err}", path.display()),
            )
        }),
    }
}

async fn put_object(
    client: &aws_sdk_s3::Client,
    input: &PutObjectInput,
) -> Result<PutObjectOutput, Error> {
    let body = read_body(&input.body).await?;
    let content_length = body.len() as u64;
    let metadata = (!input.metadata.is_empty()).then(|| input.metadata.clone());

    let resp = client
        .put_object()
        .bucket(&input.bucket)
        .key(&input.key)
        .set_metadata(metadata)
        .set_content_type(input.content_type.clone())
        .body(ByteStream::from(body))
        .send()
        .await?;

    tracing::debug!(
        "uploaded {content_length} bytes to s3://{}/{}",
        input.bucket,
        input.key
    );
    Ok(PutObjectOutput::builder()
        .set_e_tag(resp.e_tag)
        .set_version_id(resp.version_id)
        .content_length(content_length)
        .build())
}
