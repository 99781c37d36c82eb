/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::operation::OperationContext;
use crate::types::BucketSummary;

/// Output type for listing buckets
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct ListBucketsOutput {
    /// Every bucket owned by the configured credentials
    pub buckets: Vec<BucketSummary>,
}

impl ListBucketsOutput {
    /// Every bucket owned by the configured credentials.
    ///
    /// Empty when the credentials own no buckets.
    pub fn buckets(&self) -> &[BucketSummary] {
        &self.buckets
    }

    /// Consume the output and return the bucket list
    pub fn into_buckets(self) -> Vec<BucketSummary> {
        self.buckets
    }
}

/// Fluent builder for listing buckets
#[derive(Debug)]
pub struct ListBucketsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    prefix: Option<String>,
}

impl ListBucketsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            prefix: None,
        }
    }

    /// Only list buckets whose name begins with the given prefix
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.prefix = Some(input.into());
        self
    }

    /// Only list buckets whose name begins with the given prefix
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.prefix = input;
        self
    }

    /// Only list buckets whose name begins with the given prefix
    pub fn get_prefix(&self) -> &Option<String> {
        &self.prefix
    }

    /// List the buckets, following continuation tokens until every page has been read
    pub async fn send(self) -> Result<ListBucketsOutput, Error> {
        let ctx = OperationContext::new(self.handle, "ListBuckets");
        ctx.run(list_all_buckets(ctx.client(), self.prefix)).await
    }
}

async fn list_all_buckets(
    client: &aws_sdk_s3::Client,
    prefix: Option<String>,
) -> Result<ListBucketsOutput, Error> {
    let mut buckets = Vec::new();
    let mut continuation_token = None;
    loop {
        let output = client
            .list_buckets()
            .set_prefix(prefix.clone())
            .set_continuation_token(continuation_token.take())
            .send()
            .await?;

        buckets.extend(output.buckets().iter().filter_map(|bucket| {
            let name = bucket.name()?;
            Some(BucketSummary::new(name, bucket.creation_date().cloned()))
        }));

        match output.continuation_token() {
            Some(token) if !token.is_empty() => continuation_token = Some(token.to_owned()),
            _ => break,
        }
    }

    tracing::debug!("listed {} buckets", buckets.len());
    Ok(ListBucketsOutput { buckets })
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
    use aws_sdk_s3::types::Bucket;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    fn client_with(rules: &[&aws_smithy_mocks::Rule]) -> crate::Client {
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, rules);
        crate::Client::new(crate::Config::builder().client(s3).build())
    }

    #[tokio::test]
    async fn test_list_buckets_follows_continuation() {
        let page1 = mock!(aws_sdk_s3::Client::list_buckets)
            .match_requests(|r| r.continuation_token().is_none())
            .then_output(|| {
                ListBucketsOutput::builder()
                    .buckets(Bucket::builder().name("bucket-a").build())
                    .buckets(Bucket::builder().name("bucket-b").build())
                    .continuation_token("token1")
                    .build()
            });
        let page2 = mock!(aws_sdk_s3::Client::list_buckets)
            .match_requests(|r| r.continuation_token() == Some("token1"))
            .then_output(|| {
                ListBucketsOutput::builder()
                    .buckets(Bucket::builder().name("bucket-c").build())
                    .build()
            });
        let client = client_with(&[&page1, &page2]);

        let output = client.list_buckets().send().await.unwrap();
        let names: Vec<_> = output.buckets().iter().map(|b| b.name()).collect();
        assert_eq!(vec!["bucket-a", "bucket-b", "bucket-c"], names);
    }

    #[tokio::test]
    async fn test_list_buckets_passes_prefix() {
        let rule = mock!(aws_sdk_s3::Client::list_buckets)
            .match_requests(|r| r.prefix() == Some("logs-"))
            .then_output(|| ListBucketsOutput::builder().build());
        let client = client_with(&[&rule]);

        let output = client.list_buckets().prefix("logs-").send().await.unwrap();
        assert!(output.buckets().is_empty());
    }
}
