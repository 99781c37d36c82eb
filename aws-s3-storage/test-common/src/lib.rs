/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::iter;
use std::sync::{Arc, Mutex};

use aws_s3_storage::types::{StoredObject, TITLE_METADATA_KEY};
use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::primitives::ByteStream;
use aws_smithy_mocks::{mock, mock_client, Rule, RuleMode};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::http::StatusCode;
use bytes::Bytes;

/// Create a storage client backed by the given mock rules
pub fn mock_storage_client(mode: RuleMode, rules: &[&Rule]) -> aws_s3_storage::Client {
    let s3_client = mock_client!(aws_sdk_s3, mode, rules);
    let config = aws_s3_storage::Config::builder().client(s3_client).build();
    aws_s3_storage::Client::new(config)
}

/// Random alphanumeric payload of the given size
pub fn rand_data(size: usize) -> Bytes {
    iter::repeat_with(fastrand::alphanumeric)
        .take(size)
        .map(|x| x as u8)
        .collect::<Vec<_>>()
        .into()
}

/// Raw S3 error response, deserialized by the SDK the same way a real service failure is
pub fn error_http_response(status: u16, code: &str, message: &str) -> HttpResponse {
    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
    <Code>{code}</Code>
    <Message>{message}</Message>
    <RequestId>4442587FB7D0A2F9</RequestId>
</Error>"#
    );
    HttpResponse::new(StatusCode::try_from(status).unwrap(), body.into())
}

/// Rule rejecting any `ListBuckets` request with an invalid access key
pub fn invalid_access_key_rule() -> Rule {
    mock!(aws_sdk_s3::Client::list_buckets).then_http_response(|| {
        error_http_response(
            403,
            "InvalidAccessKeyId",
            "The AWS Access Key Id you provided does not exist in our records.",
        )
    })
}

#[derive(Debug, Clone)]
struct MockObject {
    key: String,
    contents: Bytes,
    metadata: HashMap<String, String>,
}

impl MockObject {
    fn get_object_output(&self) -> GetObjectOutput {
        GetObjectOutput::builder()
            .body(ByteStream::from(self.contents.clone()))
            .content_length(self.contents.len() as i64)
            .set_metadata(Some(self.metadata.clone()))
            .e_tag(format!("\"{}\"", self.key))
            .build()
    }

    fn summary(&self) -> aws_sdk_s3::types::Object {
        aws_sdk_s3::types::Object::builder()
            .key(&self.key)
            .size(self.contents.len() as i64)
            .build()
    }
}

/// Mock bucket with a fixed set of objects.
///
/// NOTE: Each object's `GetObject` rule, and each listing page, is expected to be used at most
/// once. Use with [`RuleMode::MatchAny`] when the request order is not fixed.
#[derive(Debug)]
pub struct MockBucket {
    objects: Vec<MockObject>,
    missing: Vec<String>,
    page_size: usize,
}

impl MockBucket {
    /// Create a new builder
    pub fn builder() -> MockBucketBuilder {
        MockBucketBuilder::default()
    }

    /// `GetObject` rules for every object (and every missing key) in the bucket
    pub fn get_rules(&self) -> Vec<Rule> {
        let found = self.objects.iter().map(|object| {
            let object = Arc::new(object.clone());
            let key = object.key.clone();
            mock!(aws_sdk_s3::Client::get_object)
                .match_requests(move |r| r.key() == Some(key.as_str()))
                .then_output(move || object.get_object_output())
        });
        let missing = self.missing.iter().map(|key| {
            let key = key.clone();
            mock!(aws_sdk_s3::Client::get_object)
                .match_requests(move |r| r.key() == Some(key.as_str()))
                .then_http_response(|| {
                    error_http_response(404, "NoSuchKey", "The specified key does not exist.")
                })
        });
        found.chain(missing).collect()
    }

    /// `ListObjectsV2` rules, one per page, chained by continuation tokens `page-1`, `page-2`...
    pub fn list_rules(&self) -> Vec<Rule> {
        let pages: Vec<_> = self.objects.chunks(self.page_size.max(1)).collect();
        let page_count = pages.len().max(1);
        (0..page_count)
            .map(|idx| {
                let contents: Vec<_> = pages
                    .get(idx)
                    .map(|page| page.iter().map(MockObject::summary).collect())
                    .unwrap_or_default();
                let token = (idx > 0).then(|| format!("page-{idx}"));
                let next_token = (idx + 1 < page_count).then(|| format!("page-{}", idx + 1));
                let output = ListObjectsV2Output::builder()
                    .set_contents(Some(contents))
                    .is_truncated(next_token.is_some())
                    .set_next_continuation_token(next_token)
                    .build();
                mock!(aws_sdk_s3::Client::list_objects_v2)
                    .match_requests(move |r| r.continuation_token() == token.as_deref())
                    .then_output(move || output.clone())
            })
            .collect()
    }

    /// Every rule for this bucket
    pub fn rules(&self) -> Vec<Rule> {
        let mut rules = self.get_rules();
        rules.extend(self.list_rules());
        rules
    }

    /// Keys of the objects in the bucket, in listing order
    pub fn keys(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.key.as_str()).collect()
    }
}

/// Builder for [`MockBucket`]
#[derive(Debug)]
pub struct MockBucketBuilder {
    objects: Vec<MockObject>,
    missing: Vec<String>,
    page_size: usize,
}

impl Default for MockBucketBuilder {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            missing: Vec::new(),
            page_size: 1000,
        }
    }
}

impl MockBucketBuilder {
    /// Add an object with the given contents and no metadata
    pub fn key(mut self, key: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.objects.push(MockObject {
            key: key.into(),
            contents: data.into(),
            metadata: HashMap::new(),
        });
        self
    }

    /// Add an object with the given contents and title
    pub fn key_with_title(
        mut self,
        key: impl Into<String>,
        data: impl Into<Bytes>,
        title: impl Into<String>,
    ) -> Self {
        self.objects.push(MockObject {
            key: key.into(),
            contents: data.into(),
            metadata: HashMap::from([(TITLE_METADATA_KEY.to_owned(), title.into())]),
        });
        self
    }

    /// Add an object with random contents of the given size
    pub fn key_with_size(self, key: impl Into<String>, size: usize) -> Self {
        self.key(key, rand_data(size))
    }

    /// Add a key that does not exist, `GetObject` fails with `NoSuchKey`
    pub fn missing_key(mut self, key: impl Into<String>) -> Self {
        self.missing.push(key.into());
        self
    }

    /// Number of objects returned per listing page
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Consume the builder and build a `MockBucket`
    pub fn build(self) -> MockBucket {
        MockBucket {
            objects: self.objects,
            missing: self.missing,
            page_size: self.page_size,
        }
    }
}

/// Records the objects written by `PutObject` so later requests can observe them.
#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    objects: Arc<Mutex<HashMap<String, StoredObject>>>,
}

impl RecordingStore {
    /// Rule accepting a single `PutObject` request and recording its body and metadata
    pub fn put_rule(&self) -> Rule {
        let objects = self.objects.clone();
        mock!(aws_sdk_s3::Client::put_object)
            .match_requests(move |r| {
                let body = Bytes::copy_from_slice(r.body().bytes().unwrap_or_default());
                let object = r
                    .metadata()
                    .into_iter()
                    .flatten()
                    .fold(StoredObject::new(body), |object, (k, v)| {
                        object.with_metadata(k, v)
                    });
                let key = r.key().unwrap_or_default().to_owned();
                objects.lock().unwrap().insert(key, object);
                true
            })
            .then_output(|| PutObjectOutput::builder().e_tag("\"recorded\"").build())
    }

    /// Rule answering a single `GetObject` request for `key` with whatever was recorded for it
    pub fn get_rule(&self, key: &str) -> Rule {
        let objects = self.objects.clone();
        let key = key.to_owned();
        let lookup = key.clone();
        mock!(aws_sdk_s3::Client::get_object)
            .match_requests(move |r| r.key() == Some(key.as_str()))
            .then_output(move || {
                let object = objects
                    .lock()
                    .unwrap()
                    .get(&lookup)
                    .cloned()
                    .expect("object recorded before it is read");
                let (contents, metadata) = object.into_parts();
                GetObjectOutput::builder()
                    .body(ByteStream::from(contents))
                    .set_metadata(Some(metadata))
                    .build()
            })
    }

    /// The object recorded for `key`, if any
    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    /// Number of objects recorded
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
