/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_storage::error::ErrorKind;
use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_smithy_mocks::{mock, RuleMode};
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use futures_util::TryStreamExt;
use test_common::{
    invalid_access_key_rule, mock_storage_client, rand_data, MockBucket, RecordingStore,
};

const AUTHENTICATION_LOG: &str = "was rejected because of invalid credentials";

/// An object written with a title reads back with the same bytes and title
#[tokio::test]
async fn test_put_then_get_round_trip() {
    let store = RecordingStore::default();
    let put = store.put_rule();
    let get = store.get_rule("greeting");
    let client = mock_storage_client(RuleMode::Sequential, &[&put, &get]);

    let data = rand_data(1024);
    let put_output = client
        .put_object()
        .bucket("test-bucket")
        .key("greeting")
        .body(data.clone())
        .title("the title")
        .send()
        .await
        .unwrap();
    assert_eq!(1024, put_output.content_length());

    let object = client
        .get_object()
        .bucket("test-bucket")
        .key("greeting")
        .send()
        .await
        .unwrap();

    assert_eq!(&data, object.body());
    assert_eq!(Some("the title"), object.title());
    assert_eq!(1024, client.metrics().bytes_uploaded());
    assert_eq!(1024, client.metrics().bytes_downloaded());
}

/// Reading a key that does not exist reports `NotFound`, which callers may collapse to absent
#[tokio::test]
async fn test_get_missing_key() {
    let bucket = MockBucket::builder().missing_key("missing").build();
    let rules = bucket.get_rules();
    let rules: Vec<_> = rules.iter().collect();
    let client = mock_storage_client(RuleMode::Sequential, &rules);

    let err = client
        .get_object()
        .bucket("test-bucket")
        .key("missing")
        .send()
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(Some("NoSuchKey"), err.code());
    assert_eq!(Some("The specified key does not exist."), err.message());
}

/// Once an object is deleted a subsequent read reports it as absent
#[tokio::test]
async fn test_delete_then_get() {
    let delete = mock!(aws_sdk_s3::Client::delete_object)
        .match_requests(|r| r.key() == Some("doomed"))
        .then_output(|| DeleteObjectOutput::builder().build());
    let bucket = MockBucket::builder().missing_key("doomed").build();
    let mut rules = vec![delete];
    rules.extend(bucket.get_rules());
    let rules: Vec<_> = rules.iter().collect();
    let client = mock_storage_client(RuleMode::Sequential, &rules);

    client
        .delete_object()
        .bucket("test-bucket")
        .key("doomed")
        .send()
        .await
        .unwrap();

    let object = client
        .get_object()
        .bucket("test-bucket")
        .key("doomed")
        .send()
        .await
        .ok();
    assert!(object.is_none());
}

/// Credentials owning no buckets list as an empty collection, not an error
#[tokio::test]
async fn test_list_buckets_empty() {
    let rule =
        mock!(aws_sdk_s3::Client::list_buckets).then_output(|| ListBucketsOutput::builder().build());
    let client = mock_storage_client(RuleMode::Sequential, &[&rule]);

    let output = client.list_buckets().send().await.unwrap();
    assert!(output.buckets().is_empty());
}

/// A rejected access key surfaces as an authentication failure that is logged exactly once
#[tokio::test]
async fn test_invalid_credentials_logged_once() {
    let (_guard, rx) = capture_test_logs();
    let rule = invalid_access_key_rule();
    let client = mock_storage_client(RuleMode::Sequential, &[&rule]);

    let err = client.list_buckets().send().await.unwrap_err();

    assert_eq!(&ErrorKind::Authentication, err.kind());
    assert_eq!(Some("InvalidAccessKeyId"), err.code());
    assert!(!err.is_retryable());
    assert_eq!(1, client.metrics().authentication_failures());

    let logs = rx.contents();
    assert_eq!(1, logs.matches(AUTHENTICATION_LOG).count());
}

/// Listing transparently continues across pages
#[tokio::test]
async fn test_list_objects_across_pages() {
    let bucket = MockBucket::builder()
        .key_with_size("a.txt", 3)
        .key_with_size("b.txt", 5)
        .key_with_size("c.txt", 8)
        .key_with_size("d.txt", 13)
        .key_with_size("e.txt", 21)
        .page_size(2)
        .build();
    let rules = bucket.list_rules();
    assert_eq!(3, rules.len());
    let rules: Vec<_> = rules.iter().collect();
    let client = mock_storage_client(RuleMode::MatchAny, &rules);

    let objects: Vec<_> = client
        .list_objects()
        .bucket("test-bucket")
        .max_keys(2)
        .into_stream()
        .unwrap()
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    let keys: Vec<_> = objects.iter().map(|o| o.key()).collect();
    assert_eq!(bucket.keys(), keys);
    assert_eq!(50, objects.iter().map(|o| o.size()).sum::<u64>());
    assert_eq!(3, client.metrics().requests_sent());
}

/// A listing interrupted between pages resumes from its continuation token
#[tokio::test]
async fn test_list_objects_resume() {
    let bucket = MockBucket::builder()
        .key_with_size("a.txt", 1)
        .key_with_size("b.txt", 1)
        .key_with_size("c.txt", 1)
        .page_size(2)
        .build();
    let rules = bucket.list_rules();
    let rules: Vec<_> = rules.iter().collect();
    let client = mock_storage_client(RuleMode::MatchAny, &rules);

    let mut stream = client
        .list_objects()
        .bucket("test-bucket")
        .into_stream()
        .unwrap();
    assert_eq!("a.txt", stream.next().await.unwrap().unwrap().key());
    assert_eq!("b.txt", stream.next().await.unwrap().unwrap().key());
    let token = stream.continuation_token().map(str::to_owned);
    drop(stream);

    let remaining = client
        .list_objects()
        .bucket("test-bucket")
        .set_continuation_token(token)
        .send()
        .await
        .unwrap();
    assert_eq!(1, remaining.len());
    assert_eq!("c.txt", remaining[0].key());
}
