/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use aws_smithy_types::DateTime;
use bytes::Bytes;

/// Metadata key used for an object's title
pub const TITLE_METADATA_KEY: &str = "title";

/// A bucket owned by the configured credentials.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct BucketSummary {
    /// The name of the bucket
    pub name: String,

    /// When the bucket was created, if reported by the service
    pub creation_date: Option<DateTime>,
}

impl BucketSummary {
    pub(crate) fn new(name: impl Into<String>, creation_date: Option<DateTime>) -> Self {
        Self {
            name: name.into(),
            creation_date,
        }
    }

    /// The name of the bucket
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A single entry from a bucket listing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    /// The object key
    pub key: String,

    /// The object size in bytes
    pub size: u64,

    /// The entity tag of the object, if reported by the service
    pub e_tag: Option<String>,
}

impl ObjectSummary {
    pub(crate) fn from_object(object: aws_sdk_s3::types::Object) -> Option<Self> {
        let key = object.key?;
        Some(Self {
            key,
            size: object.size.unwrap_or_default().max(0) as u64,
            e_tag: object.e_tag,
        })
    }

    /// The object key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The object size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// An object payload together with its user metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredObject {
    content: Bytes,
    metadata: HashMap<String, String>,
}

impl StoredObject {
    /// Create a new object with the given content and no metadata
    pub fn new(content: impl Into<Bytes>) -> Self {
        Self {
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Set the object's title metadata
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with_metadata(TITLE_METADATA_KEY, title)
    }

    /// Add a single user metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The object payload
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// User metadata stored alongside the payload
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// The object's title, if set
    pub fn title(&self) -> Option<&str> {
        self.metadata.get(TITLE_METADATA_KEY).map(String::as_str)
    }

    /// Consume the object and return its parts
    pub fn into_parts(self) -> (Bytes, HashMap<String, String>) {
        (self.content, self.metadata)
    }
}

/// Check a bucket name against the S3 general purpose bucket naming rules.
///
/// Returns a description of the first violated rule.
pub(crate) fn validate_bucket_name(name: &str) -> Result<(), String> {
    if !(3..=63).contains(&name.len()) {
        return Err(format!(
            "bucket name `{name}` must be between 3 and 63 characters long"
        ));
    }

    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '.' || *c == '-'))
    {
        return Err(format!(
            "bucket name `{name}` contains invalid character `{c}`"
        ));
    }

    let alphanumeric = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
    if !alphanumeric(name.chars().next()) || !alphanumeric(name.chars().last()) {
        return Err(format!(
            "bucket name `{name}` must begin and end with a letter or number"
        ));
    }

    if name.contains("..") {
        return Err(format!(
            "bucket name `{name}` must not contain two adjacent periods"
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_bucket_name, ObjectSummary, StoredObject};

    #[test]
    fn test_valid_bucket_names() {
        for name in ["abc", "my-bucket", "my.bucket.1", "0bucket9"] {
            assert!(validate_bucket_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_invalid_bucket_names() {
        let cases = [
            ("ab", "between 3 and 63"),
            ("MyBucket", "invalid character `M`"),
            ("my_bucket", "invalid character `_`"),
            ("-bucket", "begin and end"),
            ("bucket.", "begin and end"),
            ("my..bucket", "adjacent periods"),
        ];
        for (name, reason) in cases {
            let err = validate_bucket_name(name).unwrap_err();
            assert!(err.contains(reason), "{name}: {err}");
        }
        assert!(validate_bucket_name(&"a".repeat(64)).is_err());
    }

    #[test]
    fn test_stored_object_title() {
        let object = StoredObject::new("this is a test").with_title("the title");
        assert_eq!(Some("the title"), object.title());
        assert_eq!(&b"this is a test"[..], &object.content()[..]);
        assert_eq!(None, StoredObject::new("untitled").title());
    }

    #[test]
    fn test_object_summary_requires_key() {
        let object = aws_sdk_s3::types::Object::builder().size(12).build();
        assert_eq!(None, ObjectSummary::from_object(object));

        let object = aws_sdk_s3::types::Object::builder()
            .key("k1")
            .size(12)
            .build();
        let summary = ObjectSummary::from_object(object).unwrap();
        assert_eq!("k1", summary.key());
        assert_eq!(12, summary.size());
    }
}
