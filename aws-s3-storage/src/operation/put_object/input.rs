/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use aws_smithy_types::error::operation::BuildError;
use bytes::Bytes;

use crate::types::{StoredObject, TITLE_METADATA_KEY};

/// Where the content of an upload comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutObjectBody {
    /// Content already held in memory
    Bytes(Bytes),

    /// Content read from a local file when the operation is sent
    Path(PathBuf),
}

impl Default for PutObjectBody {
    fn default() -> Self {
        PutObjectBody::Bytes(Bytes::new())
    }
}

/// Input type for uploading a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct PutObjectInput {
    /// The bucket name to which the object is uploaded.
    pub bucket: String,

    /// Object key under which the object is stored.
    pub key: String,

    /// The object content.
    pub body: PutObjectBody,

    /// User metadata to store with the object.
    ///
    /// Keys are sent with the `x-amz-meta-` prefix, e.g. `title` is sent as `x-amz-meta-title`.
    pub metadata: HashMap<String, String>,

    /// A standard MIME type describing the format of the object data.
    pub content_type: Option<String>,
}

impl PutObjectInput {
    /// Creates a new builder-style object to manufacture [`PutObjectInput`](crate::operation::put_object::PutObjectInput).
    pub fn builder() -> PutObjectInputBuilder {
        PutObjectInputBuilder::default()
    }

    /// The bucket name to which the object is uploaded.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object key under which the object is stored.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The object content.
    pub fn body(&self) -> &PutObjectBody {
        &self.body
    }

    /// User metadata to store with the object.
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// The title metadata entry, if set.
    pub fn title(&self) -> Option<&str> {
        self.metadata.get(TITLE_METADATA_KEY).map(String::as_str)
    }

    /// A standard MIME type describing the format of the object data.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// A builder for [`PutObjectInput`](crate::operation::put_object::PutObjectInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct PutObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) body: Option<PutObjectBody>,
    pub(crate) metadata: HashMap<String, String>,
    pub(crate) content_type: Option<String>,
}

impl PutObjectInputBuilder {
    /// The bucket name to which the object is uploaded.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket name to which the object is uploaded.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name to which the object is uploaded.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Object key under which the object is stored.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Object key under which the object is stored.
    ///
    /// NOTE: A key is required.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Object key under which the object is stored.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Upload the given in-memory content.
    ///
    /// Replaces any previously set body. Defaults to an empty object.
    pub fn body(mut self, input: impl Into<Bytes>) -> Self {
        self.body = Some(PutObjectBody::Bytes(input.into()));
        self
    }

    /// Upload the content of a local file.
    ///
    /// The file is read when the operation is sent. Replaces any previously set body.
    pub fn body_from_path(mut self, path: impl AsRef<Path>) -> Self {
        self.body = Some(PutObjectBody::Path(path.as_ref().to_path_buf()));
        self
    }

    /// The object content.
    pub fn set_body(mut self, input: Option<PutObjectBody>) -> Self {
        self.body = input;
        self
    }

    /// The object content.
    pub fn get_body(&self) -> &Option<PutObjectBody> {
        &self.body
    }

    /// Adds a key-value pair to the user metadata.
    ///
    /// To override the contents of this collection use [`set_metadata`](Self::set_metadata).
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.metadata.insert(k.into(), v.into());
        self
    }

    /// User metadata to store with the object.
    pub fn set_metadata(mut self, input: Option<HashMap<String, String>>) -> Self {
        self.metadata = input.unwrap_or_default();
        self
    }

    /// User metadata to store with the object.
    pub fn get_metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Set the `title` user metadata entry.
    pub fn title(self, title: impl Into<String>) -> Self {
        self.metadata(TITLE_METADATA_KEY, title)
    }

    /// Upload a [`StoredObject`], using its content as the body and its metadata as user
    /// metadata.
    pub fn object(mut self, object: StoredObject) -> Self {
        let (content, metadata) = object.into_parts();
        self.metadata.extend(metadata);
        self.body(content)
    }

    /// A standard MIME type describing the format of the object data.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.content_type = Some(input.into());
        self
    }

    /// A standard MIME type describing the format of the object data.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.content_type = input;
        self
    }

    /// A standard MIME type describing the format of the object data.
    pub fn get_content_type(&self) -> &Option<String> {
        &self.content_type
    }

    /// Consumes the builder and constructs a [`PutObjectInput`](crate::operation::put_object::PutObjectInput).
    pub fn build(self) -> Result<PutObjectInput, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket name is required"))?;
        let key = self
            .key
            .ok_or_else(|| BuildError::missing_field("key", "An object key is required"))?;
        if key.is_empty() {
            return Err(BuildError::invalid_field("key", "An object key must not be empty"));
        }

        Ok(PutObjectInput {
            bucket,
            key,
            body: self.body.unwrap_or_default(),
            metadata: self.metadata,
            content_type: self.content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::{PutObjectBody, PutObjectInput};
    use crate::types::StoredObject;

    #[test]
    fn test_build_requires_bucket_and_key() {
        assert!(PutObjectInput::builder().key("k").build().is_err());
        assert!(PutObjectInput::builder().bucket("b").build().is_err());
        assert!(PutObjectInput::builder().bucket("b").key("").build().is_err());
    }

    #[test]
    fn test_build_defaults_to_empty_body() {
        let input = PutObjectInput::builder().bucket("b").key("k").build().unwrap();
        assert_eq!(&PutObjectBody::Bytes(Bytes::new()), input.body());
        assert!(input.metadata().is_empty());
    }

    #[test]
    fn test_object_sets_body_and_metadata() {
        let input = PutObjectInput::builder()
            .bucket("b")
            .key("k")
            .metadata("author", "someone")
            .object(StoredObject::new("this is a test").with_title("the title"))
            .build()
            .unwrap();

        assert_eq!(
            &PutObjectBody::Bytes(Bytes::from_static(b"this is a test")),
            input.body()
        );
        assert_eq!(Some("the title"), input.title());
        assert_eq!(Some("someone"), input.metadata().get("author").map(String::as_str));
    }
}
