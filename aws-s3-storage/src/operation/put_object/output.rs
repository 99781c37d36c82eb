/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for uploading a single object
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct PutObjectOutput {
    /// Entity tag for the uploaded object.
    pub e_tag: Option<String>,

    /// Version ID of the object, when versioning is enabled for the bucket.
    pub version_id: Option<String>,

    /// Number of payload bytes uploaded.
    pub content_length: u64,
}

impl PutObjectOutput {
    /// Creates a new builder-style object to manufacture [`PutObjectOutput`](crate::operation::put_object::PutObjectOutput).
    pub fn builder() -> PutObjectOutputBuilder {
        PutObjectOutputBuilder::default()
    }

    /// Entity tag for the uploaded object.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Version ID of the object, when versioning is enabled for the bucket.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// Number of payload bytes uploaded.
    pub fn content_length(&self) -> u64 {
        self.content_length
    }
}

/// A builder for [`PutObjectOutput`](crate::operation::put_object::PutObjectOutput).
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct PutObjectOutputBuilder {
    pub(crate) e_tag: Option<String>,
    pub(crate) version_id: Option<String>,
    pub(crate) content_length: u64,
}

impl PutObjectOutputBuilder {
    /// Entity tag for the uploaded object.
    pub fn e_tag(mut self, input: impl Into<String>) -> Self {
        self.e_tag = Some(input.into());
        self
    }

    /// Entity tag for the uploaded object.
    pub fn set_e_tag(mut self, input: Option<String>) -> Self {
        self.e_tag = input;
        self
    }

    /// Version ID of the object.
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.version_id = Some(input.into());
        self
    }

    /// Version ID of the object.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// Number of payload bytes uploaded.
    pub fn content_length(mut self, input: u64) -> Self {
        self.content_length = input;
        self
    }

    /// Consumes the builder and constructs a [`PutObjectOutput`]
    pub fn build(self) -> PutObjectOutput {
        PutObjectOutput {
            e_tag: self.e_tag,
            version_id: self.version_id,
            content_length: self.content_length,
        }
    }
}
