/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for downloading a single object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetObjectInput {
    /// The bucket name containing the object.
    pub bucket: String,

    /// Key of the object to get.
    pub key: String,

    /// Version ID used to reference a specific version of the object.
    pub version_id: Option<String>,
}

impl GetObjectInput {
    /// Creates a new builder-style object to manufacture [`GetObjectInput`](crate::operation::get_object::GetObjectInput).
    pub fn builder() -> GetObjectInputBuilder {
        GetObjectInputBuilder::default()
    }

    /// The bucket name containing the object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key of the object to get.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Version ID used to reference a specific version of the object.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }
}

/// A builder for [`GetObjectInput`](crate::operation::get_object::GetObjectInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct GetObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) version_id: Option<String>,
}

impl GetObjectInputBuilder {
    /// The bucket name containing the object.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket name containing the object.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Key of the object to get.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the object to get.
    ///
    /// NOTE: A key is required.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the object to get.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Version ID used to reference a specific version of the object.
    pub fn version_id(mut self, input: impl Into<String>) -> Self {
        self.version_id = Some(input.into());
        self
    }

    /// Version ID used to reference a specific version of the object.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// Version ID used to reference a specific version of the object.
    pub fn get_version_id(&self) -> &Option<String> {
        &self.version_id
    }

    /// Consumes the builder and constructs a [`GetObjectInput`](crate::operation::get_object::GetObjectInput).
    pub fn build(self) -> Result<GetObjectInput, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket name is required"))?;
        let key = self
            .key
            .ok_or_else(|| BuildError::missing_field("key", "An object key is required"))?;

        Ok(GetObjectInput {
            bucket,
            key,
            version_id: self.version_id,
        })
    }
}
