/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for listing the objects of a bucket
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListObjectsInput {
    /// The bucket name to list.
    pub bucket: String,

    /// Limits the listing to keys that begin with the specified prefix.
    pub prefix: Option<String>,

    /// Maximum number of keys requested per page.
    pub max_keys: Option<i32>,

    /// Token of the page to start from, as returned by
    /// [`ListObjectsStream::continuation_token`](crate::operation::list_objects::ListObjectsStream::continuation_token).
    pub continuation_token: Option<String>,
}

impl ListObjectsInput {
    /// Creates a new builder-style object to manufacture [`ListObjectsInput`](crate::operation::list_objects::ListObjectsInput).
    pub fn builder() -> ListObjectsInputBuilder {
        ListObjectsInputBuilder::default()
    }

    /// The bucket name to list.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Maximum number of keys requested per page.
    pub fn max_keys(&self) -> Option<i32> {
        self.max_keys
    }

    /// Token of the page to start from.
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }
}

/// A builder for [`ListObjectsInput`](crate::operation::list_objects::ListObjectsInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct ListObjectsInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) max_keys: Option<i32>,
    pub(crate) continuation_token: Option<String>,
}

impl ListObjectsInputBuilder {
    /// The bucket name to list.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket name to list.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name to list.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.prefix = Some(input.into());
        self
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.prefix = input;
        self
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn get_prefix(&self) -> &Option<String> {
        &self.prefix
    }

    /// Maximum number of keys requested per page. The service may return fewer.
    pub fn max_keys(mut self, input: i32) -> Self {
        self.max_keys = Some(input);
        self
    }

    /// Maximum number of keys requested per page. The service may return fewer.
    pub fn set_max_keys(mut self, input: Option<i32>) -> Self {
        self.max_keys = input;
        self
    }

    /// Maximum number of keys requested per page.
    pub fn get_max_keys(&self) -> &Option<i32> {
        &self.max_keys
    }

    /// Resume a previous listing from the given token.
    pub fn continuation_token(mut self, input: impl Into<String>) -> Self {
        self.continuation_token = Some(input.into());
        self
    }

    /// Resume a previous listing from the given token.
    pub fn set_continuation_token(mut self, input: Option<String>) -> Self {
        self.continuation_token = input;
        self
    }

    /// Resume a previous listing from the given token.
    pub fn get_continuation_token(&self) -> &Option<String> {
        &self.continuation_token
    }

    /// Consumes the builder and constructs a [`ListObjectsInput`](crate::operation::list_objects::ListObjectsInput).
    pub fn build(self) -> Result<ListObjectsInput, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket name is required"))?;
        if let Some(max_keys) = self.max_keys {
            if max_keys <= 0 {
                return Err(BuildError::invalid_field(
                    "max_keys",
                    "max_keys must be greater than zero",
                ));
            }
        }

        Ok(ListObjectsInput {
            bucket,
            prefix: self.prefix,
            max_keys: self.max_keys,
            continuation_token: self.continuation_token,
        })
    }
}
