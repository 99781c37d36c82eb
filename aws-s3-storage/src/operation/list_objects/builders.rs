/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::operation::OperationContext;
use crate::types::ObjectSummary;

use super::{ListObjectsInputBuilder, ListObjectsStream};

/// Fluent builder for listing the objects of a bucket
#[derive(Debug)]
pub struct ListObjectsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListObjectsInputBuilder,
}

impl ListObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Start a lazy listing. No request is sent until the first item is polled.
    pub fn into_stream(self) -> Result<ListObjectsStream, Error> {
        let input = self.inner.build()?;
        let ctx = OperationContext::new(self.handle, "ListObjects");
        Ok(ListObjectsStream::new(ctx, input))
    }

    /// List every remaining object, reading all pages into memory.
    pub async fn send(self) -> Result<Vec<ObjectSummary>, Error> {
        let objects = self.into_stream()?.collect().await?;
        tracing::debug!("listed {} objects", objects.len());
        Ok(objects)
    }

    /// The bucket name to list.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket name to list.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name to list.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.prefix(input);
        self
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_prefix(input);
        self
    }

    /// Limits the listing to keys that begin with the specified prefix.
    pub fn get_prefix(&self) -> &Option<String> {
        self.inner.get_prefix()
    }

    /// Maximum number of keys requested per page.
    pub fn max_keys(mut self, input: i32) -> Self {
        self.inner = self.inner.max_keys(input);
        self
    }

    /// Maximum number of keys requested per page.
    pub fn set_max_keys(mut self, input: Option<i32>) -> Self {
        self.inner = self.inner.set_max_keys(input);
        self
    }

    /// Maximum number of keys requested per page.
    pub fn get_max_keys(&self) -> &Option<i32> {
        self.inner.get_max_keys()
    }

    /// Resume a previous listing from the given token.
    pub fn continuation_token(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.continuation_token(input);
        self
    }

    /// Resume a previous listing from the given token.
    pub fn set_continuation_token(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_continuation_token(input);
        self
    }

    /// Resume a previous listing from the given token.
    pub fn get_continuation_token(&self) -> &Option<String> {
        self.inner.get_continuation_token()
    }
}

impl crate::operation::list_objects::input::ListObjectsInputBuilder {
    /// List objects with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<Vec<ObjectSummary>, Error> {
        let mut fluent_builder = client.list_objects();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
