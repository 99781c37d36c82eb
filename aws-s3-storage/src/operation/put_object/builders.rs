/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;

use crate::error::Error;
use crate::types::StoredObject;

use super::{PutObjectBody, PutObjectInputBuilder, PutObjectOutput};

/// Fluent builder for constructing a single object upload
#[derive(Debug)]
pub struct PutObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: PutObjectInputBuilder,
}

impl PutObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Upload the object
    pub async fn send(self) -> Result<PutObjectOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::put_object::PutObject::orchestrate(self.handle, input).await
    }

    /// The bucket name to which the object is uploaded.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket name to which the object is uploaded.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name to which the object is uploaded.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Object key under which the object is stored.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Object key under which the object is stored.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Object key under which the object is stored.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Upload the given in-memory content.
    pub fn body(mut self, input: impl Into<Bytes>) -> Self {
        self.inner = self.inner.body(input);
        self
    }

    /// Upload the content of a local file, read when the operation is sent.
    pub fn body_from_path(mut self, path: impl AsRef<Path>) -> Self {
        self.inner = self.inner.body_from_path(path);
        self
    }

    /// The object content.
    pub fn set_body(mut self, input: Option<PutObjectBody>) -> Self {
        self.inner = self.inner.set_body(input);
        self
    }

    /// The object content.
    pub fn get_body(&self) -> &Option<PutObjectBody> {
        self.inner.get_body()
    }

    /// Adds a key-value pair to the user metadata.
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.inner = self.inner.metadata(k, v);
        self
    }

    /// User metadata to store with the object.
    pub fn set_metadata(mut self, input: Option<HashMap<String, String>>) -> Self {
        self.inner = self.inner.set_metadata(input);
        self
    }

    /// User metadata to store with the object.
    pub fn get_metadata(&self) -> &HashMap<String, String> {
        self.inner.get_metadata()
    }

    /// Set the `title` user metadata entry.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner = self.inner.title(title);
        self
    }

    /// Upload a [`StoredObject`] (content plus metadata).
    pub fn object(mut self, object: StoredObject) -> Self {
        self.inner = self.inner.object(object);
        self
    }

    /// A standard MIME type describing the format of the object data.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_type(input);
        self
    }

    /// A standard MIME type describing the format of the object data.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_content_type(input);
        self
    }

    /// A standard MIME type describing the format of the object data.
    pub fn get_content_type(&self) -> &Option<String> {
        self.inner.get_content_type()
    }
}

impl crate::operation::put_object::input::PutObjectInputBuilder {
    /// Upload a single object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<PutObjectOutput, Error> {
        let mut fluent_builder = client.put_object();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
