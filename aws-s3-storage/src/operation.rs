/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::future::Future;
use std::sync::Arc;

use tracing::Instrument;

use crate::error::{self, Error, ErrorKind};

/// Types for listing buckets
pub mod list_buckets;

/// Types for creating a bucket
pub mod create_bucket;

/// Types for deleting a bucket
pub mod delete_bucket;

/// Types for single object upload operation
pub mod put_object;

/// Types for single object download operation
pub mod get_object;

/// Types for single object delete operation
pub mod delete_object;

/// Types for listing the objects of a bucket
pub mod list_objects;

/// Container for maintaining context required to carry out a single operation.
#[derive(Debug, Clone)]
pub(crate) struct OperationContext {
    handle: Arc<crate::client::Handle>,
    operation: &'static str,
}

impl OperationContext {
    pub(crate) fn new(handle: Arc<crate::client::Handle>, operation: &'static str) -> Self {
        Self { handle, operation }
    }

    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.handle.config.client()
    }

    pub(crate) fn metrics(&self) -> &crate::metrics::ClientMetrics {
        &self.handle.metrics
    }

    /// Drive a single remote call to completion.
    ///
    /// The call is bounded by the configured operation timeout. A failure is counted and
    /// logged exactly once here, callers only ever see the returned error.
    pub(crate) async fn run<T, F>(&self, call: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        self.metrics().increment_requests_sent();
        let span = tracing::debug_span!("s3-request", operation = self.operation);
        let result = match self.handle.config.operation_timeout() {
            Some(timeout) => tokio::time::timeout(timeout, call.instrument(span))
                .await
                .unwrap_or_else(|_| Err(error::timed_out(self.operation, timeout))),
            None => call.instrument(span).await,
        };

        if let Err(err) = &result {
            self.metrics()
                .increment_requests_failed(err.is_authentication());
            report_failure(self.operation, err);
        }
        result
    }
}

/// Emit the single log event describing a failed operation.
fn report_failure(operation: &str, err: &Error) {
    match err.kind() {
        ErrorKind::Authentication => tracing::error!(
            code = err.code().unwrap_or_default(),
            "{operation} was rejected because of invalid credentials, check the configured access key and secret key"
        ),
        _ => tracing::warn!(
            code = err.code().unwrap_or_default(),
            message = err.message().unwrap_or_default(),
            "{operation} failed: {err}"
        ),
    }
}
