/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// A monotonically increasing numeric value.
#[derive(Debug, Clone, Default)]
pub struct IncreasingCounter {
    value: Arc<AtomicU64>,
}

impl IncreasingCounter {
    /// Create a new counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter by the given amount and return the new value.
    pub fn increment(&self, amount: u64) -> u64 {
        self.value.fetch_add(amount, Ordering::Relaxed) + amount
    }

    /// Get the current value of the counter.
    pub fn value(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Client-level metrics aggregated across all operations
#[derive(Debug, Clone, Default)]
pub struct ClientMetrics {
    /// Total number of operations sent to the service
    requests_sent: IncreasingCounter,
    /// Total number of operations that failed
    requests_failed: IncreasingCounter,
    /// Total number of failures classified as authentication failures
    authentication_failures: IncreasingCounter,
    /// Total payload bytes uploaded
    bytes_uploaded: IncreasingCounter,
    /// Total payload bytes downloaded
    bytes_downloaded: IncreasingCounter,
}

impl ClientMetrics {
    /// Create new client metrics
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn increment_requests_sent(&self) {
        self.requests_sent.increment(1);
    }

    pub(crate) fn increment_requests_failed(&self, authentication: bool) {
        self.requests_failed.increment(1);
        if authentication {
            self.authentication_failures.increment(1);
        }
    }

    pub(crate) fn add_bytes_uploaded(&self, bytes: u64) {
        self.bytes_uploaded.increment(bytes);
    }

    pub(crate) fn add_bytes_downloaded(&self, bytes: u64) {
        self.bytes_downloaded.increment(bytes);
    }

    /// Get the number of operations sent
    pub fn requests_sent(&self) -> u64 {
        self.requests_sent.value()
    }

    /// Get the number of operations that failed
    pub fn requests_failed(&self) -> u64 {
        self.requests_failed.value()
    }

    /// Get the number of operations rejected because of invalid credentials
    pub fn authentication_failures(&self) -> u64 {
        self.authentication_failures.value()
    }

    /// Get the total payload bytes uploaded
    pub fn bytes_uploaded(&self) -> u64 {
        self.bytes_uploaded.value()
    }

    /// Get the total payload bytes downloaded
    pub fn bytes_downloaded(&self) -> u64 {
        self.bytes_downloaded.value()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientMetrics, IncreasingCounter};

    #[test]
    fn test_counter_shared_between_clones() {
        let counter = IncreasingCounter::new();
        let clone = counter.clone();
        assert_eq!(5, counter.increment(5));
        assert_eq!(7, clone.increment(2));
        assert_eq!(7, counter.value());
    }

    #[test]
    fn test_client_metrics() {
        let metrics = ClientMetrics::new();
        metrics.increment_requests_sent();
        metrics.increment_requests_sent();
        metrics.increment_requests_failed(true);
        metrics.increment_requests_failed(false);
        metrics.add_bytes_uploaded(10);
        metrics.add_bytes_downloaded(4);

        assert_eq!(2, metrics.requests_sent());
        assert_eq!(2, metrics.requests_failed());
        assert_eq!(1, metrics.authentication_failures());
        assert_eq!(10, metrics.bytes_uploaded());
        assert_eq!(4, metrics.bytes_downloaded());
    }
}
