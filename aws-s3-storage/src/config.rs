/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

pub(crate) mod loader;

mod settings;
pub use self::settings::{
    Credentials, Environment, Settings, ACCESS_KEY_SETTING, DEFAULT_REGION, REGION_SETTING,
    SECRET_KEY_SETTING,
};

/// Default per-call deadline applied to every operation
pub(crate) const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    operation_timeout: Option<Duration>,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the deadline applied to each individual operation, if any.
    ///
    /// The deadline covers the request round trip as well as draining any response body.
    pub fn operation_timeout(&self) -> Option<Duration> {
        self.operation_timeout
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone)]
pub struct Builder {
    operation_timeout: Option<Duration>,
    client: Option<aws_sdk_s3::Client>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            operation_timeout: Some(DEFAULT_OPERATION_TIMEOUT),
            client: None,
        }
    }
}

impl Builder {
    /// Set the deadline applied to each individual operation.
    ///
    /// Passing `None` disables the deadline, leaving only whatever timeouts the SDK client
    /// itself was configured with. Default is 30 seconds.
    pub fn operation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    ///
    /// # Panics
    ///
    /// Panics if no S3 client was set. Use [`from_env`](crate::from_env) to construct one
    /// from credentials.
    pub fn build(self) -> Config {
        Config {
            operation_timeout: self.operation_timeout,
            client: self.client.expect("client set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use aws_sdk_s3::config::Region;

    use super::{Config, DEFAULT_OPERATION_TIMEOUT};

    fn s3_client() -> aws_sdk_s3::Client {
        let conf = aws_sdk_s3::Config::builder()
            .region(Region::from_static("us-east-1"))
            .with_test_defaults()
            .build();
        aws_sdk_s3::Client::from_conf(conf)
    }

    #[test]
    fn test_default_timeout() {
        let config = Config::builder().client(s3_client()).build();
        assert_eq!(Some(DEFAULT_OPERATION_TIMEOUT), config.operation_timeout());
    }

    #[test]
    fn test_timeout_override() {
        let config = Config::builder()
            .client(s3_client())
            .operation_timeout(Some(Duration::from_millis(250)))
            .build();
        assert_eq!(Some(Duration::from_millis(250)), config.operation_timeout());

        let config = Config::builder()
            .client(s3_client())
            .operation_timeout(None)
            .build();
        assert_eq!(None, config.operation_timeout());
    }

    #[test]
    #[should_panic(expected = "client set")]
    fn test_missing_client_panics() {
        let _ = Config::builder().build();
    }
}
