/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;

use crate::config::{Builder, Credentials};
use crate::Config;

/// Load object store [`Config`] from explicit credentials or the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    credentials: Option<Credentials>,
    region: Option<String>,
    endpoint_url: Option<String>,
    force_path_style: bool,
}

impl ConfigLoader {
    /// Use explicit credentials instead of the default AWS credential provider chain.
    ///
    /// The region carried by the credentials is used unless [`region`](Self::region) is
    /// also set.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the region requests are sent to
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Send requests to a custom endpoint (e.g. an S3 compatible service or local emulator)
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Address buckets as a path segment rather than a virtual host.
    ///
    /// Most S3 compatible services other than Amazon S3 require this.
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// Set the deadline applied to each individual operation.
    ///
    /// Default is 30 seconds, `None` disables the deadline.
    pub fn operation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.builder = self.builder.operation_timeout(timeout);
        self
    }

    fn resolved_region(&self) -> Option<Region> {
        self.region
            .clone()
            .or_else(|| self.credentials.as_ref().map(|c| c.region().to_owned()))
            .map(Region::new)
    }

    /// Load the configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default AWS provider chain supplies credentials and region.
    pub async fn load(self) -> Config {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = self.resolved_region() {
            loader = loader.region(region);
        }
        if let Some(credentials) = &self.credentials {
            tracing::debug!(
                access_key_id = credentials.access_key_id(),
                "using explicitly configured credentials"
            );
            loader = loader.credentials_provider(credentials.to_sdk_credentials());
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let shared_config = loader.load().await;
        let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(self.force_path_style)
            .build();
        let s3_client = aws_sdk_s3::Client::from_conf(s3_config);

        self.builder.client(s3_client).build()
    }
}
