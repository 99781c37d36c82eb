/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A small, typed facade over Amazon S3 bucket and object operations.
//!
//! Every operation is a single round trip to the service and returns an explicit
//! [`Result`] carrying a classified [`Error`](crate::error::Error), so callers can tell an
//! authentication problem from a missing object from any other service failure.
//!
//! On top of the [`Client`] sits [`DataSource`](crate::data_source::DataSource), a batch
//! oriented data-access layer that fetches and stores many keys at once and absorbs
//! individual failures.
//!
//! # Examples
//!
//! Load configuration from explicit settings:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_storage::error::Error> {
//! use std::collections::HashMap;
//! use aws_s3_storage::config::Credentials;
//!
//! let settings = HashMap::from([
//!     ("AWSAccessKey".to_owned(), "AKIDEXAMPLE".to_owned()),
//!     ("AWSSecretAccessKey".to_owned(), "secret".to_owned()),
//! ]);
//! let credentials = Credentials::from_settings(&settings)?;
//! let config = aws_s3_storage::from_env().credentials(credentials).load().await;
//! let client = aws_s3_storage::Client::new(config);
//! # Ok(())
//! # }
//! ```
//!
//! Write and read back an object:
//!
//! ```no_run
//! # async fn example(client: aws_s3_storage::Client) -> Result<(), aws_s3_storage::error::Error> {
//! client
//!     .put_object()
//!     .bucket("my-bucket")
//!     .key("my-key")
//!     .body("this is a test")
//!     .title("the title")
//!     .send()
//!     .await?;
//!
//! let object = client.get_object().bucket("my-bucket").key("my-key").send().await?;
//! assert_eq!(Some("the title"), object.title());
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`list_buckets`](crate::Client::list_buckets) - list every bucket owned by the credentials
//! * [`create_bucket`](crate::Client::create_bucket) - create a bucket
//! * [`delete_bucket`](crate::Client::delete_bucket) - delete a bucket, optionally emptying it first
//! * [`put_object`](crate::Client::put_object) - upload a single object
//! * [`get_object`](crate::Client::get_object) - download a single object into memory
//! * [`delete_object`](crate::Client::delete_object) - delete a single object
//! * [`list_objects`](crate::Client::list_objects) - lazily list every object in a bucket

/// Error types emitted by `aws-s3-storage`
pub mod error;

/// Common types used by `aws-s3-storage`
pub mod types;

/// Object store client
pub mod client;

/// Object store operations
pub mod operation;

/// Client configuration
pub mod config;

/// Batch data-access layer built on top of the client
pub mod data_source;

/// Metrics
pub mod metrics;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
