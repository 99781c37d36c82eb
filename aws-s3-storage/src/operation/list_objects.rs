/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod stream;

/// Request type for listing the objects of a bucket
pub use input::{ListObjectsInput, ListObjectsInputBuilder};
/// Lazy, restartable listing of a bucket's objects
pub use stream::ListObjectsStream;
