/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::path::Path;

use aws_smithy_types::DateTime;
use bytes::Bytes;

use crate::error::Error;
use crate::types::{StoredObject, TITLE_METADATA_KEY};

/// Output type for downloading a single object.
///
/// The object content has already been fully read into memory.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct GetObjectOutput {
    pub(crate) body: Bytes,
    pub(crate) metadata: HashMap<String, String>,
    pub(crate) content_type: Option<String>,
    pub(crate) e_tag: Option<String>,
    pub(crate) version_id: Option<String>,
    pub(crate) last_modified: Option<DateTime>,
}

impl GetObjectOutput {
    /// The object content
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume the output and return the object content
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// User metadata stored with the object (without the `x-amz-meta-` prefix)
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// The object's `title` metadata entry, if present
    pub fn title(&self) -> Option<&str> {
        self.metadata.get(TITLE_METADATA_KEY).map(String::as_str)
    }

    /// A standard MIME type describing the format of the object data.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Entity tag of the object
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Version ID of the object
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// When the object was last modified
    pub fn last_modified(&self) -> Option<&DateTime> {
        self.last_modified.as_ref()
    }

    /// Convert into a [`StoredObject`] holding the content and user metadata
    pub fn into_stored_object(self) -> StoredObject {
        self.metadata
            .into_iter()
            .fold(StoredObject::new(self.body), |object, (k, v)| {
                object.with_metadata(k, v)
            })
    }

    /// Write the object content to a local file, replacing it if it exists.
    pub async fn write_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, &self.body).await?;
        tracing::debug!("wrote {} bytes to {}", self.body.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bytes::Bytes;

    use super::GetObjectOutput;

    fn output() -> GetObjectOutput {
        GetObjectOutput {
            body: Bytes::from_static(b"this is a test"),
            metadata: HashMap::from([("title".to_owned(), "the title".to_owned())]),
            content_type: None,
            e_tag: None,
            version_id: None,
            last_modified: None,
        }
    }

    #[test]
    fn test_into_stored_object() {
        let object = output().into_stored_object();
        assert_eq!(Some("the title"), object.title());
        assert_eq!(&Bytes::from_static(b"this is a test"), object.content());
    }

    #[tokio::test]
    async fn test_write_to_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/object.txt");

        output().write_to(&path).await.unwrap();

        assert_eq!(b"this is a test".to_vec(), std::fs::read(&path).unwrap());
    }
}
