/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::{self, Error};

/// Setting holding the access key id
pub const ACCESS_KEY_SETTING: &str = "AWSAccessKey";

/// Setting holding the secret access key
pub const SECRET_KEY_SETTING: &str = "AWSSecretAccessKey";

/// Setting holding the region, optional
pub const REGION_SETTING: &str = "AWSRegion";

/// Region used when no region setting is present
pub const DEFAULT_REGION: &str = "us-east-1";

/// Provider name attached to credentials created by this crate
const PROVIDER_NAME: &str = "aws-s3-storage";

/// An opaque key-value source of configuration settings.
///
/// Implemented for plain maps and for the process [`Environment`]. Where the values
/// actually live (a file, a secret store, etc) is up to the implementation.
pub trait Settings {
    /// Look up a single setting by name
    fn get(&self, name: &str) -> Option<String>;
}

impl Settings for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl Settings for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

/// Settings read from the process environment.
///
/// Each setting is read from the environment variable of the same name.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl Settings for Environment {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Access key / secret key pair plus the region requests are sent to.
///
/// Loaded once and immutable afterwards. The secret is never included in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    region: String,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }

    /// Read credentials from a settings provider.
    ///
    /// Both [`ACCESS_KEY_SETTING`] and [`SECRET_KEY_SETTING`] are required and must not be
    /// blank. [`REGION_SETTING`] is optional and defaults to [`DEFAULT_REGION`].
    pub fn from_settings(settings: &(impl Settings + ?Sized)) -> Result<Self, Error> {
        let access_key_id = required(settings, ACCESS_KEY_SETTING)?;
        let secret_access_key = required(settings, SECRET_KEY_SETTING)?;
        let region = settings
            .get(REGION_SETTING)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());

        Ok(Self::new(access_key_id, secret_access_key, region))
    }

    /// The access key id
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The secret access key
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// The region requests are sent to
    pub fn region(&self) -> &str {
        &self.region
    }

    pub(crate) fn to_sdk_credentials(&self) -> aws_sdk_s3::config::Credentials {
        aws_sdk_s3::config::Credentials::new(
            &self.access_key_id,
            &self.secret_access_key,
            None,
            None,
            PROVIDER_NAME,
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("Credentials");
        formatter.field("access_key_id", &self.access_key_id);
        formatter.field("secret_access_key", &"** redacted **");
        formatter.field("region", &self.region);
        formatter.finish()
    }
}

fn required(settings: &(impl Settings + ?Sized), name: &str) -> Result<String, Error> {
    match settings.get(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(error::invalid_input(format!(
            "missing required setting `{name}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::error::ErrorKind;

    use super::{Credentials, ACCESS_KEY_SETTING, DEFAULT_REGION, REGION_SETTING, SECRET_KEY_SETTING};

    fn settings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_settings_defaults_region() {
        let settings = settings(&[
            (ACCESS_KEY_SETTING, "AKIDEXAMPLE"),
            (SECRET_KEY_SETTING, "wJalrXUtnFEMI"),
        ]);
        let creds = Credentials::from_settings(&settings).unwrap();
        assert_eq!("AKIDEXAMPLE", creds.access_key_id());
        assert_eq!("wJalrXUtnFEMI", creds.secret_access_key());
        assert_eq!(DEFAULT_REGION, creds.region());
    }

    #[test]
    fn test_from_settings_explicit_region() {
        let settings = settings(&[
            (ACCESS_KEY_SETTING, "AKIDEXAMPLE"),
            (SECRET_KEY_SETTING, "wJalrXUtnFEMI"),
            (REGION_SETTING, "eu-west-1"),
        ]);
        let creds = Credentials::from_settings(&settings).unwrap();
        assert_eq!("eu-west-1", creds.region());
    }

    #[test]
    fn test_from_settings_missing_secret() {
        let settings = settings(&[(ACCESS_KEY_SETTING, "AKIDEXAMPLE"), (SECRET_KEY_SETTING, " ")]);
        let err = Credentials::from_settings(&settings).unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
        assert!(format!("{:?}", err).contains(SECRET_KEY_SETTING));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("AKIDEXAMPLE", "super-secret", "us-east-1");
        let debug = format!("{creds:?}");
        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("super-secret"));
    }
}
