/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::time::Duration;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error codes S3 uses to reject a request because of the credentials it was signed with.
const AUTHENTICATION_CODES: &[&str] = &[
    "InvalidAccessKeyId",
    "InvalidSecurity",
    "SignatureDoesNotMatch",
];

/// Error codes S3 uses for a bucket or key that does not exist.
const NOT_FOUND_CODES: &[&str] = &["NotFound", "NoSuchKey", "NoSuchBucket"];

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    code: Option<String>,
    message: Option<String>,
    source: BoxError,
}

/// General categories of object store errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues (missing bucket, invalid bucket name, missing settings)
    InputInvalid,

    /// The service rejected the credentials the request was signed with.
    ///
    /// Fixing the configured access key / secret key is the only remedy, these are never
    /// worth retrying.
    Authentication,

    /// Resource not found (e.g. bucket or key does not exist)
    NotFound,

    /// Any other failure reported by the service. The service supplied code and message
    /// are available from [`Error::code`] and [`Error::message`].
    ServiceError,

    /// The per-call deadline elapsed before the operation completed
    Timeout,

    /// I/O errors (transport failures, body stream failures, local files)
    IOError,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            code: None,
            message: None,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The error code reported by the service, if any
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The error message reported by the service, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true if the service rejected the request's credentials
    pub fn is_authentication(&self) -> bool {
        self.kind == ErrorKind::Authentication
    }

    /// Returns true if the bucket or key does not exist
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Whether repeating the same call could reasonably succeed.
    ///
    /// This library never retries on its own, this is purely a hint for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout | ErrorKind::IOError)
    }

    fn with_metadata(mut self, code: Option<&str>, message: Option<&str>) -> Self {
        self.code = code.map(str::to_owned);
        self.message = message.map(str::to_owned);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input")?,
            ErrorKind::Authentication => write!(f, "authentication failed")?,
            ErrorKind::NotFound => write!(f, "resource not found")?,
            ErrorKind::ServiceError => write!(f, "service error")?,
            ErrorKind::Timeout => write!(f, "operation timed out")?,
            ErrorKind::IOError => write!(f, "I/O error")?,
        }
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        let kind = match &value {
            SdkError::TimeoutError(_) => ErrorKind::Timeout,
            SdkError::DispatchFailure(failure) if failure.is_timeout() => ErrorKind::Timeout,
            SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => ErrorKind::IOError,
            SdkError::ConstructionFailure(_) => ErrorKind::InputInvalid,
            _ => classify_code(value.code()),
        };

        let code = value.code().map(str::to_owned);
        let message = value.message().map(str::to_owned);
        Error::new(kind, value).with_metadata(code.as_deref(), message.as_deref())
    }
}

/// Map a service error code onto the coarse [`ErrorKind`] taxonomy
pub(crate) fn classify_code(code: Option<&str>) -> ErrorKind {
    match code {
        Some(code) if AUTHENTICATION_CODES.contains(&code) => ErrorKind::Authentication,
        Some(code) if NOT_FOUND_CODES.contains(&code) => ErrorKind::NotFound,
        _ => ErrorKind::ServiceError,
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn timed_out(operation: &str, timeout: Duration) -> Error {
    Error::new(
        ErrorKind::Timeout,
        format!("{operation} did not complete within {timeout:?}"),
    )
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::error::{ErrorMetadata, SdkError};
    use aws_sdk_s3::operation::get_object::GetObjectError;
    use aws_smithy_runtime_api::http::{Response, StatusCode};
    use aws_smithy_types::body::SdkBody;

    use super::{classify_code, Error, ErrorKind};

    fn service_error(code: &str, message: &str) -> SdkError<GetObjectError, Response> {
        let err = GetObjectError::generic(
            ErrorMetadata::builder()
                .code(code)
                .message(message)
                .build(),
        );
        let raw = Response::new(StatusCode::try_from(403).unwrap(), SdkBody::empty());
        SdkError::service_error(err, raw)
    }

    #[test]
    fn test_classify_code() {
        assert_eq!(
            ErrorKind::Authentication,
            classify_code(Some("InvalidAccessKeyId"))
        );
        assert_eq!(
            ErrorKind::Authentication,
            classify_code(Some("InvalidSecurity"))
        );
        assert_eq!(
            ErrorKind::Authentication,
            classify_code(Some("SignatureDoesNotMatch"))
        );
        assert_eq!(ErrorKind::NotFound, classify_code(Some("NoSuchKey")));
        assert_eq!(ErrorKind::NotFound, classify_code(Some("NoSuchBucket")));
        assert_eq!(ErrorKind::ServiceError, classify_code(Some("SlowDown")));
        assert_eq!(ErrorKind::ServiceError, classify_code(None));
    }

    #[test]
    fn test_sdk_error_keeps_code_and_message() {
        let err = Error::from(service_error("InvalidAccessKeyId", "key does not exist"));
        assert!(err.is_authentication());
        assert!(!err.is_retryable());
        assert_eq!(Some("InvalidAccessKeyId"), err.code());
        assert_eq!(Some("key does not exist"), err.message());
        assert_eq!("authentication failed (InvalidAccessKeyId)", err.to_string());
    }

    #[test]
    fn test_sdk_error_generic_service_failure() {
        let err = Error::from(service_error("InternalError", "we encountered an internal error"));
        assert_eq!(&ErrorKind::ServiceError, err.kind());
        assert_eq!(Some("InternalError"), err.code());
        assert_eq!(Some("we encountered an internal error"), err.message());
    }

    #[test]
    fn test_io_error_is_retryable() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(&ErrorKind::IOError, err.kind());
        assert!(err.is_retryable());
        assert_eq!(None, err.code());
    }
}
