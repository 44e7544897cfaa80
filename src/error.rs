// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    /// The operating system refused access to a file or device.
    PermissionDenied(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Image(_) => "error-image-decode",
            Error::Config(_) => "error-config",
            Error::PermissionDenied(_) => "error-permission-denied",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::PermissionDenied(e) => write!(f, "Permission Denied: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            Error::PermissionDenied(err.to_string())
        } else {
            Error::Io(err.to_string())
        }
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => io.into(),
            other => Error::Image(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn permission_denied_io_error_is_classified() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        let err: Error = io_error.into();
        assert!(matches!(err, Error::PermissionDenied(_)));
        assert_eq!(err.i18n_key(), "error-permission-denied");
    }

    #[test]
    fn image_io_error_keeps_permission_classification() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        let err: Error = image_rs::ImageError::IoError(io_error).into();
        assert!(matches!(err, Error::PermissionDenied(_)));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            Error::Io(String::new()).i18n_key(),
            Error::Image(String::new()).i18n_key(),
            Error::Config(String::new()).i18n_key(),
            Error::PermissionDenied(String::new()).i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
