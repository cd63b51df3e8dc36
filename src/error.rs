// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Crate-wide error type.
///
/// Variants carry rendered messages rather than source errors so the type
/// stays `Clone` and can travel inside Iced messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The precomputed result for a sample could not be resolved or is invalid.
    #[error("Segmentation data unavailable for image {id}: {reason}")]
    SegmentationUnavailable { id: u32, reason: String },

    #[error("Export Error: {0}")]
    Export(String),
}

impl Error {
    /// Builds a [`Error::SegmentationUnavailable`] for the given sample id.
    pub fn unavailable(id: u32, reason: impl Into<String>) -> Self {
        Error::SegmentationUnavailable {
            id,
            reason: reason.into(),
        }
    }

    /// Returns the i18n message key describing this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::SegmentationUnavailable { .. } => "segmentation-error-unavailable",
            Error::Export(_) => "notification-download-error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn unavailable_mentions_id_and_reason() {
        let err = Error::unavailable(7, "asset not found");
        let rendered = err.to_string();
        assert!(rendered.contains('7'));
        assert!(rendered.contains("asset not found"));
        assert_eq!(err.i18n_key(), "segmentation-error-unavailable");
    }
}
