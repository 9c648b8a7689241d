use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by card APIs.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Invalid user-provided card data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A required input file (logo, source image) is absent.
    #[error("missing {what}: '{}'", path.display())]
    MissingAsset {
        /// Human readable name of the input.
        what: &'static str,
        /// Path that was checked.
        path: PathBuf,
    },

    /// The external ImageMagick process failed or could not be spawned.
    #[error("imagemagick error: {0}")]
    Magick(String),

    /// Output of an ImageMagick query could not be interpreted.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// Invalid render settings.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::MissingAsset`] value.
    pub fn missing(what: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::MissingAsset {
            what,
            path: path.into(),
        }
    }

    /// Build a [`CardError::Magick`] value.
    pub fn magick(msg: impl Into<String>) -> Self {
        Self::Magick(msg.into())
    }

    /// Build a [`CardError::Metrics`] value.
    pub fn metrics(msg: impl Into<String>) -> Self {
        Self::Metrics(msg.into())
    }

    /// Build a [`CardError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
