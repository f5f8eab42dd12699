//! Error types for the onboarding flow

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for onboarding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the onboarding flow
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown {catalogue} option: '{id}'")]
    UnknownOption { catalogue: &'static str, id: String },

    #[error("A custom workout style can only be entered while 'other' is selected")]
    FreeTextNotAllowed,

    #[error("Photo library permission was denied")]
    PermissionDenied,

    #[error("Please upload an image file: {path}")]
    UnsupportedImage { path: PathBuf },

    #[error("Image selection was cancelled")]
    ImageCancelled,

    #[error("Authentication failed for {email}")]
    AuthenticationFailed { email: String },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
