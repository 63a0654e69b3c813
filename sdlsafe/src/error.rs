use thiserror::Error;

/// Message substituted when a native call fails without setting an error
/// string.
pub const NO_ERROR_SET: &str = "failure without setting error";

/// Errors produced by the calling layer.
///
/// `Native` is the interesting one: it carries the diagnostic name of the
/// failed function and the last-error string captured (and cleared) at the
/// moment of failure. The remaining variants concern table installation.
#[derive(Debug, Error)]
pub enum SdlError {
    #[error("{func}: {message}")]
    Native { func: &'static str, message: String },

    #[error("no SDL API table has been installed")]
    NotInstalled,

    #[error("{0} is not part of the installed API table")]
    MissingApi(&'static str),

    #[error("SDL API table version {found} is not the supported version {expected}")]
    UnsupportedVersion { expected: u32, found: u32 },

    #[error("an SDL API table is already installed")]
    AlreadyInstalled,
}

impl SdlError {
    /// Build a `Native` error from a captured last-error string. An absent
    /// string gets the fixed [`NO_ERROR_SET`] text.
    pub fn native(func: &'static str, message: Option<String>) -> Self {
        SdlError::Native {
            func,
            message: message.unwrap_or_else(|| NO_ERROR_SET.to_owned()),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type SdlResult<T> = Result<T, SdlError>;
