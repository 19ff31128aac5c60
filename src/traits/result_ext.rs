//! Extension trait for annotating the error side of a `Result`.
//!
//! This module provides [`ResultExt`], which applies the same annotations
//! as [`wrap`](crate::wrap), [`with_level`](crate::with_level) and
//! [`with_status`](crate::with_status) without a `match` or `.map_err()`.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::WithStack;
//!
//! fn load_config() -> Result<String, WithStack> {
//!     std::fs::read_to_string("/nonexistent/config.toml").wrap_err("loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.to_string().starts_with("loading configuration file: "));
//! ```
use crate::stack;
use crate::types::{Failure, Level, Status, WithLevel, WithMessage, WithStack, WithStatus};

/// Annotates `Err` values; `Ok` values pass through untouched.
pub trait ResultExt<T> {
    /// Adds a message and captures the stack at the call site.
    fn wrap_err(self, message: impl Into<String>) -> Result<T, WithStack>;

    /// Like [`wrap_err`](ResultExt::wrap_err), but only builds the message on failure.
    fn wrap_err_with<F>(self, f: F) -> Result<T, WithStack>
    where
        F: FnOnce() -> String;

    /// Tags the error with a severity level.
    fn with_level(self, level: Level) -> Result<T, WithLevel>;

    /// Tags the error with a status code.
    fn with_status(self, status: impl Into<Status>) -> Result<T, WithStatus>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Failure>,
{
    #[inline(never)]
    fn wrap_err(self, message: impl Into<String>) -> Result<T, WithStack> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let inner = WithMessage::new(Some(error.into()), message.into());
                Err(WithStack::new(inner.into(), stack::capture(1)))
            },
        }
    }

    #[inline(never)]
    fn wrap_err_with<F>(self, f: F) -> Result<T, WithStack>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let inner = WithMessage::new(Some(error.into()), f());
                Err(WithStack::new(inner.into(), stack::capture(1)))
            },
        }
    }

    #[inline]
    fn with_level(self, level: Level) -> Result<T, WithLevel> {
        self.map_err(|e| WithLevel::new(e.into(), level))
    }

    #[inline]
    fn with_status(self, status: impl Into<Status>) -> Result<T, WithStatus> {
        let status = status.into();
        self.map_err(|e| WithStatus::new(e.into(), status))
    }
}
