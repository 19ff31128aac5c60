//! Fluent annotation methods available on every node kind.
//!
//! Each method consumes the receiver and returns a new outer node; the
//! receiver's chain is never modified. Clone first to keep using it.
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! let err = new_error!("not found").status(Status::BAD_REQUEST).wrap("database error");
//!
//! assert_eq!(err.to_string(), "database error: not found");
//! assert_eq!(find_status(&err), Some(Status::BAD_REQUEST));
//! ```
use crate::traits::Chain;
use crate::types::{Failure, Level, Status, WithLevel, WithMessage, WithStatus};

/// Fluent `wrap`/`level`/`status`, implemented once for every chain node.
pub trait Annotate: Chain + Into<Failure> + Sized {
    /// Prepends a message. No stack is captured; use [`wrap`](crate::wrap) for that.
    ///
    /// The message is taken as-is. Build formatted messages with `format!`
    /// at the call site, or use the [`wrap!`](macro@crate::wrap) and
    /// [`with_message!`](macro@crate::with_message) macros.
    ///
    /// ```
    /// use error_trail::prelude::*;
    ///
    /// let id = 7;
    /// let err = new_error!("timeout").wrap(format!("fetching user {id}"));
    /// assert_eq!(err.to_string(), "fetching user 7: timeout");
    ///
    /// let verbatim = new_error!("timeout").wrap("kept {id}");
    /// assert_eq!(verbatim.to_string(), "kept {id}: timeout");
    /// ```
    #[inline]
    fn wrap(self, message: impl Into<String>) -> WithMessage {
        WithMessage::new(Some(self.into()), message.into())
    }

    /// Tags the chain with a severity. The outermost level wins in [`find_level`](crate::find_level).
    #[inline]
    fn level(self, level: Level) -> WithLevel {
        WithLevel::new(self.into(), level)
    }

    /// Tags the chain with a status. The outermost status wins in [`find_status`](crate::find_status).
    #[inline]
    fn status(self, status: impl Into<Status>) -> WithStatus {
        WithStatus::new(self.into(), status.into())
    }
}

impl<T> Annotate for T where T: Chain + Into<Failure> {}
