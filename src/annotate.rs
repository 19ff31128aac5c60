//! Free-function constructors for annotation nodes.
//!
//! Every function takes its cause through [`IntoCause`], so an absent cause
//! (`None`) is accepted. Absence propagates: the result is `None` too, with
//! the single exception of [`with_message`], which always builds a node.
//!
//! [`wrap`] and [`with_stack`] capture the stack of their caller.
//!
//! # Examples
//!
//! ```
//! use error_trail::{new_error, wrap, Failure};
//!
//! let err = wrap(new_error!("not found"), "database error").unwrap();
//! assert_eq!(err.to_string(), "database error: not found");
//!
//! assert!(wrap(None::<Failure>, "no error").is_none());
//! ```
use crate::stack;
use crate::traits::IntoCause;
use crate::types::{Level, Status, WithLevel, WithMessage, WithStack, WithStatus};

/// Adds a message and a fresh stack trace to `err`.
///
/// The result is a [`WithStack`] whose cause is a [`WithMessage`] wrapping
/// `err`; the stack belongs to the outer node.
#[inline(never)]
pub fn wrap<C>(err: C, message: impl Into<String>) -> Option<WithStack>
where
    C: IntoCause,
{
    let cause = err.into_cause()?;
    let inner = WithMessage::new(Some(cause), message.into());
    Some(WithStack::new(inner.into(), stack::capture(1)))
}

/// Adds a message to `err`.
///
/// Unlike the other constructors this never returns absence: with no cause
/// the node renders as `message` alone and reports no inner node.
///
/// ```
/// use error_trail::{with_message, Chain, Failure};
///
/// let err = with_message(None::<Failure>, "no error");
/// assert_eq!(err.to_string(), "no error");
/// assert!(err.cause().is_none());
/// assert!(err.inner().is_none());
/// ```
#[inline]
pub fn with_message<C>(err: C, message: impl Into<String>) -> WithMessage
where
    C: IntoCause,
{
    WithMessage::new(err.into_cause(), message.into())
}

/// Records the caller's stack on top of `err`.
#[inline(never)]
pub fn with_stack<C>(err: C) -> Option<WithStack>
where
    C: IntoCause,
{
    let cause = err.into_cause()?;
    Some(WithStack::new(cause, stack::capture(1)))
}

/// Tags `err` with a severity level.
#[inline]
pub fn with_level<C>(err: C, level: Level) -> Option<WithLevel>
where
    C: IntoCause,
{
    err.into_cause().map(|cause| WithLevel::new(cause, level))
}

/// Tags `err` with a status code.
#[inline]
pub fn with_status<C>(err: C, status: impl Into<Status>) -> Option<WithStatus>
where
    C: IntoCause,
{
    let status = status.into();
    err.into_cause().map(|cause| WithStatus::new(cause, status))
}
