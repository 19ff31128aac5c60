//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn lookup(id: u64) -> FailureResult<String> {
//!     Err(new_error!("user {} not found", id).status(Status::NOT_FOUND).into())
//! }
//!
//! let err = lookup(7).unwrap_err();
//! assert_eq!(err.to_string(), "user 7 not found");
//! assert_eq!(find_status(&err), Some(Status::NOT_FOUND));
//! ```

// Macros
pub use crate::{new_error, with_message, wrap};

// Core types
pub use crate::types::{
    Failure, FailureResult, Fundamental, Level, Node, Presentation, Status, WithLevel, WithMessage,
    WithStack, WithStatus,
};

// Traits
pub use crate::traits::{Annotate, Chain, IntoCause, ResultExt};

// Chain operations
pub use crate::annotate::{with_level, with_stack, with_status};
pub use crate::search::{cause, find_level, find_stack, find_status};
