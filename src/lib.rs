//! Annotate errors without losing the original cause.
//!
//! A chain starts at a root error ([`Fundamental`], or any foreign error via
//! [`Failure::external`]) and grows outwards: every annotation allocates a
//! new immutable node pointing at the previous chain. Later code walks the
//! chain back to recover the root, the closest [`Level`] or [`Status`], or a
//! formatted trace.
//!
//! # Examples
//!
//! ## Adding context
//!
//! ```
//! use error_trail::prelude::*;
//!
//! let err = new_error!("not found").wrap("database error").wrap("attention");
//! assert_eq!(err.to_string(), "attention: database error: not found");
//! ```
//!
//! ## Wrapping with a stack trace
//!
//! ```
//! use error_trail::{new_error, wrap, cause};
//!
//! let err = wrap(wrap(new_error!("x"), "y"), "z").unwrap();
//! assert_eq!(err.to_string(), "z: y: x");
//! assert_eq!(cause(&err).unwrap().to_string(), "x");
//!
//! // `{:+}` includes every captured stack trace.
//! let extended = format!("{:+}", err);
//! assert!(extended.starts_with("x\n"));
//! ```
//!
//! ## Levels and status codes
//!
//! ```
//! use error_trail::prelude::*;
//!
//! let err = new_error!("database error").level(Level::Debug).level(Level::Error).wrap("system error");
//! assert_eq!(find_level(&err), Some(Level::Error));
//! assert_eq!(find_status(&err).unwrap_or_default(), Status::INTERNAL_SERVER_ERROR);
//! ```

/// Free-function annotation constructors
pub mod annotate;
/// Formatting shorthands for message-taking constructors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Chain traversal and searches
pub mod search;
/// Call-stack capture
pub mod stack;
/// Core traits for building and inspecting chains
pub mod traits;
/// Chain node types, frames and metadata values
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use annotate::*;
pub use search::*;
pub use traits::*;
pub use types::{
    Failure, FailureResult, Frame, FrameFormat, FrameInfo, FrameVec, Fundamental, Level, Node,
    ParseLevelError, Presentation, Rendered, StackTrace, Status, WithLevel, WithMessage, WithStack,
    WithStatus,
};
