//! Chain node types and the values they carry.
//!
//! Every chain is a singly linked list of immutable nodes ending in a
//! [`Fundamental`] (or a foreign error held by [`Failure::External`]):
//!
//! ```
//! use error_trail::prelude::*;
//!
//! let err = new_error!("not found")
//!     .wrap("database error")
//!     .level(Level::Debug)
//!     .wrap("attention");
//!
//! assert_eq!(err.to_string(), "attention: database error: not found");
//! assert_eq!(find_level(&err), Some(Level::Debug));
//! ```
use smallvec::SmallVec;

pub mod failure;
pub mod frame;
pub mod fundamental;
pub mod level;
pub mod node;
pub mod presentation;
pub mod stack_trace;
pub mod status;
pub mod with_level;
pub mod with_message;
pub mod with_stack;
pub mod with_status;

pub use failure::Failure;
pub use frame::{Frame, FrameFormat, FrameInfo};
pub use fundamental::Fundamental;
pub use level::{Level, ParseLevelError};
pub use node::Node;
pub use presentation::{Presentation, Rendered};
pub use stack_trace::StackTrace;
pub use status::Status;
pub use with_level::WithLevel;
pub use with_message::WithMessage;
pub use with_stack::WithStack;
pub use with_status::WithStatus;

/// SmallVec-backed frame storage for [`StackTrace`].
///
/// Keeps up to 16 frames inline so shallow captures avoid a second heap
/// allocation.
pub type FrameVec = SmallVec<[Frame; 16]>;

/// Result alias for functions failing with an annotated chain.
pub type FailureResult<T> = Result<T, Failure>;

/// Implements `Display` and `std::error::Error` for a node kind by
/// dispatching through its [`Node`] view.
macro_rules! impl_chain_error {
    ($type:ty) => {
        impl core::fmt::Display for $type {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&$crate::traits::Chain::node(self), f)
            }
        }

        impl std::error::Error for $type {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                $crate::traits::Chain::node(self).source()
            }
        }
    };
}

pub(crate) use impl_chain_error;
