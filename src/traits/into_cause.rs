//! Conversion of wrappable values into an optional cause.
//!
//! Absence is contagious: every annotation built from a `None` cause is
//! itself `None` (except [`with_message`](crate::with_message), which always
//! produces a node).
//!
//! # Examples
//!
//! ```
//! use error_trail::{new_error, traits::IntoCause, Failure};
//!
//! assert!(new_error!("boom").into_cause().is_some());
//! assert!(None::<Failure>.into_cause().is_none());
//! ```
use std::error::Error;

use crate::types::{Failure, Fundamental, WithLevel, WithMessage, WithStack, WithStatus};

/// Converts a value into the cause of a new annotation.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be wrapped as the cause of an annotation",
    label = "this type does not implement `IntoCause`",
    note = "wrap foreign errors with `Failure::external` first"
)]
pub trait IntoCause {
    /// Converts `self` into a cause, `None` meaning "no error".
    fn into_cause(self) -> Option<Failure>;
}

macro_rules! impl_into_cause {
    ($($type:ty),* $(,)?) => {
        $(
            impl IntoCause for $type {
                #[inline]
                fn into_cause(self) -> Option<Failure> {
                    Some(Failure::from(self))
                }
            }
        )*
    };
}

impl_into_cause!(
    Failure,
    Fundamental,
    WithMessage,
    WithStack,
    WithLevel,
    WithStatus,
    std::io::Error,
    Box<dyn Error + Send + Sync + 'static>,
);

impl<T: IntoCause> IntoCause for Option<T> {
    /// `None` stays absent; `Some` converts its content.
    #[inline]
    fn into_cause(self) -> Option<Failure> {
        self.and_then(IntoCause::into_cause)
    }
}
