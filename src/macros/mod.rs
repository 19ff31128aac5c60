//! Formatting shorthands for the message-taking constructors.
//!
//! A single message argument is used verbatim, braces included. With extra
//! arguments the message is a `format!` template:
//!
//! - [`macro@crate::new_error`] - builds a [`Fundamental`](crate::Fundamental)
//! - [`macro@crate::wrap`] - calls [`wrap`](crate::wrap)
//! - [`macro@crate::with_message`] - calls [`with_message`](crate::with_message)
//!
//! # Examples
//!
//! ```
//! use error_trail::{new_error, wrap};
//!
//! let err = new_error!("{} not found", "user");
//! assert_eq!(err.to_string(), "user not found");
//!
//! let verbatim = new_error!("string with format specifiers: {}");
//! assert_eq!(verbatim.to_string(), "string with format specifiers: {}");
//!
//! let err = wrap!(err, "lookup {} failed", 42).unwrap();
//! assert_eq!(err.to_string(), "lookup 42 failed: user not found");
//! ```

/// Creates a [`Fundamental`](crate::Fundamental) capturing the caller's stack.
///
/// # Examples
///
/// ```
/// use error_trail::new_error;
///
/// let err = new_error!("{} not found in {}", "user", "account");
/// assert_eq!(err.message(), "user not found in account");
/// ```
#[macro_export]
macro_rules! new_error {
    ($message:expr $(,)?) => {
        $crate::Fundamental::new($message)
    };
    ($template:literal, $($arg:tt)+) => {
        $crate::Fundamental::new(format!($template, $($arg)+))
    };
}

/// Calls [`wrap`](crate::wrap) with a formatted message.
///
/// # Examples
///
/// ```
/// use error_trail::{new_error, wrap};
///
/// let err = wrap!(new_error!("EOF"), "read error with {} format specifier", 1).unwrap();
/// assert_eq!(err.to_string(), "read error with 1 format specifier: EOF");
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr, $message:expr $(,)?) => {
        $crate::wrap($err, $message)
    };
    ($err:expr, $template:literal, $($arg:tt)+) => {
        $crate::wrap($err, format!($template, $($arg)+))
    };
}

/// Calls [`with_message`](crate::with_message) with a formatted message.
///
/// # Examples
///
/// ```
/// use error_trail::{new_error, with_message};
///
/// let err = with_message!(new_error!("EOF"), "attempt {}", 3);
/// assert_eq!(err.to_string(), "attempt 3: EOF");
/// ```
#[macro_export]
macro_rules! with_message {
    ($err:expr, $message:expr $(,)?) => {
        $crate::with_message($err, $message)
    };
    ($err:expr, $template:literal, $($arg:tt)+) => {
        $crate::with_message($err, format!($template, $($arg)+))
    };
}
