use crate::stack;
use crate::traits::Chain;
use crate::types::{impl_chain_error, Node, StackTrace};

/// Root of a chain: a message and the stack captured where it was created.
///
/// # Examples
///
/// ```
/// use error_trail::{new_error, Fundamental};
///
/// let err = Fundamental::new("not found");
/// assert_eq!(err.to_string(), "not found");
///
/// let err = new_error!("{} not found in {}", "user", "account");
/// assert_eq!(err.message(), "user not found in account");
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct Fundamental {
    message: String,
    stack: StackTrace,
}

impl Fundamental {
    /// Creates a root error, capturing the stack of the caller.
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), stack: stack::capture(1) }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stack captured at construction, caller first.
    #[inline]
    pub fn stack_trace(&self) -> &StackTrace {
        &self.stack
    }
}

impl Chain for Fundamental {
    #[inline]
    fn node(&self) -> Node<'_> {
        Node::Fundamental(self)
    }
}

impl_chain_error!(Fundamental);
