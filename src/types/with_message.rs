use std::sync::Arc;

use crate::traits::Chain;
use crate::types::{impl_chain_error, Failure, Node};

/// Adds a message in front of its cause.
///
/// Renders as `message: cause`, or just `message` when built without a
/// cause through [`with_message`](crate::with_message).
#[must_use]
#[derive(Debug, Clone)]
pub struct WithMessage {
    cause: Option<Arc<Failure>>,
    message: String,
}

impl WithMessage {
    #[inline]
    pub(crate) fn new(cause: Option<Failure>, message: String) -> Self {
        Self { cause: cause.map(Arc::new), message }
    }

    /// This node's own message, without the cause appended.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn cause(&self) -> Option<&Failure> {
        self.cause.as_deref()
    }
}

impl Chain for WithMessage {
    #[inline]
    fn node(&self) -> Node<'_> {
        Node::Message(self)
    }
}

impl_chain_error!(WithMessage);
