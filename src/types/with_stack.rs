use std::sync::Arc;

use crate::traits::Chain;
use crate::types::{impl_chain_error, Failure, Node, StackTrace};

/// Records a stack trace on top of its cause.
///
/// Contributes no text to the short render; the extended render appends
/// the captured frames after the cause's own extended render.
#[must_use]
#[derive(Debug, Clone)]
pub struct WithStack {
    cause: Arc<Failure>,
    stack: StackTrace,
}

impl WithStack {
    #[inline]
    pub(crate) fn new(cause: Failure, stack: StackTrace) -> Self {
        Self { cause: Arc::new(cause), stack }
    }

    #[inline]
    pub fn cause(&self) -> &Failure {
        &self.cause
    }

    #[inline]
    pub fn stack_trace(&self) -> &StackTrace {
        &self.stack
    }
}

impl Chain for WithStack {
    #[inline]
    fn node(&self) -> Node<'_> {
        Node::Stack(self)
    }
}

impl_chain_error!(WithStack);
