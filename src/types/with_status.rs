use std::sync::Arc;

use crate::traits::Chain;
use crate::types::{impl_chain_error, Failure, Node, Status};

/// Tags its cause with a [`Status`] code.
#[must_use]
#[derive(Debug, Clone)]
pub struct WithStatus {
    cause: Arc<Failure>,
    status: Status,
}

impl WithStatus {
    #[inline]
    pub(crate) fn new(cause: Failure, status: Status) -> Self {
        Self { cause: Arc::new(cause), status }
    }

    /// The status carried by this node.
    ///
    /// Use [`find_status`](crate::find_status) to query a whole chain.
    #[inline]
    pub fn code(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn cause(&self) -> &Failure {
        &self.cause
    }
}

impl Chain for WithStatus {
    #[inline]
    fn node(&self) -> Node<'_> {
        Node::Status(self)
    }
}

impl_chain_error!(WithStatus);
