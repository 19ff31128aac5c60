use std::sync::Arc;

use crate::traits::Chain;
use crate::types::{impl_chain_error, Failure, Level, Node};

/// Tags its cause with a severity [`Level`].
///
/// Renders exactly like its cause in every presentation.
#[must_use]
#[derive(Debug, Clone)]
pub struct WithLevel {
    cause: Arc<Failure>,
    level: Level,
}

impl WithLevel {
    #[inline]
    pub(crate) fn new(cause: Failure, level: Level) -> Self {
        Self { cause: Arc::new(cause), level }
    }

    /// The level carried by this node.
    ///
    /// Use [`find_level`](crate::find_level) to query a whole chain.
    #[inline]
    pub fn severity(&self) -> Level {
        self.level
    }

    #[inline]
    pub fn cause(&self) -> &Failure {
        &self.cause
    }
}

impl Chain for WithLevel {
    #[inline]
    fn node(&self) -> Node<'_> {
        Node::Level(self)
    }
}

impl_chain_error!(WithLevel);
