//! Owned, type-erased chain node.
//!
//! [`Failure`] is the closed set of node kinds. Wrappers store their cause
//! as a `Failure`, so any chain can be extended regardless of which kind
//! sits on top.
use std::error::Error;
use std::sync::Arc;

use crate::traits::Chain;
use crate::types::{impl_chain_error, Fundamental, Node, WithLevel, WithMessage, WithStack, WithStatus};

/// Any node of a chain, owned.
///
/// Cloning is cheap: wrapped causes sit behind an `Arc` and are shared.
#[derive(Debug, Clone)]
pub enum Failure {
    Fundamental(Fundamental),
    Message(WithMessage),
    Stack(WithStack),
    Level(WithLevel),
    Status(WithStatus),
    /// A foreign error used as the root of a chain. It carries no stack.
    External(Arc<dyn Error + Send + Sync + 'static>),
}

impl Failure {
    /// Wraps a foreign error so it can be annotated.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::{wrap, Failure};
    /// use std::io;
    ///
    /// let eof = Failure::external(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"));
    /// let err = wrap(eof, "read error").unwrap();
    /// assert_eq!(err.to_string(), "read error: EOF");
    /// ```
    #[inline]
    pub fn external<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::External(Arc::new(error))
    }
}

impl Chain for Failure {
    fn node(&self) -> Node<'_> {
        match self {
            Failure::Fundamental(inner) => Node::Fundamental(inner),
            Failure::Message(inner) => Node::Message(inner),
            Failure::Stack(inner) => Node::Stack(inner),
            Failure::Level(inner) => Node::Level(inner),
            Failure::Status(inner) => Node::Status(inner),
            Failure::External(inner) => Node::External(inner.as_ref()),
        }
    }
}

impl_chain_error!(Failure);

impl From<Fundamental> for Failure {
    #[inline]
    fn from(error: Fundamental) -> Self {
        Self::Fundamental(error)
    }
}

impl From<WithMessage> for Failure {
    #[inline]
    fn from(error: WithMessage) -> Self {
        Self::Message(error)
    }
}

impl From<WithStack> for Failure {
    #[inline]
    fn from(error: WithStack) -> Self {
        Self::Stack(error)
    }
}

impl From<WithLevel> for Failure {
    #[inline]
    fn from(error: WithLevel) -> Self {
        Self::Level(error)
    }
}

impl From<WithStatus> for Failure {
    #[inline]
    fn from(error: WithStatus) -> Self {
        Self::Status(error)
    }
}

impl From<std::io::Error> for Failure {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        Self::external(error)
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Failure {
    #[inline]
    fn from(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::External(Arc::from(error))
    }
}
