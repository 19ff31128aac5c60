//! Borrowed view over a single chain node.
//!
//! All traversal and formatting goes through [`Node`]: a `match` over the
//! closed set of kinds replaces any runtime capability probing.
//!
//! Per-kind rendering:
//!
//! | kind        | short                    | extended                         |
//! |-------------|--------------------------|----------------------------------|
//! | Fundamental | message                  | message + own stack              |
//! | Message     | message + ": " + cause   | cause extended + "\n" + message  |
//! | Stack       | cause                    | cause extended + own stack       |
//! | Level       | cause                    | cause extended                   |
//! | Status      | cause                    | cause extended                   |
//! | External    | the error's `Display`    | the error's `Display`            |
use core::fmt::{self, Display};
use std::error::Error;

use crate::traits::Chain;
use crate::types::{
    Fundamental, Presentation, Rendered, StackTrace, WithLevel, WithMessage, WithStack, WithStatus,
};

/// A borrowed, copyable view of one chain node.
///
/// Obtained from [`Chain::node`]; [`Node::inner`] steps towards the root.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Fundamental(&'a Fundamental),
    Message(&'a WithMessage),
    Stack(&'a WithStack),
    Level(&'a WithLevel),
    Status(&'a WithStatus),
    External(&'a (dyn Error + Send + Sync + 'static)),
}

impl<'a> Node<'a> {
    /// `true` for nodes that have no cause slot at all.
    ///
    /// A [`WithMessage`] built without a cause is not terminal: it has a
    /// cause slot that happens to be empty.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Node::Fundamental(_) | Node::External(_))
    }

    /// The next node towards the root, if any.
    #[inline]
    pub fn inner(self) -> Option<Node<'a>> {
        match self {
            Node::Fundamental(_) | Node::External(_) => None,
            Node::Message(w) => w.cause().map(Chain::node),
            Node::Stack(w) => Some(w.cause().node()),
            Node::Level(w) => Some(w.cause().node()),
            Node::Status(w) => Some(w.cause().node()),
        }
    }

    /// The stack captured by this node itself.
    #[inline]
    pub fn stack_trace(self) -> Option<&'a StackTrace> {
        match self {
            Node::Fundamental(e) => Some(e.stack_trace()),
            Node::Stack(w) => Some(w.stack_trace()),
            _ => None,
        }
    }

    /// Returns the foreign error as `E` when this node is an external root of that type.
    pub fn downcast_ref<E>(self) -> Option<&'a E>
    where
        E: Error + 'static,
    {
        match self {
            Node::External(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Binds this node to a presentation.
    #[inline]
    pub fn render(self, presentation: Presentation) -> Rendered<'a> {
        Rendered::new(self, presentation)
    }

    pub(crate) fn source(self) -> Option<&'a (dyn Error + 'static)> {
        match self {
            Node::Fundamental(_) => None,
            Node::External(error) => error.source(),
            Node::Message(w) => w.cause().map(|cause| cause as &(dyn Error + 'static)),
            Node::Stack(w) => Some(w.cause() as &(dyn Error + 'static)),
            Node::Level(w) => Some(w.cause() as &(dyn Error + 'static)),
            Node::Status(w) => Some(w.cause() as &(dyn Error + 'static)),
        }
    }

    pub(crate) fn write_short(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Fundamental(e) => f.write_str(e.message()),
            Node::Message(w) => {
                f.write_str(w.message())?;
                match w.cause() {
                    Some(cause) => {
                        f.write_str(": ")?;
                        cause.node().write_short(f)
                    },
                    None => Ok(()),
                }
            },
            Node::Stack(w) => w.cause().node().write_short(f),
            Node::Level(w) => w.cause().node().write_short(f),
            Node::Status(w) => w.cause().node().write_short(f),
            Node::External(error) => write!(f, "{}", error),
        }
    }

    pub(crate) fn write_extended(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Fundamental(e) => {
                f.write_str(e.message())?;
                write!(f, "{:+}", e.stack_trace())
            },
            Node::Message(w) => {
                if let Some(cause) = w.cause() {
                    cause.node().write_extended(f)?;
                    f.write_str("\n")?;
                }
                f.write_str(w.message())
            },
            Node::Stack(w) => {
                w.cause().node().write_extended(f)?;
                write!(f, "{:+}", w.stack_trace())
            },
            Node::Level(w) => w.cause().node().write_extended(f),
            Node::Status(w) => w.cause().node().write_extended(f),
            Node::External(error) => write!(f, "{}", error),
        }
    }
}

impl Chain for Node<'_> {
    #[inline]
    fn node(&self) -> Node<'_> {
        *self
    }
}

/// `{}` is the short render, `{:+}` the extended render with stack traces.
impl Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.sign_plus() {
            self.write_extended(f)
        } else {
            self.write_short(f)
        }
    }
}
