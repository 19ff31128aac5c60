//! The narrow interface shared by every chain node.
//!
//! Each node kind exposes itself as a [`Node`] view; traversal, searching
//! and formatting are written once against that view.
//!
//! # Examples
//!
//! ```
//! use error_trail::{new_error, Chain, Node};
//!
//! let err = new_error!("not found");
//! assert!(matches!(err.node(), Node::Fundamental(_)));
//! assert!(err.inner().is_none());
//! ```
use crate::types::{Node, Presentation, Rendered};

/// A value that is (or views) a node of an error chain.
pub trait Chain {
    /// Returns the borrowed view of this node.
    fn node(&self) -> Node<'_>;

    /// The next node towards the root, `None` at the end of the chain.
    #[inline]
    fn inner(&self) -> Option<Node<'_>> {
        self.node().inner()
    }

    /// Binds the chain to a presentation for display.
    #[inline]
    fn render(&self, presentation: Presentation) -> Rendered<'_> {
        self.node().render(presentation)
    }

    /// Short render in quotation marks, escaped like a string literal.
    #[inline]
    fn quoted(&self) -> Rendered<'_> {
        self.render(Presentation::Quoted)
    }

    /// Render including every captured stack trace. Same as `{:+}`.
    #[inline]
    fn extended(&self) -> Rendered<'_> {
        self.render(Presentation::Extended)
    }
}

impl<C: Chain + ?Sized> Chain for &C {
    #[inline]
    fn node(&self) -> Node<'_> {
        (**self).node()
    }
}
