//! Selectable textual presentations of a chain.

use core::fmt::{self, Display};

use crate::types::Node;

/// Textual presentation of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Presentation {
    /// Same as [`Presentation::Short`].
    #[default]
    Default,
    /// Messages joined by `": "`, outermost first.
    Short,
    /// The short render as a quoted, escaped string literal.
    Quoted,
    /// Messages and captured stack traces, innermost first.
    Extended,
}

/// A chain bound to a [`Presentation`], ready for `Display`.
///
/// # Examples
///
/// ```
/// use error_trail::{Chain, Fundamental, Presentation};
///
/// let err = Fundamental::new("say \"hi\"");
/// assert_eq!(err.render(Presentation::Quoted).to_string(), r#""say \"hi\"""#);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    node: Node<'a>,
    presentation: Presentation,
}

impl<'a> Rendered<'a> {
    #[inline]
    pub fn new(node: Node<'a>, presentation: Presentation) -> Self {
        Self { node, presentation }
    }

    #[inline]
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }
}

struct Short<'a>(Node<'a>);

impl Display for Short<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_short(f)
    }
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.presentation {
            Presentation::Default | Presentation::Short => self.node.write_short(f),
            Presentation::Extended => self.node.write_extended(f),
            Presentation::Quoted => write!(f, "{:?}", Short(self.node).to_string()),
        }
    }
}
