//! Walking a chain from the outermost node towards the root.
//!
//! All searches inspect the queried node itself before its cause, so the
//! most recently applied annotation of a kind shadows older ones.
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! let err = new_error!("not found")
//!     .level(Level::Debug)
//!     .level(Level::Error)
//!     .wrap("database error");
//!
//! assert_eq!(find_level(&err), Some(Level::Error));
//! assert_eq!(find_status(&err), None);
//! assert_eq!(find_status(&err).unwrap_or_default(), Status::INTERNAL_SERVER_ERROR);
//! assert_eq!(cause(&err).map(|root| root.to_string()).as_deref(), Some("not found"));
//! ```
use core::iter::FusedIterator;

use crate::traits::Chain;
use crate::types::{Level, Node, StackTrace, Status};

/// Steps one node towards the root.
///
/// Terminal nodes are returned unchanged. A message node built without a
/// cause yields `None`.
#[inline]
pub fn unwrap_one<C>(err: &C) -> Option<Node<'_>>
where
    C: Chain + ?Sized,
{
    let node = err.node();
    if node.is_terminal() {
        Some(node)
    } else {
        node.inner()
    }
}

/// Returns the root of the chain: the first node without a cause slot.
///
/// Returns `None` when the walk reaches a message node whose cause is absent.
pub fn cause<C>(err: &C) -> Option<Node<'_>>
where
    C: Chain + ?Sized,
{
    let mut node = err.node();
    while !node.is_terminal() {
        node = node.inner()?;
    }
    Some(node)
}

/// Alias of [`cause`].
#[inline]
pub fn unwrap<C>(err: &C) -> Option<Node<'_>>
where
    C: Chain + ?Sized,
{
    cause(err)
}

/// Returns the closest severity level, starting with `err` itself.
///
/// `None` means no node carries a level; [`Level::DEFAULT`] is the value to
/// report in that case.
pub fn find_level<C>(err: &C) -> Option<Level>
where
    C: Chain + ?Sized,
{
    chain(err).find_map(|node| match node {
        Node::Level(w) => Some(w.severity()),
        _ => None,
    })
}

/// Returns the closest status code, starting with `err` itself.
///
/// `None` means no node carries a status; [`Status::DEFAULT`] is the value
/// to report in that case.
pub fn find_status<C>(err: &C) -> Option<Status>
where
    C: Chain + ?Sized,
{
    chain(err).find_map(|node| match node {
        Node::Status(w) => Some(w.code()),
        _ => None,
    })
}

/// Returns the closest captured stack trace, starting with `err` itself.
pub fn find_stack<C>(err: &C) -> Option<&StackTrace>
where
    C: Chain + ?Sized,
{
    chain(err).find_map(Node::stack_trace)
}

/// Iterates the chain from `err` itself down to the root.
#[inline]
pub fn chain<C>(err: &C) -> Nodes<'_>
where
    C: Chain + ?Sized,
{
    Nodes { next: Some(err.node()) }
}

/// Iterator returned by [`chain`].
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    next: Option<Node<'a>>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = Node<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.inner();
        Some(node)
    }
}

impl FusedIterator for Nodes<'_> {}
