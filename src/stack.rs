//! Call-stack capture.
//!
//! [`capture`] records instruction pointers only. Symbol resolution is
//! deferred to rendering time (see [`Frame::render`](crate::Frame::render)).
//!
//! Capturing is re-entrant: every call walks its own thread's stack and
//! returns an independent [`StackTrace`].
//!
//! # Examples
//!
//! ```
//! use error_trail::stack;
//!
//! let trace = stack::capture(0);
//! assert!(trace.len() <= stack::MAX_DEPTH);
//! ```
use smallvec::SmallVec;

use crate::types::{Frame, FrameVec, StackTrace};

/// Maximum number of frames kept per capture.
pub const MAX_DEPTH: usize = 32;

/// Upper bound on frames walked while looking for the capture frame itself.
const UNWIND_LIMIT: usize = 256;

/// Captures the current call stack.
///
/// The returned trace starts at the function that called `capture`, after
/// skipping `skip` further frames. Constructors pass `1` so that their own
/// frame is left out and the trace starts at their caller. Skipping past the
/// outermost frame yields an empty trace.
#[inline(never)]
pub fn capture(skip: usize) -> StackTrace {
    let own = capture as usize;
    let mut raw: SmallVec<[usize; 64]> = SmallVec::new();
    let mut own_index = None;

    backtrace::trace(|frame| {
        if own_index.is_none() && frame.symbol_address() as usize == own {
            own_index = Some(raw.len());
        }
        raw.push(frame.ip() as usize);

        match own_index {
            Some(index) => raw.len() < (index + 1).saturating_add(skip).saturating_add(MAX_DEPTH),
            None => raw.len() < UNWIND_LIMIT,
        }
    });

    // Frames up to and including this function belong to the unwinder.
    // Without symbol addresses our frame cannot be located and nothing is dropped.
    let start = own_index.map_or(0, |index| index + 1).saturating_add(skip);
    let frames: FrameVec = raw.iter().skip(start).take(MAX_DEPTH).map(|&ip| Frame::from_ip(ip)).collect();

    StackTrace::from_frames(frames)
}
