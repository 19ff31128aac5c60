use core::fmt::{self, Display};

use crate::types::{Frame, FrameFormat, FrameVec};

/// Frames captured at one call site, capture site first.
///
/// A trace is produced by [`capture`](crate::stack::capture) and never mutated afterwards.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StackTrace {
    frames: FrameVec,
}

impl StackTrace {
    #[inline]
    pub(crate) fn from_frames(frames: FrameVec) -> Self {
        Self { frames }
    }

    /// Returns the frames, outermost (capture site) first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Renders every frame with `format`.
    ///
    /// Multi-line formats (`Path`, `Full`) emit each frame on its own lines,
    /// each preceded by a newline. Single-line formats produce a bracketed,
    /// space separated list such as `[main.rs:10 lib.rs:42]`.
    pub fn render(&self, format: FrameFormat) -> String {
        match format {
            FrameFormat::Path | FrameFormat::Full => {
                let mut out = String::with_capacity(self.frames.len() * 64);
                for frame in self.frames.iter() {
                    out.push('\n');
                    out.push_str(&frame.render(format));
                }
                out
            },
            _ => {
                let items: Vec<String> = self.frames.iter().map(|frame| frame.render(format)).collect();
                format!("[{}]", items.join(" "))
            },
        }
    }
}

/// `{}` renders `[file:line ...]`, `{:+}` renders every frame in full.
impl Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if f.sign_plus() { FrameFormat::Full } else { FrameFormat::Location };
        f.write_str(&self.render(format))
    }
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.frames.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a Frame;
    type IntoIter = core::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Serializes as the list of resolved [`FrameInfo`](crate::FrameInfo) values.
#[cfg(feature = "serde")]
impl serde::Serialize for StackTrace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.frames.iter().map(Frame::info))
    }
}
