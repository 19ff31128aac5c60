//! A single captured call site.
//!
//! A [`Frame`] is only the instruction pointer recorded at capture time.
//! Symbol names, files and line numbers are resolved on demand when the
//! frame is rendered, so capturing stays cheap on the error path.
//!
//! # Examples
//!
//! ```
//! use error_trail::{Frame, FrameFormat};
//!
//! let unknown = Frame::from_ip(0);
//! assert_eq!(unknown.to_string(), "unknown:0");
//! assert_eq!(unknown.render(FrameFormat::Function), "");
//! ```
use core::ffi::c_void;
use core::fmt::{self, Display};
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "unknown";

/// Program counter of one call-stack location.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Frame {
    ip: usize,
}

/// How a [`Frame`] is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameFormat {
    /// Base name of the source file, e.g. `frame.rs`.
    File,
    /// Full function name and full file path: `function\n\tpath`.
    Path,
    /// Source line number.
    Line,
    /// Function name without its module path.
    Function,
    /// `file:line`.
    Location,
    /// Full function name, file path and line: `function\n\tpath:line`.
    Full,
}

/// Location data resolved from a [`Frame`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameInfo {
    /// Demangled function name without the symbol hash.
    pub function: Option<String>,
    /// Source file path as recorded in the debug info.
    pub file: Option<String>,
    /// Source line number.
    pub line: Option<u32>,
}

impl Frame {
    /// Wraps a raw instruction pointer. `0` is never resolvable and renders as `unknown`.
    #[inline]
    pub const fn from_ip(ip: usize) -> Self {
        Self { ip }
    }

    /// Returns the raw instruction pointer.
    #[inline]
    pub const fn ip(&self) -> usize {
        self.ip
    }

    /// Resolves the symbol information for this frame.
    ///
    /// Only the first (innermost) symbol is used when inlining produced several.
    pub fn info(&self) -> FrameInfo {
        let mut info = FrameInfo::default();
        if self.ip == 0 {
            return info;
        }

        let mut seen = false;
        backtrace::resolve(self.ip as *mut c_void, |symbol| {
            if seen {
                return;
            }
            seen = true;
            info.function = symbol.name().map(|name| format!("{:#}", name));
            info.file = symbol.filename().map(|path| path.to_string_lossy().into_owned());
            info.line = symbol.lineno();
        });
        info
    }

    /// Full path of the source file, if the frame can be resolved.
    #[inline]
    pub fn file(&self) -> Option<String> {
        self.info().file
    }

    /// Source line number, `0` when unknown.
    #[inline]
    pub fn line(&self) -> u32 {
        self.info().line.unwrap_or(0)
    }

    /// Function name with its module path trimmed, empty when unknown.
    #[inline]
    pub fn function(&self) -> String {
        self.info().function.as_deref().map(funcname).unwrap_or_default()
    }

    /// Renders the frame in the requested format.
    pub fn render(&self, format: FrameFormat) -> String {
        let info = self.info();
        let line = info.line.unwrap_or(0);

        match format {
            FrameFormat::File => match info.file.as_deref() {
                Some(file) => base_name(file).to_owned(),
                None => UNKNOWN.to_owned(),
            },
            FrameFormat::Path => match (info.function.as_deref(), info.file.as_deref()) {
                (Some(function), Some(file)) => format!("{}\n\t{}", function, file),
                (None, Some(file)) => file.to_owned(),
                _ => UNKNOWN.to_owned(),
            },
            FrameFormat::Line => line.to_string(),
            FrameFormat::Function => info.function.as_deref().map(funcname).unwrap_or_default(),
            FrameFormat::Location => {
                let file = info.file.as_deref().map(base_name).unwrap_or(UNKNOWN);
                format!("{}:{}", file, line)
            },
            FrameFormat::Full => match (info.function.as_deref(), info.file.as_deref()) {
                (Some(function), Some(file)) => format!("{}\n\t{}:{}", function, file, line),
                (None, Some(file)) => format!("{}:{}", file, line),
                _ => format!("{}:{}", UNKNOWN, line),
            },
        }
    }
}

/// `{}` renders `file:line`, `{:+}` renders `function\n\tpath:line`.
impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if f.sign_plus() { FrameFormat::Full } else { FrameFormat::Location };
        f.write_str(&self.render(format))
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(FrameFormat::Location))
    }
}

fn base_name(file: &str) -> &str {
    Path::new(file).file_name().and_then(|name| name.to_str()).unwrap_or(file)
}

/// Trims the module path from a demangled Rust function name.
///
/// Leading lowercase module segments are dropped. Everything from the first
/// type-like segment (`Type`, `<T as Trait>`) is kept. Without one, the last
/// named segment is kept together with any trailing `{{closure}}` segments.
pub(crate) fn funcname(name: &str) -> String {
    let segments = split_path(name);
    let Some(last) = segments.len().checked_sub(1) else {
        return String::new();
    };

    let start = segments
        .iter()
        .position(|segment| segment.starts_with('<') || segment.starts_with(char::is_uppercase))
        .unwrap_or_else(|| {
            segments
                .iter()
                .rposition(|segment| !segment.starts_with("{{"))
                .unwrap_or(last)
        });

    segments[start..].join("::")
}

/// Splits on `::` outside of `<...>` generics.
fn split_path(name: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let bytes = name.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&name[start..i]);
                i += 2;
                start = i;
                continue;
            },
            _ => {},
        }
        i += 1;
    }

    if start < name.len() {
        segments.push(&name[start..]);
    }
    segments.retain(|segment| !segment.is_empty());
    segments
}
