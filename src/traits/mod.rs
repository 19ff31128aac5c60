//! Core traits for building and inspecting error chains.
//!
//! - [`Chain`]: the narrow interface every node kind implements
//! - [`IntoCause`]: conversion of wrappable values, `Option` included
//! - [`Annotate`]: fluent `.wrap`, `.level` and `.status` on every node kind
//! - [`ResultExt`]: the same annotations applied to `Result` errors
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::{Annotate, Chain};
//! use error_trail::{find_level, Fundamental, Level};
//!
//! let err = Fundamental::new("database error").wrap("system error").level(Level::Debug);
//!
//! assert_eq!(find_level(&err), Some(Level::Debug));
//! assert_eq!(err.to_string(), "system error: database error");
//! assert!(err.inner().is_some());
//! ```

pub mod annotate;
pub mod chain;
pub mod into_cause;
pub mod result_ext;

pub use annotate::Annotate;
pub use chain::Chain;
pub use into_cause::IntoCause;
pub use result_ext::ResultExt;
