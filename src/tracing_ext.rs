//! Tracing integration for error-trail.
//!
//! Maps chain severities onto `tracing` levels and emits a chain as a
//! single event, so callers that log errors do not have to repeat the
//! level and status lookups.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["tracing"] }
//! ```

use crate::search::{find_level, find_status};
use crate::traits::Chain;
use crate::types::{Level, Status};

impl Level {
    /// The closest `tracing` level.
    ///
    /// `tracing` has no levels above `ERROR`, so `Emergency` through `Error`
    /// all map to `ERROR`; `Notice` maps to `INFO`.
    pub const fn tracing_level(self) -> tracing::Level {
        match self {
            Level::Emergency | Level::Alert | Level::Critical | Level::Error => tracing::Level::ERROR,
            Level::Warning => tracing::Level::WARN,
            Level::Notice | Level::Info => tracing::Level::INFO,
            Level::Debug => tracing::Level::DEBUG,
        }
    }
}

/// Emits `err` as one `tracing` event.
///
/// The event level comes from [`find_level`] (defaulting to
/// [`Level::DEFAULT`]); the short render, the syslog severity and the
/// status code (defaulting to [`Status::DEFAULT`]) are recorded as fields.
///
/// # Example
///
/// ```rust
/// use error_trail::prelude::*;
/// use error_trail::tracing_ext::record;
///
/// let err = new_error!("disk full").level(Level::Warning).status(Status::SERVICE_UNAVAILABLE);
/// record(&err);
/// ```
pub fn record<C>(err: &C)
where
    C: Chain + ?Sized,
{
    let level = find_level(err).unwrap_or_default();
    let status = find_status(err).unwrap_or_default();
    let node = err.node();

    macro_rules! emit {
        ($lvl:expr) => {
            tracing::event!(
                $lvl,
                severity = level.as_str(),
                status = status.code(),
                error = %node
            )
        };
    }

    // `event!` needs a constant level, hence one branch per target level.
    let target = level.tracing_level();
    if target == tracing::Level::ERROR {
        emit!(tracing::Level::ERROR)
    } else if target == tracing::Level::WARN {
        emit!(tracing::Level::WARN)
    } else if target == tracing::Level::INFO {
        emit!(tracing::Level::INFO)
    } else if target == tracing::Level::DEBUG {
        emit!(tracing::Level::DEBUG)
    } else {
        emit!(tracing::Level::TRACE)
    }
}
