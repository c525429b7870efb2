//! Debug-logging gate driven by the `SUZUME_DEBUG` environment variable.
//!
//! The scorer and inflection engine emit a decision log event for every
//! adjustment rule they apply. Logging is funneled through the `log` crate
//! so any installed logger captures it, but the expensive `format!` work
//! behind each call site is skipped unless `SUZUME_DEBUG` is set, since the
//! rule cascades run on the hot analysis path.

use once_cell::sync::Lazy;

static ENABLED: Lazy<bool> = Lazy::new(|| {
    std::env::var("SUZUME_DEBUG")
        .map(|v| !v.is_empty())
        .unwrap_or(false)
});

/// Returns true if `SUZUME_DEBUG` is set to a non-empty value.
pub fn enabled() -> bool {
    *ENABLED
}

macro_rules! suzume_debug {
    ($($arg:tt)*) => {
        if $crate::debug::enabled() {
            log::debug!($($arg)*);
        }
    };
}

pub(crate) use suzume_debug;
