//! Debug tracing for a single solve, switched on with `QUADROOT_DEBUG`.
//!
//! Output goes to stderr with a `[quadroot]` prefix; stdout carries only the
//! prompt and the result line, so piped output is unaffected. The variable is
//! read once per process.
use std::sync::OnceLock;

pub const DEBUG_ENV: &str = "QUADROOT_DEBUG";

static ENABLED: OnceLock<bool> = OnceLock::new();

/// `1`, `true`, `yes` and `on` (any case) enable tracing.
pub fn flag_enabled(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| flag_enabled(std::env::var(DEBUG_ENV).ok().as_deref()))
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!("[quadroot] {}", format_args!($($arg)*)); }
    }};
}
