//! Shared regex construction for the static pattern tables.

use regex::Regex;

/// Compile a hardcoded pattern. A broken pattern is logged and replaced by one
/// that never matches, so a typo disables a rule instead of panicking.
pub(crate) fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(compile_err) => {
            tracing::error!(pattern, error = %compile_err, "pattern failed to compile; it will never match");
            match Regex::new(r"$^") {
                Ok(fallback) => fallback,
                Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
            }
        }
    }
}
