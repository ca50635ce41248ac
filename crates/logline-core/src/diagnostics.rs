//! Best-effort diagnostic side channel
//!
//! Transport failures are reported here instead of reaching the caller.
//! Writing to stderr can itself fail (closed descriptor, broken pipe); such
//! failures are discarded and there is no further fallback.

use std::fmt::Display;
use std::io::Write;

/// Report an error on stderr as `"<context>: <error>"`. Never fails or panics.
pub fn report(context: &str, error: &dyn Display) {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{}: {}", context, error);
}
