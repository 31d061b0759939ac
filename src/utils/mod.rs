//! Shared utility functions consumed by both the API and the page.

use std::sync::OnceLock;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use regex::Regex;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local@domain.tld shape: no whitespace, no second '@', at least one
        // dot after the '@'.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Format the calendar date of `date` as `YYYY-MM-DD` in UTC.
///
/// The time-of-day portion is discarded and conversion to UTC is implicit
/// and unconditional; an instant late in the evening of one UTC date still
/// formats as that UTC date regardless of its original offset.
///
/// # Example
/// ```
/// use chrono::{DateTime, Utc};
/// use greenfield::format_date;
///
/// let instant: DateTime<Utc> = "2023-12-01T15:45:30.123Z".parse().unwrap();
/// assert_eq!(format_date(&instant), "2023-12-01");
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).format("%Y-%m-%d").to_string()
}

/// Heuristic email shape check.
///
/// Accepts strings of the form `local@domain.tld`: one or more characters
/// that are neither whitespace nor `@`, a single `@`, more such characters,
/// a literal `.`, and more such characters. This is deliberately permissive —
/// it does not bound top-level-domain length or resolve the domain — and the
/// accept/reject boundary is part of the contract, so do not tighten it.
///
/// # Example
/// ```
/// use greenfield::is_valid_email;
///
/// assert!(is_valid_email("a@b.c"));
/// assert!(!is_valid_email("test@example"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Suspend the current task for at least `ms` milliseconds.
///
/// Single-shot timer with no cancellation API: once awaited it completes no
/// earlier than `ms` milliseconds of scheduler time. Dropping the future
/// before completion abandons the timer; callers needing cancellation must
/// race it against their own signal.
pub async fn sleep(ms: u64) {
    if ms == 0 {
        // A zero delay still yields once so completion is never synchronous.
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
