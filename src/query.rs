//! Read-only filtered views over a resource collection.
//!
//! Every filter is optional and they combine with AND. The result-count limit
//! is applied last, after all predicates, and never reorders records.

use chrono::{DateTime, Utc};
use std::fmt::Debug;

/// Filter parameters a list request can carry for entities of type `T`.
pub trait QueryFilter<T>: Send + Sync + Debug + 'static {
    /// Whether `item` passes every predicate set on this query.
    fn matches(&self, item: &T) -> bool;

    /// Maximum number of records to return.
    fn limit(&self) -> Option<usize> {
        None
    }
}

/// The empty query: everything matches, no limit.
impl<T> QueryFilter<T> for () {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

/// Applies `query` to `items`, preserving their relative order.
pub fn select<'a, T, Q>(items: impl IntoIterator<Item = &'a T>, query: &Q) -> Vec<T>
where
    T: Clone + 'a,
    Q: QueryFilter<T> + ?Sized,
{
    let filtered = items.into_iter().filter(|item| query.matches(item));
    match query.limit() {
        Some(limit) => filtered.take(limit).cloned().collect(),
        None => filtered.cloned().collect(),
    }
}

/// Tri-state flag check: `None` keeps everything, `Some(expected)` keeps
/// records whose condition equals `expected`.
pub fn flag_matches(flag: Option<bool>, holds: bool) -> bool {
    flag.map_or(true, |expected| expected == holds)
}

/// Parses a loosely written boolean: `true`/`false`, `1`/`0`, `yes`/`no`,
/// `on`/`off`, `t`/`f`, `y`/`n`, case-insensitive.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

/// Lower-bound timestamp check (inclusive).
pub fn at_or_after(since: Option<DateTime<Utc>>, at: &DateTime<Utc>) -> bool {
    since.map_or(true, |since| *at >= since)
}
