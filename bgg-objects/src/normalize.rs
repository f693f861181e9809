//! Best-effort normalization of loosely-typed service values.
//!
//! Nothing here fails hard. A value that cannot be normalized is reported as
//! [`Lenient::Malformed`] so callers can tell "absent" from "present but
//! unusable" before collapsing both to `None` at the field boundary.

use chrono::NaiveDateTime;

/// Outcome of a best-effort parse of an optional field.
#[derive(Debug, Clone, PartialEq)]
pub enum Lenient<T> {
    /// The key was not in the record (or was null).
    Absent,
    /// The key was present but its value could not be parsed. Holds the raw
    /// value as text for diagnostics.
    Malformed(String),
    Parsed(T),
}

impl<T> Lenient<T> {
    /// Collapse to an optional value. Absent and malformed both become `None`.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Parsed(v) => Some(v),
            Self::Absent | Self::Malformed(_) => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lenient<U> {
        match self {
            Self::Absent => Lenient::Absent,
            Self::Malformed(raw) => Lenient::Malformed(raw),
            Self::Parsed(v) => Lenient::Parsed(f(v)),
        }
    }

    /// Chain a second fallible normalization. A `None` from `f` turns a parsed
    /// value into `Malformed` carrying `raw`.
    pub fn and_then<U>(
        self,
        f: impl FnOnce(T) -> Option<U>,
        raw: impl FnOnce() -> String,
    ) -> Lenient<U> {
        match self {
            Self::Absent => Lenient::Absent,
            Self::Malformed(r) => Lenient::Malformed(r),
            Self::Parsed(v) => match f(v) {
                Some(u) => Lenient::Parsed(u),
                None => Lenient::Malformed(raw()),
            },
        }
    }
}

/// Length of the timezone suffix (`+HH:MM` / `-HH:MM`) the service appends to
/// video post dates.
const TZ_SUFFIX_LEN: usize = 6;

const POST_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Complete a possibly protocol-relative or scheme-less URL.
///
/// - `//cf.geekdo-images.com/x.jpg` → `https://cf.geekdo-images.com/x.jpg`
/// - `cf.geekdo-images.com/x.jpg` → `https://cf.geekdo-images.com/x.jpg`
/// - absolute URLs are returned unchanged
/// - blank input yields `None`
pub fn fix_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    if let Some(rest) = url.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    if url.contains("://") {
        return Some(url.to_string());
    }
    Some(format!("https://{url}"))
}

/// Undo the service's unsigned 32-bit encoding of negative numbers.
///
/// Years BCE come back as e.g. `4294966296` for -1000. Values above
/// `i32::MAX` and up to `u32::MAX` are wrapped back to their signed meaning;
/// anything larger cannot be a wrapped 32-bit value and yields `None`.
pub fn fix_unsigned_negative(value: i64) -> Option<i64> {
    const I32_MAX: i64 = i32::MAX as i64;
    const U32_MAX: i64 = u32::MAX as i64;

    match value {
        v if v > U32_MAX => None,
        v if v > I32_MAX => Some(v - (1_i64 << 32)),
        v => Some(v),
    }
}

/// Parse a video post date such as `2021-05-01T10:00:00-07:00`.
///
/// The trailing timezone suffix is dropped and the remainder is read as a
/// naive local timestamp. Returns `None` if the string is too short or the
/// remainder does not match `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_post_date(raw: &str) -> Option<NaiveDateTime> {
    let cut = raw.char_indices().rev().nth(TZ_SUFFIX_LEN - 1)?.0;
    NaiveDateTime::parse_from_str(&raw[..cut], POST_DATE_FORMAT).ok()
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
