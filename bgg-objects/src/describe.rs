//! Human-readable multi-line dumps for debugging tools.
//!
//! Labels and ordering are cosmetic. Every line is `label : value`, with
//! absent values rendered as `-`.

use std::fmt::{self, Display, Write};

/// Width that labels are padded to so the colons line up.
const LABEL_WIDTH: usize = 20;

/// Something that can write a diagnostic dump of itself to a text sink.
pub trait Describe {
    fn describe(&self, out: &mut dyn Write) -> fmt::Result;

    /// The dump collected into a `String`.
    fn dump(&self) -> String {
        let mut buf = String::new();
        // Writing into a String cannot fail.
        let _ = self.describe(&mut buf);
        buf
    }
}

/// Write one `label : value` line.
pub fn field(out: &mut dyn Write, label: &str, value: impl Display) -> fmt::Result {
    writeln!(out, "{label:<width$}: {value}", width = LABEL_WIDTH)
}

/// Write one `label : value` line for an optional value.
pub fn opt_field<T: Display>(out: &mut dyn Write, label: &str, value: Option<T>) -> fmt::Result {
    match value {
        Some(v) => field(out, label, v),
        None => field(out, label, "-"),
    }
}

/// Write a heading followed by one `- item` line per element. Nothing is
/// written for an empty list.
pub fn list<T: Display>(out: &mut dyn Write, heading: &str, items: &[T]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "{heading}")?;
    for item in items {
        writeln!(out, "- {item}")?;
    }
    Ok(())
}

/// Write a heading followed by each item's own description, separated by a
/// rule line. Nothing is written for an empty list.
pub fn nested<T: Describe>(out: &mut dyn Write, heading: &str, items: &[T]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "{heading}")?;
    for item in items {
        item.describe(out)?;
        writeln!(out, "--------")?;
    }
    Ok(())
}
