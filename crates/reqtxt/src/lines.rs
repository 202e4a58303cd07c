//! Logical line assembly.
//!
//! A physical line ending in a backslash continues onto the next one. The
//! backslash and the line break it precedes are removed, so
//! `"pkg \\\n>=1.0"` becomes the single logical line `"pkg >=1.0"`.

use once_cell::sync::Lazy;
use regex::Regex;

static CONTINUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\r?\n").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").unwrap());

/// Splits raw file content into logical lines, in order.
///
/// The result may contain empty strings for blank lines; callers decide
/// whether to skip them.
///
/// # Examples
///
/// ```
/// use reqtxt::lines::logical_lines;
///
/// let lines = logical_lines("requests \\\n  >=2.0\n\nflask\n");
/// assert_eq!(lines, vec!["requests   >=2.0", "", "flask", ""]);
/// ```
pub fn logical_lines(content: &str) -> Vec<String> {
    let joined = CONTINUATION.replace_all(content, "");
    LINE_BREAK.split(&joined).map(str::to_string).collect()
}
