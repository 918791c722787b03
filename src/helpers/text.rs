//! Text helpers used by listing pages

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Greedy and line-bound: spans from the first backtick to the last one
    static ref INLINE_CODE: Regex = Regex::new(r"`(.*)`").unwrap();
}

/// Wrap backtick-delimited text in `<code>` tags
///
/// # Examples
/// ```ignore
/// codify("run `make`") // -> "run <code>make</code>"
/// codify("see `x+1` and `y-2`") // -> "see <code>x+1` and `y-2</code>"
/// ```
pub fn codify(s: &str) -> String {
    INLINE_CODE.replace_all(s, "<code>${1}</code>").into_owned()
}

/// Keep the date part of a timestamp (its first 10 characters)
///
/// # Examples
/// ```ignore
/// dateify("2024-03-05T10:00:00Z") // -> "2024-03-05"
/// ```
pub fn dateify(s: &str) -> String {
    s.chars().take(10).collect()
}
