//! Deterministic string shaping used by signature and body synthesis.
//!
//! Generated identifiers and statement lines are strict functions of
//! declared names, so regeneration on unchanged input is byte-stable.

/// Prefix a line with `width` spaces.
///
/// Empty lines are returned unchanged so generated bodies carry no trailing
/// whitespace.
#[must_use]
pub fn indent(width: usize, line: &str) -> String {
    if line.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(width + line.len());
    for _ in 0..width {
        out.push(' ');
    }
    out.push_str(line);
    out
}

/// Uppercase the first character of `s`.
///
/// # Examples
///
/// ```
/// assert_eq!(mosaic_core::strings::upper_first("circle"), "Circle");
/// ```
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character of `s`.
///
/// # Examples
///
/// ```
/// assert_eq!(mosaic_core::strings::lower_first("Square"), "square");
/// ```
#[must_use]
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
