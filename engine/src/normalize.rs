//! Identifier normalization.

/// Lower-cases the first character of `name`, leaving the rest untouched.
///
/// Callers pass non-empty local names; an empty input yields an empty string.
#[must_use]
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
