//! Key normalization: the policy that makes lookups fuzzy without being lossy.
//!
//! A normalized key is invariant under letter case and separator convention
//! (PascalCase, snake_case, camelCase, SCREAMING_SNAKE), but changes whenever
//! a non-ignorable character is inserted, deleted, or substituted. ASCII only.

use std::sync::Arc;

/// Characters deleted from inputs before comparison.
pub const IGNORABLE_CHARS: &[char] = &[' ', '-', '_', '.', ':', ';', ','];

/// Pluggable normalization strategy, chosen once at build time and applied
/// uniformly to registration and every later query.
pub type NormalizeFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Default normalization: trim surrounding whitespace, ASCII-lowercase, and
/// delete every occurrence of [`IGNORABLE_CHARS`].
///
/// ```
/// use autoenum::normalize;
/// assert_eq!(normalize("  New York City "), "newyorkcity");
/// assert_eq!(normalize("NEW_YORK-city"), "newyorkcity");
/// assert_eq!(normalize("NewYorkCity2"), "newyorkcity2");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !IGNORABLE_CHARS.contains(c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Identity normalization: exact-match lookups for types that opt out of
/// fuzziness via [`EnumTypeBuilder::normalize_with`](crate::EnumTypeBuilder::normalize_with).
pub fn identity(input: &str) -> String {
    input.to_string()
}

pub(crate) fn default_normalizer() -> NormalizeFn {
    Arc::new(normalize)
}
