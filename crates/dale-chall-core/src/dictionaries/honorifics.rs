//! Honorific titles for sentence boundary detection.
//!
//! A period that closes one of these titles ("Dr.", "Mrs.") does not end a
//! sentence. Matching is exact: the token must carry its trailing period and
//! its original capitalization.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Closed set of honorifics, each written with its trailing period.
pub static HONORIFICS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "Dr.", "Esq.", "Hon.", "Jr.", "Mr.", "Mrs.", "Ms.", "Messrs.", "Mmes.", "Msgr.", "Prof.",
        "Rev.", "Rt.", "Sr.", "St.",
    ]
    .into_iter()
    .collect()
});

/// Check if a token is a known honorific.
pub fn is_honorific(token: &str) -> bool {
    HONORIFICS.contains(token)
}

/// Check if the last space-delimited token of `text` is an honorific.
pub fn ends_with_honorific(text: &str) -> bool {
    text.rsplit(' ').next().is_some_and(is_honorific)
}
