//! Injection-resistant string sanitizer.
//!
//! Several fields end up inside document-store queries (credential digests,
//! new passwords). The sanitizer keeps only characters that cannot smuggle
//! query operators: `{`, `}` and `$` in particular never survive it.

/// Trim the input, then drop every character outside letters, digits,
/// space, `.`, `,`, `_` and `-`.
#[must_use]
pub fn sanitize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | ',' | '_' | '-'))
        .collect()
}

/// Returns `true` if sanitization leaves the input untouched.
#[must_use]
pub fn is_clean(input: &str) -> bool {
    sanitize(input) == input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_allowed_characters() {
        assert_eq!(sanitize("abc DEF 012 .,_-"), "abc DEF 012 .,_-");
        assert!(is_clean("caf\u{e9} au lait"));
    }

    #[test]
    fn strips_query_operator_characters() {
        assert_eq!(sanitize("{$gt: ''}"), "gt ");
        assert_eq!(sanitize("a$b{c}d"), "abcd");
        assert!(!is_clean("$where"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(sanitize("  secret  "), "secret");
        assert!(!is_clean(" padded"));
    }
}
