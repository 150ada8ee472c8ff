//! Phone number canonicalization for the French numbering plan.
//!
//! A number is stored in exactly one canonical form (`+33` marker followed
//! by nine digits) and two numbers are equal in the domain iff their
//! canonical forms are byte-equal. [`normalize`] is best-effort and never
//! fails; callers check the result with [`is_valid`] and report
//! unparseable input themselves. [`to_human`] is display-only and must
//! never be used for comparisons.

/// Country calling code of the domestic numbering plan.
pub const COUNTRY_CODE: &str = "33";

/// International marker a canonical number starts with.
pub const INTERNATIONAL_PREFIX: &str = "+33";

/// Convert arbitrary user-entered input into the canonical storage form.
///
/// Cleanup first: trims, drops spaces, periods, hyphens, parentheses and
/// `+` signs, and substitutes the common `o`-for-zero typo. Then the
/// numbering-plan rules, in order:
/// 1. mobile prefixes `6`/`7` entered without the trunk digit get a
///    leading `0`;
/// 2. an 11-digit number starting with the country code collapses to a
///    single leading `0`;
/// 3. a leading `0` becomes the international marker.
///
/// The function is a fixed point: feeding its output back in returns the
/// same string, for any input.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();

    // An already-international number is folded back to its domestic form
    // so the rules below see the same shape either way.
    let folded = match trimmed.strip_prefix(INTERNATIONAL_PREFIX) {
        Some(rest) => format!("0{rest}"),
        None => trimmed.to_owned(),
    };

    let mut phone: String = folded
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '(' | ')' | '+'))
        .map(|c| if c == 'o' { '0' } else { c })
        .collect();

    if phone.starts_with('6') || phone.starts_with('7') {
        phone.insert(0, '0');
    }
    if phone.chars().count() == 11 && phone.starts_with(COUNTRY_CODE) {
        phone.replace_range(..COUNTRY_CODE.len(), "0");
    }
    if phone.starts_with('0') {
        phone.replace_range(..1, INTERNATIONAL_PREFIX);
    }

    phone
}

/// Returns `true` if `candidate` is a canonical phone number.
///
/// The marker-plus-area-code prefix is 4 characters when the candidate
/// length is odd and 3 when even (a leading area/operator code of 1 vs 2
/// digits); what remains must be exactly nine decimal digits.
#[must_use]
pub fn is_valid(candidate: &str) -> bool {
    if !candidate.starts_with('+') {
        return false;
    }
    let skip = if candidate.chars().count() % 2 == 0 {
        3
    } else {
        4
    };
    let rest: Vec<char> = candidate.chars().skip(skip).collect();
    rest.len() == 9 && rest.iter().all(char::is_ascii_digit)
}

/// Format a canonical number for display: `0X XX XX XX XX`.
///
/// Splits the prefix with the same odd/even rule as [`is_valid`], groups
/// the remaining digits in pairs and rewrites the international marker
/// back to the domestic leading `0`. Cosmetic only.
#[must_use]
pub fn to_human(canonical: &str) -> String {
    let chars: Vec<char> = canonical.chars().collect();
    let head = if chars.len() % 2 == 1 { 4 } else { 3 };
    let head = head.min(chars.len());

    let mut out: String = chars[..head].iter().collect();
    let mut rest = &chars[head..];
    if let Some((first, tail)) = rest.split_first() {
        out.push(' ');
        out.push(*first);
        rest = tail;
    }
    for pair in rest.chunks(2) {
        out.push(' ');
        out.extend(pair);
    }

    match out.strip_prefix("+33 ") {
        Some(stripped) => format!("0{stripped}"),
        None => out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_common_domestic_formats() {
        assert_eq!(normalize("06 12 34 56 78"), "+33612345678");
        assert_eq!(normalize("06.12.34.56.78"), "+33612345678");
        assert_eq!(normalize("06-12-34-56-78"), "+33612345678");
        assert_eq!(normalize("(06) 12 34 56 78"), "+33612345678");
    }

    #[test]
    fn prepends_trunk_digit_for_bare_mobile_prefixes() {
        assert_eq!(normalize("612345678"), "+33612345678");
        assert_eq!(normalize("712345678"), "+33712345678");
    }

    #[test]
    fn collapses_country_code_form() {
        assert_eq!(normalize("33612345678"), "+33612345678");
        assert_eq!(normalize("+33 6 12 34 56 78"), "+33612345678");
    }

    #[test]
    fn tolerates_o_typed_for_zero() {
        assert_eq!(normalize("o612345678"), "+33612345678");
    }

    #[test]
    fn is_idempotent_on_samples() {
        for raw in [
            "06 12 34 56 78",
            "+33612345678",
            "612345678",
            "33612345678",
            "not a phone",
            "",
            "+33612",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn validates_canonical_forms_only() {
        assert!(is_valid("+33612345678"));
        // 1-digit operator code kept behind the marker (odd length).
        assert!(is_valid("+330612345678"));

        assert!(!is_valid("0612345678"));
        assert!(!is_valid("+3361234567"));
        assert!(!is_valid("+3361234567890"));
        assert!(!is_valid("+33abc456789"));
        assert!(!is_valid(""));
    }

    #[test]
    fn human_form_round_trips_through_normalize() {
        let canonical = normalize("0612345678");
        assert_eq!(to_human(&canonical), "06 12 34 56 78");
        assert_eq!(normalize(&to_human(&canonical)), canonical);
    }

    #[test]
    fn human_form_keeps_foreign_markers_visible() {
        // Not a +33 number: the marker is not rewritten to a trunk 0.
        assert_eq!(to_human("+41791234567"), "+41 7 91 23 45 67");
    }
}
