// src/parcel/normalize.rs
//
// Identifier plumbing for the quicksearch backend. A Pinellas parcel
// number is six dash-separated segments (2-2-2-5-3-4); users paste it
// with or without the dashes.

use super::types::LookupError;

/// Reject before any network call: non-empty, ≤ 30 chars, restricted
/// to alphanumerics, dashes, dots, and spaces.
pub fn validate(id: &str) -> Result<(), LookupError> {
    if id.trim().is_empty() {
        return Err(LookupError::EmptyId);
    }
    if id.len() > 30 {
        return Err(LookupError::IdTooLong);
    }
    let ok = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c.is_whitespace());
    if !ok {
        return Err(LookupError::InvalidChars);
    }
    Ok(())
}

/// Insert dashes at the fixed offsets the search endpoint expects.
/// Only fires on a dashless 18-char input; anything else passes
/// through trimmed.
pub fn normalize(id: &str) -> String {
    let id = id.trim();
    if id.is_ascii() && !id.contains('-') && id.len() == 18 {
        format!(
            "{}-{}-{}-{}-{}-{}",
            &id[0..2],
            &id[2..4],
            &id[4..6],
            &id[6..11],
            &id[11..14],
            &id[14..18]
        )
    } else {
        s!(id)
    }
}

/// Derive the separator-free "strap" key the details page wants.
/// Six segments → swap the 1st and 3rd, then concatenate. Opaque
/// provider convention; do not read meaning into the swap.
pub fn strap(normalized: &str) -> String {
    let parts: Vec<&str> = normalized.split('-').collect();
    if parts.len() == 6 {
        join!(parts[2], parts[1], parts[0], parts[3], parts[4], parts[5])
    } else {
        normalized.replace('-', "")
    }
}

/// Drop a leading DOR classification code ("1234 Single Family" →
/// "Single Family"). No-op when the text doesn't start with a digit.
pub fn strip_dor_code(land_use: &str) -> String {
    let t = land_use.trim();
    if t.starts_with(|c: char| c.is_ascii_digit()) {
        if let Some((_, rest)) = t.split_once(' ') {
            return s!(rest.trim());
        }
    }
    s!(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_and_long_and_bad_chars() {
        assert!(matches!(validate(""), Err(LookupError::EmptyId)));
        assert!(matches!(validate("   "), Err(LookupError::EmptyId)));
        assert!(matches!(
            validate(&"9".repeat(31)),
            Err(LookupError::IdTooLong)
        ));
        assert!(matches!(
            validate("19-31-17;DROP"),
            Err(LookupError::InvalidChars)
        ));
        assert!(validate("19-31-17-73166-001-0010").is_ok());
        assert!(validate("19 31 17 . 0010").is_ok());
    }

    #[test]
    fn normalize_inserts_dashes_at_fixed_offsets() {
        assert_eq!(
            normalize("193117731660010010"),
            "19-31-17-73166-001-0010"
        );
        // 6 groups of lengths 2,2,2,5,3,4
        let n = normalize("193117731660010010");
        let lens: Vec<usize> = n.split('-').map(str::len).collect();
        assert_eq!(lens, vec![2, 2, 2, 5, 3, 4]);
    }

    #[test]
    fn normalize_passes_dashed_input_through() {
        assert_eq!(
            normalize(" 19-31-17-73166-001-0010 "),
            "19-31-17-73166-001-0010"
        );
        // 17 or 19 chars without dashes: untouched
        assert_eq!(normalize("12345678901234567"), "12345678901234567");
        assert_eq!(normalize("1234567890123456789"), "1234567890123456789");
    }

    #[test]
    fn strap_swaps_first_and_third_segments() {
        assert_eq!(strap("19-31-17-73166-001-0010"), "173119731660010010");
    }

    #[test]
    fn strap_on_other_shapes_just_drops_dashes() {
        assert_eq!(strap("12-34-56"), "123456");
        assert_eq!(strap("plain"), "plain");
    }

    #[test]
    fn dor_code_stripping() {
        assert_eq!(strip_dor_code("1234 Single Family"), "Single Family");
        assert_eq!(strip_dor_code("Single Family"), "Single Family");
        assert_eq!(strip_dor_code("0820  Multi-Family"), "Multi-Family");
        assert_eq!(strip_dor_code("1234"), "1234");
        assert_eq!(strip_dor_code(""), "");
    }
}
