/// Complementary basic ability pairs
pub const BASIC_PAIRS: [(u8, u8); 4] = [(0, 1), (2, 3), (4, 5), (6, 7)];

/// Complementary advanced ability pairs
pub const ADVANCED_PAIRS: [(u8, u8); 2] = [(16, 17), (18, 19)];

/// Complementary elite ability pairs
pub const ELITE_PAIRS: [(u8, u8); 1] = [(24, 25)];

/// Check whether two class codes form a complementary pair
///
/// A pair is an even code and the code directly after it, in either order
/// (e.g. 0 and 1, or 7 and 6).
///
/// # Arguments
/// * `a` - First class code
/// * `b` - Second class code
#[inline]
pub fn is_complementary(a: u8, b: u8) -> bool {
    (a % 2 == 0 && a.checked_add(1) == Some(b)) || (b % 2 == 0 && b.checked_add(1) == Some(a))
}

/// Same as [`is_complementary`] but unknown codes never match
#[inline]
pub fn is_complementary_opt(a: Option<u8>, b: Option<u8>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => is_complementary(a, b),
        _ => false,
    }
}

/// Check whether two slot values are exactly the given pair, in either order
#[inline]
pub fn forms_pair(a: Option<u8>, b: Option<u8>, pair: (u8, u8)) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => (a == pair.0 && b == pair.1) || (a == pair.1 && b == pair.0),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complementary_classes() {
        assert!(is_complementary(0, 1));
        assert!(is_complementary(1, 0));
        assert!(is_complementary(6, 7));

        // Odd code followed by even is not a pair
        assert!(!is_complementary(1, 2));
        assert!(!is_complementary(2, 1));
        assert!(!is_complementary(4, 4));
        assert!(!is_complementary(0, 3));
    }

    #[test]
    fn test_complementary_no_overflow() {
        assert!(!is_complementary(u8::MAX, 0));
        assert!(is_complementary(254, u8::MAX));
    }

    #[test]
    fn test_unknown_codes_never_match() {
        assert!(!is_complementary_opt(None, Some(1)));
        assert!(!is_complementary_opt(None, None));
        assert!(is_complementary_opt(Some(16), Some(17)));
    }

    #[test]
    fn test_forms_pair() {
        assert!(forms_pair(Some(24), Some(25), (24, 25)));
        assert!(forms_pair(Some(25), Some(24), (24, 25)));
        assert!(!forms_pair(Some(24), Some(24), (24, 25)));
        assert!(!forms_pair(Some(2), Some(3), (0, 1)));
        assert!(!forms_pair(None, Some(1), (0, 1)));
    }
}
