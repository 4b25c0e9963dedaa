//! RPM-style version comparison.
//!
//! Version strings are tokenized into maximal runs of ASCII letters or ASCII
//! digits; every other byte is a separator and produces no token of its own.
//! Tokens compare positionally: two digit runs compare as integers, any other
//! pairing compares as raw strings, and when one token list is a strict
//! prefix of the other the longer list is the greater version.

use std::cmp::Ordering;

/// Compare two version strings.
///
/// Total over arbitrary input, including empty strings. Note the mixed-type
/// fallback: a digit run against a letter run compares as raw bytes, so `"9"`
/// sorts before `"a"` by byte value rather than by any numeric rule.
/// Classification decisions downstream depend on this exact ordering.
pub fn compare(left: &str, right: &str) -> Ordering {
    let lhs = tokenize(left);
    let rhs = tokenize(right);
    let longest = lhs.len().max(rhs.len());
    for i in 0..longest {
        // Exhausting one side first means the longer version wins.
        let x = match lhs.get(i) {
            Some(t) => *t,
            None => return Ordering::Less,
        };
        let y = match rhs.get(i) {
            Some(t) => *t,
            None => return Ordering::Greater,
        };
        let ord = if is_digits(x) && is_digits(y) {
            compare_numeric(x, y)
        } else {
            x.cmp(y)
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Split into maximal same-class runs of ASCII letters or digits.
fn tokenize(version: &str) -> Vec<&str> {
    let bytes = version.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            tokens.push(&version[start..i]);
        } else if bytes[i].is_ascii_alphabetic() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            tokens.push(&version[start..i]);
        } else {
            i += 1;
        }
    }
    tokens
}

fn is_digits(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

/// Integer comparison at arbitrary width: leading zeros are insignificant,
/// then a longer digit run is larger, then bytes decide.
fn compare_numeric(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_for_identical_strings() {
        for v in ["", "1", "1.2.3", "4.2.46-34", "2021e-1"] {
            assert_eq!(compare(v, v), Ordering::Equal);
        }
    }

    #[test]
    fn test_numeric_tokens_compare_as_integers() {
        assert_eq!(compare("1.9", "1.10"), Ordering::Less);
        assert_eq!(compare("1.10", "1.9"), Ordering::Greater);
        assert_eq!(compare("1.07", "1.7"), Ordering::Equal);
    }

    #[test]
    fn test_longer_token_sequence_wins() {
        assert_eq!(compare("1.2.3", "1.2"), Ordering::Greater);
        assert_eq!(compare("1.2", "1.2.3"), Ordering::Less);
        assert_eq!(compare("", "1"), Ordering::Less);
    }

    #[test]
    fn test_mixed_tokens_fall_back_to_string_order() {
        // "9" against "a" is a raw byte comparison, not a numeric rule.
        assert_eq!(compare("1.9", "1.a"), Ordering::Less);
        assert_eq!(compare("1.a", "1.9"), Ordering::Greater);
    }

    #[test]
    fn test_separators_produce_no_tokens() {
        assert_eq!(compare("1.0-5", "1.0.5"), Ordering::Equal);
        assert_eq!(compare("1_0", "1-0"), Ordering::Equal);
    }

    #[test]
    fn test_comparisons_are_antisymmetric() {
        let samples = ["4.2.46-30", "4.2.46-34", "1.9", "1.a", "2021e-1", "1.2", "1.2.3", ""];
        for x in samples {
            for y in samples {
                assert_eq!(compare(x, y), compare(y, x).reverse(), "{x:?} vs {y:?}");
            }
        }
    }

    #[test]
    fn test_wide_digit_runs_do_not_overflow() {
        assert_eq!(
            compare("1.20240101000000001", "1.20240101000000002"),
            Ordering::Less
        );
    }
}
