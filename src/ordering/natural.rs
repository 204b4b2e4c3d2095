//! Natural ("Finder-style") string comparison.
//!
//! Runs of ASCII digits compare by numeric value and letters compare without
//! regard to case, so `file2` sorts before `file10` and `Apple` next to
//! `apple`. Strings that are equal under those rules are ordered byte-wise,
//! which keeps the comparison total.

use std::cmp::Ordering;

/// Compare two strings in natural order.
pub fn natural_cmp(lhs: &str, rhs: &str) -> Ordering {
    compare_folded(lhs, rhs).then_with(|| lhs.cmp(rhs))
}

/// Case-insensitive, numeric-aware comparison. Not total on its own.
fn compare_folded(mut lhs: &str, mut rhs: &str) -> Ordering {
    loop {
        let (a, b) = match (lhs.chars().next(), rhs.chars().next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a), Some(b)) => (a, b),
        };

        if a.is_ascii_digit() && b.is_ascii_digit() {
            let (l_digits, l_rest) = split_digits(lhs);
            let (r_digits, r_rest) = split_digits(rhs);
            match compare_numeric(l_digits, r_digits) {
                Ordering::Equal => {}
                ord => return ord,
            }
            lhs = l_rest;
            rhs = r_rest;
        } else {
            match a.to_lowercase().cmp(b.to_lowercase()) {
                Ordering::Equal => {}
                ord => return ord,
            }
            lhs = &lhs[a.len_utf8()..];
            rhs = &rhs[b.len_utf8()..];
        }
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Compare two digit runs by value without parsing (runs may exceed u128).
fn compare_numeric(lhs: &str, rhs: &str) -> Ordering {
    let lhs = lhs.trim_start_matches('0');
    let rhs = rhs.trim_start_matches('0');
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}
