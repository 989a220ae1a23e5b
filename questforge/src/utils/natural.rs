//! Natural string ordering
//!
//! Case-insensitive comparison that treats digit runs as numbers, so
//! `"10:10"` sorts after `"2:10"` and `"quest7"` before `"quest10"`.
//! This is the ordering every canonicalized map and lang table uses.

use std::cmp::Ordering;

/// Compare two strings in natural order.
///
/// Digit runs are compared by numeric value, everything else is compared
/// case-insensitively character by character. Inputs equal under those
/// rules (case ties, leading zeros) fall back to byte order so the
/// result is a total order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digits(&mut ca);
                    let run_b = take_digits(&mut cb);
                    match cmp_digit_runs(&run_a, &run_b) {
                        Ordering::Equal => {}
                        other => return other,
                    }
                } else {
                    let xl = x.to_lowercase();
                    let yl = y.to_lowercase();
                    match xl.cmp(yl) {
                        Ordering::Equal => {
                            ca.next();
                            cb.next();
                        }
                        other => return other,
                    }
                }
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare two digit runs numerically without parsing into a fixed-width
/// integer (runs can be arbitrarily long). Runs with equal value (for
/// example `01` and `1`) compare equal here; the caller's final byte-order
/// fallback keeps the overall ordering total.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let sa = a.trim_start_matches('0');
    let sb = b.trim_start_matches('0');
    sa.len().cmp(&sb.len()).then_with(|| sa.cmp(sb))
}
