//! Natural ordering for section and file names.
//!
//! Both section directories and the media files inside them are sorted the
//! way a person reading filenames expects: runs of digits compare by numeric
//! value, everything else compares lexicographically ignoring case. So
//! `a1.jpg, a2.jpg, a10.jpg` — never `a1, a10, a2` — and `2_intro` sorts
//! before `10_finale`.
//!
//! Digit runs are compared without parsing into a fixed-width integer, so
//! arbitrarily long numbers (timestamps, serials) order correctly.

use std::cmp::Ordering;

/// Compare two names in natural order.
///
/// - Digit runs compare numerically (`"2" < "10"`), leading zeros ignored.
/// - Other runs compare case-insensitively.
/// - Names equal under those rules fall back to a plain byte comparison so
///   the ordering is total and deterministic (`"A1"` vs `"a01"`).
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(&mut ca);
                    let run_b = take_digit_run(&mut cb);
                    let ord = cmp_digit_runs(&run_a, &run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = fold(x).cmp(&fold(y));
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    ca.next();
                    cb.next();
                }
            }
        }
    }

    a.cmp(b)
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare two digit runs by numeric value: strip leading zeros, then the
/// longer run is larger, then compare digit-by-digit.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
