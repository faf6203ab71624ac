use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Comparison mode used when sorting query argument keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortFlags {
    /// Byte-wise lexicographic comparison
    #[default]
    String,
    /// Compare the leading numeric value of each key; non-numeric keys count as 0
    Numeric,
    /// Compare digit runs by magnitude, so `a2` sorts before `a10`
    Natural,
    /// Lexicographic comparison with ASCII case folded
    StringCaseInsensitive,
    /// Natural comparison with ASCII case folded
    NaturalCaseInsensitive,
}

impl SortFlags {
    /// Compare two keys according to this mode
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::String => a.cmp(b),
            Self::Numeric => numeric_value(a).total_cmp(&numeric_value(b)),
            Self::Natural => natural_cmp(a, b, core::convert::identity),
            Self::StringCaseInsensitive => a
                .bytes()
                .map(|c| c.to_ascii_lowercase())
                .cmp(b.bytes().map(|c| c.to_ascii_lowercase())),
            Self::NaturalCaseInsensitive => natural_cmp(a, b, |c| c.to_ascii_lowercase()),
        }
    }

    /// Stable sort of `(key, value)` pairs by key
    pub fn sort_pairs(self, pairs: &mut [(&str, &str)]) {
        pairs.sort_by(|a, b| self.compare(a.0, b.0));
    }
}

/// Leading numeric value of a string: optional sign, digits, fraction and exponent.
/// Strings without a numeric prefix evaluate to 0.
fn numeric_value(input: &str) -> f64 {
    let s = input.trim_start_matches([' ', '\t', '\n', '\r', '\x0B', '\x0C']);
    let bytes = s.as_bytes();
    let digits_from = |mut pos: usize| {
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        pos
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    end = digits_from(end);
    let mut mantissa = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac = frac_end - end - 1;
        if mantissa + frac > 0 {
            mantissa += frac;
            end = frac_end;
        }
    }
    if mantissa == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut pos = end + 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_end = digits_from(pos);
        if exp_end > pos {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Natural order comparison: runs of ASCII digits compare by value,
/// everything else byte by byte after `fold`.
fn natural_cmp(a: &str, b: &str, fold: fn(u8) -> u8) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (run_a, next_i) = digit_run(a, i);
            let (run_b, next_j) = digit_run(b, j);
            let ord = run_a
                .len()
                .cmp(&run_b.len())
                .then_with(|| run_a.cmp(run_b));
            if ord != Ordering::Equal {
                return ord;
            }
            i = next_i;
            j = next_j;
        } else {
            let ord = fold(a[i]).cmp(&fold(b[j]));
            if ord != Ordering::Equal {
                return ord;
            }
            i += 1;
            j += 1;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Digit run starting at `start`, with leading zeros dropped, and the index after it.
fn digit_run(bytes: &[u8], start: usize) -> (&[u8], usize) {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut first = start;
    while first + 1 < end && bytes[first] == b'0' {
        first += 1;
    }
    (&bytes[first..end], end)
}
