//! The stateful counter producing composite heading indices.
//!
//! An [`Indexer`] owns one counter per heading depth and hands out the
//! next dot-joined index string on demand. Calls are inherently ordered:
//! incrementing a depth resets every deeper counter, so the same sequence
//! of depths on a fresh indexer always reproduces the same indices.

use crate::error::Error;

/// Ordered (value, symbol) pairs for subtractive roman numeral notation.
const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Render a counter value in roman numerals.
///
/// Repeatedly takes the largest symbol not exceeding the remaining value.
/// Zero has no roman numeral and maps to the literal `"0"`, which is how
/// an unvisited depth shows up when verification is disabled.
#[must_use]
pub fn int_to_roman(mut n: u32) -> String {
    let mut out = String::new();
    for (value, symbol) in ROMAN_NUMERALS {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Hierarchical heading counter keyed by zero-based depth.
pub struct Indexer {
    /// One counter per depth; zero means "never incremented here yet".
    counters: Vec<u32>,
    /// Numeral rendering, chosen once at construction.
    format: fn(u32) -> String,
    /// Whether skipped ancestor depths abort the run.
    verify: bool,
}

impl Indexer {
    /// Create a fresh indexer with all counters at zero.
    #[must_use]
    pub fn new(roman: bool, verify: bool) -> Self {
        Self {
            counters: vec![0],
            format: if roman { int_to_roman } else { |n| n.to_string() },
            verify,
        }
    }

    /// Produce the next composite index for a heading at `depth`.
    ///
    /// Grows the counter sequence on demand, increments the counter at
    /// `depth`, resets every deeper counter to zero, and joins the
    /// formatted counters up to `depth` with `.` plus a trailing `.`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeadingOrder`] when verification is enabled
    /// and an ancestor depth was never incremented, i.e. the document
    /// jumped over a heading level.
    pub fn next_index(&mut self, depth: usize) -> Result<String, Error> {
        if depth >= self.counters.len() {
            self.counters.resize(depth + 1, 0);
        }
        self.counters[depth] += 1;
        for counter in &mut self.counters[depth + 1..] {
            *counter = 0;
        }

        if self.verify && self.counters[..=depth].contains(&0) {
            return Err(Error::InvalidHeadingOrder {
                state: self.counters.clone(),
            });
        }

        let mut index = self.counters[..=depth]
            .iter()
            .map(|&n| (self.format)(n))
            .collect::<Vec<_>>()
            .join(".");
        index.push('.');
        Ok(index)
    }
}

#[cfg(test)]
#[path = "tests/indexer.rs"]
mod tests;
