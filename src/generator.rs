//! Word generation engine
//!
//! Words are enumerated lazily, one length at a time from the shortest, and
//! within a length in odometer order: the rightmost position advances
//! fastest. Only the counters for the word in flight are kept in memory.

use std::iter::FusedIterator;

use crate::charset::Charset;
use crate::error::ConfigError;

/// Inclusive word length bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min == 0 {
            return Err(ConfigError::ZeroLength { which: "minimum" });
        }
        if max == 0 {
            return Err(ConfigError::ZeroLength { which: "maximum" });
        }
        if min > max {
            return Err(ConfigError::MinExceedsMax { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }
}

/// Position-wise alphabets shared by every generated length: a fixed prefix
/// (from a pattern) followed by free positions over the whole charset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLayout {
    prefix: Vec<Vec<char>>,
    charset: Vec<char>,
}

impl WordLayout {
    pub fn new(prefix: Vec<Vec<char>>, charset: &Charset) -> Self {
        Self {
            prefix,
            charset: charset.chars().to_vec(),
        }
    }

    /// Layout without a pattern
    pub fn unconstrained(charset: &Charset) -> Self {
        Self::new(Vec::new(), charset)
    }

    #[inline]
    pub fn prefix_len(&self) -> usize {
        self.prefix.len()
    }

    fn alphabet(&self, position: usize) -> &[char] {
        self.prefix.get(position).unwrap_or(&self.charset)
    }

    /// Number of words of exactly `len` characters, `None` on overflow.
    /// `len` is never shorter than the prefix.
    pub fn count_for_length(&self, len: usize) -> Option<u128> {
        (0..len).try_fold(1u128, |acc, pos| acc.checked_mul(self.alphabet(pos).len() as u128))
    }
}

/// Number of words a full run over `lengths` produces, `None` on overflow
pub fn total_words(layout: &WordLayout, lengths: LengthRange) -> Option<u128> {
    (lengths.min..=lengths.max).try_fold(0u128, |acc, len| acc.checked_add(layout.count_for_length(len)?))
}

/// Upper bound on the size in bytes of a full run's newline-terminated
/// output (exact when every character of a position has the same UTF-8 width)
pub fn total_bytes(layout: &WordLayout, lengths: LengthRange) -> Option<u128> {
    (lengths.min..=lengths.max).try_fold(0u128, |acc, len| {
        let words = layout.count_for_length(len)?;
        let line_bytes = (0..len)
            .map(|pos| max_utf8_len(layout.alphabet(pos)))
            .sum::<usize>() as u128
            + 1;
        acc.checked_add(words.checked_mul(line_bytes)?)
    })
}

fn max_utf8_len(alphabet: &[char]) -> usize {
    alphabet.iter().map(|c| c.len_utf8()).max().unwrap_or(0)
}

/// Odometer over one fixed word length
#[derive(Debug)]
struct Odometer {
    len: usize,
    counters: Vec<usize>,
    exhausted: bool,
}

impl Odometer {
    fn new(len: usize) -> Self {
        Self {
            len,
            counters: vec![0; len],
            exhausted: false,
        }
    }

    fn next_word(&mut self, layout: &WordLayout) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let word: String = self
            .counters
            .iter()
            .enumerate()
            .map(|(pos, &idx)| layout.alphabet(pos)[idx])
            .collect();

        self.exhausted = true;
        for pos in (0..self.len).rev() {
            self.counters[pos] += 1;
            if self.counters[pos] < layout.alphabet(pos).len() {
                self.exhausted = false;
                break;
            }
            self.counters[pos] = 0;
        }

        Some(word)
    }
}

/// Lazy sequence of every word for a layout and length range
#[derive(Debug)]
pub struct WordGenerator {
    layout: WordLayout,
    next_len: usize,
    max_len: usize,
    current: Option<Odometer>,
}

impl WordGenerator {
    /// The layout's prefix must not be longer than `lengths.min()`.
    pub fn new(layout: WordLayout, lengths: LengthRange) -> Self {
        debug_assert!(layout.prefix_len() <= lengths.min);
        Self {
            layout,
            next_len: lengths.min,
            max_len: lengths.max,
            current: None,
        }
    }

    /// Length of the words currently being produced
    pub fn current_len(&self) -> Option<usize> {
        self.current.as_ref().map(|odo| odo.len)
    }
}

impl Iterator for WordGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(odo) = self.current.as_mut() {
                if let Some(word) = odo.next_word(&self.layout) {
                    return Some(word);
                }
                self.current = None;
            }

            if self.next_len > self.max_len {
                return None;
            }

            let len = self.next_len;
            self.next_len += 1;
            log::debug!("Generating words of length {}", len);
            self.current = Some(Odometer::new(len));
        }
    }
}

impl FusedIterator for WordGenerator {}
