//! Character sets
//!
//! Named charsets and normalisation of user-supplied ones.

use clap::ValueEnum;
use std::fmt;

use crate::error::ConfigError;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Predefined character sets selectable with `-c/--charset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamedCharset {
    /// 0123456789
    Numeric,
    /// abcdefghijklmnopqrstuvwxyz
    Alpha,
    /// ABCDEFGHIJKLMNOPQRSTUVWXYZ
    AlphaUpper,
    /// Lowercase then uppercase letters
    AlphaMixed,
    /// Lowercase letters then digits
    Alphanum,
    /// Uppercase letters then digits
    AlphanumUpper,
    /// Lowercase, uppercase, then digits
    AlphanumMixed,
}

impl NamedCharset {
    /// Literal characters of this charset, in enumeration order
    pub fn chars(self) -> String {
        let parts: &[&str] = match self {
            Self::Numeric => &[DIGITS],
            Self::Alpha => &[LOWERCASE],
            Self::AlphaUpper => &[UPPERCASE],
            Self::AlphaMixed => &[LOWERCASE, UPPERCASE],
            Self::Alphanum => &[LOWERCASE, DIGITS],
            Self::AlphanumUpper => &[UPPERCASE, DIGITS],
            Self::AlphanumMixed => &[LOWERCASE, UPPERCASE, DIGITS],
        };
        parts.concat()
    }
}

/// Ordered set of distinct characters words are built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Charset for one of the predefined names
    pub fn named(name: NamedCharset) -> Self {
        Self {
            chars: name.chars().chars().collect(),
        }
    }

    /// Charset from an arbitrary string: duplicates collapse and the
    /// characters are sorted by code point.
    pub fn custom(source: &str) -> Result<Self, ConfigError> {
        let mut chars: Vec<char> = source.chars().collect();
        chars.sort_unstable();
        chars.dedup();

        if chars.is_empty() {
            return Err(ConfigError::EmptyCharset);
        }

        Ok(Self { chars })
    }

    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Characters of this charset matching `pred`, keeping charset order
    pub fn filtered<F>(&self, pred: F) -> Vec<char>
    where
        F: Fn(char) -> bool,
    {
        self.chars.iter().copied().filter(|&c| pred(c)).collect()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
