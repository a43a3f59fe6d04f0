//! Positional word patterns
//!
//! A pattern is a sequence of slots, one per leading word position:
//!
//! | Token | Matches                                 |
//! |-------|-----------------------------------------|
//! | `@`   | lowercase letters present in the charset |
//! | `,`   | digits present in the charset            |
//! | `%`   | uppercase letters present in the charset |
//! | `^`   | any character of the charset             |
//! | other | that exact character                     |
//!
//! Resolving a pattern against a charset turns every slot into the list of
//! characters it may take, which the generator enumerates like any other
//! position.

use std::fmt;

use crate::charset::Charset;
use crate::error::ConfigError;

/// One position of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Literal(char),
    Lower,
    Digit,
    Upper,
    Any,
}

impl Slot {
    /// Classify a single pattern character
    pub fn from_token(token: char) -> Self {
        match token {
            '@' => Self::Lower,
            ',' => Self::Digit,
            '%' => Self::Upper,
            '^' => Self::Any,
            other => Self::Literal(other),
        }
    }

    /// The pattern character this slot was parsed from
    pub fn token(&self) -> char {
        match self {
            Self::Literal(ch) => *ch,
            Self::Lower => '@',
            Self::Digit => ',',
            Self::Upper => '%',
            Self::Any => '^',
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Lower => "lowercase letter",
            Self::Digit => "digit",
            Self::Upper => "uppercase letter",
            Self::Any => "any charset character",
        }
    }

    /// Characters of `charset` this slot may take, in charset order
    pub fn alphabet(&self, charset: &Charset) -> Vec<char> {
        match self {
            Self::Literal(ch) => charset.filtered(|c| c == *ch),
            Self::Lower => charset.filtered(|c| c.is_ascii_lowercase()),
            Self::Digit => charset.filtered(|c| c.is_ascii_digit()),
            Self::Upper => charset.filtered(|c| c.is_ascii_uppercase()),
            Self::Any => charset.chars().to_vec(),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({})", self.token(), self.describe())
    }
}

/// Parsed pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    slots: Vec<Slot>,
}

impl Pattern {
    pub fn parse(source: &str) -> Self {
        Self {
            source: source.to_string(),
            slots: source.chars().map(Slot::from_token).collect(),
        }
    }

    /// Number of word positions the pattern constrains
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Resolve every slot to its per-position alphabet.
    ///
    /// Fails on the first literal missing from the charset or the first
    /// placeholder with nothing to choose from.
    pub fn resolve(&self, charset: &Charset) -> Result<Vec<Vec<char>>, ConfigError> {
        self.slots
            .iter()
            .enumerate()
            .map(|(position, slot)| {
                let alphabet = slot.alphabet(charset);
                if !alphabet.is_empty() {
                    return Ok(alphabet);
                }
                Err(match *slot {
                    Slot::Literal(ch) => ConfigError::LiteralNotInCharset { ch, position },
                    slot => ConfigError::EmptySlot { slot, position },
                })
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
