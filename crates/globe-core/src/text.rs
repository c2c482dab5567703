// crates/globe-core/src/text.rs

//! Query text handling for lexical search.
//!
//! A raw query such as `"sant jul*"` goes through three steps:
//!
//! 1. [`validate_query`] rejects anything that is not a letter, a digit,
//!    whitespace or the `*` wildcard;
//! 2. [`tokenize`] splits on whitespace and lowercases;
//! 3. [`LexicalPattern::new`] turns the tokens into ordered literal pieces.
//!
//! A name matches when every piece occurs in it, case-insensitively, in
//! order and without overlapping. Conceptually this is the SQL pattern
//! `%sant%jul%`, evaluated directly instead of being interpolated into a
//! query.

use crate::error::{GlobeError, Result};

pub const WILDCARD: char = '*';

/// Which names of a city a lexical pattern is tested against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexicalScope {
    /// The display name only.
    #[default]
    Name,
    /// Display name, ASCII name and every alternate name.
    AllNames,
}

/// Checks the character class of a raw query string.
///
/// Letters from any script and ASCII digits are accepted, so `"Julià"` passes
/// while `"../.."` fails on the first `.`.
pub fn validate_query(raw: &str) -> Result<()> {
    check_chars(raw, |ch| ch.is_whitespace())
}

/// Splits a raw query on whitespace and lowercases each word.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_lowercase).collect()
}

/// Letters of any script and ASCII digits. Numeric symbols such as `²` or
/// `½` are rejected.
fn is_word_char(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_ascii_digit()
}

fn check_chars(value: &str, also_allowed: impl Fn(char) -> bool) -> Result<()> {
    match value
        .chars()
        .enumerate()
        .find(|&(_, ch)| !(is_word_char(ch) || ch == WILDCARD || also_allowed(ch)))
    {
        Some((position, ch)) => Err(GlobeError::InvalidCharacter { ch, position }),
        None => Ok(()),
    }
}

/// Ordered substring pattern compiled from query tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalPattern {
    pieces: Vec<String>,
}

impl LexicalPattern {
    /// Compiles `tokens` into a pattern.
    ///
    /// Fails with [`GlobeError::EmptyQuery`] when there are no non-empty
    /// tokens and with [`GlobeError::InvalidCharacter`] when a token holds
    /// anything but letters, digits and `*`. A `*` inside a token is a
    /// wildcard; consecutive wildcards collapse.
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let mut pieces = Vec::new();
        let mut any = false;
        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }
            check_chars(token, |_| false)?;
            any = true;
            pieces.extend(
                token
                    .to_lowercase()
                    .split(WILDCARD)
                    .filter(|p| !p.is_empty())
                    .map(str::to_owned),
            );
        }
        if !any {
            return Err(GlobeError::EmptyQuery);
        }
        Ok(Self { pieces })
    }

    /// Validates, tokenizes and compiles a raw query string.
    pub fn parse(raw: &str) -> Result<Self> {
        validate_query(raw)?;
        Self::new(&tokenize(raw))
    }

    /// Literal pieces in match order.
    pub fn pieces(&self) -> &[String] {
        &self.pieces
    }

    /// Case-insensitive ordered match against `name`.
    pub fn matches(&self, name: &str) -> bool {
        if self.pieces.is_empty() {
            return true;
        }
        let haystack = name.to_lowercase();
        let mut rest = haystack.as_str();
        for piece in &self.pieces {
            match rest.find(piece.as_str()) {
                Some(at) => rest = &rest[at + piece.len()..],
                None => return false,
            }
        }
        true
    }
}
