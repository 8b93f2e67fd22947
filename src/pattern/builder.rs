//! Pattern state and the token validator.
//!
//! [`Pattern`] owns the in-progress pattern text and the kind of the most
//! recently appended token. Every mutating operation is checked against the
//! grammar first and either commits fully or fails leaving the state
//! untouched; each successful append (presets excepted) is rewritten to its
//! normalized fixed point.

use std::fmt;

use super::error::BuildError;
use super::normalize::normalize;
use super::presets::PRESETS;

/// Default capacity of the pattern buffer in bytes.
pub const DEFAULT_CAPACITY: usize = 512;

/// What kind of token the buffer currently ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Nothing appended yet.
    None,
    /// A matchable unit: literal, class, escape, group, alternation.
    Item,
    /// `{n}`, `{m,n}` or `?`.
    Quantifier,
    /// `^` or `$`.
    Anchor,
}

/// An in-progress regular expression over the byte domain 0–255.
///
/// One value per session; no sharing, no persistence. Cleared with
/// [`Pattern::reset`], discarded when the session ends.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: Vec<u8>,
    capacity: usize,
    last: TokenKind,
}

impl Pattern {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty pattern bounded to `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: Vec::new(),
            capacity,
            last: TokenKind::None,
        }
    }

    /// The current pattern text as raw bytes.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn last_token(&self) -> TokenKind {
        self.last
    }

    /// Clear back to the empty pattern.
    pub fn reset(&mut self) {
        self.text.clear();
        self.last = TokenKind::None;
    }

    /// Append a single literal byte.
    pub fn add_literal(&mut self, c: u8) -> Result<(), BuildError> {
        self.append_item(&[c])
    }

    /// Append token text verbatim: `.`, `\d`, `\s`, or a ready-made group.
    pub fn add_raw(&mut self, s: &str) -> Result<(), BuildError> {
        self.append_item(s.as_bytes())
    }

    /// Append a character class built from `chars`; brackets are added here.
    pub fn add_class(&mut self, chars: &str) -> Result<(), BuildError> {
        let mut piece = Vec::with_capacity(chars.len() + 2);
        piece.push(b'[');
        piece.extend_from_slice(chars.as_bytes());
        piece.push(b']');
        self.append_item(&piece)
    }

    /// Append `{n}` to repeat the previous item exactly `n` times.
    pub fn add_exact(&mut self, n: u32) -> Result<(), BuildError> {
        self.append_quantifier(format!("{{{n}}}").as_bytes())
    }

    /// Append `{m,n}` to repeat the previous item between `m` and `n` times.
    pub fn add_between(&mut self, m: u32, n: u32) -> Result<(), BuildError> {
        self.append_quantifier(format!("{{{m},{n}}}").as_bytes())
    }

    /// Append `?` to make the previous item optional.
    pub fn add_optional(&mut self) -> Result<(), BuildError> {
        self.append_quantifier(b"?")
    }

    /// Append `(inner)`. The inner text is trusted as supplied.
    pub fn add_group(&mut self, inner: &str) -> Result<(), BuildError> {
        let mut piece = Vec::with_capacity(inner.len() + 2);
        piece.push(b'(');
        piece.extend_from_slice(inner.as_bytes());
        piece.push(b')');
        self.append_item(&piece)
    }

    /// Append `(inner)` where `inner` is `|`-separated alternatives.
    pub fn add_alternation(&mut self, inner: &str) -> Result<(), BuildError> {
        self.add_group(inner)
    }

    /// Append `^` (only onto an empty pattern) or `$` (not after an anchor).
    pub fn add_anchor(&mut self, a: u8) -> Result<(), BuildError> {
        match a {
            b'^' if !self.text.is_empty() => return Err(BuildError::CaretNotFirst),
            b'$' if self.last == TokenKind::Anchor => return Err(BuildError::AlreadyEnded),
            _ => {}
        }
        self.commit(&[a], TokenKind::Anchor)
    }

    /// Replace the whole pattern with catalog entry `id`.
    ///
    /// Presets skip normalization; see [`super::presets::PRESETS`].
    pub fn apply_preset(&mut self, id: u8) -> Result<(), BuildError> {
        let preset = PRESETS.get(&id).ok_or(BuildError::UnknownPreset(id))?;
        if preset.pattern.len() > self.capacity {
            return Err(BuildError::PatternTooLong);
        }
        self.text.clear();
        self.text.extend_from_slice(preset.pattern.as_bytes());
        self.last = TokenKind::Item;
        Ok(())
    }

    fn append_item(&mut self, piece: &[u8]) -> Result<(), BuildError> {
        self.commit(piece, TokenKind::Item)
    }

    /// Quantifiers require the previous token to be an item; anything else
    /// (nothing yet, an anchor, or an existing quantifier) is rejected.
    fn append_quantifier(&mut self, piece: &[u8]) -> Result<(), BuildError> {
        if self.last != TokenKind::Item {
            return Err(BuildError::NothingToRepeat);
        }
        self.commit(piece, TokenKind::Quantifier)
    }

    /// Append `piece` to a working copy, normalize it, and commit only if
    /// the rewrite converged and the result still fits.
    fn commit(&mut self, piece: &[u8], kind: TokenKind) -> Result<(), BuildError> {
        if self.text.len() + piece.len() > self.capacity {
            return Err(BuildError::PatternTooLong);
        }
        let mut work = self.text.clone();
        work.extend_from_slice(piece);
        let normalized = normalize(&work)?;
        // Run collapsing can grow the text (`\d\d` to `\d{2}`), so the
        // bound is enforced on the normalized form as well.
        if normalized.len() > self.capacity {
            return Err(BuildError::PatternTooLong);
        }
        self.text = normalized;
        self.last = kind;
        Ok(())
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.text))
    }
}
