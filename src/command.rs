//! The discriminated command surface for driving a [`Pattern`].
//!
//! The surrounding application parses raw user input into these values; the
//! core only ever sees already-validated scalars.

use crate::pattern::{BuildError, Pattern};

/// One builder step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append one literal byte.
    Literal(u8),
    /// Append token text verbatim: `.`, `\d`, `\s`, a ready-made group.
    Raw(String),
    /// Append a character class built from the given interior.
    Class(String),
    /// Repeat the previous item exactly `n` times.
    Exact(u32),
    /// Repeat the previous item between `m` and `n` times.
    Between(u32, u32),
    /// Make the previous item optional.
    Optional,
    /// Append a group around trusted inner text.
    Group(String),
    /// Append a group of `|`-separated alternatives.
    Alternation(String),
    /// Append `^` or `$`.
    Anchor(u8),
    /// Replace the pattern with catalog entry `id`.
    Preset(u8),
    /// Clear back to the empty pattern.
    Reset,
}

/// Apply one command to `pattern`.
///
/// On failure the pattern is unchanged and the error says why.
pub fn apply(pattern: &mut Pattern, cmd: &Command) -> Result<(), BuildError> {
    match cmd {
        Command::Literal(c) => pattern.add_literal(*c),
        Command::Raw(s) => pattern.add_raw(s),
        Command::Class(s) => pattern.add_class(s),
        Command::Exact(n) => pattern.add_exact(*n),
        Command::Between(m, n) => pattern.add_between(*m, *n),
        Command::Optional => pattern.add_optional(),
        Command::Group(s) => pattern.add_group(s),
        Command::Alternation(s) => pattern.add_alternation(s),
        Command::Anchor(a) => pattern.add_anchor(*a),
        Command::Preset(id) => pattern.apply_preset(*id),
        Command::Reset => {
            pattern.reset();
            Ok(())
        }
    }
}
