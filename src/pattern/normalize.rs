//! Canonical rewriting of the pattern buffer.
//!
//! Four passes run in order, repeated until one full cycle leaves the text
//! unchanged:
//!
//! - **Class canonicalization** — every `[...]` span is rebuilt as the
//!   minimal ascending-run form (`[c-aabdf]` becomes `[a-df]`).
//! - **Run collapsing** — runs of identical `\d`/`\s` atoms, or of `.`,
//!   collapse to a counted form (`\d\d\d` becomes `\d{3}`).
//! - **Unit quantifier removal** — redundant `{1}` and `{1,1}` are deleted.
//! - **Trivial group removal** — a group around one plain byte is unwrapped
//!   (`(x)` becomes `x`).
//!
//! The passes operate on raw bytes and know nothing about context: a `.`
//! following an escaped `\.` still counts toward a dot run, and `(?` is an
//! ordinary one-byte group to the trivial-group pass. Preset patterns are
//! applied without normalization for exactly that reason.

use super::class_set::ByteSet;
use super::error::BuildError;

/// Upper bound on full pass cycles before the rewrite is abandoned.
///
/// No input is known to cycle, but convergence is not proven either; the
/// bound turns a hypothetical loop into a reportable error.
const MAX_CYCLES: usize = 64;

/// Rewrite `text` to its fixed point under the four passes.
///
/// Returns [`BuildError::NoFixedPoint`] if [`MAX_CYCLES`] full cycles still
/// produced changes.
pub fn normalize(text: &[u8]) -> Result<Vec<u8>, BuildError> {
    let mut cur = text.to_vec();
    for _ in 0..MAX_CYCLES {
        let next = unwrap_trivial_groups(&strip_unit_quantifiers(&collapse_runs(
            &canonicalize_classes(&cur),
        )));
        if next == cur {
            return Ok(cur);
        }
        cur = next;
    }
    Err(BuildError::NoFixedPoint)
}

/// Rebuild every bracketed span as its canonical minimal form.
///
/// Spans are scanned left to right, non-overlapping, resuming after each
/// rewritten span. An unterminated `[` copies the remainder through
/// untouched.
fn canonicalize_classes(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    let mut i = 0;
    while i < buf.len() {
        if buf[i] != b'[' {
            out.push(buf[i]);
            i += 1;
            continue;
        }
        let Some(off) = buf[i + 1..].iter().position(|&b| b == b']') else {
            out.extend_from_slice(&buf[i..]);
            break;
        };
        let end = i + 1 + off;
        let set = ByteSet::from_interior(&buf[i + 1..end]);
        out.push(b'[');
        set.write_canonical(&mut out);
        out.push(b']');
        i = end + 1;
    }
    out
}

/// Collapse maximal runs (≥ 2) of `\d`, `\s` or `.` into a counted form.
///
/// An atom already carrying an exact `{k}` count contributes `k` to its
/// run, so step-by-step accretion keeps folding: `\d{2}\d` becomes `\d{3}`,
/// not a stalled mixed form. Range quantifiers (`{m,n}`) and `?` end the
/// run and are copied through.
fn collapse_runs(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    let mut i = 0;
    while i < buf.len() {
        match buf[i] {
            b'\\' if matches!(buf.get(i + 1), Some(&b'd') | Some(&b's')) => {
                let esc = buf[i + 1];
                let mut count = 0usize;
                while buf.get(i) == Some(&b'\\') && buf.get(i + 1) == Some(&esc) {
                    i += 2;
                    count += absorb_count(buf, &mut i);
                }
                if count > 1 {
                    out.extend_from_slice(format!("\\{}{{{count}}}", esc as char).as_bytes());
                } else {
                    out.push(b'\\');
                    out.push(esc);
                }
            }
            b'.' => {
                let mut count = 0usize;
                while buf.get(i) == Some(&b'.') {
                    i += 1;
                    count += absorb_count(buf, &mut i);
                }
                if count > 1 {
                    out.extend_from_slice(format!(".{{{count}}}").as_bytes());
                } else {
                    out.push(b'.');
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    out
}

/// Absorb an exact `{k}` count (digits only, `k ≥ 1`) at `*i`, advancing
/// past it. Returns the repeat contribution of the atom just read: `k` when
/// a count was absorbed, 1 otherwise.
fn absorb_count(buf: &[u8], i: &mut usize) -> usize {
    if buf.get(*i) != Some(&b'{') {
        return 1;
    }
    let rest = &buf[*i + 1..];
    let Some(close) = rest.iter().position(|&b| b == b'}') else {
        return 1;
    };
    let digits = &rest[..close];
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return 1;
    }
    let k = match std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
    {
        Some(k) if k > 0 => k,
        _ => return 1,
    };
    *i += close + 2;
    k
}

/// Delete every literal `{1}` and `{1,1}`; both denote exactly-one-repeat.
fn strip_unit_quantifiers(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    let mut i = 0;
    while i < buf.len() {
        if buf[i..].starts_with(b"{1}") {
            i += 3;
        } else if buf[i..].starts_with(b"{1,1}") {
            i += 5;
        } else {
            out.push(buf[i]);
            i += 1;
        }
    }
    out
}

/// Rewrite `(b)` to `b` when the interior is one byte that is not a
/// backslash. Escapes, empty groups and longer interiors are left alone.
fn unwrap_trivial_groups(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    let mut i = 0;
    while i < buf.len() {
        if buf[i] == b'(' && i + 2 < buf.len() && buf[i + 2] == b')' && buf[i + 1] != b'\\' {
            out.push(buf[i + 1]);
            i += 3;
        } else {
            out.push(buf[i]);
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(s: &str) -> String {
        String::from_utf8(normalize(s.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn class_spans_are_canonicalized() {
        assert_eq!(fixed("[dcba]"), "[a-d]");
        assert_eq!(fixed("x[d-a]y"), "x[a-d]y");
    }

    #[test]
    fn unterminated_bracket_passes_through() {
        assert_eq!(fixed("x[ab"), "x[ab");
    }

    #[test]
    fn escape_runs_collapse() {
        assert_eq!(fixed(r"\d\d\d"), r"\d{3}");
        assert_eq!(fixed(r"\d\d\s\s"), r"\d{2}\s{2}");
    }

    #[test]
    fn single_escape_survives() {
        assert_eq!(fixed(r"\d"), r"\d");
        assert_eq!(fixed(r"\s\d"), r"\s\d");
    }

    #[test]
    fn dot_runs_collapse() {
        assert_eq!(fixed("..."), ".{3}");
        assert_eq!(fixed("a.b"), "a.b");
    }

    #[test]
    fn counted_atoms_keep_folding() {
        assert_eq!(fixed(r"\d{2}\d"), r"\d{3}");
        assert_eq!(fixed(r"\d{2}\d{3}"), r"\d{5}");
        assert_eq!(fixed(".{2}."), ".{3}");
    }

    #[test]
    fn range_and_optional_quantifiers_end_a_run() {
        assert_eq!(fixed(r"\d{2,3}\d"), r"\d{2,3}\d");
        assert_eq!(fixed(r"\d?\d"), r"\d?\d");
    }

    #[test]
    fn literal_runs_do_not_collapse() {
        assert_eq!(fixed("aaa"), "aaa");
    }

    #[test]
    fn unit_quantifiers_are_stripped() {
        assert_eq!(fixed("a{1}b{1,1}"), "ab");
        assert_eq!(fixed("a{11}"), "a{11}");
        assert_eq!(fixed("a{12}"), "a{12}");
    }

    #[test]
    fn trivial_group_is_unwrapped() {
        assert_eq!(fixed("(x)y"), "xy");
    }

    #[test]
    fn escape_group_is_kept() {
        assert_eq!(fixed(r"(\d)"), r"(\d)");
    }

    #[test]
    fn wider_group_is_kept() {
        assert_eq!(fixed("(ab)"), "(ab)");
    }

    #[test]
    fn empty_group_is_kept() {
        assert_eq!(fixed("()"), "()");
    }

    #[test]
    fn nested_groups_take_multiple_cycles() {
        assert_eq!(fixed("((a))"), "a");
        assert_eq!(fixed("(((a)))"), "a");
    }

    #[test]
    fn passes_compose_within_one_call() {
        // Class canonicalization exposes a unit quantifier for removal.
        assert_eq!(fixed("[aa]{1,1}"), "[a]");
    }

    #[test]
    fn empty_text_is_a_fixed_point() {
        assert_eq!(fixed(""), "");
    }

    #[test]
    fn normalized_text_is_idempotent() {
        for input in [
            "aaa",
            r"\d\d\d\d",
            "[c-aabdf]",
            "(x)(ab)...",
            r"^[0-9]\s?$",
            "((a)){1}[zyx]",
        ] {
            let once = normalize(input.as_bytes()).unwrap();
            let twice = normalize(&once).unwrap();
            assert_eq!(twice, once, "not idempotent for {input:?}");
        }
    }
}
