//! Interactive menu loop for building a pattern.
//!
//! One prompt/response cycle per builder step: show the current pattern,
//! print the menu, read a numeric choice and any arguments, apply the
//! command, and report the diagnostic on failure. End-of-input at the
//! choice prompt ends the session; end-of-input at an argument prompt
//! abandons that step.
//!
//! The loop is generic over [`BufRead`]/[`Write`] so tests can drive it
//! with in-memory streams.

use std::io::{BufRead, Write};

use anyhow::Result;
use itertools::Itertools;

use crate::command::{self, Command};
use crate::pattern::{PRESETS, Pattern};

const MENU: &str = "\
REGEX BUILDER MENU:
 1  One exact character
 2  Range of characters [a-z]
 3  Any digit (\\d)
 4  Any whitespace (\\s)
 5  Any character (.)
 6  Repeat last exactly n times
 7  Repeat last between m and n times
 8  Make last optional
 9  Group (...)
10  Alternation a|b|c
11  Anchor ^ or $
12  Common cybersecurity presets
13  Clear pattern
 0  Quit
";

/// Caller-enforced ceiling on repeat counts.
const MAX_REPEAT: u32 = 100;

/// Run the builder loop with a fresh default-capacity pattern.
pub fn run(input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    run_with(input, output, Pattern::new())
}

/// Run the builder loop over an existing pattern state.
pub fn run_with(
    input: &mut impl BufRead,
    output: &mut impl Write,
    mut pattern: Pattern,
) -> Result<()> {
    loop {
        show_pattern(output, &pattern)?;
        output.write_all(MENU.as_bytes())?;
        let Some(choice) = prompt_int(input, output, "Choice: ", 0, 13)? else {
            return Ok(());
        };
        if choice == 0 {
            return Ok(());
        }
        let Some(cmd) = build_command(choice, input, output)? else {
            continue;
        };
        if let Err(err) = command::apply(&mut pattern, &cmd) {
            writeln!(output, "[!] {err}")?;
        }
    }
}

/// Collect the arguments for menu `choice` (already bounded to 1–13) and
/// build the command. `None` means the step was abandoned: end-of-input at
/// an argument prompt, an invalid anchor character, or backing out of the
/// preset submenu.
fn build_command(
    choice: u32,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<Command>> {
    let cmd = match choice {
        1 => match prompt_byte(input, output, "Character: ")? {
            Some(c) => Command::Literal(c),
            None => return Ok(None),
        },
        2 => match prompt_line(input, output, "Range (e.g. a-z): ")? {
            Some(s) => Command::Class(s),
            None => return Ok(None),
        },
        3 => Command::Raw("\\d".to_string()),
        4 => Command::Raw("\\s".to_string()),
        5 => Command::Raw(".".to_string()),
        6 => match prompt_int(input, output, "n = ", 1, MAX_REPEAT)? {
            Some(n) => Command::Exact(n),
            None => return Ok(None),
        },
        7 => {
            let Some(m) = prompt_int(input, output, "m = ", 1, MAX_REPEAT)? else {
                return Ok(None);
            };
            let Some(n) = prompt_int(input, output, "n = ", m, MAX_REPEAT)? else {
                return Ok(None);
            };
            Command::Between(m, n)
        }
        8 => Command::Optional,
        9 => match prompt_line(input, output, "Group content: ")? {
            Some(s) => Command::Group(s),
            None => return Ok(None),
        },
        10 => match prompt_line(input, output, "Alternatives (a|b|c): ")? {
            Some(s) => Command::Alternation(s),
            None => return Ok(None),
        },
        11 => match prompt_byte(input, output, "^ or $: ")? {
            Some(a @ (b'^' | b'$')) => Command::Anchor(a),
            _ => return Ok(None),
        },
        12 => {
            show_presets(output)?;
            match prompt_int(input, output, "Preset #: ", 0, 6)? {
                Some(0) | None => return Ok(None),
                Some(id) => Command::Preset(id as u8),
            }
        }
        13 => Command::Reset,
        _ => return Ok(None),
    };
    Ok(Some(cmd))
}

fn show_pattern(output: &mut impl Write, pattern: &Pattern) -> Result<()> {
    if pattern.is_empty() {
        writeln!(output, "\nCurrent pattern: /(empty)/\n")?;
    } else {
        writeln!(output, "\nCurrent pattern: /{pattern}/\n")?;
    }
    Ok(())
}

fn show_presets(output: &mut impl Write) -> Result<()> {
    writeln!(output, "Common cybersecurity presets:")?;
    for (id, preset) in PRESETS.entries().sorted_by_key(|(id, _)| **id) {
        writeln!(output, " {id}  {}", preset.name)?;
    }
    writeln!(output, " 0  Back")?;
    Ok(())
}

/// Prompt for one line. `None` at end of input.
fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt for a single character, taken as the first byte of the line.
/// Empty lines re-prompt.
fn prompt_byte(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Option<u8>> {
    loop {
        let Some(line) = prompt_line(input, output, prompt)? else {
            return Ok(None);
        };
        if let Some(b) = line.bytes().next() {
            return Ok(Some(b));
        }
    }
}

/// Prompt for an integer in `lo..=hi`, re-prompting until one parses.
fn prompt_int(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    lo: u32,
    hi: u32,
) -> Result<Option<u32>> {
    loop {
        let Some(line) = prompt_line(input, output, prompt)? else {
            return Ok(None);
        };
        match line.trim().parse::<u32>() {
            Ok(n) if (lo..=hi).contains(&n) => return Ok(Some(n)),
            _ => writeln!(output, "[!] Enter a number between {lo} and {hi}")?,
        }
    }
}
