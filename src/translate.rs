//! Line-by-line translation of a note sheet into player directives.

use std::fmt;

use crate::error::{LineError, NoteError};
use crate::freq;
use crate::note::NoteToken;

/// Translator configuration.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Duration of a single beat in milliseconds.
    pub beat_ms: u32,
    /// Signed octave shift applied to every pitched note before lookup.
    pub octave_shift: i32,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            beat_ms: 100,
            octave_shift: 0,
        }
    }
}

/// One instruction for the tone player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Play `freq` Hz for `duration_ms` milliseconds.
    Tone { freq: u16, duration_ms: u32 },
    /// Stay silent for `duration_ms` milliseconds.
    Rest { duration_ms: u32 },
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Tone { freq, duration_ms } => write!(f, ":t {} {}", freq, duration_ms),
            Directive::Rest { duration_ms } => write!(f, "_<{}>", duration_ms),
        }
    }
}

fn parse_beats(field: &str) -> Result<u32, NoteError> {
    match field.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(NoteError::BeatCount(field.to_string())),
    }
}

fn translate_line(line: &str, opts: &Options) -> Result<Directive, NoteError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[token, beats] = fields.as_slice() else {
        return Err(NoteError::FieldCount(fields.len()));
    };

    let beats = parse_beats(beats)?;
    let duration_ms = beats.checked_mul(opts.beat_ms).ok_or(NoteError::DurationOverflow {
        beats,
        beat_ms: opts.beat_ms,
    })?;

    match NoteToken::parse(token)? {
        NoteToken::Rest => Ok(Directive::Rest { duration_ms }),
        NoteToken::Pitch { class, octave } => {
            let freq = freq::resolve(class, octave + opts.octave_shift)?;
            Ok(Directive::Tone { freq, duration_ms })
        }
    }
}

/// Translate a whole sheet into directives, in input order.
///
/// Every line must hold exactly two whitespace-separated fields: a note
/// token and a beat count. Errors carry the 1-based line number.
pub fn translate(input: &str, opts: &Options) -> Result<Vec<Directive>, LineError> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            translate_line(line, opts).map_err(|source| LineError {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Join directives with single spaces and wrap the payload in one pair of
/// brackets, ready to hand to the player.
pub fn render(directives: &[Directive]) -> String {
    let body = directives
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", body)
}
