//! Note tokens as they appear in the note column of a sheet line.
//!
//! A pitch token is two characters (letter + octave digit, e.g. `D2`) or
//! three (letter + `#`/`b` + octave digit, e.g. `G#4`, `Ab3`). Any token
//! containing an underscore is a rest.

use std::str::FromStr;

use crate::error::NoteError;

/// The twelve chromatic pitch classes.
///
/// Flat spellings fold onto their sharp equivalents when parsing, so `Db4`
/// and `C#4` name the same pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// Semitone offset within the octave (C=0, B=11).
    pub fn semitone(self) -> usize {
        match self {
            PitchClass::C => 0,
            PitchClass::CSharp => 1,
            PitchClass::D => 2,
            PitchClass::DSharp => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::FSharp => 6,
            PitchClass::G => 7,
            PitchClass::GSharp => 8,
            PitchClass::A => 9,
            PitchClass::ASharp => 10,
            PitchClass::B => 11,
        }
    }
}

impl FromStr for PitchClass {
    type Err = NoteError;

    /// Accepts the 17 spellings of the tone table: naturals, the five
    /// sharps, and the five flats. `E#`, `Cb`, and lowercase letters are
    /// not spellings the table knows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(PitchClass::C),
            "C#" | "Db" => Ok(PitchClass::CSharp),
            "D" => Ok(PitchClass::D),
            "D#" | "Eb" => Ok(PitchClass::DSharp),
            "E" => Ok(PitchClass::E),
            "F" => Ok(PitchClass::F),
            "F#" | "Gb" => Ok(PitchClass::FSharp),
            "G" => Ok(PitchClass::G),
            "G#" | "Ab" => Ok(PitchClass::GSharp),
            "A" => Ok(PitchClass::A),
            "A#" | "Bb" => Ok(PitchClass::ASharp),
            "B" => Ok(PitchClass::B),
            _ => Err(NoteError::UnknownPitch(s.to_string())),
        }
    }
}

/// A single parsed note token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteToken {
    /// A pitched note with its written octave, before any shift.
    Pitch { class: PitchClass, octave: i32 },
    /// Silence for the line's duration.
    Rest,
}

impl NoteToken {
    /// Parse a raw token such as `D2`, `G#4`, `Ab3`, or `_`.
    ///
    /// The rest test runs first: any token containing `_` is a rest, no
    /// matter its length or other characters.
    pub fn parse(token: &str) -> Result<Self, NoteError> {
        if token.contains('_') {
            return Ok(NoteToken::Rest);
        }

        let chars: Vec<char> = token.chars().collect();
        let (name, octave_char) = match chars[..] {
            [letter, octave] => (letter.to_string(), octave),
            [letter, accidental, octave] => (format!("{}{}", letter, accidental), octave),
            _ => return Err(NoteError::TokenLength(token.to_string())),
        };

        let octave = octave_char
            .to_digit(10)
            .ok_or(NoteError::OctaveDigit(octave_char))? as i32;
        let class = name.parse::<PitchClass>()?;

        Ok(NoteToken::Pitch { class, octave })
    }
}
