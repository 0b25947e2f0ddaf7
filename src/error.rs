use thiserror::Error;

/// Errors produced while parsing a single note event.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("expected `<note> <beats>`, found {0} field(s)")]
    FieldCount(usize),

    #[error("note token `{0}` must be 2 or 3 characters")]
    TokenLength(String),

    #[error("unknown pitch spelling `{0}`")]
    UnknownPitch(String),

    #[error("octave `{0}` is not a digit")]
    OctaveDigit(char),

    #[error("octave {0} is outside the playable range 0-8")]
    OctaveRange(i32),

    #[error("beat count `{0}` is not a positive integer")]
    BeatCount(String),

    #[error("duration of {beats} beats at {beat_ms} ms per beat overflows")]
    DurationOverflow { beats: u32, beat_ms: u32 },
}

/// A note error tagged with the 1-based input line it occurred on.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub source: NoteError,
}
