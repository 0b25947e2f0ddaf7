//! Translate plain-text note sheets into tone-player directives.

pub mod error;
pub mod freq;
pub mod note;
pub mod translate;

pub use error::{LineError, NoteError};
pub use note::{NoteToken, PitchClass};
pub use translate::{render, translate, Directive, Options};
