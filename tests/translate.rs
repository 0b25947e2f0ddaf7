use std::fs;

use pretty_assertions::assert_eq;

use tonec::{render, translate, Directive, NoteError, Options};

fn opts(beat_ms: u32, octave_shift: i32) -> Options {
    Options {
        beat_ms,
        octave_shift,
    }
}

#[test]
fn two_line_sheet_renders_bracketed_payload() {
    // Round-trip through a real file, the way the binary reads its input.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "A4 1\nB4 1\n").unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let directives = translate(&text, &Options::default()).unwrap();
    assert_eq!(render(&directives), "[:t 440 100 :t 494 100]");
}

#[test]
fn a4_for_two_beats() {
    let directives = translate("A4 2\n", &opts(100, 0)).unwrap();
    assert_eq!(
        directives,
        vec![Directive::Tone {
            freq: 440,
            duration_ms: 200
        }]
    );
}

#[test]
fn sharp_note_uses_the_rounded_table_value() {
    let directives = translate("C#3 1\n", &opts(250, 0)).unwrap();
    assert_eq!(
        directives,
        vec![Directive::Tone {
            freq: 139,
            duration_ms: 250
        }]
    );
}

#[test]
fn rest_line_renders_rest_directive() {
    let directives = translate("_ 3\n", &opts(100, 0)).unwrap();
    assert_eq!(render(&directives), "[_<300>]");
}

#[test]
fn any_token_containing_underscore_is_a_rest() {
    for token in ["_", "___", "A_4", "_x"] {
        let directives = translate(&format!("{} 2\n", token), &opts(100, 0)).unwrap();
        assert_eq!(directives, vec![Directive::Rest { duration_ms: 200 }]);
    }
}

#[test]
fn octave_shift_down_resolves_one_octave_lower() {
    let directives = translate("C4 1\n", &opts(100, -1)).unwrap();
    assert_eq!(
        directives,
        vec![Directive::Tone {
            freq: 131,
            duration_ms: 100
        }]
    );
}

#[test]
fn mixed_sheet_keeps_input_order() {
    let text = "E2 1\n_ 2\nDb5 1\n";
    let directives = translate(text, &opts(100, 0)).unwrap();
    assert_eq!(render(&directives), "[:t 82 100 _<200> :t 554 100]");
}

#[test]
fn missing_beat_count_reports_the_line() {
    let err = translate("A4 1\nA4\nB4 1\n", &Options::default()).unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.source, NoteError::FieldCount(1));
    assert_eq!(err.to_string(), "line 2: expected `<note> <beats>`, found 1 field(s)");
}

#[test]
fn unknown_spelling_reports_the_token() {
    let err = translate("E#4 1\n", &Options::default()).unwrap_err();
    assert_eq!(err.source, NoteError::UnknownPitch("E#".to_string()));
}

#[test]
fn shift_out_of_the_table_is_fatal() {
    let err = translate("C8 1\n", &opts(100, 1)).unwrap_err();
    assert_eq!(err.source, NoteError::OctaveRange(9));

    let err = translate("C0 1\n", &opts(100, -1)).unwrap_err();
    assert_eq!(err.source, NoteError::OctaveRange(-1));
}

#[test]
fn malformed_token_length_is_fatal() {
    let err = translate("C 1\n", &Options::default()).unwrap_err();
    assert_eq!(err.source, NoteError::TokenLength("C".to_string()));
}

#[test]
fn zero_beats_is_fatal() {
    let err = translate("A4 0\n", &Options::default()).unwrap_err();
    assert_eq!(err.source, NoteError::BeatCount("0".to_string()));
}
