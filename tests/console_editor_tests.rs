//! Line editor tests

use soc_demo_app::console::editor::{LineEditor, LINE_SIZE};

#[test]
fn test_accumulates_bytes_verbatim() {
    let mut editor = LineEditor::new();
    let mut echo = String::new();

    for &b in b"dwa" {
        assert!(!editor.feed(b, &mut echo));
    }

    assert_eq!(editor.pending(), 3);
    assert_eq!(echo, "dwa");
}

#[test]
fn test_terminator_completes_line() {
    let mut editor = LineEditor::new();
    let mut echo = String::new();

    for &b in b"dwa" {
        editor.feed(b, &mut echo);
    }
    assert!(editor.feed(b'\n', &mut echo));

    assert_eq!(editor.line(), "dwa");
    assert_eq!(echo, "dwa\n");
    assert!(editor.is_empty());
}

#[test]
fn test_cr_completes_like_lf() {
    let mut editor = LineEditor::new();
    let mut echo = String::new();

    editor.feed(b'x', &mut echo);
    assert!(editor.feed(b'\r', &mut echo));
    assert_eq!(editor.line(), "x");
}

#[test]
fn test_terminator_on_empty_buffer_yields_empty_line() {
    let mut editor = LineEditor::new();
    let mut echo = String::new();

    assert!(editor.feed(b'\n', &mut echo));
    assert_eq!(editor.line(), "");
    assert_eq!(echo, "\n");
}

#[test]
fn test_backspace_at_start_is_noop() {
    let mut editor = LineEditor::new();
    let mut echo = String::new();

    assert!(!editor.feed(0x08, &mut echo));
    assert!(!editor.feed(0x7F, &mut echo));

    assert!(editor.is_empty());
    assert_eq!(echo, "", "no erase sequence without pending input");
}

#[test]
fn test_backspace_erases_one_byte() {
    let mut editor = LineEditor::new();
    let mut echo = String::new();

    editor.feed(b'h', &mut echo);
    editor.feed(b'e', &mut echo);
    editor.feed(0x08, &mut echo);

    assert_eq!(editor.pending(), 1);
    assert_eq!(echo, "he\x08 \x08");

    editor.feed(b'\n', &mut echo);
    assert_eq!(editor.line(), "h");
}

#[test]
fn test_del_acts_as_backspace() {
    let mut editor = LineEditor::new();
    let mut echo = String::new();

    editor.feed(b'a', &mut echo);
    editor.feed(b'b', &mut echo);
    editor.feed(0x7F, &mut echo);
    editor.feed(b'\n', &mut echo);

    assert_eq!(editor.line(), "a");
}

#[test]
fn test_bell_ignored() {
    let mut editor = LineEditor::new();
    let mut echo = String::new();

    editor.feed(b'a', &mut echo);
    assert!(!editor.feed(0x07, &mut echo));

    assert_eq!(editor.pending(), 1);
    assert_eq!(echo, "a", "bell must not echo");
}

#[test]
fn test_overflow_truncates_silently() {
    let mut editor = LineEditor::new();
    let mut echo = String::new();

    // 70 printable bytes against a 63-byte line limit
    let input: Vec<u8> = (0..70u8).map(|i| b'a' + (i % 26)).collect();
    for &b in &input {
        assert!(!editor.feed(b, &mut echo));
    }

    // Only the accepted bytes were echoed
    assert_eq!(echo.len(), LINE_SIZE - 1);

    editor.feed(b'\n', &mut echo);
    let expected: String = input[..LINE_SIZE - 1].iter().map(|&b| b as char).collect();
    assert_eq!(editor.line(), expected);
}

#[test]
fn test_buffer_reusable_after_completion() {
    let mut editor = LineEditor::new();
    let mut echo = String::new();

    for &b in b"help\n" {
        editor.feed(b, &mut echo);
    }
    assert_eq!(editor.line(), "help");

    for &b in b"dr\n" {
        editor.feed(b, &mut echo);
    }
    assert_eq!(editor.line(), "dr");
}
