//! Edge case tests for chatframe
//!
//! Boundary conditions around entry splitting, author detection and
//! timestamp resolution that real exports run into.

use chatframe::parse_transcript;
use chatframe::parsing::{EntrySplitter, split_entries};
use chatframe::record::NOTIFICATION_LABEL;

// =========================================================================
// Unicode and special character tests
// =========================================================================

#[test]
fn test_unicode_authors_and_messages() {
    let text = "\
1/3/2024, 10:00 - Иван: Привет мир!
1/3/2024, 10:01 - 田中太郎: こんにちは世界！
1/3/2024, 10:02 - محمد: مرحبا بالعالم
1/3/2024, 10:03 - Zoë 🎉: 🔥💀 emoji
";
    let records = parse_transcript(text).unwrap();

    let pairs: Vec<(&str, &str)> = records.iter().map(|r| (r.user(), r.message())).collect();
    assert_eq!(
        pairs,
        vec![
            ("Иван", "Привет мир!"),
            ("田中太郎", "こんにちは世界！"),
            ("محمد", "مرحبا بالعالم"),
            ("Zoë 🎉", "🔥💀 emoji"),
        ]
    );
}

#[test]
fn test_narrow_no_break_space_before_dash() {
    // Newer exports put U+202F between the time and the dash
    let text = "12/11/2025, 21:55\u{202F}- Alice: Hi\n12/11/2025, 21:56\u{202F}- Bob: Yo\n";
    let records = parse_transcript(text).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].raw_timestamp(), "12/11/2025, 21:55\u{202F}- ");
    assert_eq!(records[1].minute(), 56);
}

#[test]
fn test_crlf_line_endings() {
    let text = "12/11/2025, 21:55 - Alice: Hi\r\n12/11/2025, 21:56 - Bob: two\r\nlines\r\n";
    let records = parse_transcript(text).unwrap();

    assert_eq!(records[0].message(), "Hi");
    assert_eq!(records[1].message(), "two\r\nlines");
}

#[test]
fn test_message_with_csv_sensitive_characters() {
    let text = "12/11/2025, 21:55 - Alice: a, b; \"quoted\"\n";
    let records = parse_transcript(text).unwrap();
    assert_eq!(records[0].message(), "a, b; \"quoted\"");
}

// =========================================================================
// Splitting
// =========================================================================

#[test]
fn test_preamble_before_first_boundary_is_dropped() {
    let text = "Exported chat with Alice\n\n12/11/2025, 21:55 - Alice: Hi\n";
    let records = parse_transcript(text).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message(), "Hi");
}

#[test]
fn test_no_trailing_newline() {
    let records = parse_transcript("12/11/2025, 21:55 - Alice: last words").unwrap();
    assert_eq!(records[0].message(), "last words");
}

#[test]
fn test_empty_bodies() {
    let text = "12/11/2025, 21:55 - 12/11/2025, 21:56 - Bob: after\n";
    let records = parse_transcript(text).unwrap();

    assert_eq!(records.len(), 2);
    assert!(records[0].is_notification());
    assert_eq!(records[0].message(), "");
    assert_eq!(records[1].author(), Some("Bob"));
}

#[test]
fn test_timestamp_quoted_inside_message_starts_new_entry() {
    // The splitter is text-based, so a quoted boundary is indistinguishable
    let text = "12/11/2025, 21:55 - Alice: see 1/1/2020, 9:00 - the log\n";
    let entries = split_entries(text);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].body_text, "Alice: see ");
    assert_eq!(entries[1].body_text, "the log\n");
}

#[test]
fn test_quoted_non_ascii_timestamp_stays_in_message() {
    let text = "12/11/2025, 21:55 - Alice: Hi\n12/11/2025, 21:56 - Bob: ١٢/١١/٢٠٢٥, ٢١:٥٥ - done\n";
    let records = parse_transcript(text).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].author(), Some("Bob"));
    assert_eq!(records[1].message(), "١٢/١١/٢٠٢٥, ٢١:٥٥ - done");
}

#[test]
fn test_bracketed_ios_format_is_not_recognized() {
    let text = "[1/15/24, 10:30:45 AM] Alice: Hello\n";
    assert!(parse_transcript(text).unwrap().is_empty());
}

#[test]
fn test_splitter_reuse_is_stateless() {
    let splitter = EntrySplitter::new();
    let text = "12/11/2025, 21:55 - Alice: Hi\n";

    assert_eq!(splitter.split(text), splitter.split(text));
    assert!(splitter.split("").is_empty());
}

// =========================================================================
// Author detection
// =========================================================================

#[test]
fn test_time_in_notification_is_not_an_author() {
    let records = parse_transcript("12/11/2025, 21:55 - Meeting moved to 10:30\n").unwrap();

    assert!(records[0].is_notification());
    assert_eq!(records[0].user(), NOTIFICATION_LABEL);
    assert_eq!(records[0].message(), "Meeting moved to 10:30");
}

#[test]
fn test_only_first_separator_splits() {
    let records = parse_transcript("12/11/2025, 21:55 - Alice: note: 10:30: ok\n").unwrap();

    assert_eq!(records[0].author(), Some("Alice"));
    assert_eq!(records[0].message(), "note: 10:30: ok");
}

#[test]
fn test_participant_named_like_the_notification_label() {
    let records = parse_transcript("12/11/2025, 21:55 - group_notification: hi\n").unwrap();

    // Authored, even though the user column reads the same
    assert!(!records[0].is_notification());
    assert_eq!(records[0].user(), NOTIFICATION_LABEL);
}

// =========================================================================
// Timestamp edges
// =========================================================================

#[test]
fn test_leap_day() {
    let records = parse_transcript("29/2/2024, 0:00 - Alice: leap\n").unwrap();
    assert_eq!(records[0].day_name(), "Thursday");
    assert_eq!(records[0].hour_bucket(), "00-1");
}

#[test]
fn test_leap_day_in_common_year_fails() {
    let err = parse_transcript("29/2/2023, 0:00 - Alice: no\n").unwrap_err();
    assert!(err.is_malformed_timestamp());
}

#[test]
fn test_day_month_order() {
    // 3/4 is the 3rd of April, never March 4th
    let records = parse_transcript("3/4/2024, 12:00 - Alice: hi\n").unwrap();
    assert_eq!(records[0].month_number(), 4);
    assert_eq!(records[0].month_name(), "April");
    assert_eq!(records[0].day_of_month(), 3);
}

#[test]
fn test_month_day_order_export_is_rejected_when_impossible() {
    let err = parse_transcript("1/15/2024, 12:00 - Alice: US order\n").unwrap_err();
    assert!(err.is_malformed_timestamp());
}

#[test]
fn test_last_minute_of_day() {
    let records = parse_transcript("31/12/1999, 23:59 - Alice: party\n").unwrap();
    assert_eq!(records[0].hour_bucket(), "23-00");
    assert_eq!(records[0].year(), 1999);
}

#[test]
fn test_two_digit_year_window_edges() {
    let records = parse_transcript("1/1/68, 12:00 - A: x\n1/1/00, 12:00 - B: y\n").unwrap();
    assert_eq!(records[0].year(), 2068);
    assert_eq!(records[1].year(), 2000);

    let records = parse_transcript("1/1/69, 12:00 - A: x\n1/1/99, 12:00 - B: y\n").unwrap();
    assert_eq!(records[0].year(), 1969);
    assert_eq!(records[1].year(), 1999);
}

#[test]
fn test_large_transcript() {
    let text: String = (0..5_000)
        .map(|i| format!("1/1/2024, {}:{:02} - User{}: message {i}\n", (i / 60) % 24, i % 60, i % 7))
        .collect();
    let records = parse_transcript(&text).unwrap();

    assert_eq!(records.len(), 5_000);
    assert_eq!(records[4_999].message(), "message 4999");
}
