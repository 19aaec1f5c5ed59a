//! Author / message separation.
//!
//! An entry body either starts with `<author>: ` or is a system notification
//! ("Messages and calls are end-to-end encrypted", "X added Y", ...). The
//! author is everything before the *first* `": "` that follows at least one
//! character, so later colons stay in the message:
//!
//! | Body | Author | Message |
//! |------|--------|---------|
//! | `Alice: hello: world` | `Alice` | `hello: world` |
//! | `Meeting moved to 10:30` | - | `Meeting moved to 10:30` |
//! | `Bob created group "Test"` | - | `Bob created group "Test"` |

/// Separator between the author prefix and the message text.
pub const AUTHOR_SEPARATOR: &str = ": ";

/// Result of classifying an entry body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind<'a> {
    /// A message written by a participant.
    Authored {
        /// Text before the first `": "`
        author: &'a str,
        /// Remainder after the separator, normalized
        message: &'a str,
    },
    /// A system notification without an author.
    Notification {
        /// The whole body, normalized
        message: &'a str,
    },
}

impl<'a> EntryKind<'a> {
    /// The author, if any.
    pub fn author(&self) -> Option<&'a str> {
        match self {
            EntryKind::Authored { author, .. } => Some(*author),
            EntryKind::Notification { .. } => None,
        }
    }

    /// The message text.
    pub fn message(&self) -> &'a str {
        match self {
            EntryKind::Authored { message, .. } | EntryKind::Notification { message } => *message,
        }
    }
}

/// Classifies `body` as authored message or system notification.
///
/// # Example
///
/// ```rust
/// use chatframe::parsing::classify_body;
///
/// let kind = classify_body("Alice: see you at 10:30: sharp\n");
/// assert_eq!(kind.author(), Some("Alice"));
/// assert_eq!(kind.message(), "see you at 10:30: sharp");
///
/// let kind = classify_body("Bob added Carol\n");
/// assert_eq!(kind.author(), None);
/// assert_eq!(kind.message(), "Bob added Carol");
/// ```
pub fn classify_body(body: &str) -> EntryKind<'_> {
    match find_author_end(body) {
        Some(end) => EntryKind::Authored {
            author: &body[..end],
            message: normalize_message(&body[end + AUTHOR_SEPARATOR.len()..]),
        },
        None => EntryKind::Notification {
            message: normalize_message(body),
        },
    }
}

/// Byte index of the first `": "` that leaves a non-empty author before it.
fn find_author_end(body: &str) -> Option<usize> {
    // The author needs at least one character, so the scan starts after it.
    let first_len = body.chars().next()?.len_utf8();
    body[first_len..]
        .find(AUTHOR_SEPARATOR)
        .map(|idx| idx + first_len)
}

/// Strips the line break(s) the splitter leaves between entries.
fn normalize_message(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authored_message() {
        let kind = classify_body("Alice: Hi there\n");
        assert_eq!(
            kind,
            EntryKind::Authored {
                author: "Alice",
                message: "Hi there"
            }
        );
    }

    #[test]
    fn test_first_colon_space_wins() {
        let kind = classify_body("Alice: hello: world");
        assert_eq!(kind.author(), Some("Alice"));
        assert_eq!(kind.message(), "hello: world");
    }

    #[test]
    fn test_many_embedded_colons() {
        let kind = classify_body("Alice: a: b: c:: d :e\n");
        assert_eq!(kind.author(), Some("Alice"));
        assert_eq!(kind.message(), "a: b: c:: d :e");
    }

    #[test]
    fn test_colon_without_space_is_not_a_prefix() {
        let kind = classify_body("Meeting moved to 10:30\n");
        assert_eq!(kind.author(), None);
        assert_eq!(kind.message(), "Meeting moved to 10:30");
    }

    #[test]
    fn test_system_notifications() {
        for body in [
            "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.\n",
            "Bob created group \"Test\"\n",
            "Alice added Bob\n",
            "You joined using this group's invite link\n",
        ] {
            let kind = classify_body(body);
            assert_eq!(kind.author(), None, "{body:?}");
            assert_eq!(kind.message(), body.trim_end());
        }
    }

    #[test]
    fn test_author_with_punctuation_and_emoji() {
        let kind = classify_body("Dr. O'Brien 🎉 (work): on my way");
        assert_eq!(kind.author(), Some("Dr. O'Brien 🎉 (work)"));
        assert_eq!(kind.message(), "on my way");
    }

    #[test]
    fn test_phone_number_author() {
        let kind = classify_body("+1 555-0100: hello");
        assert_eq!(kind.author(), Some("+1 555-0100"));
    }

    #[test]
    fn test_author_must_be_non_empty() {
        // A leading separator cannot produce an empty author
        let kind = classify_body(": x: y");
        assert_eq!(kind.author(), Some(": x"));
        assert_eq!(kind.message(), "y");

        let kind = classify_body(": only");
        assert_eq!(kind.author(), None);
        assert_eq!(kind.message(), ": only");
    }

    #[test]
    fn test_multibyte_first_char() {
        let kind = classify_body("Ж: привет");
        assert_eq!(kind.author(), Some("Ж"));
        assert_eq!(kind.message(), "привет");
    }

    #[test]
    fn test_empty_message_after_author() {
        let kind = classify_body("Alice: \n");
        assert_eq!(kind.author(), Some("Alice"));
        assert_eq!(kind.message(), "");
    }

    #[test]
    fn test_empty_body() {
        let kind = classify_body("");
        assert_eq!(kind, EntryKind::Notification { message: "" });
    }

    #[test]
    fn test_multiline_message_keeps_inner_breaks() {
        let kind = classify_body("Alice: first line\r\nsecond: line\r\n");
        assert_eq!(kind.author(), Some("Alice"));
        assert_eq!(kind.message(), "first line\r\nsecond: line");
    }

    #[test]
    fn test_media_placeholder_is_authored() {
        let kind = classify_body("Bob: <Media omitted>\n");
        assert_eq!(kind.author(), Some("Bob"));
        assert_eq!(kind.message(), "<Media omitted>");
    }
}
