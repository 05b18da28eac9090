//! Character-level rewrites of double-quoted string spans.
//!
//! Each repair walks the text once with a three-state tracker (outside a
//! string, inside a string, inside a string right after a backslash) and
//! only touches characters whose position it can classify. Text outside
//! string spans is never rewritten, except that stray control characters are
//! dropped by [`strip_control_characters`].

/// Characters that may follow a backslash in a strict JSON string.
const ESCAPE_INTRODUCERS: [char; 9] = ['"', '\\', '/', 'b', 'f', 'n', 'r', 't', 'u'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanState {
    Outside,
    InString,
    AfterBackslash,
}

#[derive(Debug)]
struct SpanTracker {
    state: SpanState,
}

impl SpanTracker {
    fn new() -> Self {
        Self {
            state: SpanState::Outside,
        }
    }

    fn state(&self) -> SpanState {
        self.state
    }

    fn advance(&mut self, c: char) {
        self.state = match (self.state, c) {
            (SpanState::Outside, '"') => SpanState::InString,
            (SpanState::Outside, _) => SpanState::Outside,
            (SpanState::InString, '"') => SpanState::Outside,
            (SpanState::InString, '\\') => SpanState::AfterBackslash,
            (SpanState::InString, _) => SpanState::InString,
            (SpanState::AfterBackslash, _) => SpanState::InString,
        };
    }
}

/// Replaces raw line feeds and carriage returns inside string spans with
/// their two-character escapes.
pub(crate) fn escape_raw_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut tracker = SpanTracker::new();

    for c in text.chars() {
        match (tracker.state(), c) {
            (SpanState::InString, '\n') => out.push_str("\\n"),
            (SpanState::InString, '\r') => out.push_str("\\r"),
            _ => out.push(c),
        }
        tracker.advance(c);
    }

    out
}

/// Doubles every backslash inside a string span that does not start a valid
/// JSON escape, so `\sigma` becomes the literal text `\sigma`.
pub(crate) fn double_invalid_backslashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut tracker = SpanTracker::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if tracker.state() == SpanState::InString && c == '\\' {
            let starts_escape = chars
                .peek()
                .is_some_and(|next| ESCAPE_INTRODUCERS.contains(next));
            if !starts_escape {
                // The pair is a complete escape; stay inside the string.
                out.push_str("\\\\");
                continue;
            }
        }
        out.push(c);
        tracker.advance(c);
    }

    out
}

/// Removes or escapes every remaining control character (C0, DEL and C1).
///
/// Inside string spans line feed, carriage return and tab become escapes and
/// everything else is deleted. Outside string spans those three are legal
/// whitespace and are kept.
pub(crate) fn strip_control_characters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut tracker = SpanTracker::new();

    for c in text.chars() {
        if !c.is_control() {
            out.push(c);
            tracker.advance(c);
            continue;
        }

        match tracker.state() {
            SpanState::InString => match c {
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                _ => {}
            },
            SpanState::AfterBackslash => match c {
                '\n' => out.push('n'),
                '\r' => out.push('r'),
                '\t' => out.push('t'),
                // Close the dangling backslash as a literal one.
                _ => out.push('\\'),
            },
            SpanState::Outside => {
                if matches!(c, '\n' | '\r' | '\t') {
                    out.push(c);
                }
            }
        }
        tracker.advance(c);
    }

    out
}
