//! Session context supplied by the surrounding bot runtime.

/// Read-only view of the runtime state a classifier needs.
///
/// The engine never mutates the session; it reads it once per matched
/// field that needs it and never caches a read across lines — the
/// nickname can change between lines when a NICK event is processed
/// elsewhere in the system.
///
/// The membership predicate reflects the *main* logical connection's view
/// of which channels it has joined. The surrounding system may run several
/// logical identities against the same channels; only the main identity's
/// membership gates channel-scoped events.
pub trait Session {
    /// The bot's nickname as of this line.
    fn current_nickname(&self) -> String;

    /// Whether the main logical connection considers itself joined to
    /// `channel`.
    fn is_relevant_channel(&self, channel: &str) -> bool;

    /// Diagnostic log sink. Every matched class logs the raw line here
    /// before any richer handling runs.
    fn log(&self, message: &str);
}

/// RFC 1459 case-folded nickname comparison.
///
/// IRC nicknames compare case-insensitively, with `[]\~` folding to
/// `{}|^`. Used for the self-origin filter.
pub fn nick_eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.chars().zip(b.chars()).all(|(x, y)| fold(x) == fold(y))
}

fn fold(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        _ => c.to_ascii_lowercase(),
    }
}
