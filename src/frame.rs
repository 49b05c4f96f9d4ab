//! Generic IRC line framing.
//!
//! Every raw line shares one outer shape regardless of which classifier
//! ends up accepting it: an optional `:source` prefix, a verb (command
//! word or three-digit numeric), and space-separated parameters where a
//! leading `:` marks the trailing free-text parameter. This module parses
//! that frame once per line with nom; the classifiers then match against
//! the structured [`LineFrame`] instead of re-scanning the raw text.

use nom::{
    bytes::complete::take_while1, character::complete::char, combinator::opt,
    sequence::preceded, IResult,
};

use crate::error::FrameError;

/// The CTCP delimiter byte wrapping out-of-band requests inside message text.
pub const CTCP_DELIM: char = '\u{1}';

/// One raw line, parsed into its protocol frame.
///
/// Borrows from the caller's line; nothing here is retained after
/// dispatch returns.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFrame<'a> {
    /// Source prefix without the leading `:` (`nick!user@host` or a server
    /// name), if the line carried one.
    pub source: Option<&'a str>,
    /// The verb: a command word like `PRIVMSG` or a numeric like `353`.
    pub verb: &'a str,
    /// Parameters in order. The trailing parameter, if present, is last
    /// and may contain spaces.
    pub params: Vec<&'a str>,
    /// The line as received, with line terminators stripped.
    pub raw: &'a str,
}

fn source(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

fn verb(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric())(input)
}

impl<'a> LineFrame<'a> {
    /// Parse a single raw line into a frame.
    ///
    /// Accepts lines with or without trailing `\r\n`. Returns an error
    /// only when the line cannot carry any message at all (empty, or no
    /// verb); the router treats that as unhandled traffic, not a fault.
    pub fn parse(line: &'a str) -> Result<LineFrame<'a>, FrameError> {
        let raw = line.trim_end_matches(['\r', '\n']);
        if raw.is_empty() {
            return Err(FrameError::Empty);
        }

        let (rest, source) = opt(source)(raw).unwrap_or((raw, None));
        let rest = rest.strip_prefix(' ').unwrap_or(rest);
        let (mut rest, verb) = verb(rest).map_err(|_| FrameError::MissingVerb)?;

        let mut params = Vec::new();
        while let Some(after_space) = rest.strip_prefix(' ') {
            rest = after_space.trim_start_matches(' ');
            if let Some(trailing) = rest.strip_prefix(':') {
                params.push(trailing);
                rest = "";
                break;
            }
            let end = rest.find(' ').unwrap_or(rest.len());
            if end > 0 {
                params.push(&rest[..end]);
            }
            rest = &rest[end..];
        }

        Ok(LineFrame {
            source,
            verb,
            params,
            raw,
        })
    }

    /// The nickname portion of the source prefix.
    ///
    /// For a `nick!user@host` prefix this is `nick`; for a bare server
    /// name it is the whole name. `None` when the line had no prefix.
    pub fn sender(&self) -> Option<&'a str> {
        let src = self.source?;
        src.split(['!', '@']).next()
    }

    /// Parameter by position, if present.
    pub fn param(&self, n: usize) -> Option<&'a str> {
        self.params.get(n).copied()
    }

    /// The trailing parameter (last in the list), if any.
    pub fn trailing(&self) -> Option<&'a str> {
        self.params.last().copied()
    }

    /// The first parameter naming a channel (`#`-prefixed token).
    pub fn channel_param(&self) -> Option<&'a str> {
        self.params.iter().copied().find(|p| p.starts_with('#'))
    }

    /// The verb as a three-digit numeric reply code, if it is one.
    pub fn numeric(&self) -> Option<u16> {
        if self.verb.len() != 3 || !self.verb.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.verb.parse().ok()
    }
}

/// Split a CTCP-wrapped payload into keyword and argument text.
///
/// Returns `None` unless the text is fully delimited on both ends. A
/// keyword with no arguments yields an empty argument string.
pub fn ctcp_payload(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix(CTCP_DELIM)?.strip_suffix(CTCP_DELIM)?;
    match inner.split_once(' ') {
        Some((keyword, args)) => Some((keyword, args)),
        None => Some((inner, "")),
    }
}
