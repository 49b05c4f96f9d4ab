//! The numeric-info classifier: three-digit informational replies.
//!
//! The frame is generic — an ignored source prefix, the code, the rest —
//! so matching is a table lookup on the code rather than an ordered walk.
//! Membership in the known-code table is what makes a line handled; only
//! RPL_TOPIC and RPL_NAMREPLY carry extra structure worth an event.

use std::collections::HashMap;

use tracing::warn;

use super::log_class;
use crate::error::ExtractError;
use crate::event::{Event, EventSink};
use crate::frame::LineFrame;
use crate::numeric::InfoReply;
use crate::perm::{parse_decorated, NamesPolicy};
use crate::session::Session;

/// Dispatcher over the known informational reply codes.
#[derive(Debug, Default)]
pub struct NumericInfoDispatcher {
    policy: NamesPolicy,
}

impl NumericInfoDispatcher {
    /// Dispatcher with the default names policy (implicit op enabled).
    pub fn new() -> NumericInfoDispatcher {
        NumericInfoDispatcher::default()
    }

    /// Dispatcher with an explicit name-list policy.
    pub fn with_policy(policy: NamesPolicy) -> NumericInfoDispatcher {
        NumericInfoDispatcher { policy }
    }

    /// Classify one raw line against the info-reply table.
    pub fn parse_and_handle(
        &self,
        line: &str,
        session: &dyn Session,
        sink: &dyn EventSink,
    ) -> bool {
        match LineFrame::parse(line) {
            Ok(frame) => self.dispatch(&frame, session, sink),
            Err(_) => false,
        }
    }

    pub(crate) fn dispatch(
        &self,
        frame: &LineFrame<'_>,
        session: &dyn Session,
        sink: &dyn EventSink,
    ) -> bool {
        if frame.source.is_none() {
            return false;
        }
        let Some(reply) = frame.numeric().and_then(InfoReply::from_code) else {
            return false;
        };

        log_class(session, class_name(reply), frame.raw);

        let enriched = match reply {
            InfoReply::RPL_TOPIC => topic_event(frame),
            InfoReply::RPL_NAMREPLY => names_event(frame, self.policy),
            _ => Ok(None),
        };

        match enriched {
            Ok(Some(event)) => {
                sink.publish(event);
                true
            }
            Ok(None) => true,
            Err(err) => {
                // Protocol-assumption violation: a matched code with
                // unusable field content is logged and reported
                // unhandled rather than allowed to panic the read loop.
                warn!(%err, raw = frame.raw, "field extraction failed");
                session.log(&format!("extraction failed ({err}): {}", frame.raw));
                false
            }
        }
    }
}

fn class_name(reply: InfoReply) -> &'static str {
    match reply {
        InfoReply::RPL_TOPIC => "topic-reply",
        InfoReply::RPL_NAMREPLY => "name-list",
        _ => "numeric-info",
    }
}

fn topic_event(frame: &LineFrame<'_>) -> Result<Option<Event>, ExtractError> {
    let channel = frame
        .channel_param()
        .ok_or(ExtractError::MissingChannel { class: "topic-reply" })?;
    let topic = frame.trailing().ok_or(ExtractError::MissingField {
        class: "topic-reply",
        field: "topic",
    })?;
    Ok(Some(Event::Topic {
        channel: channel.to_owned(),
        topic: topic.to_owned(),
    }))
}

fn names_event(frame: &LineFrame<'_>, policy: NamesPolicy) -> Result<Option<Event>, ExtractError> {
    let channel = frame
        .channel_param()
        .ok_or(ExtractError::MissingChannel { class: "name-list" })?;
    let names = frame.trailing().ok_or(ExtractError::MissingField {
        class: "name-list",
        field: "names",
    })?;

    let mut members = HashMap::new();
    for entry in names.split_whitespace() {
        if let Some((nick, held)) = parse_decorated(entry, policy) {
            members.insert(nick.to_owned(), held);
        }
    }

    Ok(Some(Event::Names {
        channel: channel.to_owned(),
        members,
    }))
}
