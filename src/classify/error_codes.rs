//! The numeric-error classifier: three-digit error replies.
//!
//! Same frame as the info family. Three codes — channel full,
//! invite-only, bad channel key — signal a join the bot cannot complete
//! alone and publish an invite-required event; every other known error
//! code logs and stops there.

use tracing::warn;

use super::log_class;
use crate::error::ExtractError;
use crate::event::{Event, EventSink};
use crate::frame::LineFrame;
use crate::numeric::ErrorReply;
use crate::session::Session;

/// Dispatcher over the known error reply codes.
#[derive(Debug, Default)]
pub struct NumericErrorDispatcher;

impl NumericErrorDispatcher {
    /// An error-code dispatcher. Holds no state beyond the static table.
    pub fn new() -> NumericErrorDispatcher {
        NumericErrorDispatcher
    }

    /// Classify one raw line against the error-reply table.
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
        let Some(reply) = frame.numeric().and_then(ErrorReply::from_code) else {
            return false;
        };

        let name = if reply.needs_invite() {
            "invite-required"
        } else {
            "numeric-error"
        };
        log_class(session, name, frame.raw);

        if !reply.needs_invite() {
            return true;
        }

        match invite_required_event(frame) {
            Ok(event) => {
                sink.publish(event);
                true
            }
            Err(err) => {
                warn!(%err, raw = frame.raw, "field extraction failed");
                session.log(&format!("extraction failed ({err}): {}", frame.raw));
                false
            }
        }
    }
}

fn invite_required_event(frame: &LineFrame<'_>) -> Result<Event, ExtractError> {
    let channel = frame.channel_param().ok_or(ExtractError::MissingChannel {
        class: "invite-required",
    })?;
    Ok(Event::InviteRequired {
        channel: channel.to_owned(),
    })
}
