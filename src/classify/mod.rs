//! Message classification and dispatch.
//!
//! Three classifier families each own an ordered table of message class
//! definitions. A dispatcher walks its table and, for the first
//! definition whose matching rule accepts the line, runs the default
//! logging step, applies the session gates, and publishes the
//! definition's event (if any). The [`Router`] tries the three
//! dispatchers in a fixed order per line.
//!
//! Table order is a correctness invariant, not an optimization: a class
//! whose grammar is a textual subset of a broader one must be declared
//! first. The canonical case is the CTCP ACTION wrapper, which is also a
//! syntactically valid generic message — see [`command`].

pub mod command;
pub mod error_codes;
pub mod info;

use tracing::debug;

use crate::event::{Event, EventSink};
use crate::frame::LineFrame;
use crate::perm::NamesPolicy;
use crate::session::{nick_eq, Session};

pub use command::CommandDispatcher;
pub use error_codes::NumericErrorDispatcher;
pub use info::NumericInfoDispatcher;

/// Named fields extracted by a matching rule.
///
/// Matchers fill in only the fields their class carries; builders read
/// them back out. Everything borrows from the input line.
#[derive(Debug, Clone, Default)]
pub struct Fields<'a> {
    /// Originating nickname.
    pub sender: Option<&'a str>,
    /// Channel (or direct target) the line addresses.
    pub target: Option<&'a str>,
    /// Free-text payload: message body, topic, quit reason, ping token.
    pub message: Option<&'a str>,
    /// Mode string as sent, e.g. `+ov`.
    pub modes: Option<&'a str>,
    /// Nicknames the line applies to, in wire order. Empty when the
    /// class has none (a mode change targeting the channel itself keeps
    /// this empty rather than absent).
    pub recipients: Vec<&'a str>,
}

/// Suppression gates applied after a definition matches.
///
/// The default logging step always runs; gates only decide whether an
/// event may be published.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Gate {
    /// Consult `Session::is_relevant_channel` on the target field and
    /// suppress publication for channels the main connection is not in.
    pub channel_scoped: bool,
    /// Suppress publication when the sender is the bot itself. Every
    /// channel-scoped class sets this; the direct-message class is the
    /// documented exception and never does.
    pub self_filter: bool,
}

pub(crate) type Matcher = for<'a> fn(&LineFrame<'a>) -> Option<Fields<'a>>;
pub(crate) type Build = fn(&Fields<'_>) -> Option<Event>;

/// One message class: identity, matching rule, gates, and event builder.
///
/// Definitions are plain static data; the tables are built once and
/// never mutated, so concurrent reads need no synchronization.
pub(crate) struct ClassDef {
    /// Stable name, used in logs and error messages.
    pub name: &'static str,
    /// Tests whether a frame belongs to this class and extracts its
    /// named fields.
    pub matcher: Matcher,
    /// Session-dependent suppression rules.
    pub gate: Gate,
    /// Pure translation from extracted fields to zero-or-one event.
    pub build: Build,
}

/// The default behavior every matched class runs before anything else.
pub(crate) fn log_class(session: &dyn Session, name: &str, raw: &str) {
    session.log(&format!("{name}: {raw}"));
}

pub(crate) fn suppressed(gate: Gate, fields: &Fields<'_>, session: &dyn Session) -> bool {
    if gate.channel_scoped {
        if let Some(target) = fields.target {
            if !session.is_relevant_channel(target) {
                return true;
            }
        }
    }
    if gate.self_filter {
        if let Some(sender) = fields.sender {
            // Read per line, never cached: the nickname can change
            // between lines.
            if nick_eq(sender, &session.current_nickname()) {
                return true;
            }
        }
    }
    false
}

/// Walk an ordered class table; first match wins.
pub(crate) fn run_table(
    defs: &[ClassDef],
    frame: &LineFrame<'_>,
    session: &dyn Session,
    sink: &dyn EventSink,
) -> bool {
    for def in defs {
        let Some(fields) = (def.matcher)(frame) else {
            continue;
        };
        log_class(session, def.name, frame.raw);
        if !suppressed(def.gate, &fields, session) {
            if let Some(event) = (def.build)(&fields) {
                sink.publish(event);
            }
        }
        return true;
    }
    false
}

/// Tries the three classifier families in order per line.
///
/// Stateless beyond the immutable tables and the names policy; one
/// router can serve any number of sequential lines, and distinct
/// connections can each hold their own.
#[derive(Debug, Default)]
pub struct Router {
    commands: CommandDispatcher,
    info: NumericInfoDispatcher,
    errors: NumericErrorDispatcher,
}

impl Router {
    /// Router with the default names policy.
    pub fn new() -> Router {
        Router::default()
    }

    /// Router with an explicit name-list policy.
    pub fn with_policy(policy: NamesPolicy) -> Router {
        Router {
            commands: CommandDispatcher::new(),
            info: NumericInfoDispatcher::with_policy(policy),
            errors: NumericErrorDispatcher::new(),
        }
    }

    /// Classify one raw line, publishing at most one event.
    ///
    /// Tries the command dispatcher, then numeric-info, then
    /// numeric-error, stopping at the first that handles the line.
    /// Returns `false` for lines no family recognizes; those are logged
    /// at debug level and otherwise discarded.
    pub fn parse_and_handle(
        &self,
        line: &str,
        session: &dyn Session,
        sink: &dyn EventSink,
    ) -> bool {
        let frame = match LineFrame::parse(line) {
            Ok(frame) => frame,
            Err(err) => {
                debug!(%err, "unframeable line dropped");
                return false;
            }
        };

        let handled = self.commands.dispatch(&frame, session, sink)
            || self.info.dispatch(&frame, session, sink)
            || self.errors.dispatch(&frame, session, sink);

        if !handled {
            debug!(verb = frame.verb, "unrecognized line dropped");
        }
        handled
    }
}
