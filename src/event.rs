//! Domain events produced by classification.
//!
//! An [`Event`] is an immutable value carrying only the fields extracted
//! for its kind. Events are handed to the [`EventSink`] and owned by
//! subscribers from then on; the engine keeps no reference after
//! publishing.

use std::collections::{BTreeSet, HashMap};

use crate::perm::Permission;

/// A typed event extracted from one raw server line.
///
/// At most one event is published per line. Variants carry owned data so
/// subscribers can hold them beyond the lifetime of the input line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Event {
    /// Server keepalive `PING`; the payload must be echoed back.
    Ping {
        /// The ping token to return in the PONG reply.
        payload: String,
    },
    /// CTCP PING request sent directly to the bot.
    CtcpPing {
        /// Requesting nickname.
        sender: String,
        /// Opaque token to echo back.
        token: String,
    },
    /// CTCP VERSION request sent directly to the bot.
    VersionRequest {
        /// Requesting nickname.
        sender: String,
    },
    /// A user joined a channel.
    Join {
        /// Joining nickname.
        nick: String,
        /// Channel joined.
        channel: String,
    },
    /// A user left a channel.
    Part {
        /// Parting nickname.
        nick: String,
        /// Channel left.
        channel: String,
    },
    /// A user disconnected. The channel is present only when the server
    /// named one; most servers send QUIT without a channel target.
    Quit {
        /// Quitting nickname.
        nick: String,
        /// Channel named in the quit line, if any.
        channel: Option<String>,
    },
    /// A user was kicked from a channel.
    Kick {
        /// Nickname issuing the kick.
        by: String,
        /// Channel the kick happened in.
        channel: String,
        /// Nickname removed.
        target: String,
    },
    /// A channel mode change. `recipients` is empty when the change
    /// targets the channel itself (e.g. `+t`) rather than any member.
    ModeChange {
        /// Nickname issuing the change.
        by: String,
        /// Channel affected.
        channel: String,
        /// The mode string as sent, e.g. `+ov`.
        modes: String,
        /// Nicknames the mode string applies to, in argument order.
        recipients: Vec<String>,
    },
    /// A user changed nickname.
    NickChange {
        /// Previous nickname.
        old: String,
        /// New nickname.
        new: String,
    },
    /// A user set a channel topic.
    TopicChange {
        /// Nickname setting the topic.
        by: String,
        /// Channel affected.
        channel: String,
        /// The new topic text.
        topic: String,
    },
    /// The bot was invited to a channel.
    Invite {
        /// Inviting nickname.
        by: String,
        /// Channel invited to.
        channel: String,
    },
    /// A CTCP ACTION (`/me`) in a channel.
    Action {
        /// Acting nickname.
        sender: String,
        /// Channel the action was performed in.
        channel: String,
        /// Action text, without the CTCP wrapping.
        text: String,
    },
    /// An ordinary channel message.
    ChannelMessage {
        /// Sending nickname.
        sender: String,
        /// Channel the message was sent to.
        channel: String,
        /// Message text.
        text: String,
    },
    /// A message addressed directly to the bot rather than a channel.
    DirectMessage {
        /// Sending nickname.
        sender: String,
        /// Message text.
        text: String,
    },
    /// Topic informational reply (RPL_TOPIC) for a channel.
    Topic {
        /// Channel the topic belongs to.
        channel: String,
        /// Current topic text.
        topic: String,
    },
    /// One name-list reply line (RPL_NAMREPLY) for a channel.
    ///
    /// A channel's full membership may arrive over several successive
    /// lines; one event is published per line and merging across lines,
    /// if needed, is the subscriber's responsibility.
    Names {
        /// Channel the fragment belongs to.
        channel: String,
        /// Nickname to the set of permission levels held, for the
        /// nicknames in this fragment.
        members: HashMap<String, BTreeSet<Permission>>,
    },
    /// Joining a channel failed in a way an invitation (or key) would
    /// fix: channel full, invite-only, or bad channel key.
    InviteRequired {
        /// Channel the bot could not join.
        channel: String,
    },
}

/// Outbound seam to the pub-sub event channel.
///
/// Publication is fire-and-forget from the engine's point of view;
/// delivery semantics are the channel's contract, not this crate's.
pub trait EventSink {
    /// Publish one event to subscribers.
    fn publish(&self, event: Event);
}
