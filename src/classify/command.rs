//! The command classifier: human-readable command lines.
//!
//! Definitions are declared narrowest-grammar-first. Every CTCP-wrapped
//! message is also a syntactically valid PRIVMSG, and every channel
//! PRIVMSG shares its shape with a direct message, so the table order
//! below is load-bearing: ctcp version/ping and action come before the
//! generic channel message, which comes before the direct message; the
//! quit grammar with an explicit channel target comes before the
//! fallback quit grammar without one.

use super::{run_table, ClassDef, Fields, Gate};
use crate::event::{Event, EventSink};
use crate::frame::{ctcp_payload, LineFrame};
use crate::session::Session;

const CHANNEL: Gate = Gate {
    channel_scoped: true,
    self_filter: true,
};
const SELF_ONLY: Gate = Gate {
    channel_scoped: false,
    self_filter: true,
};
const OPEN: Gate = Gate {
    channel_scoped: false,
    self_filter: false,
};

fn is_channel(s: &str) -> bool {
    s.starts_with('#')
}

// --- matching rules -------------------------------------------------------

fn match_ping<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("PING") {
        return None;
    }
    Some(Fields {
        message: Some(frame.param(0).unwrap_or("")),
        ..Fields::default()
    })
}

fn match_pong<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    frame
        .verb
        .eq_ignore_ascii_case("PONG")
        .then(Fields::default)
}

fn match_ctcp<'a>(frame: &LineFrame<'a>, keyword: &str) -> Option<(&'a str, &'a str, &'a str)> {
    if !frame.verb.eq_ignore_ascii_case("PRIVMSG") {
        return None;
    }
    let sender = frame.sender()?;
    let target = frame.param(0)?;
    let (kw, args) = ctcp_payload(frame.param(1)?)?;
    (kw == keyword).then_some((sender, target, args))
}

fn match_ctcp_version<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    let (sender, target, _) = match_ctcp(frame, "VERSION")?;
    Some(Fields {
        sender: Some(sender),
        target: Some(target),
        ..Fields::default()
    })
}

fn match_ctcp_ping<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    let (sender, target, args) = match_ctcp(frame, "PING")?;
    Some(Fields {
        sender: Some(sender),
        target: Some(target),
        message: Some(args),
        ..Fields::default()
    })
}

fn match_action<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    let (sender, target, args) = match_ctcp(frame, "ACTION")?;
    if !is_channel(target) {
        return None;
    }
    Some(Fields {
        sender: Some(sender),
        target: Some(target),
        message: Some(args),
        ..Fields::default()
    })
}

fn match_join<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("JOIN") {
        return None;
    }
    let sender = frame.sender()?;
    let channel = frame.param(0).filter(|p| is_channel(p))?;
    Some(Fields {
        sender: Some(sender),
        target: Some(channel),
        ..Fields::default()
    })
}

fn match_part<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("PART") {
        return None;
    }
    let sender = frame.sender()?;
    let channel = frame.param(0).filter(|p| is_channel(p))?;
    Some(Fields {
        sender: Some(sender),
        target: Some(channel),
        message: frame.param(1),
        ..Fields::default()
    })
}

fn match_quit_channel<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("QUIT") {
        return None;
    }
    let sender = frame.sender()?;
    let channel = frame.param(0).filter(|p| is_channel(p))?;
    Some(Fields {
        sender: Some(sender),
        target: Some(channel),
        message: frame.param(1),
        ..Fields::default()
    })
}

// Fallback: most servers send QUIT without any channel target.
fn match_quit<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("QUIT") {
        return None;
    }
    let sender = frame.sender()?;
    Some(Fields {
        sender: Some(sender),
        message: frame.param(0),
        ..Fields::default()
    })
}

fn match_kick<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("KICK") {
        return None;
    }
    let sender = frame.sender()?;
    let channel = frame.param(0).filter(|p| is_channel(p))?;
    let victim = frame.param(1)?;
    Some(Fields {
        sender: Some(sender),
        target: Some(channel),
        message: frame.param(2),
        recipients: vec![victim],
        ..Fields::default()
    })
}

fn match_mode<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("MODE") {
        return None;
    }
    let sender = frame.sender()?;
    let channel = frame.param(0).filter(|p| is_channel(p))?;
    let modes = frame.param(1)?;
    // Recipients are optional: a mode change may target the channel
    // itself, leaving this empty.
    let recipients = frame.params.get(2..).unwrap_or(&[]).to_vec();
    Some(Fields {
        sender: Some(sender),
        target: Some(channel),
        modes: Some(modes),
        recipients,
        ..Fields::default()
    })
}

fn match_nick<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("NICK") {
        return None;
    }
    let sender = frame.sender()?;
    let new = frame.param(0)?;
    Some(Fields {
        sender: Some(sender),
        recipients: vec![new],
        ..Fields::default()
    })
}

fn match_topic<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("TOPIC") {
        return None;
    }
    let sender = frame.sender()?;
    let channel = frame.param(0).filter(|p| is_channel(p))?;
    let topic = frame.param(1)?;
    Some(Fields {
        sender: Some(sender),
        target: Some(channel),
        message: Some(topic),
        ..Fields::default()
    })
}

fn match_invite<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("INVITE") {
        return None;
    }
    let sender = frame.sender()?;
    let invited = frame.param(0)?;
    let channel = frame.channel_param()?;
    Some(Fields {
        sender: Some(sender),
        target: Some(channel),
        recipients: vec![invited],
        ..Fields::default()
    })
}

fn match_channel_message<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("PRIVMSG") {
        return None;
    }
    let sender = frame.sender()?;
    let target = frame.param(0).filter(|p| is_channel(p))?;
    let text = frame.param(1)?;
    Some(Fields {
        sender: Some(sender),
        target: Some(target),
        message: Some(text),
        ..Fields::default()
    })
}

fn match_notice<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    frame
        .verb
        .eq_ignore_ascii_case("NOTICE")
        .then(Fields::default)
}

fn match_direct_message<'a>(frame: &LineFrame<'a>) -> Option<Fields<'a>> {
    if !frame.verb.eq_ignore_ascii_case("PRIVMSG") {
        return None;
    }
    let sender = frame.sender()?;
    let target = frame.param(0).filter(|p| !is_channel(p))?;
    let text = frame.param(1)?;
    Some(Fields {
        sender: Some(sender),
        target: Some(target),
        message: Some(text),
        ..Fields::default()
    })
}

// --- event builders -------------------------------------------------------

fn event_ping(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::Ping {
        payload: fields.message.unwrap_or("").to_owned(),
    })
}

fn event_none(_fields: &Fields<'_>) -> Option<Event> {
    None
}

fn event_ctcp_version(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::VersionRequest {
        sender: fields.sender?.to_owned(),
    })
}

fn event_ctcp_ping(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::CtcpPing {
        sender: fields.sender?.to_owned(),
        token: fields.message.unwrap_or("").to_owned(),
    })
}

fn event_action(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::Action {
        sender: fields.sender?.to_owned(),
        channel: fields.target?.to_owned(),
        text: fields.message.unwrap_or("").to_owned(),
    })
}

fn event_join(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::Join {
        nick: fields.sender?.to_owned(),
        channel: fields.target?.to_owned(),
    })
}

fn event_part(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::Part {
        nick: fields.sender?.to_owned(),
        channel: fields.target?.to_owned(),
    })
}

fn event_quit(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::Quit {
        nick: fields.sender?.to_owned(),
        channel: fields.target.map(str::to_owned),
    })
}

fn event_kick(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::Kick {
        by: fields.sender?.to_owned(),
        channel: fields.target?.to_owned(),
        target: fields.recipients.first()?.to_string(),
    })
}

fn event_mode(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::ModeChange {
        by: fields.sender?.to_owned(),
        channel: fields.target?.to_owned(),
        modes: fields.modes?.to_owned(),
        recipients: fields.recipients.iter().map(|s| s.to_string()).collect(),
    })
}

fn event_nick(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::NickChange {
        old: fields.sender?.to_owned(),
        new: fields.recipients.first()?.to_string(),
    })
}

fn event_topic(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::TopicChange {
        by: fields.sender?.to_owned(),
        channel: fields.target?.to_owned(),
        topic: fields.message.unwrap_or("").to_owned(),
    })
}

fn event_invite(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::Invite {
        by: fields.sender?.to_owned(),
        channel: fields.target?.to_owned(),
    })
}

fn event_channel_message(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::ChannelMessage {
        sender: fields.sender?.to_owned(),
        channel: fields.target?.to_owned(),
        text: fields.message.unwrap_or("").to_owned(),
    })
}

fn event_direct_message(fields: &Fields<'_>) -> Option<Event> {
    Some(Event::DirectMessage {
        sender: fields.sender?.to_owned(),
        text: fields.message.unwrap_or("").to_owned(),
    })
}

// --- the table ------------------------------------------------------------

static COMMAND_CLASSES: [ClassDef; 17] = [
    ClassDef {
        name: "ping",
        matcher: match_ping,
        gate: OPEN,
        build: event_ping,
    },
    ClassDef {
        name: "pong",
        matcher: match_pong,
        gate: OPEN,
        build: event_none,
    },
    ClassDef {
        name: "ctcp-version",
        matcher: match_ctcp_version,
        gate: SELF_ONLY,
        build: event_ctcp_version,
    },
    ClassDef {
        name: "ctcp-ping",
        matcher: match_ctcp_ping,
        gate: SELF_ONLY,
        build: event_ctcp_ping,
    },
    ClassDef {
        name: "action",
        matcher: match_action,
        gate: CHANNEL,
        build: event_action,
    },
    ClassDef {
        name: "join",
        matcher: match_join,
        gate: CHANNEL,
        build: event_join,
    },
    ClassDef {
        name: "part",
        matcher: match_part,
        gate: CHANNEL,
        build: event_part,
    },
    ClassDef {
        name: "quit-channel",
        matcher: match_quit_channel,
        gate: CHANNEL,
        build: event_quit,
    },
    ClassDef {
        name: "quit",
        matcher: match_quit,
        gate: SELF_ONLY,
        build: event_quit,
    },
    ClassDef {
        name: "kick",
        matcher: match_kick,
        gate: CHANNEL,
        build: event_kick,
    },
    ClassDef {
        name: "mode",
        matcher: match_mode,
        gate: CHANNEL,
        build: event_mode,
    },
    ClassDef {
        name: "nick",
        matcher: match_nick,
        gate: SELF_ONLY,
        build: event_nick,
    },
    ClassDef {
        name: "topic",
        matcher: match_topic,
        gate: CHANNEL,
        build: event_topic,
    },
    // INVITE is deliberately not membership-gated: it names a channel
    // the bot has not joined yet.
    ClassDef {
        name: "invite",
        matcher: match_invite,
        gate: SELF_ONLY,
        build: event_invite,
    },
    ClassDef {
        name: "channel-message",
        matcher: match_channel_message,
        gate: CHANNEL,
        build: event_channel_message,
    },
    ClassDef {
        name: "notice",
        matcher: match_notice,
        gate: OPEN,
        build: event_none,
    },
    // Always publishes, even for the bot's own nickname: a direct
    // message can only reach us from another party, and a second
    // instance sharing the nickname would otherwise be silenced.
    ClassDef {
        name: "direct-message",
        matcher: match_direct_message,
        gate: OPEN,
        build: event_direct_message,
    },
];

/// Dispatcher over the command class table.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// A command dispatcher. Holds no state beyond the static table.
    pub fn new() -> CommandDispatcher {
        CommandDispatcher
    }

    /// Classify one raw line against the command table.
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
        run_table(&COMMAND_CLASSES, frame, session, sink)
    }
}
