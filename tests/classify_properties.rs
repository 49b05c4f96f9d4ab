//! Integration tests for classification and dispatch.
//!
//! Exercises the full router surface: grammar disambiguation order,
//! self-origin filtering, channel-membership gating, field extraction,
//! and the unhandled paths.

use std::collections::BTreeSet;
use std::sync::Mutex;

use slirc_dispatch::{Event, EventSink, NamesPolicy, Permission, Router, Session};

struct TestSession {
    nick: String,
    channels: Vec<String>,
    logged: Mutex<Vec<String>>,
}

impl TestSession {
    fn new(nick: &str, channels: &[&str]) -> TestSession {
        TestSession {
            nick: nick.to_owned(),
            channels: channels.iter().map(|c| c.to_string()).collect(),
            logged: Mutex::new(Vec::new()),
        }
    }
}

impl Session for TestSession {
    fn current_nickname(&self) -> String {
        self.nick.clone()
    }

    fn is_relevant_channel(&self, channel: &str) -> bool {
        self.channels.iter().any(|c| c == channel)
    }

    fn log(&self, message: &str) {
        self.logged.lock().unwrap().push(message.to_owned());
    }
}

#[derive(Default)]
struct Recorder(Mutex<Vec<Event>>);

impl EventSink for Recorder {
    fn publish(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }
}

fn classify(line: &str) -> (bool, Vec<Event>) {
    classify_as(line, "bot", &["#lounge"])
}

fn classify_as(line: &str, nick: &str, channels: &[&str]) -> (bool, Vec<Event>) {
    let session = TestSession::new(nick, channels);
    let sink = Recorder::default();
    let handled = Router::new().parse_and_handle(line, &session, &sink);
    (handled, sink.0.into_inner().unwrap())
}

#[test]
fn action_always_beats_generic_message() {
    // The line satisfies both the action grammar and the generic channel
    // message grammar; classification must pick the action class.
    let (handled, events) =
        classify(":alice!u@h PRIVMSG #lounge :\u{1}ACTION waves slowly\u{1}");
    assert!(handled);
    assert_eq!(
        events,
        vec![Event::Action {
            sender: "alice".to_owned(),
            channel: "#lounge".to_owned(),
            text: "waves slowly".to_owned(),
        }]
    );
}

#[test]
fn self_origin_suppresses_channel_classes() {
    let lines = [
        ":bot!u@h PRIVMSG #lounge :talking to myself",
        ":bot!u@h JOIN #lounge",
        ":bot!u@h PART #lounge",
        ":bot!u@h MODE #lounge +t",
        ":bot!u@h TOPIC #lounge :new topic",
        ":bot!u@h PRIVMSG #lounge :\u{1}ACTION waves\u{1}",
    ];
    for line in lines {
        let (handled, events) = classify(line);
        assert!(handled, "{line} should still be handled");
        assert!(events.is_empty(), "{line} should publish nothing");
    }
}

#[test]
fn self_filter_is_case_insensitive() {
    let (handled, events) = classify_as(":BoT!u@h JOIN #lounge", "bot", &["#lounge"]);
    assert!(handled);
    assert!(events.is_empty());
}

#[test]
fn direct_message_is_exempt_from_self_filter() {
    let (handled, events) = classify(":bot!u@h PRIVMSG bot :note to self");
    assert!(handled);
    assert_eq!(
        events,
        vec![Event::DirectMessage {
            sender: "bot".to_owned(),
            text: "note to self".to_owned(),
        }]
    );
}

#[test]
fn membership_gate_suppresses_foreign_channels() {
    let lines = [
        ":alice!u@h PRIVMSG #elsewhere :hi",
        ":alice!u@h JOIN #elsewhere",
        ":op!u@h KICK #elsewhere victim",
        ":op!u@h MODE #elsewhere +o alice",
    ];
    for line in lines {
        let (handled, events) = classify(line);
        assert!(handled, "{line} should still be handled");
        assert!(events.is_empty(), "{line} should publish nothing");
    }
}

#[test]
fn membership_gate_logs_before_suppressing() {
    let session = TestSession::new("bot", &["#lounge"]);
    let sink = Recorder::default();
    let handled =
        Router::new().parse_and_handle(":alice!u@h JOIN #elsewhere", &session, &sink);
    assert!(handled);
    assert!(sink.0.into_inner().unwrap().is_empty());
    // The default logging behavior still ran.
    assert_eq!(session.logged.into_inner().unwrap().len(), 1);
}

#[test]
fn channel_message_fields_survive_extraction_unchanged() {
    let (handled, events) = classify(":alice!u@h PRIVMSG #lounge :hello there");
    assert!(handled);
    assert_eq!(
        events,
        vec![Event::ChannelMessage {
            sender: "alice".to_owned(),
            channel: "#lounge".to_owned(),
            text: "hello there".to_owned(),
        }]
    );
}

#[test]
fn mode_change_without_recipients_yields_empty_sequence() {
    let (handled, events) = classify(":op!u@h MODE #lounge +t");
    assert!(handled);
    assert_eq!(
        events,
        vec![Event::ModeChange {
            by: "op".to_owned(),
            channel: "#lounge".to_owned(),
            modes: "+t".to_owned(),
            recipients: Vec::new(),
        }]
    );
}

#[test]
fn mode_change_with_recipients() {
    let (_, events) = classify(":op!u@h MODE #lounge +ov alice bob");
    assert_eq!(
        events,
        vec![Event::ModeChange {
            by: "op".to_owned(),
            channel: "#lounge".to_owned(),
            modes: "+ov".to_owned(),
            recipients: vec!["alice".to_owned(), "bob".to_owned()],
        }]
    );
}

#[test]
fn quit_without_channel_carries_none() {
    let (handled, events) = classify(":alice!u@h QUIT :gone home");
    assert!(handled);
    assert_eq!(
        events,
        vec![Event::Quit {
            nick: "alice".to_owned(),
            channel: None,
        }]
    );
}

#[test]
fn quit_with_channel_target_carries_it() {
    let (_, events) = classify(":alice!u@h QUIT #lounge :gone");
    assert_eq!(
        events,
        vec![Event::Quit {
            nick: "alice".to_owned(),
            channel: Some("#lounge".to_owned()),
        }]
    );
}

#[test]
fn kick_extracts_all_parties() {
    let (_, events) = classify(":op!u@h KICK #lounge troll :enough");
    assert_eq!(
        events,
        vec![Event::Kick {
            by: "op".to_owned(),
            channel: "#lounge".to_owned(),
            target: "troll".to_owned(),
        }]
    );
}

#[test]
fn nick_change_event() {
    let (_, events) = classify(":old!u@h NICK :shiny");
    assert_eq!(
        events,
        vec![Event::NickChange {
            old: "old".to_owned(),
            new: "shiny".to_owned(),
        }]
    );
}

#[test]
fn invite_is_not_membership_gated() {
    // The bot is not in #secret; the invite must still come through.
    let (handled, events) = classify(":alice!u@h INVITE bot :#secret");
    assert!(handled);
    assert_eq!(
        events,
        vec![Event::Invite {
            by: "alice".to_owned(),
            channel: "#secret".to_owned(),
        }]
    );
}

#[test]
fn server_ping_publishes_payload() {
    let (_, events) = classify("PING :irc.example.com");
    assert_eq!(
        events,
        vec![Event::Ping {
            payload: "irc.example.com".to_owned()
        }]
    );
}

#[test]
fn ctcp_version_request() {
    let (_, events) = classify(":curious!u@h PRIVMSG bot :\u{1}VERSION\u{1}");
    assert_eq!(
        events,
        vec![Event::VersionRequest {
            sender: "curious".to_owned()
        }]
    );
}

#[test]
fn ctcp_ping_request_echoes_token() {
    let (_, events) = classify(":curious!u@h PRIVMSG bot :\u{1}PING 1693300000\u{1}");
    assert_eq!(
        events,
        vec![Event::CtcpPing {
            sender: "curious".to_owned(),
            token: "1693300000".to_owned(),
        }]
    );
}

#[test]
fn notice_is_handled_without_event() {
    let (handled, events) = classify(":srv NOTICE bot :*** Looking up your hostname");
    assert!(handled);
    assert!(events.is_empty());
}

#[test]
fn topic_reply_numeric() {
    let (handled, events) = classify(":srv 332 bot #lounge :the lounge topic");
    assert!(handled);
    assert_eq!(
        events,
        vec![Event::Topic {
            channel: "#lounge".to_owned(),
            topic: "the lounge topic".to_owned(),
        }]
    );
}

#[test]
fn names_reply_implicit_promotion() {
    let (handled, events) = classify(":srv 353 bot = #lounge :&carol @alice");
    assert!(handled);
    let Event::Names { members, .. } = &events[0] else {
        panic!("expected names event");
    };
    // Admin outranks op, so op is implied even without an @ symbol.
    assert_eq!(
        members["carol"],
        BTreeSet::from([Permission::Op, Permission::Admin])
    );
    assert_eq!(members["alice"], BTreeSet::from([Permission::Op]));
}

#[test]
fn names_promotion_can_be_disabled() {
    let session = TestSession::new("bot", &["#lounge"]);
    let sink = Recorder::default();
    let router = Router::with_policy(NamesPolicy { implicit_op: false });
    assert!(router.parse_and_handle(":srv 353 bot = #lounge :&carol", &session, &sink));
    let events = sink.0.into_inner().unwrap();
    let Event::Names { members, .. } = &events[0] else {
        panic!("expected names event");
    };
    assert_eq!(members["carol"], BTreeSet::from([Permission::Admin]));
}

#[test]
fn one_names_event_per_line() {
    let session = TestSession::new("bot", &["#lounge"]);
    let sink = Recorder::default();
    let router = Router::new();
    router.parse_and_handle(":srv 353 bot = #lounge :@alice", &session, &sink);
    router.parse_and_handle(":srv 353 bot = #lounge :+bob", &session, &sink);
    let events = sink.0.into_inner().unwrap();
    assert_eq!(events.len(), 2, "no cross-line merging");
}

#[test]
fn invite_required_error_codes() {
    for code in ["471", "473", "475"] {
        let (handled, events) =
            classify(&format!(":srv {code} bot #inner :Cannot join channel"));
        assert!(handled, "code {code}");
        assert_eq!(
            events,
            vec![Event::InviteRequired {
                channel: "#inner".to_owned()
            }],
            "code {code}"
        );
    }
}

#[test]
fn unknown_traffic_returns_false_without_panicking() {
    let lines = [
        ":srv 999 bot :no such code",
        ":srv WALLOPS :broadcast",
        "GARBAGE",
        ":srv",
        "",
        "   ",
        ":alice!u@h",
        "\u{1}ACTION orphaned\u{1}",
    ];
    for line in lines {
        let (handled, events) = classify(line);
        assert!(!handled, "{line:?} should be unhandled");
        assert!(events.is_empty());
    }
}

#[test]
fn handled_lines_report_true_even_when_gated() {
    // Gated or log-only outcomes still count as handled to the router.
    let (handled, _) = classify(":bot!u@h JOIN #lounge");
    assert!(handled);
    let (handled, _) = classify(":srv 372 bot :- motd line");
    assert!(handled);
}
