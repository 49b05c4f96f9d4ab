//! Property-based tests for the line router.
//!
//! Uses proptest to generate both arbitrary junk and well-formed lines,
//! verifying that:
//! 1. Classification never panics, whatever the input
//! 2. The action class always wins over the generic message class
//! 3. Well-formed channel messages are always handled

use std::sync::Mutex;

use proptest::prelude::*;
use slirc_dispatch::{Event, EventSink, Router, Session};

struct NullSession;

impl Session for NullSession {
    fn current_nickname(&self) -> String {
        "propbot".to_owned()
    }
    fn is_relevant_channel(&self, _channel: &str) -> bool {
        true
    }
    fn log(&self, _message: &str) {}
}

#[derive(Default)]
struct Recorder(Mutex<Vec<Event>>);

impl EventSink for Recorder {
    fn publish(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }
}

/// Valid IRC nickname, distinct from the session's own.
fn nickname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_]{0,8}").expect("valid regex")
}

fn channel_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("#[a-zA-Z0-9_-]{1,30}").expect("valid regex")
}

/// Message text without protocol-breaking bytes.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\r\n\u{0}\u{1}]{1,200}").expect("valid regex")
}

proptest! {
    #[test]
    fn never_panics_on_arbitrary_input(line in "\\PC{0,510}") {
        let router = Router::new();
        let _ = router.parse_and_handle(&line, &NullSession, &Recorder::default());
    }

    #[test]
    fn well_formed_channel_messages_are_handled(
        nick in nickname_strategy(),
        channel in channel_strategy(),
        text in text_strategy(),
    ) {
        prop_assume!(!nick.eq_ignore_ascii_case("propbot"));
        let line = format!(":{nick}!user@host PRIVMSG {channel} :{text}");
        let sink = Recorder::default();
        let handled = Router::new().parse_and_handle(&line, &NullSession, &sink);
        prop_assert!(handled);
        let events = sink.0.into_inner().unwrap();
        prop_assert_eq!(events.len(), 1);
    }

    #[test]
    fn action_wrapping_always_selects_action_class(
        nick in nickname_strategy(),
        channel in channel_strategy(),
        text in text_strategy(),
    ) {
        prop_assume!(!nick.eq_ignore_ascii_case("propbot"));
        let line = format!(
            ":{nick}!user@host PRIVMSG {channel} :\u{1}ACTION {text}\u{1}"
        );
        let sink = Recorder::default();
        let handled = Router::new().parse_and_handle(&line, &NullSession, &sink);
        prop_assert!(handled);
        let events = sink.0.into_inner().unwrap();
        prop_assert_eq!(events.len(), 1);
        prop_assert!(
            matches!(events[0], Event::Action { .. }),
            "expected action, got {:?}",
            events[0]
        );
    }

    #[test]
    fn classification_is_deterministic(line in "\\PC{0,200}") {
        let router = Router::new();
        let first = router.parse_and_handle(&line, &NullSession, &Recorder::default());
        let second = router.parse_and_handle(&line, &NullSession, &Recorder::default());
        prop_assert_eq!(first, second);
    }
}
