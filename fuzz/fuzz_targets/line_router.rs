//! Fuzz target for the line router
//!
//! Feeds randomly generated lines through the full classification path
//! and ensures no input can panic the engine or escape as an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_dispatch::{Event, EventSink, Router, Session};
use std::str;

struct FuzzSession;

impl Session for FuzzSession {
    fn current_nickname(&self) -> String {
        "fuzzbot".to_owned()
    }
    fn is_relevant_channel(&self, channel: &str) -> bool {
        channel.len() % 2 == 0
    }
    fn log(&self, _message: &str) {}
}

struct NullSink;

impl EventSink for NullSink {
    fn publish(&self, _event: Event) {}
}

fuzz_target!(|data: &[u8]| {
    // Only fuzz valid UTF-8 strings to focus on protocol-level issues
    if let Ok(input) = str::from_utf8(data) {
        // Over 512 bytes is unusual for IRC
        if input.len() > 512 {
            return;
        }

        // Classification should never panic, whatever the line
        let router = Router::new();
        let _ = router.parse_and_handle(input, &FuzzSession, &NullSink);
    }
});
