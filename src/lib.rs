//! # slirc-dispatch
//!
//! IRC wire-message classification and event dispatch for Straylight
//! bots: one raw server line in, at most one typed event out.
//!
//! Three classifier families are tried in a fixed order for every line —
//! human-readable commands, informational numerics, error numerics. Each
//! owns an ordered table of message class definitions whose matching
//! rules disambiguate overlapping grammars (a CTCP ACTION is also a
//! valid channel message; a channel message shares its shape with a
//! direct message). Matched classes extract named fields, log the raw
//! line through the session, apply self-origin and channel-membership
//! gates, and publish a [`Event`] to the [`EventSink`].
//!
//! The engine is synchronous, performs no I/O, and keeps no mutable
//! state: tables are static, sessions are read-only, lines are never
//! retained.
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_dispatch::{Event, EventSink, Router, Session};
//!
//! struct Bot;
//!
//! impl Session for Bot {
//!     fn current_nickname(&self) -> String { "mybot".into() }
//!     fn is_relevant_channel(&self, channel: &str) -> bool { channel == "#lounge" }
//!     fn log(&self, message: &str) { eprintln!("{message}"); }
//! }
//!
//! struct Stdout;
//!
//! impl EventSink for Stdout {
//!     fn publish(&self, event: Event) { println!("{event:?}"); }
//! }
//!
//! let router = Router::new();
//! let handled = router.parse_and_handle(
//!     ":alice!u@h PRIVMSG #lounge :hello there",
//!     &Bot,
//!     &Stdout,
//! );
//! assert!(handled);
//! ```

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod classify;
pub mod error;
pub mod event;
pub mod frame;
pub mod numeric;
pub mod perm;
pub mod session;

pub use self::classify::{
    CommandDispatcher, NumericErrorDispatcher, NumericInfoDispatcher, Router,
};
pub use self::error::{ExtractError, FrameError};
pub use self::event::{Event, EventSink};
pub use self::frame::{ctcp_payload, LineFrame, CTCP_DELIM};
pub use self::numeric::{ErrorReply, InfoReply};
pub use self::perm::{NamesPolicy, Permission};
pub use self::session::{nick_eq, Session};
