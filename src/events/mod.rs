//! Notifications for the presentation layer.
//!
//! The controller emits a `GameEvent` for every state mutation. Events are
//! stamped into `EventRecord`s, kept in a bounded `EventLog`, logged through
//! `tracing`, and pushed to any registered `EventSink`.

pub mod event;
pub mod log;

pub use event::{Channel, ChampionView, GameEvent, Severity};
pub use log::{EventLog, EventRecord, EventSink};
