//! Game history: an append-only record of transitions and outcomes.
//!
//! Every component appends here; nothing removes or reorders entries.
//!
//! ## Private information
//!
//! Seer results are stored on the event as `private_info` and are always
//! recorded. The log does not decide who may read them. A presentation layer
//! showing the log on a shared screen should use
//! [`HistoryLog::public_events`], which strips the payload.

mod event;
mod log;

pub use event::{Event, EventKind, PrivateInfo};
pub use log::HistoryLog;
