//! Append-only game history.

use chrono::Utc;
use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::{Event, EventKind, PrivateInfo};

/// Ordered record of everything that happened in one game.
///
/// There is no removal API. Backed by `im::Vector`, so cloning the log into
/// a snapshot is O(1) and shares structure with the live log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    events: Vector<Event>,
}

impl HistoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a public event.
    pub fn record(&mut self, round: u32, kind: EventKind) -> &Event {
        self.push(round, kind, None)
    }

    /// Append an event carrying role-restricted information.
    pub fn record_private(&mut self, round: u32, kind: EventKind, info: PrivateInfo) -> &Event {
        self.push(round, kind, Some(info))
    }

    fn push(&mut self, round: u32, kind: EventKind, private_info: Option<PrivateInfo>) -> &Event {
        let event = Event {
            sequence: self.events.len() as u32,
            round,
            timestamp: Utc::now(),
            description: kind.to_string(),
            kind,
            private_info,
        };
        tracing::debug!(sequence = event.sequence, round, "{}", event.description);
        self.events.push_back(event);
        &self.events[self.events.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn get(&self, sequence: usize) -> Option<&Event> {
        self.events.get(sequence)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Events with every private payload stripped, for a shared screen.
    pub fn public_events(&self) -> impl Iterator<Item = Event> + '_ {
        self.events.iter().map(Event::redacted)
    }

    /// Events of a kind matching `predicate`, in order.
    pub fn filter_kind<'a>(
        &'a self,
        predicate: impl Fn(&EventKind) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| predicate(&e.kind))
    }

    /// Shared handle to the underlying sequence.
    #[must_use]
    pub fn events(&self) -> &Vector<Event> {
        &self.events
    }
}
