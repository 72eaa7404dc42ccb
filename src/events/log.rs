//! Bounded event log and subscriber trait.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// An event stamped with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Monotonic index across the whole game, starting at 0.
    pub sequence: u64,
    /// Turn number when the event fired.
    pub turn: u32,
    pub event: GameEvent,
}

impl std::fmt::Display for EventRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.event.channel(), self.event)
    }
}

/// Most recent events, oldest first.
///
/// Once `capacity` records are held, pushing drops the oldest one.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    records: Vector<EventRecord>,
    capacity: usize,
}

impl EventLog {
    /// Create an empty log holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vector::new(),
            capacity,
        }
    }

    /// Append a record, evicting from the front when full.
    pub fn push(&mut self, record: EventRecord) {
        if self.capacity == 0 {
            return;
        }
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.iter()
    }

    /// Most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&EventRecord> {
        self.records.back()
    }

    /// Take every record, leaving the log empty.
    pub fn drain(&mut self) -> Vec<EventRecord> {
        std::mem::take(&mut self.records).into_iter().collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Receives every event as it is emitted.
///
/// Closures taking `&EventRecord` implement this directly:
///
/// ```
/// use champion_duel::events::{EventRecord, EventSink};
///
/// let mut seen = 0;
/// let mut sink = |_: &EventRecord| seen += 1;
/// # fn takes<S: EventSink>(_: &mut S) {}
/// # takes(&mut sink);
/// ```
pub trait EventSink {
    fn on_event(&mut self, record: &EventRecord);
}

impl<F> EventSink for F
where
    F: FnMut(&EventRecord),
{
    fn on_event(&mut self, record: &EventRecord) {
        self(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn record(sequence: u64) -> EventRecord {
        EventRecord {
            sequence,
            turn: 1,
            event: GameEvent::AttackDeclared {
                player: PlayerId::ONE,
            },
        }
    }

    #[test]
    fn test_log_evicts_oldest() {
        let mut log = EventLog::new(3);
        for seq in 0..5 {
            log.push(record(seq));
        }

        assert_eq!(log.len(), 3);
        let sequences: Vec<u64> = log.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![2, 3, 4]);
        assert_eq!(log.last().map(|r| r.sequence), Some(4));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut log = EventLog::new(0);
        log.push(record(0));
        assert!(log.is_empty());
    }

    #[test]
    fn test_drain() {
        let mut log = EventLog::new(10);
        log.push(record(0));
        log.push(record(1));

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
        assert_eq!(log.capacity(), 10);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |r: &EventRecord| seen.push(r.sequence);
            sink.on_event(&record(7));
            sink.on_event(&record(8));
        }
        assert_eq!(seen, vec![7, 8]);
    }

    #[test]
    fn test_record_display() {
        assert_eq!(record(0).to_string(), "[side-A] Player 1 attacks!");
    }
}
