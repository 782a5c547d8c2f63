//! Stateless queue coordination over a [`Roster`].
//!
//! Self-checkout counters model one physical queue feeding every counter, so
//! any change to that queue is mirrored on all counters at once. Human server
//! queues are independent.

use super::roster::Roster;
use super::server::Server;
use super::types::{ServerId, SimTime};

/// Direction of a shared self-checkout queue change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueDelta {
    Join,
    Leave,
}

/// First server in roster order that can serve at `time`.
pub fn find_servable(roster: &Roster, time: SimTime) -> Option<ServerId> {
    roster.iter().find(|s| s.can_serve(time)).map(|s| s.id())
}

/// First server in roster order with a free queue slot.
pub fn find_queueable(roster: &Roster) -> Option<ServerId> {
    roster.iter().find(|s| s.can_queue()).map(|s| s.id())
}

/// Applies `delta` to every self-checkout counter, leaving human servers as is.
pub fn bump_self_checkout_queues(roster: Roster, delta: QueueDelta) -> Roster {
    roster.map(|server| match (server.is_self_checkout(), delta) {
        (false, _) => server,
        (true, QueueDelta::Join) => server.inc_queue(),
        (true, QueueDelta::Leave) => server.dec_queue(),
    })
}

/// Lowest id among self-checkout counters.
pub fn first_self_checkout(roster: &Roster) -> Option<ServerId> {
    roster.self_checkouts().next().map(|s| s.id())
}

/// Self-checkout counter with the strictly smallest `next_free_at`.
/// Ties keep the lowest id.
pub fn earliest_free_self_checkout(roster: &Roster) -> Option<ServerId> {
    roster
        .self_checkouts()
        .fold(None, |best: Option<&Server>, s| match best {
            Some(b) if b.next_free_at() <= s.next_free_at() => Some(b),
            _ => Some(s),
        })
        .map(|s| s.id())
}
