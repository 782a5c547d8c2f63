use super::supplier::Supplier;
use super::types::{ServerId, SimTime};
use std::fmt;

/// Kind of service point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKind {
    /// Staffed server with its own queue and rest periods.
    Human,
    /// Self-checkout counter. All counters share one logical queue.
    SelfCheckout,
}

/// Immutable record for a server or self-checkout counter.
///
/// Every state change returns a new record; nothing is updated in place.
#[derive(Debug, Clone)]
pub struct Server {
    id: ServerId,
    next_free_at: SimTime,
    max_queue: usize,
    queue_len: usize,
    available: bool,
    rest_time: Supplier,
    kind: ServerKind,
}

impl Server {
    /// Idle human server with an empty queue.
    pub fn human(id: ServerId, max_queue: usize, rest_time: Supplier) -> Self {
        Self {
            id,
            next_free_at: 0.0,
            max_queue,
            queue_len: 0,
            available: true,
            rest_time,
            kind: ServerKind::Human,
        }
    }

    /// Idle self-checkout counter. Counters never rest, so the rest supplier
    /// is fixed at zero and `add_rest_time` keeps `next_free_at` as is.
    pub fn self_checkout(id: ServerId, max_queue: usize) -> Self {
        Self {
            id,
            next_free_at: 0.0,
            max_queue,
            queue_len: 0,
            available: true,
            rest_time: Supplier::constant(0.0),
            kind: ServerKind::SelfCheckout,
        }
    }

    pub fn id(&self) -> ServerId {
        self.id
    }

    pub fn next_free_at(&self) -> SimTime {
        self.next_free_at
    }

    pub fn max_queue(&self) -> usize {
        self.max_queue
    }

    pub fn queue_len(&self) -> usize {
        self.queue_len
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn kind(&self) -> ServerKind {
        self.kind
    }

    pub fn is_self_checkout(&self) -> bool {
        self.kind == ServerKind::SelfCheckout
    }

    pub fn can_serve(&self, time: SimTime) -> bool {
        self.available && time >= self.next_free_at
    }

    pub fn can_queue(&self) -> bool {
        self.queue_len < self.max_queue
    }

    pub fn update_state(&self, time: SimTime, available: bool) -> Self {
        Self {
            next_free_at: time,
            available,
            ..self.clone()
        }
    }

    pub fn inc_queue(&self) -> Self {
        assert!(
            self.queue_len < self.max_queue,
            "queue overflow on server {} ({} of {})",
            self.id,
            self.queue_len,
            self.max_queue
        );
        Self {
            queue_len: self.queue_len + 1,
            ..self.clone()
        }
    }

    pub fn dec_queue(&self) -> Self {
        assert!(self.queue_len > 0, "queue underflow on server {}", self.id);
        Self {
            queue_len: self.queue_len - 1,
            ..self.clone()
        }
    }

    /// Pushes `next_free_at` forward by one rest period, drawing the rest
    /// supplier exactly once.
    pub fn add_rest_time(&self) -> Self {
        let rest = self.rest_time.get();
        self.update_state(self.next_free_at + rest, self.available)
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ServerKind::Human => write!(f, "{}", self.id),
            ServerKind::SelfCheckout => write!(f, "self-check {}", self.id),
        }
    }
}
