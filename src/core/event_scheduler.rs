use super::event::Event;
use super::types::SimTime;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
pub struct ScheduledEvent {
    pub sequence_num: u64,
    pub event: Event,
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .event
            .schedule_cmp(&self.event)
            .then_with(|| other.sequence_num.cmp(&self.sequence_num))
    }
}

/// Time-ordered queue of pending events.
///
/// Events come out by ascending time, then ascending customer id, regardless
/// of the order they were scheduled in.
#[derive(Debug, Default)]
pub struct EventScheduler {
    event_queue: BinaryHeap<ScheduledEvent>,
    sequence_counter: u64,
}

impl EventScheduler {
    /// Create a new EventScheduler
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_event(&mut self, event: Event) {
        let scheduled_event = ScheduledEvent {
            sequence_num: self.sequence_counter,
            event,
        };

        self.event_queue.push(scheduled_event);
        self.sequence_counter += 1;
    }

    /// Remove and return the earliest pending event
    pub fn pop_next(&mut self) -> Option<Event> {
        self.event_queue.pop().map(|scheduled| scheduled.event)
    }

    /// Check if there are any events remaining in the queue
    pub fn has_events(&self) -> bool {
        !self.event_queue.is_empty()
    }

    /// Get the next event time without removing events
    pub fn peek_next_time(&self) -> Option<SimTime> {
        self.event_queue.peek().map(|scheduled| scheduled.event.time())
    }

    pub fn len(&self) -> usize {
        self.event_queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.event_queue.is_empty()
    }
}

impl Extend<Event> for EventScheduler {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, events: I) {
        for event in events {
            self.schedule_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::customer::Customer;
    use crate::core::supplier::Supplier;

    fn arrival(id: usize, time: f64) -> Event {
        Event::arrive(Customer::new(id, time, Supplier::constant(1.0)))
    }

    fn drain(mut scheduler: EventScheduler) -> Vec<(f64, usize)> {
        let mut order = Vec::new();
        while let Some(event) = scheduler.pop_next() {
            order.push((event.time(), event.customer().id()));
        }
        order
    }

    #[test]
    fn test_pops_in_time_order() {
        let mut scheduler = EventScheduler::new();
        scheduler.extend([arrival(1, 3.0), arrival(2, 0.5), arrival(3, 2.0)]);

        assert_eq!(scheduler.len(), 3);
        assert_eq!(scheduler.peek_next_time(), Some(0.5));
        assert_eq!(drain(scheduler), vec![(0.5, 2), (2.0, 3), (3.0, 1)]);
    }

    #[test]
    fn test_equal_times_resolve_by_customer_id() {
        let expected = vec![(1.0, 1), (1.0, 2), (1.0, 3), (1.0, 4)];
        let insertion_orders = [[1, 2, 3, 4], [4, 3, 2, 1], [2, 4, 1, 3], [3, 1, 4, 2]];

        for order in insertion_orders {
            let mut scheduler = EventScheduler::new();
            scheduler.extend(order.iter().map(|&id| arrival(id, 1.0)));
            assert_eq!(drain(scheduler), expected, "insertion order {:?}", order);
        }
    }

    #[test]
    fn test_empty_scheduler() {
        let mut scheduler = EventScheduler::new();
        assert!(!scheduler.has_events());
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.peek_next_time(), None);
        assert!(scheduler.pop_next().is_none());
    }
}
