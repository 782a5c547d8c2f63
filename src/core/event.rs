use super::customer::Customer;
use super::queue_manager::{self, QueueDelta};
use super::render::Millis;
use super::roster::Roster;
use super::server::Server;
use super::types::SimTime;
use std::cmp::Ordering;
use std::fmt;

/// One occurrence in a customer's life at the shop.
///
/// Events are never mutated. Applying [`Event::transition`] to the current
/// roster yields what happens next for the same customer together with the
/// updated roster.
#[derive(Debug, Clone)]
pub enum Event {
    /// Customer walks in.
    Arrive { time: SimTime, customer: Customer },
    /// Service starts on `server`.
    Serve {
        time: SimTime,
        customer: Customer,
        server: Server,
    },
    /// Customer is queued at `server`. Only the `first` instance is reported;
    /// repeats are silent re-checks at the server's next free moment.
    Wait {
        time: SimTime,
        customer: Customer,
        server: Server,
        first: bool,
    },
    /// Service finished on `server`.
    Done {
        time: SimTime,
        customer: Customer,
        server: Server,
    },
    /// No queue slot anywhere; the customer leaves.
    Leave { time: SimTime, customer: Customer },
}

/// What follows an event in its customer's causal chain.
#[derive(Debug, Clone)]
pub enum Successor {
    Next(Event),
    /// The chain ends here; nothing is scheduled.
    Terminal,
}

impl Successor {
    pub fn into_event(self) -> Option<Event> {
        match self {
            Successor::Next(event) => Some(event),
            Successor::Terminal => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Successor::Terminal)
    }
}

impl Event {
    pub fn arrive(customer: Customer) -> Self {
        Event::Arrive {
            time: customer.arrival_time(),
            customer,
        }
    }

    pub fn time(&self) -> SimTime {
        match self {
            Event::Arrive { time, .. }
            | Event::Serve { time, .. }
            | Event::Wait { time, .. }
            | Event::Done { time, .. }
            | Event::Leave { time, .. } => *time,
        }
    }

    pub fn customer(&self) -> &Customer {
        match self {
            Event::Arrive { customer, .. }
            | Event::Serve { customer, .. }
            | Event::Wait { customer, .. }
            | Event::Done { customer, .. }
            | Event::Leave { customer, .. } => customer,
        }
    }

    /// Server bound to the event, `None` for arrivals and departures.
    pub fn server(&self) -> Option<&Server> {
        match self {
            Event::Serve { server, .. } | Event::Wait { server, .. } | Event::Done { server, .. } => {
                Some(server)
            }
            Event::Arrive { .. } | Event::Leave { .. } => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Event::Arrive { .. } => "arrive",
            Event::Serve { .. } => "serve",
            Event::Wait { first: true, .. } => "wait",
            Event::Wait { first: false, .. } => "wait (repeat)",
            Event::Done { .. } => "done",
            Event::Leave { .. } => "leave",
        }
    }

    /// Customers fully served by this event.
    pub fn served_count(&self) -> usize {
        match self {
            Event::Done { .. } => 1,
            _ => 0,
        }
    }

    /// Customers turned away by this event.
    pub fn left_count(&self) -> usize {
        match self {
            Event::Leave { .. } => 1,
            _ => 0,
        }
    }

    /// Time the customer spent waiting before this event, non-zero only when
    /// service starts.
    pub fn waiting_time(&self) -> f64 {
        match self {
            Event::Serve { time, customer, .. } => time - customer.arrival_time(),
            _ => 0.0,
        }
    }

    /// Whether the event produces a line of output.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Event::Wait { first: false, .. })
    }

    /// Processing order: earlier time first, then lower customer id.
    pub fn schedule_cmp(&self, other: &Self) -> Ordering {
        self.time()
            .total_cmp(&other.time())
            .then_with(|| self.customer().id().cmp(&other.customer().id()))
    }

    /// Applies the event to `roster`, returning the customer's next event
    /// and the roster that replaces the input.
    pub fn transition(&self, roster: Roster) -> (Successor, Roster) {
        match self {
            Event::Arrive { customer, .. } => arrive(customer, roster),
            Event::Serve {
                time,
                customer,
                server,
            } => serve(*time, customer, server, roster),
            Event::Wait {
                time,
                customer,
                server,
                ..
            } => wait(*time, customer, server, roster),
            Event::Done { server, .. } => {
                let rested = roster.server(server.id()).add_rest_time();
                (Successor::Terminal, roster.set(rested))
            }
            Event::Leave { .. } => (Successor::Terminal, roster),
        }
    }
}

fn arrive(customer: &Customer, roster: Roster) -> (Successor, Roster) {
    let time = customer.arrival_time();

    if let Some(id) = queue_manager::find_servable(&roster, time) {
        let server = roster.server(id).update_state(time, false);
        let roster = roster.set(server.clone());
        let next = Event::Serve {
            time,
            customer: customer.clone(),
            server,
        };
        return (Successor::Next(next), roster);
    }

    let Some(id) = queue_manager::find_queueable(&roster) else {
        let next = Event::Leave {
            time,
            customer: customer.clone(),
        };
        return (Successor::Next(next), roster);
    };

    let (server, roster) = if roster.server(id).is_self_checkout() {
        let roster = queue_manager::bump_self_checkout_queues(roster, QueueDelta::Join);
        // the shared queue is represented by the lowest counter id
        let head = queue_manager::first_self_checkout(&roster).unwrap_or(id);
        (roster.server(head).clone(), roster)
    } else {
        let server = roster.server(id).inc_queue();
        (server.clone(), roster.set(server))
    };

    let next = Event::Wait {
        time,
        customer: customer.clone(),
        server,
        first: true,
    };
    (Successor::Next(next), roster)
}

fn serve(time: SimTime, customer: &Customer, server: &Server, roster: Roster) -> (Successor, Roster) {
    let end = time + customer.service_time();
    let server = roster.server(server.id()).update_state(end, true);
    let roster = roster.set(server.clone());
    let next = Event::Done {
        time: end,
        customer: customer.clone(),
        server,
    };
    (Successor::Next(next), roster)
}

fn wait(time: SimTime, customer: &Customer, bound: &Server, roster: Roster) -> (Successor, Roster) {
    let current = roster.server(bound.id());

    if !current.is_self_checkout() {
        if current.can_serve(time) {
            let server = current.update_state(time, false).dec_queue();
            let roster = roster.set(server.clone());
            let next = Event::Serve {
                time,
                customer: customer.clone(),
                server,
            };
            return (Successor::Next(next), roster);
        }
        let next = Event::Wait {
            time: current.next_free_at(),
            customer: customer.clone(),
            server: current.clone(),
            first: false,
        };
        return (Successor::Next(next), roster);
    }

    let free = roster
        .self_checkouts()
        .find(|s| s.can_serve(time))
        .map(|s| s.id());

    if let Some(id) = free {
        let busy = roster.server(id).update_state(time, false);
        let roster = queue_manager::bump_self_checkout_queues(roster.set(busy), QueueDelta::Leave);
        let next = Event::Serve {
            time,
            customer: customer.clone(),
            server: roster.server(id).clone(),
        };
        return (Successor::Next(next), roster);
    }

    let id = queue_manager::earliest_free_self_checkout(&roster).unwrap_or(current.id());
    let server = roster.server(id).clone();
    let next = Event::Wait {
        time: server.next_free_at(),
        customer: customer.clone(),
        server,
        first: false,
    };
    (Successor::Next(next), roster)
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_reportable() {
            return Ok(());
        }
        write!(f, "{} {} ", Millis(self.time()), self.customer())?;
        match self {
            Event::Arrive { .. } => write!(f, "arrives"),
            Event::Serve { server, .. } => write!(f, "serves by {}", server),
            Event::Wait { server, .. } => write!(f, "waits at {}", server),
            Event::Done { server, .. } => write!(f, "done serving by {}", server),
            Event::Leave { .. } => write!(f, "leaves"),
        }
    }
}
