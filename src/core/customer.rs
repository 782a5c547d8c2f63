use super::supplier::{Deferred, Supplier};
use super::types::{CustomerId, SimTime};
use std::fmt;

/// A shop customer. Cloning is cheap and clones share the service duration.
#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    arrival_time: SimTime,
    service_time: Deferred,
}

impl Customer {
    pub fn new(id: CustomerId, arrival_time: SimTime, service_time: Supplier) -> Self {
        Self {
            id,
            // -0.0 must order and print as 0.0
            arrival_time: arrival_time + 0.0,
            service_time: Deferred::new(service_time),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn arrival_time(&self) -> SimTime {
        self.arrival_time
    }

    /// Service duration. Drawn from the supplier on first use, fixed afterwards.
    pub fn service_time(&self) -> f64 {
        self.service_time.value()
    }

    pub fn is_service_time_drawn(&self) -> bool {
        self.service_time.is_drawn()
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
