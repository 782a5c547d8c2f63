use super::customer::Customer;
use super::errors::ConfigError;
use super::event::Event;
use super::event_scheduler::EventScheduler;
use super::execution::config::SimulationConfig;
use super::roster::Roster;
use super::statistics::Statistics;
use super::supplier::Supplier;
use super::types::SimTime;
use log::{debug, info, trace};
use std::fmt;

/// Observer trait for simulation events
pub trait SimulationObserver {
    /// Called when simulated time moves forward
    fn on_time_advance(&mut self, old_time: SimTime, new_time: SimTime);

    /// Called after an event was applied, with the roster that replaced the old one
    fn on_event_processed(&mut self, event: &Event, roster: &Roster);
}

/// Rendered output and totals of a finished run.
#[derive(Debug, Clone, Default)]
pub struct SimulationReport {
    pub lines: Vec<String>,
    pub statistics: Statistics,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        write!(f, "{}", self.statistics)
    }
}

/// Discrete-event driver for one shop.
///
/// Owns the pending events and the current roster. Each step takes the
/// earliest event, applies it, schedules its successor unless the chain has
/// ended, and folds the event into the statistics.
pub struct SimulationEngine {
    scheduler: EventScheduler,
    roster: Roster,
    statistics: Statistics,
    lines: Vec<String>,
    current_time: SimTime,
    events_processed: u64,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl SimulationEngine {
    /// Build the roster and seed one arrival per configured timestamp
    ///
    /// Every customer shares `service_time` as its supplier but draws from it
    /// at most once; human servers draw `rest_time` once per completed service.
    pub fn new(config: &SimulationConfig, service_time: Supplier, rest_time: Supplier) -> Result<Self, ConfigError> {
        config.validate()?;

        let roster = Roster::build(config.servers, config.self_checkouts, config.max_queue, rest_time);
        let customers = config
            .arrival_times
            .iter()
            .enumerate()
            .map(|(index, &time)| Customer::new(index + 1, time, service_time.clone()));

        Ok(Self::from_parts(roster, customers))
    }

    /// Start from an explicit roster and customer set
    pub fn from_parts<I>(roster: Roster, customers: I) -> Self
    where
        I: IntoIterator<Item = Customer>,
    {
        let mut scheduler = EventScheduler::new();
        scheduler.extend(customers.into_iter().map(Event::arrive));
        debug!(
            "Seeded {} arrivals over {} service points",
            scheduler.len(),
            roster.len()
        );

        Self {
            scheduler,
            roster,
            statistics: Statistics::new(),
            lines: Vec::new(),
            current_time: 0.0,
            events_processed: 0,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    fn notify_time_advance(&mut self, old_time: SimTime, new_time: SimTime) {
        for observer in &mut self.observers {
            observer.on_time_advance(old_time, new_time);
        }
    }

    fn notify_event_processed(&mut self, event: &Event) {
        for observer in &mut self.observers {
            observer.on_event_processed(event, &self.roster);
        }
    }

    /// Process one event, returns true if events remain
    pub fn step(&mut self) -> bool {
        let Some(event) = self.scheduler.pop_next() else {
            return false;
        };

        let old_time = self.current_time;
        self.current_time = event.time();
        if old_time != self.current_time {
            self.notify_time_advance(old_time, self.current_time);
        }

        debug!(
            "t={:.3} customer {} {}",
            event.time(),
            event.customer().id(),
            event.name()
        );

        let roster = std::mem::take(&mut self.roster);
        let (successor, roster) = event.transition(roster);
        match successor.into_event() {
            Some(next) => self.scheduler.schedule_event(next),
            None => trace!("customer {} chain ended", event.customer().id()),
        }

        self.statistics.record(&event);
        if event.is_reportable() {
            self.lines.push(event.to_string());
        }

        self.roster = roster;
        self.events_processed += 1;
        self.notify_event_processed(&event);

        self.has_pending_events()
    }

    /// Run until no events remain and return the report
    pub fn run(mut self) -> SimulationReport {
        while self.step() {}

        info!(
            "Simulation finished after {} events at t={:.3}: {}",
            self.events_processed, self.current_time, self.statistics
        );

        SimulationReport {
            lines: self.lines,
            statistics: self.statistics,
        }
    }

    /// Get current simulation time
    pub fn current_time(&self) -> SimTime {
        self.current_time
    }

    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    /// Check if there are pending events in the scheduler
    pub fn has_pending_events(&self) -> bool {
        self.scheduler.has_events()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Reportable lines produced so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Run one configured simulation and render its full output
pub fn simulate(config: &SimulationConfig, service_time: Supplier, rest_time: Supplier) -> Result<String, ConfigError> {
    let engine = SimulationEngine::new(config, service_time, rest_time)?;
    Ok(engine.run().to_string())
}
