use super::errors::ConfigError;
use super::execution::config::{SimulationConfig, WorkloadConfig};
use super::supplier::Supplier;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};
use std::cell::RefCell;
use std::rc::Rc;

/// Seeded source of workload durations.
///
/// All draws come from one RNG stream, so a given seed always reproduces the
/// same sequence as long as draws happen in the same order.
#[derive(Debug)]
pub struct RandomGenerator {
    rng: StdRng,
    arrival: Exp<f64>,
    service: Exp<f64>,
    rest: Exp<f64>,
}

impl RandomGenerator {
    pub fn new(seed: u64, arrival_rate: f64, service_rate: f64, rest_rate: f64) -> Result<Self, ConfigError> {
        let exp = |field: &'static str, value: f64| {
            Exp::new(value).map_err(|_| ConfigError::InvalidRate { field, value })
        };
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            arrival: exp("arrival rate", arrival_rate)?,
            service: exp("service rate", service_rate)?,
            rest: exp("rest rate", rest_rate)?,
        })
    }

    pub fn inter_arrival_time(&mut self) -> f64 {
        self.arrival.sample(&mut self.rng)
    }

    pub fn service_time(&mut self) -> f64 {
        self.service.sample(&mut self.rng)
    }

    /// Uniform draw in `[0, 1)` deciding whether a server rests.
    pub fn rest_roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    pub fn rest_period(&mut self) -> f64 {
        self.rest.sample(&mut self.rng)
    }
}

/// Everything needed to start a randomized run.
#[derive(Debug, Clone)]
pub struct Workload {
    pub config: SimulationConfig,
    pub service_time: Supplier,
    pub rest_time: Supplier,
}

impl Workload {
    /// Draws the arrival timestamps up front and wires the service and rest
    /// suppliers to the same generator.
    ///
    /// The first customer arrives at 0; each later one arrives one
    /// exponential gap after the previous.
    pub fn generate(workload: &WorkloadConfig) -> Result<Self, ConfigError> {
        workload.validate()?;
        let mut generator = RandomGenerator::new(
            workload.seed,
            workload.arrival_rate,
            workload.service_rate,
            workload.rest_rate,
        )?;

        let mut clock = 0.0;
        let arrival_times = (0..workload.customers)
            .map(|index| {
                if index > 0 {
                    clock += generator.inter_arrival_time();
                }
                clock
            })
            .collect();

        let config = SimulationConfig::new()
            .with_servers(workload.servers)
            .with_self_checkouts(workload.self_checkouts)
            .with_max_queue(workload.max_queue)
            .with_arrival_times(arrival_times);

        let generator = Rc::new(RefCell::new(generator));
        let service_source = Rc::clone(&generator);
        let service_time = Supplier::new(move || service_source.borrow_mut().service_time());

        let rest_probability = workload.rest_probability;
        let rest_time = Supplier::new(move || {
            let mut generator = generator.borrow_mut();
            if generator.rest_roll() < rest_probability {
                generator.rest_period()
            } else {
                0.0
            }
        });

        Ok(Self {
            config,
            service_time,
            rest_time,
        })
    }
}
