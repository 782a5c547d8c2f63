//! Configuration for shop simulation runs
//!
//! This module provides the configuration types for a single simulation run,
//! for randomized workloads, and for executing batches of replications.

use crate::core::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Enumeration of supported concurrency modes for replication batches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConcurrencyMode {
    /// Sequential execution mode - replications run one after another on the calling thread
    #[default]
    Sequential,
    /// Parallel execution mode using Rayon - independent replications run concurrently
    Rayon,
}

/// Configuration of one simulation run
///
/// Holds the shop layout and the arrival timestamps. Customers are numbered
/// from 1 in the order of `arrival_times`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of human servers, ids `1..=servers`
    pub servers: usize,
    /// Number of self-checkout counters, numbered after the human servers
    pub self_checkouts: usize,
    /// Maximum queue length at every server and at the shared self-checkout queue
    pub max_queue: usize,
    /// Arrival timestamps, one per customer
    pub arrival_times: Vec<f64>,
}

impl SimulationConfig {
    /// Create a new simulation configuration with default values
    ///
    /// Default configuration is one human server, no self-checkouts,
    /// a queue of length one and no customers
    pub fn new() -> Self {
        Self {
            servers: 1,
            self_checkouts: 0,
            max_queue: 1,
            arrival_times: Vec::new(),
        }
    }

    /// Set the number of human servers
    pub fn with_servers(mut self, servers: usize) -> Self {
        self.servers = servers;
        self
    }

    /// Set the number of self-checkout counters
    pub fn with_self_checkouts(mut self, self_checkouts: usize) -> Self {
        self.self_checkouts = self_checkouts;
        self
    }

    /// Set the maximum queue length
    pub fn with_max_queue(mut self, max_queue: usize) -> Self {
        self.max_queue = max_queue;
        self
    }

    /// Set the arrival timestamps
    ///
    /// # Arguments
    /// * `arrival_times` - One timestamp per customer, in customer id order
    pub fn with_arrival_times(mut self, arrival_times: Vec<f64>) -> Self {
        self.arrival_times = arrival_times;
        self
    }

    /// Total number of service points
    pub fn total_servers(&self) -> usize {
        self.servers + self.self_checkouts
    }

    /// Check the configuration before any simulation state is built
    ///
    /// # Returns
    /// `ConfigError::NoServers` when no service point exists, or
    /// `ConfigError::InvalidArrivalTime` for a negative or non-finite arrival
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_servers() == 0 {
            return Err(ConfigError::NoServers);
        }
        if let Some((index, &value)) = self
            .arrival_times
            .iter()
            .enumerate()
            .find(|(_, t)| !t.is_finite() || **t < 0.0)
        {
            return Err(ConfigError::InvalidArrivalTime { index, value });
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration of a randomized workload
///
/// Inter-arrival, service and rest durations are exponentially distributed
/// with the given rates; a server rests after a service with probability
/// `rest_probability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    pub servers: usize,
    pub self_checkouts: usize,
    pub max_queue: usize,
    /// Number of customers to generate
    pub customers: usize,
    /// Seed for the random number generator
    pub seed: u64,
    pub arrival_rate: f64,
    pub service_rate: f64,
    pub rest_rate: f64,
    pub rest_probability: f64,
}

impl WorkloadConfig {
    /// Create a workload with unit rates, no rests and seed 0
    pub fn new(servers: usize, self_checkouts: usize, max_queue: usize, customers: usize) -> Self {
        Self {
            servers,
            self_checkouts,
            max_queue,
            customers,
            seed: 0,
            arrival_rate: 1.0,
            service_rate: 1.0,
            rest_rate: 1.0,
            rest_probability: 0.0,
        }
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set arrival and service rates
    pub fn with_rates(mut self, arrival_rate: f64, service_rate: f64) -> Self {
        self.arrival_rate = arrival_rate;
        self.service_rate = service_rate;
        self
    }

    /// Set the rest rate and the probability of resting after a service
    pub fn with_rest(mut self, rest_rate: f64, rest_probability: f64) -> Self {
        self.rest_rate = rest_rate;
        self.rest_probability = rest_probability;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.servers + self.self_checkouts == 0 {
            return Err(ConfigError::NoServers);
        }
        for (field, value) in [
            ("arrival rate", self.arrival_rate),
            ("service rate", self.service_rate),
            ("rest rate", self.rest_rate),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidRate { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.rest_probability) {
            return Err(ConfigError::InvalidProbability(self.rest_probability));
        }
        Ok(())
    }
}

/// Configuration for executing a batch of replications
///
/// This struct holds configuration options that control how independent
/// runs are executed, including concurrency settings and resource management.
#[derive(Debug, Clone, Default)]
pub struct ReplicationConfig {
    /// The concurrency mode to use for execution
    pub concurrency_mode: ConcurrencyMode,
    /// The size of the thread pool for parallel execution
    /// Only relevant when concurrency_mode is Rayon
    pub thread_pool_size: Option<usize>,
}

impl ReplicationConfig {
    /// Create a new replication configuration with default values
    ///
    /// Default configuration uses Sequential mode with no thread pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the concurrency mode for the batch
    ///
    /// # Arguments
    /// * `mode` - The concurrency mode to use
    ///
    /// # Returns
    /// A new configuration with the specified concurrency mode
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel execution
    ///
    /// # Note
    /// This setting only affects execution when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }
}
