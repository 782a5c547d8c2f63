//! Whitespace-separated driver input.
//!
//! Two forms are accepted:
//!
//! ```text
//! <servers> <self_checkouts> <max_queue> <customers> <service_time> <rest_time> <arrival>...
//! random <servers> <self_checkouts> <max_queue> <customers> <seed> <arrival_rate> <service_rate> <rest_rate> <rest_probability>
//! ```
//!
//! The first uses constant service and rest durations with explicit arrival
//! timestamps; the second draws everything from a seeded generator.

use super::errors::ConfigError;
use super::execution::config::{SimulationConfig, WorkloadConfig};
use super::random::Workload;
use super::supplier::Supplier;
use log::warn;
use std::str::{FromStr, SplitWhitespace};

const RANDOM_KEYWORD: &str = "random";

/// Parsed driver input.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopInput {
    Fixed {
        config: SimulationConfig,
        service_time: f64,
        rest_time: f64,
    },
    Random(WorkloadConfig),
}

impl ShopInput {
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let mut tokens = Tokens::new(input);
        let random = tokens.peek() == Some(RANDOM_KEYWORD);
        if random {
            tokens.skip();
        }

        let servers = tokens.count("server count")?;
        let self_checkouts = tokens.count("self-checkout count")?;
        let max_queue = tokens.count("max queue length")?;
        let customers = tokens.count("customer count")?;

        let parsed = if random {
            let seed = tokens.value::<u64>("seed")?;
            let arrival_rate = tokens.value::<f64>("arrival rate")?;
            let service_rate = tokens.value::<f64>("service rate")?;
            let rest_rate = tokens.value::<f64>("rest rate")?;
            let rest_probability = tokens.value::<f64>("rest probability")?;

            let workload = WorkloadConfig::new(servers, self_checkouts, max_queue, customers)
                .with_seed(seed)
                .with_rates(arrival_rate, service_rate)
                .with_rest(rest_rate, rest_probability);
            workload.validate()?;
            ShopInput::Random(workload)
        } else {
            let service_time = tokens.duration("service time")?;
            let rest_time = tokens.duration("rest time")?;
            let arrival_times = (0..customers)
                .map(|_| tokens.value::<f64>("arrival time"))
                .collect::<Result<Vec<_>, _>>()?;

            let config = SimulationConfig::new()
                .with_servers(servers)
                .with_self_checkouts(self_checkouts)
                .with_max_queue(max_queue)
                .with_arrival_times(arrival_times);
            config.validate()?;
            ShopInput::Fixed {
                config,
                service_time,
                rest_time,
            }
        };

        let trailing = tokens.remaining();
        if trailing > 0 {
            warn!("Ignoring {} trailing input tokens", trailing);
        }
        Ok(parsed)
    }

    /// Resolve into a run configuration and its two suppliers
    pub fn into_parts(self) -> Result<(SimulationConfig, Supplier, Supplier), ConfigError> {
        match self {
            ShopInput::Fixed {
                config,
                service_time,
                rest_time,
            } => Ok((config, Supplier::constant(service_time), Supplier::constant(rest_time))),
            ShopInput::Random(workload) => {
                let Workload {
                    config,
                    service_time,
                    rest_time,
                } = Workload::generate(&workload)?;
                Ok((config, service_time, rest_time))
            }
        }
    }
}

struct Tokens<'a> {
    inner: std::iter::Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace().peekable(),
        }
    }

    fn peek(&mut self) -> Option<&'a str> {
        self.inner.peek().copied()
    }

    fn skip(&mut self) {
        self.inner.next();
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }

    fn value<T: FromStr>(&mut self, field: &'static str) -> Result<T, ConfigError> {
        let token = self.inner.next().ok_or(ConfigError::MissingField(field))?;
        token.parse().map_err(|_| ConfigError::Parse {
            field,
            value: token.to_string(),
        })
    }

    fn count(&mut self, field: &'static str) -> Result<usize, ConfigError> {
        let value = self.value::<i64>(field)?;
        usize::try_from(value).map_err(|_| ConfigError::NegativeCount { field, value })
    }

    fn duration(&mut self, field: &'static str) -> Result<f64, ConfigError> {
        let value = self.value::<f64>(field)?;
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(ConfigError::InvalidDuration { field, value })
        }
    }
}
