use std::fmt;

/// Errors raised while building a simulation from its configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Neither human servers nor self-checkout counters were configured
    NoServers,
    /// A count was given as a negative number
    NegativeCount { field: &'static str, value: i64 },
    /// An arrival time is negative, NaN or infinite
    InvalidArrivalTime { index: usize, value: f64 },
    /// A fixed duration is negative, NaN or infinite
    InvalidDuration { field: &'static str, value: f64 },
    /// A distribution rate is not a positive finite number
    InvalidRate { field: &'static str, value: f64 },
    /// A probability lies outside [0, 1]
    InvalidProbability(f64),
    /// A token could not be parsed for the named field
    Parse { field: &'static str, value: String },
    /// Input ended before the named field
    MissingField(&'static str),
    /// The rayon pool for replications could not be created
    ThreadPool(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoServers => write!(f, "At least one server or self-checkout is required"),
            ConfigError::NegativeCount { field, value } => {
                write!(f, "{} must not be negative, got {}", field, value)
            }
            ConfigError::InvalidArrivalTime { index, value } => {
                write!(f, "Arrival time #{} is invalid: {}", index + 1, value)
            }
            ConfigError::InvalidDuration { field, value } => {
                write!(f, "{} must be a non-negative finite duration, got {}", field, value)
            }
            ConfigError::InvalidRate { field, value } => {
                write!(f, "{} must be a positive finite rate, got {}", field, value)
            }
            ConfigError::InvalidProbability(p) => {
                write!(f, "Rest probability must lie in [0, 1], got {}", p)
            }
            ConfigError::Parse { field, value } => write!(f, "Cannot parse {} from '{}'", field, value),
            ConfigError::MissingField(field) => write!(f, "Input ended before {}", field),
            ConfigError::ThreadPool(msg) => write!(f, "Thread pool error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
