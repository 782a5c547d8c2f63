pub mod core;

// Re-export commonly used types
pub use crate::core::customer::Customer;
pub use crate::core::errors::ConfigError;
pub use crate::core::event::{Event, Successor};
pub use crate::core::execution::{ConcurrencyMode, ReplicationConfig, SimulationConfig, WorkloadConfig};
pub use crate::core::roster::Roster;
pub use crate::core::server::{Server, ServerKind};
pub use crate::core::simulation_engine::{simulate, SimulationEngine, SimulationObserver, SimulationReport};
pub use crate::core::statistics::Statistics;
pub use crate::core::supplier::Supplier;
pub use crate::core::types::{CustomerId, ServerId, SimTime};
