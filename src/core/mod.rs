pub mod customer;
pub mod errors;
pub mod event;
pub mod event_scheduler;
pub mod execution;
pub mod input;
pub mod queue_manager;
pub mod random;
pub mod render;
pub mod roster;
pub mod server;
pub mod simulation_engine;
pub mod statistics;
pub mod supplier;
pub mod types;

#[cfg(test)]
mod tests;
