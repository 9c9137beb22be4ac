//! Simulation of a small bank of elevators.
//!
//! An [`ElevatorSystem`] owns a fixed set of [`Elevator`]s and sends the nearest idle one to
//! every call. State changes are reported as [`Event`]s on a crossbeam channel so that the
//! core never writes to the console itself.

/* Modules */
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod elevator;
pub mod shared;

pub use cli::Cli;
pub use config::{Config, ConfigError, SystemConfig};
pub use dispatcher::ElevatorSystem;
pub use elevator::Elevator;
pub use shared::{
    CallOutcome, Direction, DispatchError, ElevatorSnapshot, Event, EventKind, TransferError,
};
