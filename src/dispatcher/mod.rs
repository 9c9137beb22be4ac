pub mod dispatcher;
mod dispatcher_tests;

pub use dispatcher::ElevatorSystem;
