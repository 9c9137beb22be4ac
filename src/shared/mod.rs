pub mod macros;
pub mod structs;

pub use structs::CallOutcome;
pub use structs::Direction;
pub use structs::DispatchError;
pub use structs::ElevatorSnapshot;
pub use structs::Event;
pub use structs::EventKind;
pub use structs::TransferError;
