pub mod elevator;

pub use elevator::Elevator;
pub use elevator::START_FLOOR;
