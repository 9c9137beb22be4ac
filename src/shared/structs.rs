/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stopped,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
            Direction::Stopped => write!(f, "Stopped"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Moving,
    Arrived,
    Boarded,
    BoardingRejected,
    Exited,
    ExitRejected,
    AllBusy,
}

/**
 * Notification emitted by the elevators and the dispatcher.
 *
 * `elevator_id` is `None` only for system wide notifications (`AllBusy`).
 * `detail` is the human readable message a renderer may print as is.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Event {
    #[serde(rename = "elevatorId")]
    pub elevator_id: Option<u32>,
    pub kind: EventKind,
    pub detail: String,
}

impl Event {
    pub fn new(elevator_id: Option<u32>, kind: EventKind, detail: String) -> Event {
        Event {
            elevator_id,
            kind,
            detail,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

/// Point in time copy of the observable state of one elevator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorSnapshot {
    pub id: u32,
    #[serde(rename = "currentFloor")]
    pub current_floor: i32,
    #[serde(rename = "isMoving")]
    pub is_moving: bool,
    pub direction: Direction,
    pub occupancy: u32,
}

impl fmt::Display for ElevatorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let is_moving = if self.is_moving { "True" } else { "False" };
        writeln!(f, "Elevator {}:", self.id)?;
        writeln!(f, "  Current floor: {}", self.current_floor)?;
        writeln!(f, "  Is moving: {}", is_moving)?;
        writeln!(f, "  Direction: {}", self.direction)?;
        write!(f, "  Number of people: {}", self.occupancy)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// The elevator reached the floor and everyone boarded.
    Dispatched { elevator_id: u32 },
    /// The elevator reached the floor and is now busy, but nobody boarded.
    CapacityExceeded { elevator_id: u32 },
    /// No idle elevator. The call is dropped.
    AllBusy,
}

impl CallOutcome {
    pub fn elevator_id(&self) -> Option<u32> {
        match *self {
            CallOutcome::Dispatched { elevator_id } => Some(elevator_id),
            CallOutcome::CapacityExceeded { elevator_id } => Some(elevator_id),
            CallOutcome::AllBusy => None,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransferError {
    #[error("elevator {elevator_id} cannot take {requested} more people ({occupancy}/{capacity} on board)")]
    CapacityExceeded {
        elevator_id: u32,
        requested: u32,
        occupancy: u32,
        capacity: u32,
    },

    #[error("elevator {elevator_id} cannot let {requested} people out, only {occupancy} on board")]
    InsufficientOccupants {
        elevator_id: u32,
        requested: u32,
        occupancy: u32,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    #[error("elevator {0} not found")]
    ElevatorNotFound(u32),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}
