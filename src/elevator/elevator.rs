/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, ElevatorSnapshot, Event, EventKind, TransferError};

/***************************************/
/*             Constants               */
/***************************************/
pub const START_FLOOR: i32 = 1;

/**
 * A single elevator car.
 *
 * The `Elevator` keeps track of where the car is, which way it last travelled and how many
 * people are on board. Every state transition is reported on `event_tx` so that a renderer
 * (or a test) can follow what happened without the elevator knowing about any output device.
 *
 * # Fields
 * - `id`:              Unique id within the system, fixed at construction.
 * - `current_floor`:   Floor the car is at. Moves are instantaneous, so this is never in between floors.
 * - `is_moving`:       Busy flag. A busy elevator is never selected by the dispatcher.
 * - `direction`:       Direction of the most recent move that changed floor.
 * - `capacity`:        Maximum number of people on board.
 * - `occupancy`:       Number of people on board, always `<= capacity`.
 * - `event_tx`:        Notification channel. A disconnected receiver is ignored.
 */
#[derive(Debug)]
pub struct Elevator {
    id: u32,
    current_floor: i32,
    is_moving: bool,
    direction: Direction,
    capacity: u32,
    occupancy: u32,
    event_tx: cbc::Sender<Event>,
}

impl Elevator {
    pub fn new(id: u32, capacity: u32, event_tx: cbc::Sender<Event>) -> Elevator {
        Elevator {
            id,
            current_floor: START_FLOOR,
            is_moving: false,
            direction: Direction::Stopped,
            capacity,
            occupancy: 0,
            event_tx,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            id: self.id,
            current_floor: self.current_floor,
            is_moving: self.is_moving,
            direction: self.direction,
            occupancy: self.occupancy,
        }
    }

    /// Moves the car to `target_floor`. The move completes before this returns, so the
    /// elevator is never left flagged as moving.
    ///
    /// A move to the current floor keeps the previous direction.
    pub fn move_to_floor(&mut self, target_floor: i32) {
        if target_floor > self.current_floor {
            self.direction = Direction::Up;
        } else if target_floor < self.current_floor {
            self.direction = Direction::Down;
        }

        self.notify(
            EventKind::Moving,
            format!(
                "Elevator {} is moving from floor {} to floor {}.",
                self.id, self.current_floor, target_floor
            ),
        );
        self.current_floor = target_floor;
        self.notify(
            EventKind::Arrived,
            format!(
                "Elevator {} has arrived at floor {}.",
                self.id, self.current_floor
            ),
        );

        self.is_moving = false;
    }

    /// Lets `count` people board. Returns the new occupancy, or leaves the elevator untouched
    /// if they would not fit.
    pub fn enter(&mut self, count: u32) -> Result<u32, TransferError> {
        match self.occupancy.checked_add(count) {
            Some(occupancy) if occupancy <= self.capacity => {
                self.occupancy = occupancy;
                self.notify(
                    EventKind::Boarded,
                    format!("Entered {} people in elevator {}.", count, self.id),
                );
                Ok(self.occupancy)
            }
            _ => {
                self.notify(
                    EventKind::BoardingRejected,
                    format!("Elevator {} is at full capacity.", self.id),
                );
                Err(TransferError::CapacityExceeded {
                    elevator_id: self.id,
                    requested: count,
                    occupancy: self.occupancy,
                    capacity: self.capacity,
                })
            }
        }
    }

    /// Lets `count` people out. Returns the new occupancy, or leaves the elevator untouched
    /// if fewer than `count` are on board.
    pub fn exit(&mut self, count: u32) -> Result<u32, TransferError> {
        match self.occupancy.checked_sub(count) {
            Some(occupancy) => {
                self.occupancy = occupancy;
                self.notify(
                    EventKind::Exited,
                    format!("Exited {} people from elevator {}.", count, self.id),
                );
                Ok(self.occupancy)
            }
            None => {
                self.notify(
                    EventKind::ExitRejected,
                    format!("There are not enough people in elevator {}.", self.id),
                );
                Err(TransferError::InsufficientOccupants {
                    elevator_id: self.id,
                    requested: count,
                    occupancy: self.occupancy,
                })
            }
        }
    }

    // Only the dispatcher marks an elevator busy
    pub(crate) fn set_moving(&mut self, is_moving: bool) {
        self.is_moving = is_moving;
    }

    fn notify(&self, kind: EventKind, detail: String) {
        match kind {
            EventKind::BoardingRejected | EventKind::ExitRejected => warn!("{}", detail),
            _ => debug!("{}", detail),
        }
        // Nobody listening is fine
        let _ = self
            .event_tx
            .send(Event::new(Some(self.id), kind, detail));
    }
}
