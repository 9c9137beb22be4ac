/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{ConfigError, SystemConfig};
use crate::elevator::Elevator;
use crate::shared::{CallOutcome, DispatchError, ElevatorSnapshot, Event, EventKind};

/**
 * Owns the elevator bank and decides which elevator serves a call.
 *
 * Calls are resolved one at a time: the nearest idle elevator is moved to the calling floor,
 * the waiting people board, and the elevator is marked busy. Nothing marks an elevator idle
 * again, so every elevator serves at most one call.
 *
 * # Fields
 * - `elevators`:   The elevators in construction order, ids `1..=n`. Never grows or shrinks.
 * - `event_tx`:    Notification channel shared with every elevator.
 */
#[derive(Debug)]
pub struct ElevatorSystem {
    elevators: Vec<Elevator>,
    event_tx: cbc::Sender<Event>,
}

impl ElevatorSystem {
    pub fn new(
        n_elevators: u32,
        capacity: u32,
        event_tx: cbc::Sender<Event>,
    ) -> Result<ElevatorSystem, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidCapacity(capacity));
        }

        let elevators = (1..=n_elevators)
            .map(|id| Elevator::new(id, capacity, event_tx.clone()))
            .collect::<Vec<Elevator>>();

        info!(
            "Elevator system started with {} elevators of capacity {}",
            n_elevators, capacity
        );

        Ok(ElevatorSystem {
            elevators,
            event_tx,
        })
    }

    pub fn from_config(
        config: &SystemConfig,
        event_tx: cbc::Sender<Event>,
    ) -> Result<ElevatorSystem, ConfigError> {
        config.validate()?;
        ElevatorSystem::new(config.n_elevators, config.capacity, event_tx)
    }

    /// Sends the nearest idle elevator to `floor` and lets `num_people` board.
    ///
    /// Ties go to the elevator constructed first. If the people do not fit, the elevator still
    /// travels and becomes busy, but nobody boards.
    pub fn call_elevator(&mut self, floor: i32, num_people: u32) -> CallOutcome {
        let nearest = self
            .elevators
            .iter()
            .enumerate()
            .filter(|(_, elevator)| !elevator.is_moving())
            .min_by_key(|(_, elevator)| elevator.current_floor().abs_diff(floor))
            .map(|(index, _)| index);

        let index = match nearest {
            Some(index) => index,
            None => {
                let detail = "All elevators are currently busy. Please wait.".to_string();
                warn!("Call to floor {} dropped: {}", floor, detail);
                let _ = self
                    .event_tx
                    .send(Event::new(None, EventKind::AllBusy, detail));
                return CallOutcome::AllBusy;
            }
        };

        let elevator = &mut self.elevators[index];
        let elevator_id = elevator.id();
        info!(
            "Dispatching elevator {} from floor {} to floor {} for {} people",
            elevator_id,
            elevator.current_floor(),
            floor,
            num_people
        );

        elevator.move_to_floor(floor);
        let boarded = elevator.enter(num_people);
        elevator.set_moving(true);

        match boarded {
            Ok(_) => CallOutcome::Dispatched { elevator_id },
            Err(_) => CallOutcome::CapacityExceeded { elevator_id },
        }
    }

    /// Lets `count` people out of elevator `elevator_id`. The elevator stays busy.
    pub fn release_passengers(
        &mut self,
        elevator_id: u32,
        count: u32,
    ) -> Result<u32, DispatchError> {
        let elevator = self
            .elevators
            .iter_mut()
            .find(|elevator| elevator.id() == elevator_id)
            .ok_or(DispatchError::ElevatorNotFound(elevator_id))?;

        Ok(elevator.exit(count)?)
    }

    pub fn get_elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn get_elevator(&self, elevator_id: u32) -> Option<&Elevator> {
        self.elevators
            .iter()
            .find(|elevator| elevator.id() == elevator_id)
    }

    // Vacuously true without elevators
    pub fn all_elevators_busy(&self) -> bool {
        self.elevators.iter().all(|elevator| elevator.is_moving())
    }

    pub fn show_elevator_status(&self) -> Vec<ElevatorSnapshot> {
        self.elevators
            .iter()
            .map(|elevator| elevator.snapshot())
            .collect()
    }
}

/***************************************/
/*          Test accessors             */
/***************************************/
#[cfg(test)]
impl ElevatorSystem {
    pub(crate) fn test_get_elevators_mut(&mut self) -> &mut [Elevator] {
        &mut self.elevators
    }
}
