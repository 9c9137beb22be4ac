/*
 * Unit tests for dispatcher module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_system_init
 *  - test_system_nearest_idle_selected
 *  - test_system_three_elevator_scenario
 *  - test_system_all_busy / test_system_zero_elevators
 *  - test_system_capacity_exceeded_still_dispatches
 *  - test_system_release_passengers
 *  - test_system_status_idempotent
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatcher_tests {
    use crate::config::{ConfigError, SystemConfig};
    use crate::dispatcher::ElevatorSystem;
    use crate::shared::Direction::{Down, Stopped, Up};
    use crate::shared::{CallOutcome, DispatchError, Event, EventKind, TransferError};
    use crossbeam_channel::{unbounded, Receiver};

    fn setup_system(n_elevators: u32, capacity: u32) -> (ElevatorSystem, Receiver<Event>) {
        let (event_tx, event_rx) = unbounded::<Event>();
        let system = ElevatorSystem::new(n_elevators, capacity, event_tx).unwrap();
        (system, event_rx)
    }

    fn kinds(event_rx: &Receiver<Event>) -> Vec<EventKind> {
        event_rx.try_iter().map(|event| event.kind).collect()
    }

    #[test]
    fn test_system_init() {
        // Arrange
        let (system, event_rx) = setup_system(4, 10);

        // Assert
        assert_eq!(system.get_elevators().len(), 4);
        for (index, elevator) in system.get_elevators().iter().enumerate() {
            assert_eq!(elevator.id(), index as u32 + 1);
            assert_eq!(elevator.current_floor(), 1);
            assert!(!elevator.is_moving());
            assert_eq!(elevator.direction(), Stopped);
            assert_eq!(elevator.capacity(), 10);
            assert_eq!(elevator.occupancy(), 0);
        }
        assert!(!system.all_elevators_busy());
        assert!(event_rx.try_recv().is_err());
    }

    #[test]
    fn test_system_rejects_zero_capacity() {
        let (event_tx, _event_rx) = unbounded::<Event>();
        let result = ElevatorSystem::new(3, 0, event_tx);
        assert!(matches!(result, Err(ConfigError::InvalidCapacity(0))));
    }

    #[test]
    fn test_system_from_config() {
        // Arrange
        let (event_tx, _event_rx) = unbounded::<Event>();
        let config = SystemConfig {
            n_elevators: 2,
            capacity: 6,
        };

        // Act
        let system = ElevatorSystem::from_config(&config, event_tx).unwrap();

        // Assert
        assert_eq!(system.get_elevators().len(), 2);
        assert_eq!(system.get_elevator(2).unwrap().capacity(), 6);
    }

    #[test]
    fn test_system_get_elevator() {
        let (system, _event_rx) = setup_system(3, 10);

        assert_eq!(system.get_elevator(1).unwrap().id(), 1);
        assert_eq!(system.get_elevator(3).unwrap().id(), 3);
        assert!(system.get_elevator(0).is_none());
        assert!(system.get_elevator(4).is_none());
    }

    #[test]
    fn test_system_three_elevator_scenario() {
        // Arrange
        let (mut system, event_rx) = setup_system(3, 10);

        // Act + Assert: all at floor 1, the first one wins the tie
        assert_eq!(
            system.call_elevator(5, 4),
            CallOutcome::Dispatched { elevator_id: 1 }
        );
        let elevator = system.get_elevator(1).unwrap();
        assert_eq!(elevator.current_floor(), 5);
        assert_eq!(elevator.occupancy(), 4);
        assert_eq!(elevator.direction(), Up);
        assert!(elevator.is_moving());
        assert_eq!(
            kinds(&event_rx),
            vec![EventKind::Moving, EventKind::Arrived, EventKind::Boarded]
        );

        assert_eq!(
            system.call_elevator(3, 2),
            CallOutcome::Dispatched { elevator_id: 2 }
        );
        let elevator = system.get_elevator(2).unwrap();
        assert_eq!(elevator.current_floor(), 3);
        assert_eq!(elevator.occupancy(), 2);
        assert!(elevator.is_moving());

        assert_eq!(
            system.call_elevator(2, 1),
            CallOutcome::Dispatched { elevator_id: 3 }
        );
        let elevator = system.get_elevator(3).unwrap();
        assert_eq!(elevator.current_floor(), 2);
        assert_eq!(elevator.occupancy(), 1);
        assert!(elevator.is_moving());
        assert!(system.all_elevators_busy());
        let _ = kinds(&event_rx);

        let before = system.show_elevator_status();
        assert_eq!(system.call_elevator(1, 1), CallOutcome::AllBusy);
        assert_eq!(system.show_elevator_status(), before);

        let events: Vec<Event> = event_rx.try_iter().collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::AllBusy);
        assert_eq!(events[0].elevator_id, None);
        assert_eq!(
            events[0].detail,
            "All elevators are currently busy. Please wait."
        );
    }

    #[test]
    fn test_system_nearest_idle_selected() {
        // Arrange
        let (mut system, _event_rx) = setup_system(4, 10);
        system.call_elevator(10, 1);
        system.call_elevator(4, 1);
        let (mut system_b, _event_rx_b) = setup_system(2, 10);
        system_b.call_elevator(8, 1);

        // Act: elevators 3 and 4 are idle at floor 1, both at distance 5
        let outcome = system.call_elevator(6, 2);

        // Assert
        assert_eq!(outcome, CallOutcome::Dispatched { elevator_id: 3 });
        assert!(!system.get_elevator(4).unwrap().is_moving());

        // Only idle elevator is chosen even though busy one is nearer
        assert_eq!(
            system_b.call_elevator(8, 1),
            CallOutcome::Dispatched { elevator_id: 2 }
        );
    }

    #[test]
    fn test_system_selects_minimum_distance() {
        // Arrange: idle elevators placed at different floors
        let (mut system, _event_rx) = setup_system(3, 10);
        system.test_get_elevators_mut()[0].move_to_floor(9);
        system.test_get_elevators_mut()[1].move_to_floor(4);
        system.test_get_elevators_mut()[2].move_to_floor(-3);

        // Act
        let outcome = system.call_elevator(5, 1);

        // Assert
        assert_eq!(outcome, CallOutcome::Dispatched { elevator_id: 2 });
        let elevator = system.get_elevator(2).unwrap();
        assert_eq!(elevator.current_floor(), 5);
        assert_eq!(elevator.direction(), Up);

        // Elevator 3 at -3 is nearer to -1 than elevator 1 at 9
        assert_eq!(
            system.call_elevator(-1, 1),
            CallOutcome::Dispatched { elevator_id: 3 }
        );
        assert_eq!(system.get_elevator(3).unwrap().direction(), Up);
    }

    #[test]
    fn test_system_tie_goes_to_first_constructed() {
        // Arrange: elevators at floors 2 and 6, call at 4
        let (mut system, _event_rx) = setup_system(2, 10);
        system.test_get_elevators_mut()[0].move_to_floor(6);
        system.test_get_elevators_mut()[1].move_to_floor(2);

        // Act
        let outcome = system.call_elevator(4, 1);

        // Assert
        assert_eq!(outcome, CallOutcome::Dispatched { elevator_id: 1 });
        assert_eq!(system.get_elevator(1).unwrap().direction(), Down);
    }

    #[test]
    fn test_system_capacity_exceeded_still_dispatches() {
        // Arrange
        let (mut system, event_rx) = setup_system(2, 5);

        // Act
        let outcome = system.call_elevator(7, 6);

        // Assert
        assert_eq!(outcome, CallOutcome::CapacityExceeded { elevator_id: 1 });
        assert_eq!(outcome.elevator_id(), Some(1));
        let elevator = system.get_elevator(1).unwrap();
        assert_eq!(elevator.current_floor(), 7);
        assert_eq!(elevator.occupancy(), 0);
        assert!(elevator.is_moving());
        assert_eq!(
            kinds(&event_rx),
            vec![
                EventKind::Moving,
                EventKind::Arrived,
                EventKind::BoardingRejected
            ]
        );
    }

    #[test]
    fn test_system_call_same_floor() {
        // Arrange
        let (mut system, _event_rx) = setup_system(1, 10);

        // Act
        let outcome = system.call_elevator(1, 3);

        // Assert
        assert_eq!(outcome, CallOutcome::Dispatched { elevator_id: 1 });
        let elevator = system.get_elevator(1).unwrap();
        assert_eq!(elevator.direction(), Stopped);
        assert!(elevator.is_moving());
    }

    #[test]
    fn test_system_all_busy() {
        // Arrange
        let (mut system, event_rx) = setup_system(2, 10);
        system.call_elevator(3, 1);
        system.call_elevator(4, 1);
        let _ = kinds(&event_rx);

        // Act
        let outcome = system.call_elevator(2, 2);

        // Assert
        assert_eq!(outcome, CallOutcome::AllBusy);
        assert_eq!(outcome.elevator_id(), None);
        assert!(system.all_elevators_busy());
        assert_eq!(kinds(&event_rx), vec![EventKind::AllBusy]);
    }

    #[test]
    fn test_system_zero_elevators() {
        // Arrange
        let (mut system, event_rx) = setup_system(0, 10);

        // Act + Assert
        assert!(system.get_elevators().is_empty());
        assert!(system.all_elevators_busy());
        assert!(system.show_elevator_status().is_empty());
        assert_eq!(system.call_elevator(3, 1), CallOutcome::AllBusy);
        assert_eq!(kinds(&event_rx), vec![EventKind::AllBusy]);
    }

    #[test]
    fn test_system_release_passengers() {
        // Arrange
        let (mut system, event_rx) = setup_system(2, 10);
        system.call_elevator(5, 4);
        let _ = kinds(&event_rx);

        // Act
        let result = system.release_passengers(1, 3);

        // Assert: passengers leave, but the elevator stays busy
        assert_eq!(result, Ok(1));
        let elevator = system.get_elevator(1).unwrap();
        assert_eq!(elevator.occupancy(), 1);
        assert!(elevator.is_moving());
        assert_eq!(kinds(&event_rx), vec![EventKind::Exited]);
    }

    #[test]
    fn test_system_release_passengers_errors() {
        let (mut system, _event_rx) = setup_system(1, 10);
        system.call_elevator(2, 2);

        assert_eq!(
            system.release_passengers(9, 1),
            Err(DispatchError::ElevatorNotFound(9))
        );
        assert_eq!(
            system.release_passengers(1, 3),
            Err(DispatchError::Transfer(
                TransferError::InsufficientOccupants {
                    elevator_id: 1,
                    requested: 3,
                    occupancy: 2,
                }
            ))
        );
        assert_eq!(system.get_elevator(1).unwrap().occupancy(), 2);
    }

    #[test]
    fn test_system_status_idempotent() {
        // Arrange
        let (mut system, _event_rx) = setup_system(3, 10);
        system.call_elevator(5, 4);

        // Act
        let first = system.show_elevator_status();
        let second = system.show_elevator_status();

        // Assert
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].id, 1);
        assert_eq!(first[0].current_floor, 5);
        assert!(first[0].is_moving);
        assert_eq!(first[0].direction, Up);
        assert_eq!(first[0].occupancy, 4);
        assert!(!first[1].is_moving);
    }
}
