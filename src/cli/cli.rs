/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::debug;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatcher::ElevatorSystem;
use crate::shared::{DispatchError, Event};

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, PartialEq)]
enum Command {
    ShowStatus,
    CallElevator,
    Exit,
    ReleasePassengers,
    Invalid,
}

impl From<&str> for Command {
    fn from(choice: &str) -> Self {
        match choice.trim() {
            "1" => Command::ShowStatus,
            "2" => Command::CallElevator,
            "3" => Command::Exit,
            "4" => Command::ReleasePassengers,
            _ => Command::Invalid,
        }
    }
}

/**
 * Interactive text menu on top of an `ElevatorSystem`.
 *
 * Reads commands from `input`, drives the system, and prints both the command results and
 * every notification the system emitted while handling the command.
 *
 * # Fields
 * - `system`:      The dispatcher being driven.
 * - `event_rx`:    Receiving end of the system's notification channel.
 * - `input`:       Source of user input, one answer per line.
 * - `output`:      Where menus, prompts, notifications and status are written.
 * - `json`:        Render status snapshots as JSON instead of text blocks.
 */
pub struct Cli<R: BufRead, W: Write> {
    system: ElevatorSystem,
    event_rx: cbc::Receiver<Event>,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Cli<R, W> {
    pub fn new(
        system: ElevatorSystem,
        event_rx: cbc::Receiver<Event>,
        input: R,
        output: W,
        json: bool,
    ) -> Cli<R, W> {
        Cli {
            system,
            event_rx,
            input,
            output,
            json,
        }
    }

    /// Runs the menu until the user picks exit or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Welcome to Dynamic Visual Technologies Elevator Challenge!!!"
        )?;

        loop {
            writeln!(self.output, "1. Show elevator status")?;
            writeln!(self.output, "2. Call elevator")?;
            writeln!(self.output, "3. Exit")?;
            writeln!(self.output, "4. Release passengers")?;

            let choice = match self.prompt("Please enter your choice: ")? {
                Some(choice) => choice,
                None => break,
            };

            let command = Command::from(choice.as_str());
            debug!("Menu command: {:?}", command);

            let keep_running = match command {
                Command::ShowStatus => self.show_status().map(|_| true)?,
                Command::CallElevator => self.call_elevator()?,
                Command::ReleasePassengers => self.release_passengers()?,
                Command::Exit => false,
                Command::Invalid => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    true
                }
            };

            self.print_events()?;
            if !keep_running {
                break;
            }
            writeln!(self.output)?;
        }

        self.output.flush()
    }

    pub fn system(&self) -> &ElevatorSystem {
        &self.system
    }

    fn show_status(&mut self) -> io::Result<()> {
        let snapshots = self.system.show_elevator_status();
        if self.json {
            let rendered = serde_json::to_string_pretty(&snapshots)?;
            writeln!(self.output, "{}", rendered)?;
        } else {
            for snapshot in snapshots.iter() {
                writeln!(self.output, "{}", snapshot)?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }

    // Returns false when the input ended mid command
    fn call_elevator(&mut self) -> io::Result<bool> {
        let floor = match self.prompt_number::<i32>("Please enter the floor to call the elevator: ")? {
            Some(Some(floor)) => floor,
            Some(None) => return Ok(true),
            None => return Ok(false),
        };
        let num_people = match self.prompt_number::<u32>("Please enter the number of people: ")? {
            Some(Some(num_people)) => num_people,
            Some(None) => return Ok(true),
            None => return Ok(false),
        };

        let outcome = self.system.call_elevator(floor, num_people);
        debug!("Call to floor {} for {} people: {:?}", floor, num_people, outcome);
        Ok(true)
    }

    fn release_passengers(&mut self) -> io::Result<bool> {
        let elevator_id = match self.prompt_number::<u32>("Please enter the elevator id: ")? {
            Some(Some(elevator_id)) => elevator_id,
            Some(None) => return Ok(true),
            None => return Ok(false),
        };
        let count = match self.prompt_number::<u32>("Please enter the number of people: ")? {
            Some(Some(count)) => count,
            Some(None) => return Ok(true),
            None => return Ok(false),
        };

        // Transfer failures are already reported as notifications
        if let Err(e @ DispatchError::ElevatorNotFound(_)) =
            self.system.release_passengers(elevator_id, count)
        {
            writeln!(self.output, "Error: {}", e)?;
        }
        Ok(true)
    }

    fn print_events(&mut self) -> io::Result<()> {
        for event in self.event_rx.try_iter() {
            writeln!(self.output, "{}", event)?;
        }
        Ok(())
    }

    // None on end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    // None on end of input, Some(None) on a line that does not parse
    fn prompt_number<T: FromStr>(&mut self, message: &str) -> io::Result<Option<Option<T>>> {
        let answer = match self.prompt(message)? {
            Some(answer) => answer,
            None => return Ok(None),
        };
        match answer.parse::<T>() {
            Ok(value) => Ok(Some(Some(value))),
            Err(_) => {
                writeln!(self.output, "Invalid number.")?;
                Ok(Some(None))
            }
        }
    }
}
