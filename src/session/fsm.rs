use crate::config::ElevatorConfig;
use crate::shared::FloorSequence;
use crate::trip;
use log::debug;
use std::io::BufRead;
use std::io::Write;

/**
 * Runs one interactive floor-collection session.
 *
 * The `SessionFSM` (Finite State Machine) drives a terminal session: it prompts for floor
 * numbers, validates every line, and hands the collected sequence to the trip calculator and
 * reporter once the user signals completion with an empty line. It is generic over its reader
 * and writer so tests can drive it with in-memory streams.
 *
 * # Fields
 * - `reader`:            Line-oriented input source (locked stdin in production).
 * - `writer`:            Sink for prompts, validation messages and the trip summary.
 * - `state`:             Current state of the session.
 * - `floors`:            Floors registered so far, in entry order.
 * - `bottom_floor`:      Lowest floor accepted as valid input.
 * - `top_floor`:         Highest floor accepted as valid input.
 * - `floor_travel_time`: Seconds the elevator needs to pass one floor.
 */

enum Event {
    FloorEntered(u8),
    EndOfInput,
}

enum SessionState {
    AwaitingFirstFloor,
    CollectingFloors,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Exited,
    Completed(FloorSequence),
}

pub struct SessionFSM<R, W> {
    reader: R,
    writer: W,
    state: SessionState,
    floors: FloorSequence,
    bottom_floor: u8,
    top_floor: u8,
    floor_travel_time: u64,
}

impl<R: BufRead, W: Write> SessionFSM<R, W> {
    pub fn new(config: &ElevatorConfig, reader: R, writer: W) -> SessionFSM<R, W> {
        SessionFSM {
            reader,
            writer,
            state: SessionState::AwaitingFirstFloor,
            floors: FloorSequence::new(),
            bottom_floor: config.bottom_floor,
            top_floor: config.top_floor,
            floor_travel_time: config.floor_travel_time,
        }
    }

    pub fn run(mut self) -> std::io::Result<SessionOutcome> {
        // Main loop
        loop {
            let event = self.next_event()?;
            match self.state {
                SessionState::AwaitingFirstFloor => match event {
                    Event::FloorEntered(floor) => {
                        self.floors.push(floor);
                        self.state = SessionState::CollectingFloors;
                    }
                    Event::EndOfInput => {
                        writeln!(self.writer, "No floor entered. Exiting.")?;
                        return Ok(SessionOutcome::Exited);
                    }
                },
                SessionState::CollectingFloors => match event {
                    Event::FloorEntered(floor) => {
                        self.floors.push(floor);
                    }
                    Event::EndOfInput => {
                        let total_time =
                            trip::travel_time(self.floors.as_slice(), self.floor_travel_time);
                        trip::print_summary(&mut self.writer, &self.floors, total_time)?;
                        return Ok(SessionOutcome::Completed(self.floors));
                    }
                },
            }
        }
    }

    // Prompts until either a valid floor or an end-of-input signal is received.
    // Invalid lines print the validation message and re-prompt the same step.
    fn next_event(&mut self) -> std::io::Result<Event> {
        let prompt = match self.state {
            SessionState::AwaitingFirstFloor => format!(
                "Enter the current elevator floor ({}-{}, or press enter to exit): ",
                self.bottom_floor, self.top_floor
            ),
            SessionState::CollectingFloors => format!(
                "Enter the next floor to travel to ({}-{}, or press enter to finish): ",
                self.bottom_floor, self.top_floor
            ),
        };

        loop {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;

            let mut line = String::new();
            let bytes_read = self.reader.read_line(&mut line)?;

            // End of input behaves like an empty line
            if bytes_read == 0 {
                return Ok(Event::EndOfInput);
            }

            // Strip the line terminator; inner whitespace stays significant
            if line.ends_with('\n') {
                line.pop();
                if line.ends_with('\r') {
                    line.pop();
                }
            }

            if line.is_empty() {
                return Ok(Event::EndOfInput);
            }

            match self.parse_floor(&line) {
                Some(floor) => {
                    debug!("Accepted floor {}", floor);
                    return Ok(Event::FloorEntered(floor));
                }
                None => {
                    writeln!(
                        self.writer,
                        "The floor must be an integer between {} and {}.",
                        self.bottom_floor, self.top_floor
                    )?;
                }
            }
        }
    }

    fn parse_floor(&self, input: &str) -> Option<u8> {
        match input.parse::<u8>() {
            Ok(floor) if floor >= self.bottom_floor && floor <= self.top_floor => Some(floor),
            _ => None,
        }
    }
}
