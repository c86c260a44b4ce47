#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative rover and planet state for the Mars Rover simulation.

use std::fmt;

use mars_rover_core::{Command, Coordinate, Event, Facing};
use serde::Serialize;

const MARS_NAME: &str = "Mars";
const MARS_WIDTH: i64 = 100;
const MARS_HEIGHT: i64 = 100;

/// Axis of a planet's surface, used to report invalid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal extent, wrapped against `x`.
    Width,
    /// Vertical extent, wrapped against `y`.
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Errors raised while constructing a planet.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanetError {
    /// The requested extent is zero or negative.
    #[error("planet {axis} must be positive, got {value}")]
    InvalidDimension {
        /// Axis whose extent was rejected.
        axis: Axis,
        /// Extent that was provided.
        value: i64,
    },
}

/// Rectangular toroidal surface that rovers land on.
///
/// Moving past one edge re-enters from the opposite edge. Width and height are
/// validated on construction so wrapping never divides by a non-positive
/// extent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Planet {
    name: String,
    width: i64,
    height: i64,
}

impl Planet {
    /// Creates a planet with the provided name and extents.
    pub fn new(name: impl Into<String>, width: i64, height: i64) -> Result<Self, PlanetError> {
        if width <= 0 {
            return Err(PlanetError::InvalidDimension {
                axis: Axis::Width,
                value: width,
            });
        }
        if height <= 0 {
            return Err(PlanetError::InvalidDimension {
                axis: Axis::Height,
                value: height,
            });
        }

        Ok(Self {
            name: name.into(),
            width,
            height,
        })
    }

    /// Creates the canonical 100 by 100 Mars surface.
    #[must_use]
    pub fn mars() -> Self {
        Self {
            name: MARS_NAME.to_owned(),
            width: MARS_WIDTH,
            height: MARS_HEIGHT,
        }
    }

    /// Name of the planet.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of columns before `x` wraps.
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.width
    }

    /// Number of rows before `y` wraps.
    #[must_use]
    pub const fn height(&self) -> i64 {
        self.height
    }

    /// Reports whether the coordinate is already in canonical form.
    #[must_use]
    pub const fn contains(&self, position: Coordinate) -> bool {
        position.x() >= 0
            && position.x() < self.width
            && position.y() >= 0
            && position.y() < self.height
    }

    /// Wraps a coordinate onto the surface.
    ///
    /// Each axis is reduced independently into `[0, width)` and `[0, height)`.
    #[must_use]
    pub const fn locate(&self, position: Coordinate) -> Coordinate {
        Coordinate::new(
            wrap(position.x(), self.width),
            wrap(position.y(), self.height),
        )
    }
}

// `%` truncates toward zero, so negative remainders are shifted explicitly.
const fn wrap(coord: i64, size: i64) -> i64 {
    let remainder = coord % size;
    if remainder < 0 {
        remainder + size
    } else {
        remainder
    }
}

/// Rover waiting to be landed at an offset on some planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rover {
    landing_offset: Coordinate,
}

impl Rover {
    /// Creates a rover that will touch down at the provided offset.
    ///
    /// Any offset is accepted; the destination planet wraps it on landing.
    #[must_use]
    pub const fn new(landing_offset: Coordinate) -> Self {
        Self { landing_offset }
    }

    /// Offset the rover was configured to land at, before wrapping.
    #[must_use]
    pub const fn landing_offset(&self) -> Coordinate {
        self.landing_offset
    }

    /// Lands the rover on the planet without broadcasting events.
    #[must_use]
    pub fn land<'planet>(&self, planet: &'planet Planet) -> LandedRover<'planet> {
        LandedRover {
            planet,
            position: planet.locate(self.landing_offset),
            facing: Facing::North,
        }
    }
}

/// Rover that has touched down and accepts commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandedRover<'planet> {
    planet: &'planet Planet,
    position: Coordinate,
    facing: Facing,
}

impl<'planet> LandedRover<'planet> {
    /// Planet the rover landed on.
    #[must_use]
    pub fn planet(&self) -> &'planet Planet {
        self.planet
    }

    /// Current wrapped position.
    #[must_use]
    pub const fn position(&self) -> Coordinate {
        self.position
    }

    /// Current facing.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }

    /// Executes a command sequence, discarding the generated events.
    pub fn execute(&mut self, commands: &str) -> Execution {
        let mut events = Vec::new();
        execute(self, commands, &mut events)
    }
}

/// Outcome of executing a command sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Execution {
    /// Every token was recognized and applied.
    Completed {
        /// Number of commands applied.
        executed: usize,
    },
    /// Execution stopped on an unrecognized token.
    ///
    /// Tokens after the offending one are never applied, even when valid.
    Halted {
        /// Number of commands applied before the halt.
        executed: usize,
        /// Token that could not be decoded.
        token: char,
        /// Character index of the offending token.
        index: usize,
    },
}

impl Execution {
    /// Number of commands that changed the rover's state.
    #[must_use]
    pub const fn executed(&self) -> usize {
        match self {
            Self::Completed { executed } | Self::Halted { executed, .. } => *executed,
        }
    }

    /// Reports whether the sequence stopped early.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        matches!(self, Self::Halted { .. })
    }
}

/// Lands the rover on the planet and broadcasts the touchdown.
pub fn land<'planet>(
    rover: &Rover,
    planet: &'planet Planet,
    out_events: &mut Vec<Event>,
) -> LandedRover<'planet> {
    let landed = rover.land(planet);
    log::debug!(
        "rover landed on {} at {} facing {}",
        planet.name(),
        landed.position,
        landed.facing
    );
    out_events.push(Event::RoverLanded {
        offset: rover.landing_offset,
        position: landed.position,
        facing: landed.facing,
    });
    landed
}

/// Applies a single command to the rover, wrapping the new position.
pub fn apply(rover: &mut LandedRover<'_>, command: Command, out_events: &mut Vec<Event>) {
    let step = rover.facing.vector();
    let from = rover.position;
    let unwrapped = match command {
        Command::Forward => from + step,
        Command::Backward => from - step,
    };
    let to = rover.planet.locate(unwrapped);
    rover.position = to;

    log::trace!("{command:?}: {from} -> {to}");
    out_events.push(Event::RoverMoved {
        command,
        from,
        to,
        wrapped: to != unwrapped,
    });
}

/// Executes command tokens left to right.
///
/// The first unrecognized token halts execution: it changes no state, the
/// tokens after it are skipped and no error is raised. The halt is reported
/// through [`Event::CommandSequenceHalted`] and [`Execution::Halted`].
pub fn execute(
    rover: &mut LandedRover<'_>,
    commands: &str,
    out_events: &mut Vec<Event>,
) -> Execution {
    let mut executed = 0;
    for (index, token) in commands.chars().enumerate() {
        let Some(command) = Command::from_token(token) else {
            let skipped = commands.chars().count() - index;
            log::debug!("halting on unrecognized token {token:?} at {index}, skipping {skipped}");
            out_events.push(Event::CommandSequenceHalted {
                token,
                index,
                skipped,
            });
            return Execution::Halted {
                executed,
                token,
                index,
            };
        };

        apply(rover, command, out_events);
        executed += 1;
    }

    Execution::Completed { executed }
}

/// Query functions that provide read-only access to rover state.
pub mod query {
    use super::{LandedRover, Planet};
    use mars_rover_core::{Coordinate, Facing, RoverSnapshot};

    /// Current wrapped position of the rover.
    #[must_use]
    pub fn position(rover: &LandedRover<'_>) -> Coordinate {
        rover.position
    }

    /// Direction the rover is facing.
    #[must_use]
    pub fn facing(rover: &LandedRover<'_>) -> Facing {
        rover.facing
    }

    /// Planet the rover is exploring.
    #[must_use]
    pub fn planet<'planet>(rover: &LandedRover<'planet>) -> &'planet Planet {
        rover.planet
    }

    /// Captures an immutable snapshot of the rover's state.
    #[must_use]
    pub fn snapshot(rover: &LandedRover<'_>) -> RoverSnapshot {
        RoverSnapshot {
            position: rover.position,
            facing: rover.facing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_width() {
        assert_eq!(
            Planet::new("Flat", 0, 10),
            Err(PlanetError::InvalidDimension {
                axis: Axis::Width,
                value: 0,
            })
        );
    }

    #[test]
    fn rejects_negative_height() {
        assert_eq!(
            Planet::new("Inverted", 10, -3),
            Err(PlanetError::InvalidDimension {
                axis: Axis::Height,
                value: -3,
            })
        );
    }

    #[test]
    fn width_is_validated_before_height() {
        let error = Planet::new("Void", -1, -1).expect_err("planet must be rejected");
        assert_eq!(error.to_string(), "planet width must be positive, got -1");
    }

    #[test]
    fn mars_matches_explicit_construction() {
        let explicit = Planet::new("Mars", 100, 100).expect("valid dimensions");
        assert_eq!(Planet::mars(), explicit);
    }

    #[test]
    fn equality_includes_name() {
        let mars = Planet::new("Mars", 10, 10).expect("valid dimensions");
        let venus = Planet::new("Venus", 10, 10).expect("valid dimensions");
        assert_ne!(mars, venus);
    }

    #[test]
    fn wrap_normalizes_negative_remainders() {
        assert_eq!(wrap(-1, 100), 99);
        assert_eq!(wrap(-100, 100), 0);
        assert_eq!(wrap(-101, 100), 99);
        assert_eq!(wrap(250, 100), 50);
        assert_eq!(wrap(i64::MIN, 7), i64::MIN.rem_euclid(7));
    }

    #[test]
    fn contains_matches_half_open_bounds() {
        let planet = Planet::new("Tiny", 3, 2).expect("valid dimensions");
        assert!(planet.contains(Coordinate::new(0, 0)));
        assert!(planet.contains(Coordinate::new(2, 1)));
        assert!(!planet.contains(Coordinate::new(3, 1)));
        assert!(!planet.contains(Coordinate::new(0, -1)));
    }

    #[test]
    fn apply_flags_edge_crossings() {
        let planet = Planet::new("Strip", 1, 3).expect("valid dimensions");
        let mut rover = Rover::new(Coordinate::new(0, 2)).land(&planet);
        let mut events = Vec::new();

        apply(&mut rover, Command::Forward, &mut events);
        apply(&mut rover, Command::Forward, &mut events);

        assert_eq!(
            events,
            vec![
                Event::RoverMoved {
                    command: Command::Forward,
                    from: Coordinate::new(0, 2),
                    to: Coordinate::new(0, 0),
                    wrapped: true,
                },
                Event::RoverMoved {
                    command: Command::Forward,
                    from: Coordinate::new(0, 0),
                    to: Coordinate::new(0, 1),
                    wrapped: false,
                },
            ]
        );
    }

    #[test]
    fn halt_reports_skipped_tokens() {
        let planet = Planet::mars();
        let mut rover = Rover::new(Coordinate::ORIGIN).land(&planet);
        let mut events = Vec::new();

        let outcome = execute(&mut rover, "fbxff", &mut events);

        assert_eq!(
            outcome,
            Execution::Halted {
                executed: 2,
                token: 'x',
                index: 2,
            }
        );
        assert_eq!(
            events.last(),
            Some(&Event::CommandSequenceHalted {
                token: 'x',
                index: 2,
                skipped: 3,
            })
        );
        assert_eq!(rover.position(), Coordinate::ORIGIN);
    }

    #[test]
    fn empty_sequence_completes_without_events() {
        let planet = Planet::mars();
        let mut rover = Rover::new(Coordinate::new(4, 4)).land(&planet);
        let mut events = Vec::new();

        assert_eq!(
            execute(&mut rover, "", &mut events),
            Execution::Completed { executed: 0 }
        );
        assert!(events.is_empty());
    }
}
