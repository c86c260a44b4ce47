#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Mars Rover simulation.
//!
//! This crate defines the value types and the message surface that connect
//! adapters, the authoritative world, and pure systems. Adapters hand command
//! strings to the world, the world decodes them into [`Command`] values,
//! applies each one to a landed rover, and broadcasts [`Event`] values that
//! systems fold into reports.

use std::{
    error::Error,
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Point on a planetary grid expressed as signed column and row offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    x: i64,
    y: i64,
}

impl Coordinate {
    /// Coordinate located at the grid origin.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Horizontal component, growing eastwards.
    #[must_use]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Vertical component, growing northwards.
    #[must_use]
    pub const fn y(&self) -> i64 {
        self.y
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Coordinate {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Coordinate {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass direction a rover is oriented toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Oriented toward increasing `y`.
    #[default]
    North,
    /// Oriented toward increasing `x`.
    East,
    /// Oriented toward decreasing `y`.
    South,
    /// Oriented toward decreasing `x`.
    West,
}

impl Facing {
    /// All facings in clockwise order starting from north.
    pub const ALL: [Facing; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit offset covered by a single forward step.
    #[must_use]
    pub const fn vector(self) -> Coordinate {
        match self {
            Self::North => Coordinate::new(0, 1),
            Self::East => Coordinate::new(1, 0),
            Self::South => Coordinate::new(0, -1),
            Self::West => Coordinate::new(-1, 0),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facing {
    type Err = ParseFacingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|facing| {
                let name = facing.name();
                trimmed.eq_ignore_ascii_case(name) || trimmed.eq_ignore_ascii_case(&name[..1])
            })
            .ok_or_else(|| ParseFacingError(trimmed.to_owned()))
    }
}

/// Error returned when a string does not name a compass direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFacingError(String);

impl fmt::Display for ParseFacingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a compass direction", self.0)
    }
}

impl Error for ParseFacingError {}

/// Commands a landed rover understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Advances one step along the current facing.
    Forward,
    /// Retreats one step against the current facing.
    Backward,
}

impl Command {
    /// Decodes a single command token.
    ///
    /// Tokens are matched exactly, so `F`, whitespace and any other character
    /// yield `None`.
    #[must_use]
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            'f' => Some(Self::Forward),
            'b' => Some(Self::Backward),
            _ => None,
        }
    }

    /// Token that encodes the command.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Forward => 'f',
            Self::Backward => 'b',
        }
    }
}

/// Events broadcast by the world after landing a rover or executing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Confirms that a rover touched down on a planet.
    RoverLanded {
        /// Offset requested before landing.
        offset: Coordinate,
        /// Wrapped position the rover occupies after landing.
        position: Coordinate,
        /// Facing assigned on landing.
        facing: Facing,
    },
    /// Confirms that a rover moved between two positions.
    RoverMoved {
        /// Command that caused the move.
        command: Command,
        /// Position before the move.
        from: Coordinate,
        /// Position after the move, already wrapped onto the planet.
        to: Coordinate,
        /// Indicates that the move crossed a grid edge.
        wrapped: bool,
    },
    /// Reports that execution stopped on an unrecognized token.
    CommandSequenceHalted {
        /// Token that could not be decoded.
        token: char,
        /// Character index of the token within the command sequence.
        index: usize,
        /// Number of tokens left unprocessed, the offending one included.
        skipped: usize,
    },
}

/// Immutable representation of a rover's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoverSnapshot {
    /// Wrapped position of the rover.
    pub position: Coordinate,
    /// Direction the rover is facing.
    pub facing: Facing,
}
