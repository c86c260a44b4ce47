#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic telemetry system that summarises a rover's traverse.

use mars_rover_core::{Command, Coordinate, Event};
use serde::Serialize;

/// Unrecognized token that stopped a command sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct HaltRecord {
    /// Token that could not be decoded.
    pub token: char,
    /// Character index of the token within its sequence.
    pub index: usize,
    /// Number of tokens left unprocessed.
    pub skipped: usize,
}

/// Summary of everything a rover reported since landing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TelemetryReport {
    /// Wrapped landing position, once the rover touched down.
    pub landed_at: Option<Coordinate>,
    /// Most recent position reported by the rover.
    pub last_position: Option<Coordinate>,
    /// Number of forward steps taken.
    pub moves_forward: u64,
    /// Number of backward steps taken.
    pub moves_backward: u64,
    /// Number of steps that crossed a grid edge.
    pub wraps: u64,
    /// Most recent halt, if a sequence stopped early.
    pub halted_on: Option<HaltRecord>,
}

impl TelemetryReport {
    /// Total number of steps taken in either direction.
    #[must_use]
    pub const fn total_moves(&self) -> u64 {
        self.moves_forward + self.moves_backward
    }
}

/// Pure telemetry system that folds world events into a report.
#[derive(Debug, Default)]
pub struct Telemetry {
    report: TelemetryReport,
}

impl Telemetry {
    /// Creates a telemetry system with an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the report accumulated so far.
    #[must_use]
    pub fn report(&self) -> &TelemetryReport {
        &self.report
    }

    /// Consumes world events in order.
    ///
    /// A landing resets the report so a single system can follow successive
    /// deployments.
    pub fn handle(&mut self, events: &[Event]) {
        for event in events {
            match *event {
                Event::RoverLanded { position, .. } => {
                    self.report = TelemetryReport {
                        landed_at: Some(position),
                        last_position: Some(position),
                        ..TelemetryReport::default()
                    };
                }
                Event::RoverMoved {
                    command,
                    to,
                    wrapped,
                    ..
                } => self.record_move(command, to, wrapped),
                Event::CommandSequenceHalted {
                    token,
                    index,
                    skipped,
                } => {
                    self.report.halted_on = Some(HaltRecord {
                        token,
                        index,
                        skipped,
                    });
                }
            }
        }
    }

    fn record_move(&mut self, command: Command, to: Coordinate, wrapped: bool) {
        let counter = match command {
            Command::Forward => &mut self.report.moves_forward,
            Command::Backward => &mut self.report.moves_backward,
        };
        *counter = counter.saturating_add(1);
        if wrapped {
            self.report.wraps = self.report.wraps.saturating_add(1);
        }
        self.report.last_position = Some(to);
    }
}
