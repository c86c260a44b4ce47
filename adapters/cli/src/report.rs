use std::fmt::Write as _;

use mars_rover_core::RoverSnapshot;
use mars_rover_system_telemetry::TelemetryReport;
use mars_rover_world::Planet;
use serde::Serialize;

/// Final state of a mission, rendered as text or JSON.
#[derive(Debug, Serialize)]
pub(crate) struct MissionReport<'a> {
    planet: &'a Planet,
    rover: RoverSnapshot,
    telemetry: TelemetryReport,
}

impl<'a> MissionReport<'a> {
    pub(crate) fn new(planet: &'a Planet, rover: RoverSnapshot, telemetry: TelemetryReport) -> Self {
        Self {
            planet,
            rover,
            telemetry,
        }
    }

    pub(crate) fn render_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(
            text,
            "planet: {} ({}x{})",
            self.planet.name(),
            self.planet.width(),
            self.planet.height()
        );
        let _ = writeln!(text, "position: {}", self.rover.position);
        let _ = writeln!(text, "facing: {}", self.rover.facing);
        let _ = writeln!(
            text,
            "moves: {} forward, {} backward, {} wraps",
            self.telemetry.moves_forward, self.telemetry.moves_backward, self.telemetry.wraps
        );
        let _ = match self.telemetry.halted_on {
            Some(halt) => writeln!(
                text,
                "halted: {:?} at index {} ({} skipped)",
                halt.token, halt.index, halt.skipped
            ),
            None => writeln!(text, "halted: no"),
        };
        text
    }
}
