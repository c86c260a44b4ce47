#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that lands a rover and drives it across a planet.

mod logging;
mod mission;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mars_rover_core::Coordinate;
use mars_rover_system_telemetry::Telemetry;
use mars_rover_world::{self as world, query, Execution, Rover};

use crate::{mission::Mission, report::MissionReport};

/// Lands a rover on a toroidal planet and executes a command sequence.
#[derive(Debug, Parser)]
#[command(name = "mars-rover", version)]
struct Cli {
    /// TOML mission file providing the planet, landing offset and commands.
    #[arg(long, value_name = "PATH")]
    mission: Option<PathBuf>,
    /// Name of the planet.
    #[arg(long, value_name = "NAME")]
    planet: Option<String>,
    /// Planet width; must be positive.
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i64>,
    /// Planet height; must be positive.
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i64>,
    /// Landing offset along x, wrapped on touchdown.
    #[arg(long, allow_negative_numbers = true)]
    x: Option<i64>,
    /// Landing offset along y, wrapped on touchdown.
    #[arg(long, allow_negative_numbers = true)]
    y: Option<i64>,
    /// Output format for the final report.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Raises log verbosity; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Command tokens: `f` moves forward, `b` moves backward.
    commands: Option<String>,
}

impl Cli {
    fn mission(&self) -> Result<Mission> {
        let mut mission = match &self.mission {
            Some(path) => Mission::from_path(path)?,
            None => Mission::default(),
        };

        if let Some(name) = &self.planet {
            mission.planet_name = name.clone();
        }
        mission.width = self.width.unwrap_or(mission.width);
        mission.height = self.height.unwrap_or(mission.height);
        mission.landing = Coordinate::new(
            self.x.unwrap_or(mission.landing.x()),
            self.y.unwrap_or(mission.landing.y()),
        );
        if let Some(commands) = &self.commands {
            mission.commands = commands.clone();
        }

        Ok(mission)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Entry point for the Mars Rover command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mission = cli.mission()?;
    let planet = mission.planet()?;
    log::info!(
        "mission to {} ({}x{}) landing at {}",
        planet.name(),
        planet.width(),
        planet.height(),
        mission.landing
    );

    let mut events = Vec::new();
    let mut rover = world::land(&Rover::new(mission.landing), &planet, &mut events);
    let execution = world::execute(&mut rover, &mission.commands, &mut events);
    if let Execution::Halted { token, index, .. } = execution {
        log::warn!("command sequence halted on unrecognized token {token:?} at index {index}");
    }

    let mut telemetry = Telemetry::new();
    telemetry.handle(&events);

    let report = MissionReport::new(&planet, query::snapshot(&rover), *telemetry.report());
    match cli.format {
        Format::Text => print!("{}", report.render_text()),
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize report")?;
            println!("{json}");
        }
    }

    Ok(())
}
