use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use mars_rover_core::Coordinate;
use mars_rover_world::Planet;
use serde::Deserialize;

const SUPPORTED_MISSION_VERSION: u32 = 1;
const DEFAULT_PLANET_NAME: &str = "Mars";
const DEFAULT_PLANET_EXTENT: i64 = 100;

/// Fully resolved mission parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Mission {
    pub(crate) planet_name: String,
    pub(crate) width: i64,
    pub(crate) height: i64,
    pub(crate) landing: Coordinate,
    pub(crate) commands: String,
}

impl Default for Mission {
    fn default() -> Self {
        Self {
            planet_name: DEFAULT_PLANET_NAME.to_owned(),
            width: DEFAULT_PLANET_EXTENT,
            height: DEFAULT_PLANET_EXTENT,
            landing: Coordinate::ORIGIN,
            commands: String::new(),
        }
    }
}

impl Mission {
    /// Loads a mission file and layers it over the built-in defaults.
    pub(crate) fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read mission file at {}", path.display()))?;
        let file = parse_mission(&contents)
            .with_context(|| format!("invalid mission file {}", path.display()))?;

        let mut mission = Self::default();
        mission.layer(file);
        Ok(mission)
    }

    /// Builds the planet described by the mission.
    pub(crate) fn planet(&self) -> Result<Planet> {
        Planet::new(self.planet_name.clone(), self.width, self.height)
            .with_context(|| format!("cannot model planet {}", self.planet_name))
    }

    fn layer(&mut self, file: MissionFile) {
        if let Some(planet) = file.planet {
            if let Some(name) = planet.name {
                self.planet_name = name;
            }
            self.width = planet.width.unwrap_or(self.width);
            self.height = planet.height.unwrap_or(self.height);
        }
        if let Some(landing) = file.landing {
            self.landing = Coordinate::new(
                landing.x.unwrap_or(self.landing.x()),
                landing.y.unwrap_or(self.landing.y()),
            );
        }
        if let Some(commands) = file.commands {
            self.commands = commands;
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MissionFile {
    version: u32,
    planet: Option<PlanetSection>,
    landing: Option<LandingSection>,
    commands: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanetSection {
    name: Option<String>,
    width: Option<i64>,
    height: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LandingSection {
    x: Option<i64>,
    y: Option<i64>,
}

fn parse_mission(contents: &str) -> Result<MissionFile> {
    let file: MissionFile =
        toml::from_str(contents).context("failed to parse mission toml contents")?;
    if file.version != SUPPORTED_MISSION_VERSION {
        bail!(
            "unsupported mission version {}; expected {}",
            file.version,
            SUPPORTED_MISSION_VERSION
        );
    }
    Ok(file)
}
