use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::player_value::Player;
use crate::team_fixtures::{
    self, FixtureRow, FixtureSchedule, GameRecord, Team, TeamRegistry,
};

/// On-disk shape of a dataset file: the four tables the planner consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetFile {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub fixtures: Vec<FixtureRow>,
    #[serde(default)]
    pub games: Vec<GameRecord>,
    #[serde(default)]
    pub players: Vec<Player>,
}

/// A loaded, cross-checked dataset. Construction fails on any dangling
/// reference or out-of-range value, so downstream computation never has to
/// second-guess its inputs.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub registry: TeamRegistry,
    pub schedule: FixtureSchedule,
    pub players: Vec<Player>,
    pub games: Vec<GameRecord>,
}

impl Dataset {
    pub fn upcoming_gameweek(&self) -> u32 {
        team_fixtures::upcoming_gameweek(&self.games)
    }
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read dataset {}", path.display()))?;
    parse_dataset(&raw).with_context(|| format!("parse dataset {}", path.display()))
}

pub fn parse_dataset(raw: &str) -> Result<Dataset> {
    let file: DatasetFile = serde_json::from_str(raw).context("invalid dataset json")?;
    assemble(file)
}

pub fn assemble(file: DatasetFile) -> Result<Dataset> {
    let registry = TeamRegistry::from_teams(file.teams)?;
    let schedule = FixtureSchedule::from_rows(file.fixtures, &registry)?;

    for game in &file.games {
        if game.gw == 0 {
            return Err(anyhow::anyhow!("recorded game has gameweek 0; gameweeks are 1-based"));
        }
    }
    for player in &file.players {
        if !registry.contains(&player.team) {
            return Err(anyhow::anyhow!(
                "player {} references unknown team: {}",
                player.name,
                player.team
            ));
        }
        if player.price < 0.0 {
            return Err(anyhow::anyhow!(
                "player {} has a negative price ({})",
                player.name,
                player.price
            ));
        }
    }

    Ok(Dataset {
        registry,
        schedule,
        players: file.players,
        games: file.games,
    })
}
