use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub attacking_quality: f64,
    pub defensive_quality: f64,
}

/// All known clubs, keyed by name. Built once at load time and treated as
/// read-only reference data afterwards.
#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    teams: HashMap<String, Team>,
}

impl TeamRegistry {
    pub fn from_teams(teams: Vec<Team>) -> Result<Self> {
        let mut map = HashMap::with_capacity(teams.len());
        for team in teams {
            let name = team.name.clone();
            if map.insert(name.clone(), team).is_some() {
                return Err(anyhow::anyhow!("duplicate team entry: {name}"));
            }
        }
        Ok(Self { teams: map })
    }

    pub fn get(&self, name: &str) -> Option<&Team> {
        self.teams.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.teams.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// One side of one scheduled match: `team` faces `opponent` in gameweek `gw`.
/// Every match contributes a row per side, mirroring a per-team fixture list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureRow {
    pub gw: u32,
    pub team: String,
    pub opponent: String,
}

/// Upcoming fixtures keyed by (team, gameweek). A missing entry is a blank:
/// the team simply has no match that week.
#[derive(Debug, Clone, Default)]
pub struct FixtureSchedule {
    by_team: HashMap<String, HashMap<u32, String>>,
}

impl FixtureSchedule {
    pub fn from_rows(rows: Vec<FixtureRow>, registry: &TeamRegistry) -> Result<Self> {
        let mut by_team: HashMap<String, HashMap<u32, String>> = HashMap::new();
        for row in rows {
            if row.gw == 0 {
                return Err(anyhow::anyhow!(
                    "fixture for {} has gameweek 0; gameweeks are 1-based",
                    row.team
                ));
            }
            if !registry.contains(&row.team) {
                return Err(anyhow::anyhow!("fixture references unknown team: {}", row.team));
            }
            if !registry.contains(&row.opponent) {
                return Err(anyhow::anyhow!(
                    "fixture references unknown opponent: {}",
                    row.opponent
                ));
            }
            let slot = by_team.entry(row.team.clone()).or_default();
            if slot.insert(row.gw, row.opponent).is_some() {
                return Err(anyhow::anyhow!(
                    "duplicate fixture for {} in gameweek {}",
                    row.team,
                    row.gw
                ));
            }
        }
        Ok(Self { by_team })
    }

    pub fn opponent(&self, team: &str, gw: u32) -> Option<&str> {
        self.by_team
            .get(team)
            .and_then(|slots| slots.get(&gw))
            .map(|opp| opp.as_str())
    }
}

/// One recorded round of matches; only the gameweek number matters here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameRecord {
    pub gw: u32,
}

/// The round to plan for: one past the latest recorded round, or the first
/// round of the season when nothing has been played yet.
pub fn upcoming_gameweek(games: &[GameRecord]) -> u32 {
    games.iter().map(|g| g.gw).max().map_or(1, |gw| gw + 1)
}
