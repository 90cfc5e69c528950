use std::collections::HashMap;

use anyhow::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::team_fixtures::{FixtureSchedule, Team, TeamRegistry};

pub const DEFAULT_FIXTURE_WEIGHT: f64 = 1.0;

/// Horizon multipliers for one club. 1.0 per gameweek is an evenly matched
/// fixture; the horizon value is a sum, so longer favorable runs rank higher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TeamMultipliers {
    pub attacking: f64,
    pub defending: f64,
}

/// How easy the upcoming fixtures are for this team's attacking players:
/// per non-blank gameweek, `(own attack - opponent defense) * weight + 1`,
/// summed over `start_gw ..= start_gw + look_ahead`.
pub fn attacking_multiplier(
    schedule: &FixtureSchedule,
    registry: &TeamRegistry,
    team: &Team,
    start_gw: u32,
    look_ahead: u32,
    weight: f64,
) -> Result<f64> {
    horizon_sum(schedule, registry, team, start_gw, look_ahead, weight, |own, opp| {
        own.attacking_quality - opp.defensive_quality
    })
}

/// Same horizon sum for defending players, comparing own defensive quality
/// to each opponent's attacking quality.
pub fn defending_multiplier(
    schedule: &FixtureSchedule,
    registry: &TeamRegistry,
    team: &Team,
    start_gw: u32,
    look_ahead: u32,
    weight: f64,
) -> Result<f64> {
    horizon_sum(schedule, registry, team, start_gw, look_ahead, weight, |own, opp| {
        own.defensive_quality - opp.attacking_quality
    })
}

fn horizon_sum(
    schedule: &FixtureSchedule,
    registry: &TeamRegistry,
    team: &Team,
    start_gw: u32,
    look_ahead: u32,
    weight: f64,
    quality_edge: impl Fn(&Team, &Team) -> f64,
) -> Result<f64> {
    if start_gw == 0 {
        return Err(anyhow::anyhow!("gameweeks are 1-based; starting gameweek must be >= 1"));
    }

    let end_gw = start_gw.saturating_add(look_ahead);
    let mut sum = 0.0;
    for gw in start_gw..=end_gw {
        // A blank gameweek contributes nothing, not a neutral 1.0.
        let Some(opponent) = schedule.opponent(&team.name, gw) else {
            continue;
        };
        let opp = registry.get(opponent).ok_or_else(|| {
            anyhow::anyhow!("fixture opponent {opponent} is missing from the team registry")
        })?;
        sum += quality_edge(team, opp) * weight + 1.0;
    }
    Ok(sum)
}

/// League-wide multiplier table over the full registry. Teams with no
/// fixtures in the window still appear, with a 0.0 horizon sum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultiplierTable {
    entries: HashMap<String, TeamMultipliers>,
}

impl MultiplierTable {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, TeamMultipliers)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, team: &str) -> Option<TeamMultipliers> {
        self.entries.get(team).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TeamMultipliers)> {
        self.entries.iter().map(|(name, m)| (name.as_str(), *m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-team computations are independent, so the table build fans out with
/// rayon. Sequential execution produces identical values.
pub fn build_multiplier_table(
    schedule: &FixtureSchedule,
    registry: &TeamRegistry,
    start_gw: u32,
    look_ahead: u32,
    weight: f64,
) -> Result<MultiplierTable> {
    let teams: Vec<&Team> = registry.iter().collect();
    let entries = teams
        .par_iter()
        .map(|team| {
            let attacking =
                attacking_multiplier(schedule, registry, team, start_gw, look_ahead, weight)?;
            let defending =
                defending_multiplier(schedule, registry, team, start_gw, look_ahead, weight)?;
            Ok((team.name.clone(), TeamMultipliers { attacking, defending }))
        })
        .collect::<Result<HashMap<_, _>>>()?;
    Ok(MultiplierTable { entries })
}
