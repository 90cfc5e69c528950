use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::dataset::{self, Dataset, DatasetFile};
use crate::player_value::{Player, Position};
use crate::team_fixtures::{FixtureRow, GameRecord, Team};

const CLUB_CODES: &[&str] = &[
    "ARS", "AVL", "BOU", "BRE", "BHA", "CHE", "CRY", "EVE", "FUL", "LIV", "LEE", "MCI", "MUN",
    "NEW", "NFO", "SUN", "TOT", "WHU", "WOL", "BUR",
];

/// Knobs for the generated league. Same seed, same league.
#[derive(Debug, Clone, Copy)]
pub struct SampleLeagueConfig {
    pub seed: u64,
    pub team_count: usize,
    pub played_gameweeks: u32,
    pub upcoming_gameweeks: u32,
}

impl Default for SampleLeagueConfig {
    fn default() -> Self {
        Self {
            seed: 26,
            team_count: 20,
            played_gameweeks: 2,
            upcoming_gameweeks: 10,
        }
    }
}

/// Build a plausible offline league so the pipeline can run without any
/// real data: quality ratings per club, a shuffled fixture rotation with
/// occasional blanks, and a full FPL-shaped roster block per club.
pub fn generate(cfg: &SampleLeagueConfig) -> Result<Dataset> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);

    let teams: Vec<Team> = (0..cfg.team_count)
        .map(|idx| Team {
            name: club_code(idx),
            attacking_quality: round1(rng.gen_range(1.0..5.0)),
            defensive_quality: round1(rng.gen_range(1.0..5.0)),
        })
        .collect();

    let mut fixtures = Vec::new();
    let first_gw = cfg.played_gameweeks + 1;
    for gw in first_gw..first_gw + cfg.upcoming_gameweeks {
        let mut order: Vec<usize> = (0..cfg.team_count).collect();
        order.shuffle(&mut rng);
        for pair in order.chunks(2) {
            // An odd club out, or a blanked pair, just has no fixture that week.
            let &[a, b] = pair else {
                continue;
            };
            if rng.gen_bool(0.05) {
                continue;
            }
            fixtures.push(FixtureRow {
                gw,
                team: teams[a].name.clone(),
                opponent: teams[b].name.clone(),
            });
            fixtures.push(FixtureRow {
                gw,
                team: teams[b].name.clone(),
                opponent: teams[a].name.clone(),
            });
        }
    }

    let games: Vec<GameRecord> = (1..=cfg.played_gameweeks).map(|gw| GameRecord { gw }).collect();

    let mut players = Vec::new();
    for team in &teams {
        for (position, slots) in [
            (Position::Gkp, 2),
            (Position::Def, 5),
            (Position::Mid, 5),
            (Position::Fwd, 3),
        ] {
            for slot in 1..=slots {
                let quality = round1(rng.gen_range(3.0..9.5));
                let price = player_price(position, quality, &mut rng);
                players.push(Player {
                    name: format!("{} {} {}", team.name, position.label(), slot),
                    quality,
                    position,
                    team: team.name.clone(),
                    price,
                });
            }
        }
    }

    dataset::assemble(DatasetFile {
        teams,
        fixtures,
        games,
        players,
    })
}

// Prices track quality loosely, clamped to the usual FPL band.
fn player_price(position: Position, quality: f64, rng: &mut StdRng) -> f64 {
    let base = match position {
        Position::Gkp | Position::Def => 4.0,
        Position::Mid | Position::Fwd => 4.5,
    };
    let spread = (quality - 3.0) * 0.55 + rng.gen_range(0.0..0.8);
    round1((base + spread).clamp(3.8, 13.0))
}

fn club_code(idx: usize) -> String {
    CLUB_CODES
        .get(idx)
        .map(|code| code.to_string())
        .unwrap_or_else(|| format!("T{:02}", idx + 1))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
