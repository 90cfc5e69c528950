use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::fixture_mult::MultiplierTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GKP")]
    Gkp,
    #[serde(rename = "DEF")]
    Def,
    #[serde(rename = "MID")]
    Mid,
    #[serde(rename = "FWD")]
    Fwd,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::Gkp, Position::Def, Position::Mid, Position::Fwd];

    pub fn label(self) -> &'static str {
        match self {
            Position::Gkp => "GKP",
            Position::Def => "DEF",
            Position::Mid => "MID",
            Position::Fwd => "FWD",
        }
    }

    /// Keepers and defenders score off the defending multiplier; midfielders
    /// and forwards off the attacking one.
    pub fn is_defensive(self) -> bool {
        matches!(self, Position::Gkp | Position::Def)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub quality: f64,
    pub position: Position,
    pub team: String,
    pub price: f64,
}

/// A roster row with its fixture-adjusted quality attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub post_quality: f64,
    pub name: String,
    pub quality: f64,
    pub position: Position,
    pub team: String,
    pub price: f64,
}

impl RankedPlayer {
    fn new(player: &Player, post_quality: f64) -> Self {
        Self {
            post_quality,
            name: player.name.clone(),
            quality: player.quality,
            position: player.position,
            team: player.team.clone(),
            price: player.price,
        }
    }
}

/// Scale every player's quality by their team's position-appropriate
/// multiplier and rank descending. The sort is stable, so equal post
/// qualities keep roster order. A player whose team is missing from the
/// table is malformed input and fails the whole call.
pub fn apply_fixture_multipliers(
    players: &[Player],
    table: &MultiplierTable,
) -> Result<Vec<RankedPlayer>> {
    let mut ranked = Vec::with_capacity(players.len());
    for player in players {
        let mults = table.get(&player.team).ok_or_else(|| {
            anyhow::anyhow!(
                "player {} references team {} with no multiplier entry",
                player.name,
                player.team
            )
        })?;
        let mult = if player.position.is_defensive() {
            mults.defending
        } else {
            mults.attacking
        };
        ranked.push(RankedPlayer::new(player, player.quality * mult));
    }
    ranked.sort_by(|a, b| b.post_quality.total_cmp(&a.post_quality));
    Ok(ranked)
}
