use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::player_value::{Position, RankedPlayer};

pub const BUDGET: f64 = 100.0;
pub const SQUAD_SIZE: usize = 15;
pub const MAX_PER_CLUB: usize = 3;

pub fn position_cap(position: Position) -> usize {
    match position {
        Position::Gkp => 2,
        Position::Def => 5,
        Position::Mid => 5,
        Position::Fwd => 3,
    }
}

/// Terminal outcome of a build: either all fifteen slots filled, or the
/// candidate pool ran out first. A partially filled squad is a valid result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquadState {
    Complete,
    Exhausted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Squad {
    pub players: Vec<RankedPlayer>,
    pub spend: f64,
    pub position_counts: HashMap<Position, usize>,
    pub club_counts: HashMap<String, usize>,
    pub state: SquadState,
}

impl Squad {
    fn empty() -> Self {
        Self {
            players: Vec::with_capacity(SQUAD_SIZE),
            spend: 0.0,
            position_counts: HashMap::new(),
            club_counts: HashMap::new(),
            state: SquadState::Exhausted,
        }
    }

    pub fn size(&self) -> usize {
        self.players.len()
    }

    pub fn position_count(&self, position: Position) -> usize {
        self.position_counts.get(&position).copied().unwrap_or(0)
    }

    pub fn club_count(&self, club: &str) -> usize {
        self.club_counts.get(club).copied().unwrap_or(0)
    }

    fn add(&mut self, candidate: &RankedPlayer) {
        self.spend += candidate.price;
        *self.position_counts.entry(candidate.position).or_insert(0) += 1;
        *self.club_counts.entry(candidate.team.clone()).or_insert(0) += 1;
        self.players.push(candidate.clone());
    }
}

/// Greedy single pass over an already-ranked candidate list. Each candidate
/// faces three gates in order: budget feasibility, club quota, position
/// quota. A rejected candidate is skipped for good; there is no backtracking,
/// so the result can be worse than a true knapsack optimum.
pub fn build_squad(ranked: &[RankedPlayer], cheapest_allowable_price: f64) -> Result<Squad> {
    if !cheapest_allowable_price.is_finite() || cheapest_allowable_price < 0.0 {
        return Err(anyhow::anyhow!(
            "cheapest allowable price must be finite and non-negative, got {cheapest_allowable_price}"
        ));
    }

    let mut squad = Squad::empty();
    for candidate in ranked {
        if candidate.price < 0.0 {
            return Err(anyhow::anyhow!(
                "player {} has a negative price ({})",
                candidate.name,
                candidate.price
            ));
        }
        if !budget_gate(&squad, candidate, cheapest_allowable_price) {
            continue;
        }
        if !club_gate(&squad, candidate) {
            continue;
        }
        if !position_gate(&squad, candidate) {
            continue;
        }
        squad.add(candidate);
        if squad.size() == SQUAD_SIZE {
            squad.state = SquadState::Complete;
            break;
        }
    }
    Ok(squad)
}

/// After hypothetically buying the candidate, the leftover budget must still
/// cover every remaining unfilled slot at the floor price. The very first
/// pick is exempt: with nothing selected there is no per-slot average yet.
fn budget_gate(squad: &Squad, candidate: &RankedPlayer, cheapest_allowable_price: f64) -> bool {
    let size = squad.size();
    if size == 0 {
        return true;
    }
    let remaining = BUDGET - (squad.spend + candidate.price);
    let slots_left = (SQUAD_SIZE - size - 1) as f64;
    if slots_left == 0.0 {
        // Final slot: nothing left to reserve for, just stay within budget.
        return remaining >= 0.0;
    }
    remaining / slots_left >= cheapest_allowable_price
}

fn club_gate(squad: &Squad, candidate: &RankedPlayer) -> bool {
    squad.club_count(&candidate.team) < MAX_PER_CLUB
}

fn position_gate(squad: &Squad, candidate: &RankedPlayer) -> bool {
    squad.position_count(candidate.position) < position_cap(candidate.position)
}
