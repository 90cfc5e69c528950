use std::env;
use std::path::Path;

use anyhow::Result;

use fpl_planner::dataset::{self, Dataset};
use fpl_planner::fixture_mult::{self, DEFAULT_FIXTURE_WEIGHT};
use fpl_planner::player_value::{self, Position};
use fpl_planner::sample_league::{self, SampleLeagueConfig};
use fpl_planner::squad::{self, Squad};

const DEFAULT_DATASET: &str = "tests/fixtures/demo_league.json";
const DEFAULT_LOOK_AHEAD: u32 = 5;
const DEFAULT_CHEAPEST_PLAYER: f64 = 4.0;

fn main() -> Result<()> {
    let dataset = load_requested_dataset()?;

    let look_ahead = env_u32("LOOK_AHEAD", DEFAULT_LOOK_AHEAD);
    let weight = env_f64("FIXTURE_WEIGHT", DEFAULT_FIXTURE_WEIGHT);
    let cheapest = env_f64("CHEAPEST_PLAYER", DEFAULT_CHEAPEST_PLAYER);

    let start_gw = dataset.upcoming_gameweek();
    println!(
        "Planning window: gameweeks {}..={} (weight {:.2})",
        start_gw,
        start_gw + look_ahead,
        weight
    );

    let table = fixture_mult::build_multiplier_table(
        &dataset.schedule,
        &dataset.registry,
        start_gw,
        look_ahead,
        weight,
    )?;

    println!("\n{:<6} {:>10} {:>10}", "Team", "Att Mult", "Def Mult");
    let mut rows: Vec<_> = table.iter().collect();
    rows.sort_by(|a, b| b.1.attacking.total_cmp(&a.1.attacking).then(a.0.cmp(b.0)));
    for (team, mults) in rows {
        println!("{team:<6} {:>10.2} {:>10.2}", mults.attacking, mults.defending);
    }

    let ranked = player_value::apply_fixture_multipliers(&dataset.players, &table)?;

    println!("\nTop players by post quality:");
    println!(
        "{:<18} {:>9} {:>8} {:<4} {:<6} {:>6}",
        "Player", "PostQual", "Quality", "Pos", "Team", "Price"
    );
    for row in ranked.iter().take(20) {
        println!(
            "{:<18} {:>9.2} {:>8.2} {:<4} {:<6} {:>6.1}",
            row.name, row.post_quality, row.quality, row.position, row.team, row.price
        );
    }

    let squad = squad::build_squad(&ranked, cheapest)?;
    print_squad(&squad);

    Ok(())
}

fn load_requested_dataset() -> Result<Dataset> {
    let arg = env::args().nth(1);
    match arg.as_deref() {
        Some("--demo") => {
            let cfg = SampleLeagueConfig {
                seed: env_u64("DEMO_SEED", SampleLeagueConfig::default().seed),
                ..SampleLeagueConfig::default()
            };
            sample_league::generate(&cfg)
        }
        Some(path) => dataset::load_dataset(Path::new(path)),
        None => dataset::load_dataset(Path::new(DEFAULT_DATASET)),
    }
}

fn print_squad(squad: &Squad) {
    println!("\nSquad ({:?}, {} players):", squad.state, squad.size());
    println!(
        "{:<18} {:>9} {:>8} {:<4} {:<6} {:>6}",
        "Player", "PostQual", "Quality", "Pos", "Team", "Price"
    );
    for row in &squad.players {
        println!(
            "{:<18} {:>9.2} {:>8.2} {:<4} {:<6} {:>6.1}",
            row.name, row.post_quality, row.quality, row.position, row.team, row.price
        );
    }

    println!("\nSpend: {:.1} / {:.1}", squad.spend, squad::BUDGET);
    for position in Position::ALL {
        println!(
            "{}: {} / {}",
            position,
            squad.position_count(position),
            squad::position_cap(position)
        );
    }
    let mut clubs: Vec<_> = squad.club_counts.iter().collect();
    clubs.sort();
    for (club, count) in clubs {
        println!("{club}: {count} / {}", squad::MAX_PER_CLUB);
    }
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|val| val.parse::<u32>().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|val| val.parse::<f64>().ok())
        .unwrap_or(default)
}
