use fpl_planner::player_value::{Position, RankedPlayer};
use fpl_planner::squad::{
    build_squad, position_cap, SquadState, BUDGET, MAX_PER_CLUB, SQUAD_SIZE,
};

fn rp(name: &str, post_quality: f64, position: Position, team: &str, price: f64) -> RankedPlayer {
    RankedPlayer {
        post_quality,
        name: name.to_string(),
        quality: post_quality,
        position,
        team: team.to_string(),
        price,
    }
}

// Eight clubs, each with a full 1-2-2-1 block, descending post quality.
fn broad_pool() -> Vec<RankedPlayer> {
    let mut pool = Vec::new();
    let mut pq = 90.0;
    for club_idx in 0..8 {
        let club = format!("C{club_idx}");
        for (position, slots) in [
            (Position::Mid, 2),
            (Position::Fwd, 1),
            (Position::Def, 2),
            (Position::Gkp, 1),
        ] {
            for slot in 0..slots {
                pool.push(rp(
                    &format!("{club} {position} {slot}"),
                    pq,
                    position,
                    &club,
                    4.0 + (club_idx as f64) * 0.3,
                ));
                pq -= 1.0;
            }
        }
    }
    pool
}

fn assert_invariants(squad: &fpl_planner::squad::Squad) {
    assert!(squad.size() <= SQUAD_SIZE);
    assert!(squad.spend <= BUDGET + 1e-9);
    for position in Position::ALL {
        assert!(squad.position_count(position) <= position_cap(position));
    }
    for (club, count) in &squad.club_counts {
        assert!(*count <= MAX_PER_CLUB, "{club} has {count}");
    }
}

#[test]
fn fills_fifteen_within_every_cap() {
    let squad = build_squad(&broad_pool(), 4.0).expect("build should succeed");

    assert_eq!(squad.state, SquadState::Complete);
    assert_eq!(squad.size(), SQUAD_SIZE);
    assert_invariants(&squad);
    // Position caps sum to exactly fifteen, so a complete squad hits each.
    for position in Position::ALL {
        assert_eq!(squad.position_count(position), position_cap(position));
    }
}

#[test]
fn goalkeeper_only_pool_stops_at_the_position_cap() {
    let pool: Vec<RankedPlayer> = (0..20)
        .map(|i| rp(&format!("GK {i}"), 50.0 - i as f64, Position::Gkp, &format!("C{i}"), 4.5))
        .collect();
    let squad = build_squad(&pool, 4.0).expect("build should succeed");

    assert_eq!(squad.size(), 2);
    assert_eq!(squad.state, SquadState::Exhausted);
    assert_eq!(squad.position_count(Position::Gkp), 2);
    assert_invariants(&squad);
}

#[test]
fn budget_gate_reserves_the_floor_price_for_unfilled_slots() {
    let pool = vec![
        rp("Anchor", 30.0, Position::Mid, "C1", 20.0),
        // 100 - (20 + 30) leaves 50 for 13 slots: under the 4.0 floor.
        rp("TooDear", 29.0, Position::Mid, "C2", 30.0),
        rp("Sensible", 28.0, Position::Def, "C3", 10.0),
    ];
    let squad = build_squad(&pool, 4.0).expect("build should succeed");

    let names: Vec<&str> = squad.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Anchor", "Sensible"]);
    assert_eq!(squad.state, SquadState::Exhausted);
}

#[test]
fn the_very_first_pick_skips_the_budget_gate() {
    // 95 leaves 5 for 14 slots, far below any sane floor; the first pick is
    // exempt on purpose and must still go through.
    let pool = vec![rp("Galactico", 99.0, Position::Fwd, "C1", 95.0)];
    let squad = build_squad(&pool, 4.0).expect("build should succeed");

    assert_eq!(squad.size(), 1);
    assert!((squad.spend - 95.0).abs() < 1e-9);
    assert_eq!(squad.state, SquadState::Exhausted);
}

#[test]
fn final_slot_only_needs_the_remaining_budget() {
    let mut pool = Vec::new();
    let mut pq = 99.0;
    for (position, slots) in [
        (Position::Gkp, 2),
        (Position::Def, 5),
        (Position::Mid, 5),
        (Position::Fwd, 2),
    ] {
        for slot in 0..slots {
            pool.push(rp(&format!("{position} {slot}"), pq, position, &format!("C{pq}"), 4.0));
            pq -= 1.0;
        }
    }
    // Fifteenth slot: 14 picks spent 56, so 44 remains. A 50.0 forward busts
    // the budget outright; the 4.0 one completes the squad.
    pool.push(rp("Bust", 50.0, Position::Fwd, "C98", 50.0));
    pool.push(rp("Filler", 1.0, Position::Fwd, "C99", 4.0));

    let squad = build_squad(&pool, 4.0).expect("build should succeed");
    assert_eq!(squad.state, SquadState::Complete);
    assert!(squad.players.iter().all(|p| p.name != "Bust"));
    assert!(squad.players.iter().any(|p| p.name == "Filler"));
    assert!((squad.spend - 60.0).abs() < 1e-9);
}

#[test]
fn fourth_club_member_is_skipped_not_retried() {
    let pool = vec![
        rp("A1", 50.0, Position::Mid, "AAA", 5.0),
        rp("A2", 49.0, Position::Mid, "AAA", 5.0),
        rp("A3", 48.0, Position::Def, "AAA", 5.0),
        rp("A4", 47.0, Position::Def, "AAA", 5.0),
        rp("B1", 46.0, Position::Fwd, "BBB", 5.0),
    ];
    let squad = build_squad(&pool, 4.0).expect("build should succeed");

    let names: Vec<&str> = squad.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A1", "A2", "A3", "B1"]);
    assert_eq!(squad.club_count("AAA"), 3);
    assert_eq!(squad.state, SquadState::Exhausted);
}

#[test]
fn rebuilding_from_the_same_input_is_identical() {
    let pool = broad_pool();
    let first = build_squad(&pool, 4.0).expect("build should succeed");
    let second = build_squad(&pool, 4.0).expect("build should succeed");

    let a: Vec<&str> = first.players.iter().map(|p| p.name.as_str()).collect();
    let b: Vec<&str> = second.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(a, b);
    assert_eq!(first.spend, second.spend);
    assert_eq!(first.state, second.state);
}

#[test]
fn undersized_pool_yields_a_partial_exhausted_squad() {
    let pool = vec![
        rp("One", 10.0, Position::Gkp, "C1", 4.0),
        rp("Two", 9.0, Position::Def, "C2", 4.0),
        rp("Three", 8.0, Position::Mid, "C3", 4.0),
    ];
    let squad = build_squad(&pool, 4.0).expect("an undersized pool is not an error");

    assert_eq!(squad.size(), 3);
    assert_eq!(squad.state, SquadState::Exhausted);
    assert_invariants(&squad);
}

#[test]
fn negative_floor_price_is_rejected() {
    let err = build_squad(&[], -1.0).expect_err("contract violation must fail fast");
    assert!(err.to_string().contains("non-negative"), "{err}");
}

#[test]
fn negative_candidate_price_is_rejected() {
    let pool = vec![rp("Broken", 10.0, Position::Mid, "C1", -2.0)];
    let err = build_squad(&pool, 4.0).expect_err("contract violation must fail fast");
    assert!(err.to_string().contains("negative price"), "{err}");
}
