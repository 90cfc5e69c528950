use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use fpl_planner::dataset::Dataset;
use fpl_planner::fixture_mult::build_multiplier_table;
use fpl_planner::player_value::apply_fixture_multipliers;
use fpl_planner::sample_league::{generate, SampleLeagueConfig};
use fpl_planner::squad::build_squad;

fn bench_league() -> Dataset {
    generate(&SampleLeagueConfig {
        upcoming_gameweeks: 36,
        ..SampleLeagueConfig::default()
    })
    .expect("sample league should generate")
}

fn bench_multiplier_table(c: &mut Criterion) {
    let dataset = bench_league();
    let start_gw = dataset.upcoming_gameweek();

    c.bench_function("multiplier_table_build", |b| {
        b.iter(|| {
            let table = build_multiplier_table(
                black_box(&dataset.schedule),
                black_box(&dataset.registry),
                start_gw,
                10,
                1.0,
            )
            .unwrap();
            black_box(table.len());
        })
    });
}

fn bench_rankings(c: &mut Criterion) {
    let dataset = bench_league();
    let start_gw = dataset.upcoming_gameweek();
    let table =
        build_multiplier_table(&dataset.schedule, &dataset.registry, start_gw, 10, 1.0).unwrap();

    c.bench_function("rankings_compute", |b| {
        b.iter(|| {
            let ranked =
                apply_fixture_multipliers(black_box(&dataset.players), black_box(&table)).unwrap();
            black_box(ranked.len());
        })
    });
}

fn bench_squad_build(c: &mut Criterion) {
    let dataset = bench_league();
    let start_gw = dataset.upcoming_gameweek();
    let table =
        build_multiplier_table(&dataset.schedule, &dataset.registry, start_gw, 10, 1.0).unwrap();
    let ranked = apply_fixture_multipliers(&dataset.players, &table).unwrap();

    c.bench_function("squad_build", |b| {
        b.iter(|| {
            let squad = build_squad(black_box(&ranked), black_box(4.0)).unwrap();
            black_box(squad.size());
        })
    });
}

criterion_group!(perf, bench_multiplier_table, bench_rankings, bench_squad_build);
criterion_main!(perf);
