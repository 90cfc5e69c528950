pub mod dataset;
pub mod fixture_mult;
pub mod player_value;
pub mod sample_league;
pub mod squad;
pub mod team_fixtures;
