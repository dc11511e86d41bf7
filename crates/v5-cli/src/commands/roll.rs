use v5_mechanics::dice::pool::validate_request;
use v5_mechanics::{Difficulty, RollerConfig, RollerSession};

pub fn run(
    total: u32,
    hunger: u32,
    difficulty: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    validate_request(total, hunger).map_err(|e| e.to_string())?;

    let config = RollerConfig { seed };
    let mut session = RollerSession::new(&config);
    let difficulty = Difficulty::new(difficulty);

    tracing::debug!(total, hunger, ?difficulty, ?seed, "rolling pool");
    let outcome = session
        .roll(total, hunger, difficulty)
        .map_err(|e| e.to_string())?;
    tracing::debug!(category = ?outcome.category, successes = outcome.success_count, "evaluated");

    super::print_roll(session.pool(), &outcome, json)
}
