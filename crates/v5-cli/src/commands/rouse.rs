use v5_mechanics::{RollerConfig, RollerSession};

pub fn run(seed: Option<u64>, json: bool) -> Result<(), String> {
    let config = RollerConfig { seed };
    let mut session = RollerSession::new(&config);

    tracing::debug!(?seed, "rouse check");
    let outcome = session.rouse_check().map_err(|e| e.to_string())?;

    super::print_roll(session.pool(), &outcome, json)
}
