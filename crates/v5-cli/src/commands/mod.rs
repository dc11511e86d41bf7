pub mod play;
pub mod roll;
pub mod rouse;

use serde::Serialize;

use v5_mechanics::{DicePool, Outcome};

use crate::render;

/// Machine-readable form of a finished roll.
#[derive(Serialize)]
struct Report<'a> {
    pool: &'a DicePool,
    outcome: &'a Outcome,
    bestial_compulsion: bool,
}

/// Print a pool and its outcome as text or pretty JSON.
fn print_roll(pool: &DicePool, outcome: &Outcome, json: bool) -> Result<(), String> {
    if json {
        let report = Report {
            pool,
            outcome,
            bestial_compulsion: outcome.bestial_compulsion(),
        };
        let text = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        println!("{}", render::render_roll(pool, outcome, None));
    }
    Ok(())
}
