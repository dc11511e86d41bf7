//! Text rendering of pools and outcomes.

use colored::{ColoredString, Colorize};

use v5_mechanics::{DicePool, DiceValue, DieFace, DieKind, Outcome, OutcomeCategory, Selection};

/// Marker printed after a die value.
fn face_marker(face: DieFace, kind: DieKind) -> &'static str {
    match (kind, face) {
        (DieKind::Normal, DieFace::Critical) => "◆",
        (DieKind::Normal, DieFace::Success) => "●",
        (DieKind::Normal, _) => "○",
        (DieKind::Hunger, DieFace::Bestial) => "💀",
        (DieKind::Hunger, DieFace::Failure) => "✖",
        (DieKind::Hunger, DieFace::Success) => "✓",
        (DieKind::Hunger, DieFace::Critical) => "★",
    }
}

fn paint_die(text: String, face: DieFace) -> ColoredString {
    match face {
        DieFace::Critical => text.bold().cyan(),
        DieFace::Success => text.green(),
        DieFace::Failure => text.dimmed(),
        DieFace::Bestial => text.bold().magenta(),
    }
}

fn render_die(value: DiceValue, kind: DieKind, selected: bool) -> String {
    let face = DieFace::classify(value, kind);
    let text = format!("{value}{}", face_marker(face, kind));
    let text = if selected { format!("[{text}]") } else { text };
    paint_die(text, face).to_string()
}

/// Render one line per non-empty pool.
///
/// While a reroll is in progress normal dice are numbered from 1 and
/// selected dice are bracketed.
pub fn render_pool(pool: &DicePool, selection: Option<&Selection>) -> String {
    let mut lines = Vec::new();

    if !pool.normal().is_empty() {
        let dice: Vec<String> = pool
            .normal()
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let selected = selection.is_some_and(|s| s.contains(i));
                let die = render_die(value, DieKind::Normal, selected);
                if selection.is_some() {
                    format!("{}:{die}", i + 1)
                } else {
                    die
                }
            })
            .collect();
        lines.push(format!("Normal: {}", dice.join(" ")));
    }

    if !pool.hunger().is_empty() {
        let dice: Vec<String> = pool
            .hunger()
            .iter()
            .map(|&value| render_die(value, DieKind::Hunger, false))
            .collect();
        lines.push(format!("Hunger: {}", dice.join(" ")));
    }

    lines.join("\n")
}

/// The outcome headline, e.g. `Critical Success (6/6)`.
pub fn headline(outcome: &Outcome) -> String {
    match (outcome.category, outcome.difficulty) {
        (OutcomeCategory::UndifferentiatedTally, _) => {
            let mut text = format!("{}: {}", outcome.category, outcome.success_count);
            if outcome.is_messy_critical {
                text.push_str(" - Messy Critical Possible!");
            } else if outcome.has_critical {
                text.push_str(" - Critical Possible!");
            }
            text
        }
        (category, Some(difficulty)) if !category.is_rouse() => {
            format!("{category} ({}/{difficulty})", outcome.success_count)
        }
        (category, _) => category.to_string(),
    }
}

fn paint_headline(outcome: &Outcome) -> ColoredString {
    let text = headline(outcome);
    match outcome.category {
        OutcomeCategory::BestialFailure | OutcomeCategory::RouseBestialFailure => {
            text.bold().magenta()
        }
        OutcomeCategory::MessyCriticalSuccess => text.bold().yellow(),
        OutcomeCategory::CriticalSuccess => text.bold().cyan(),
        c if c.is_success() => text.bold().green(),
        c if c.is_failure() => text.bold().red(),
        _ => text.bold(),
    }
}

/// Render the success count, headline and any compulsion warning.
pub fn render_outcome(outcome: &Outcome) -> String {
    let mut lines = vec![
        format!("Successes: {}", outcome.success_count),
        paint_headline(outcome).to_string(),
    ];
    if outcome.bestial_compulsion() {
        lines.push(
            "Hunger die rolled 1: Bestial Compulsion possible!"
                .yellow()
                .to_string(),
        );
    }
    lines.join("\n")
}

/// Render the pool followed by its outcome.
pub fn render_roll(pool: &DicePool, outcome: &Outcome, selection: Option<&Selection>) -> String {
    format!("{}\n{}", render_pool(pool, selection), render_outcome(outcome))
}
