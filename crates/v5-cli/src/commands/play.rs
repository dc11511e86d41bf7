use std::io::{self, BufRead, Write};

use colored::Colorize;

use v5_mechanics::dice::pool::validate_request;
use v5_mechanics::{
    DiceError, DiceResult, Difficulty, DieKind, DieSource, Outcome, RollerConfig, RollerSession,
    Toggle,
};

use crate::render;

const HELP: &str = "\
V5 Roller Commands
  roll <total> [hunger] [difficulty]  Roll a new pool (difficulty 0 = none)
  rouse                               Roll a Rouse Check
  add normal|hunger                   Add one die to the current pool
  willpower                           Start a willpower reroll
  select <n>                          Toggle normal die n for the reroll
  reroll                              Reroll the selected dice
  cancel                              Abandon the willpower reroll
  clear                               Clear the dice
  show                                Show the current dice
  quit                                Leave the roller";

/// Line-oriented front end over one roller session.
pub struct Shell<S: DieSource> {
    session: RollerSession<S>,
    finished: bool,
}

impl<S: DieSource> Shell<S> {
    pub fn new(session: RollerSession<S>) -> Self {
        Self {
            session,
            finished: false,
        }
    }

    /// True once the user has asked to quit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process a line of user input and return the text to print.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let mut words = trimmed.split_whitespace();
        let cmd = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        let result = match cmd.as_str() {
            "roll" => self.do_roll(&args),
            "rouse" => self.do_rouse(),
            "add" => self.do_add(&args),
            "willpower" | "wp" => self.do_willpower(),
            "select" => self.do_select(&args),
            "reroll" => self.do_reroll(),
            "cancel" => self.do_cancel(),
            "clear" => {
                self.session.clear();
                Ok("Dice cleared.".to_string())
            }
            "show" => Ok(self.current()),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => {
                self.finished = true;
                Ok("Goodbye!".to_string())
            }
            other => return Err(format!("unknown command: {other} (try 'help')")),
        };

        result.map_err(|e| {
            tracing::debug!(command = %cmd, error = %e, "command rejected");
            match e {
                DiceError::IndexOutOfRange { index, len } => {
                    format!("there is no normal die {} (pool has {len})", index + 1)
                }
                e => e.to_string(),
            }
        })
    }

    fn current(&self) -> String {
        match self.session.outcome() {
            Some(outcome) => self.render(&outcome),
            None => "No dice rolled yet.".to_string(),
        }
    }

    fn render(&self, outcome: &Outcome) -> String {
        render::render_roll(
            self.session.pool(),
            outcome,
            self.session.reroll_state().selection(),
        )
    }

    fn do_roll(&mut self, args: &[&str]) -> DiceResult<String> {
        let usage = || "usage: roll <total> [hunger] [difficulty]".to_string();
        let numbers = args
            .iter()
            .map(|a| a.parse::<u32>())
            .collect::<Result<Vec<_>, _>>();
        let Ok(numbers) = numbers else {
            return Ok(usage());
        };
        let (total, hunger, difficulty) = match numbers.as_slice() {
            [total] => (*total, 0, 0),
            [total, hunger] => (*total, *hunger, 0),
            [total, hunger, difficulty] => (*total, *hunger, *difficulty),
            _ => return Ok(usage()),
        };
        validate_request(total, hunger)?;

        tracing::debug!(total, hunger, difficulty, "rolling pool");
        let outcome = self.session.roll(total, hunger, Difficulty::new(difficulty))?;
        Ok(self.render(&outcome))
    }

    fn do_rouse(&mut self) -> DiceResult<String> {
        let outcome = self.session.rouse_check()?;
        Ok(self.render(&outcome))
    }

    fn do_add(&mut self, args: &[&str]) -> DiceResult<String> {
        let kind = match args.first().map(|a| a.to_lowercase()).as_deref() {
            Some("normal") => DieKind::Normal,
            Some("hunger") => DieKind::Hunger,
            _ => return Ok("usage: add normal|hunger".to_string()),
        };
        let value = self.session.add_die(kind)?;
        Ok(format!("Added {kind} die: {value}\n{}", self.current()))
    }

    fn do_willpower(&mut self) -> DiceResult<String> {
        self.session.begin_reroll()?;
        Ok(format!(
            "Willpower reroll: select up to 3 normal dice with 'select <n>', then 'reroll'.\n{}",
            self.current()
        ))
    }

    fn do_select(&mut self, args: &[&str]) -> DiceResult<String> {
        // Dice are numbered from 1 on screen.
        let Some(position) = args
            .first()
            .and_then(|a| a.parse::<usize>().ok())
            .filter(|&p| p >= 1)
        else {
            return Ok("usage: select <n>".to_string());
        };
        let verb = match self.session.toggle_selection(position - 1)? {
            Toggle::Selected => "Selected",
            Toggle::Deselected => "Deselected",
        };
        Ok(format!("{verb} die {position}.\n{}", self.current()))
    }

    fn do_cancel(&mut self) -> DiceResult<String> {
        if !self.session.reroll_state().is_selecting() {
            return Err(DiceError::NotSelecting);
        }
        self.session.cancel_reroll();
        Ok(format!("Reroll cancelled.\n{}", self.current()))
    }

    fn do_reroll(&mut self) -> DiceResult<String> {
        let (rerolled, outcome) = self.session.execute_reroll()?;
        let positions: Vec<String> = rerolled.iter().map(|i| (i + 1).to_string()).collect();
        Ok(format!(
            "Rerolled {} {}.\n{}",
            if rerolled.len() == 1 { "die" } else { "dice" },
            positions.join(", "),
            self.render(&outcome)
        ))
    }
}

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let config = RollerConfig { seed };
    let mut shell = Shell::new(RollerSession::new(&config));
    tracing::info!(?seed, "starting roller session");

    println!("  {} V5 Dice Roller", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match shell.process(input) {
            Ok(output) if !output.is_empty() => println!("{output}\n"),
            Ok(_) => {}
            Err(e) => println!("{}\n", e.yellow()),
        }
        if shell.is_finished() {
            break;
        }
    }

    Ok(())
}
