use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use deskcalc::config;
use deskcalc::engine::{Action, CalculatorEngine, UnaryFunction};
use deskcalc::input::keyboard;

/// Terminal front-end for the deskcalc engine.
///
/// Reads whitespace-separated tokens from stdin and prints the display
/// after each line. Tokens are single keys (`7`, `+`, `=`, `c`), numbers
/// (`3.14`, pressed digit by digit), or named keys (`sqrt`, `m+`, `mr`).
#[derive(Debug, Parser)]
#[command(name = "deskcalc", version, about)]
struct Args {
    /// Settings file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the NaN-folding evaluation path (observably identical).
    #[arg(long)]
    turbo: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => config::load_from(path)?,
        None => config::load()?,
    };

    let mut engine = CalculatorEngine::new()
        .with_format(settings.format)
        .with_history_cap(settings.memory_history_cap);
    engine.set_turbo_mode(settings.turbo || args.turbo);

    println!("{}", engine.display());
    for line in io::stdin().lock().lines() {
        let line = line?;
        for token in line.split_whitespace() {
            match token {
                "q" | "quit" => return Ok(()),
                "memory" => {
                    println!("M = {}", engine.memory_display());
                    let history = engine.memory_history_text();
                    if !history.is_empty() {
                        println!("{history}");
                    }
                }
                _ => match actions_for_token(token) {
                    Some(actions) => {
                        for action in actions {
                            engine.press(action);
                        }
                    }
                    None => eprintln!("Unrecognized input: {token}"),
                },
            }
        }
        println!("{}", engine.display());
    }
    Ok(())
}

/// Map one input token to the key presses it stands for.
fn actions_for_token(token: &str) -> Option<Vec<Action>> {
    // Numbers press their digit and point keys in order.
    if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return token.chars().map(keyboard::action_for_key).collect();
    }
    if token.chars().count() == 1 {
        return keyboard::action_for_key(token.chars().next()?).map(|action| vec![action]);
    }
    let action = match token {
        "sin" => Action::Unary(UnaryFunction::Sin),
        "cos" => Action::Unary(UnaryFunction::Cos),
        "tan" => Action::Unary(UnaryFunction::Tan),
        "sqrt" => Action::Unary(UnaryFunction::Sqrt),
        "fact" => Action::Unary(UnaryFunction::Factorial),
        "m+" => Action::MemoryAdd,
        "m-" => Action::MemorySubtract,
        "mr" => Action::MemoryRecall,
        "mc" => Action::MemoryClear,
        "clear" => Action::Clear,
        "del" => Action::Delete,
        "neg" => Action::Sign,
        _ => return None,
    };
    Some(vec![action])
}
