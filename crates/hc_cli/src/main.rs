//! Hand Cricket CLI
//!
//! Thin interactive front-end over the hc_core match engine: reads one
//! action per prompt, feeds it to the engine, and prints the resulting
//! scoreboard and commentary. All game rules live in hc_core; this binary
//! only renders what the engine reports.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};

use hc_core::{ActionOutcome, BatOrBowl, CoinFace, MatchEngine, Phase, Side};

#[derive(Parser)]
#[command(name = "hand-cricket")]
#[command(about = "Play hand cricket against a random computer opponent", long_about = None)]
struct Cli {
    /// RNG seed for a reproducible match (default: entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut engine = match cli.seed {
        Some(seed) => MatchEngine::with_seed(seed),
        None => MatchEngine::new(),
    };

    println!("🏏 Hand Cricket");
    println!("Match the bowler's number and you're out; otherwise the batter scores their own number.");
    println!("Commands: 'reset' restarts, 'quit' exits.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", prompt_for(&engine));
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let input = line?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }
        if input.eq_ignore_ascii_case("reset") {
            engine.reset();
            println!("Back to setup.\n");
            continue;
        }

        match dispatch(&mut engine, input) {
            Ok(outcome) => print_outcome(&engine, &outcome),
            Err(message) => println!("{message}"),
        }
    }

    Ok(())
}

fn prompt_for(engine: &MatchEngine) -> String {
    match engine.phase() {
        Phase::Setup => "Choose the maximum number (e.g. 6):".to_string(),
        Phase::TossPending => "Call the toss [heads/tails]:".to_string(),
        Phase::BattingChoicePending => "You won the toss! [bat/bowl]:".to_string(),
        Phase::InningsInProgress => {
            let max = engine.max_number();
            match engine.batting_side() {
                Side::Player => format!("Your number [0-{max}]:"),
                Side::Computer => format!("Bowl a number [0-{max}]:"),
            }
        }
        Phase::MatchOver => "Match over - 'reset' for a new match, 'quit' to exit:".to_string(),
    }
}

/// Map raw input onto the engine action the current phase expects.
fn dispatch(engine: &mut MatchEngine, input: &str) -> std::result::Result<ActionOutcome, String> {
    log::debug!("input '{input}' in phase {}", engine.phase());
    let result = match engine.phase() {
        Phase::Setup => {
            let max: u8 = input.parse().map_err(|_| "Enter a number.".to_string())?;
            engine.select_range(max)
        }
        Phase::TossPending => {
            let call = match input.to_ascii_lowercase().as_str() {
                "h" | "heads" => CoinFace::Heads,
                "t" | "tails" => CoinFace::Tails,
                _ => return Err("Enter 'heads' or 'tails'.".to_string()),
            };
            engine.call_toss(call)
        }
        Phase::BattingChoicePending => {
            let choice = match input.to_ascii_lowercase().as_str() {
                "bat" => BatOrBowl::Bat,
                "bowl" => BatOrBowl::Bowl,
                _ => return Err("Enter 'bat' or 'bowl'.".to_string()),
            };
            engine.choose_bat_or_bowl(choice)
        }
        Phase::InningsInProgress => {
            let number: u8 = input.parse().map_err(|_| "Enter a number.".to_string())?;
            engine.choose_number(number)
        }
        Phase::MatchOver => return Err("The match is over - 'reset' or 'quit'.".to_string()),
    };

    result.map_err(|e| e.to_string())
}

fn print_outcome(engine: &MatchEngine, outcome: &ActionOutcome) {
    for line in &outcome.commentary {
        println!("  {line}");
    }

    match outcome.phase {
        Phase::InningsInProgress => {
            print_scoreboard(outcome);
            match engine.batting_side() {
                Side::Player => println!("  You are batting."),
                Side::Computer => println!("  Computer is batting - your turn to bowl."),
            }
        }
        Phase::MatchOver => print_scoreboard(outcome),
        _ => {}
    }
    println!();
}

fn print_scoreboard(outcome: &ActionOutcome) {
    println!(
        "  You: {} {:?}  |  Computer: {} {:?}",
        outcome.player.total_runs,
        outcome.player.ball_history,
        outcome.computer.total_runs,
        outcome.computer.ball_history,
    );
    if let Some(target) = outcome.target {
        println!("  🎯 Target: {target} runs");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_core::ScriptedSource;

    #[test]
    fn test_dispatch_walks_a_match_from_raw_input() {
        let source = ScriptedSource::new()
            .with_numbers([2, 3])
            .with_coins([CoinFace::Heads]);
        let mut engine = MatchEngine::with_rng(Box::new(source));

        dispatch(&mut engine, "6").unwrap();
        dispatch(&mut engine, "heads").unwrap();
        dispatch(&mut engine, "bat").unwrap();
        let outcome = dispatch(&mut engine, "4").unwrap();

        assert_eq!(outcome.phase, Phase::InningsInProgress);
        assert_eq!(outcome.player.total_runs, 4);
    }

    #[test]
    fn test_dispatch_rejects_unparseable_input() {
        let mut engine = MatchEngine::with_rng(Box::new(ScriptedSource::new()));

        assert!(dispatch(&mut engine, "six").is_err());
        dispatch(&mut engine, "6").unwrap();
        assert!(dispatch(&mut engine, "obverse").is_err());
        assert_eq!(engine.phase(), Phase::TossPending);
    }
}
