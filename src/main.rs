mod chat;
mod expr;
mod knowledge;
mod personality;

use chat::{ChatEngine, ConversationState};
use clap::Parser;
use knowledge::KnowledgeStore;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dawid", about = "A chat bot that learns answers and evaluates arithmetic")]
struct Cli {
    #[arg(long, env = "DAWID_DATA", help = "Path to the learned-answer file")]
    data: Option<PathBuf>,

    #[arg(long, help = "Evaluate a single expression and exit")]
    eval: Option<String>,

    #[arg(help = "Send one message instead of starting an interactive session")]
    message: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(expression) = cli.eval {
        return run_eval_mode(&expression);
    }

    let data_path = cli
        .data
        .unwrap_or_else(|| PathBuf::from("dawid_data.json"));
    let mut engine = ChatEngine::new(KnowledgeStore::load(&data_path));

    match cli.message {
        Some(message) => {
            println!("{}", engine.process_message(&message));
            ExitCode::from(0)
        }
        None => run_interactive(&mut engine),
    }
}

fn run_eval_mode(expression: &str) -> ExitCode {
    match expr::evaluate(expression) {
        Some(result) => {
            println!("{}", result);
            ExitCode::from(0)
        }
        None => {
            eprintln!("Error: could not evaluate '{}'", expression);
            ExitCode::from(1)
        }
    }
}

fn run_interactive(engine: &mut ChatEngine) -> ExitCode {
    println!("{}", personality::greeting());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let message = line.trim();
        if message.is_empty() {
            break;
        }
        println!("{}", engine.process_message(message));
        if engine.state() == ConversationState::Learning {
            println!("(napisz 'skip', jeśli nie chcesz odpowiadać)");
        }
    }

    ExitCode::from(0)
}
