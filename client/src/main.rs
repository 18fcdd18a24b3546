mod command;
mod config;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use common::config::Validate;
use common::games::TokioScheduler;
use common::games::tictactoe::{
    Difficulty, GameEngine, ModeSettings, TicTacToeGameState, TicTacToeSettings,
    detect_outcome_change,
};
use common::log;
use common::logger::{self, LogSink};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use command::{ClientCommand, HELP_TEXT, parse_command};
use config::{ClientConfigManager, Config, get_config_manager};

#[derive(Parser)]
#[command(name = "tictac", about = "Tic-tac-toe in the terminal")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play against the computer
    #[arg(long, conflicts_with = "two_player")]
    vs_computer: bool,

    /// Two humans share the keyboard
    #[arg(long)]
    two_player: bool,

    /// easy or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    computer_delay_ms: Option<u64>,

    /// Write the effective configuration back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if self.vs_computer {
            config.tictactoe.vs_computer = true;
        }
        if self.two_player {
            config.tictactoe.vs_computer = false;
        }
        if let Some(difficulty) = self.difficulty {
            config.tictactoe.difficulty = difficulty;
        }
        if let Some(delay) = self.computer_delay_ms {
            config.tictactoe.computer_delay_ms = delay;
        }
        if self.use_log_prefix {
            config.use_log_prefix = true;
        }
    }
}

fn load_config(args: &Args, manager: &ClientConfigManager) -> Result<Config, String> {
    let mut config = manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let config = load_config(&args, &config_manager)?;

    let prefix = config.use_log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix, LogSink::Stderr);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", config_manager.content_provider().path().display());
    }

    let settings = TicTacToeSettings::from(&config.tictactoe);
    let engine = GameEngine::new(settings, Arc::new(TokioScheduler::from_current()?));

    let renderer = tokio::spawn(render_loop(engine.subscribe(), engine.subscribe_mode()));

    println!("{}", HELP_TEXT);
    let result = run_input_loop(&engine).await;

    renderer.abort();
    log!("Client shut down");
    result
}

async fn render_loop(
    mut state_rx: watch::Receiver<TicTacToeGameState>,
    mode_rx: watch::Receiver<ModeSettings>,
) {
    let mut previous = *state_rx.borrow_and_update();
    print_screen(&previous, &mode_rx);

    while state_rx.changed().await.is_ok() {
        let current = *state_rx.borrow_and_update();
        print_screen(&current, &mode_rx);

        if let Some(event) = detect_outcome_change(&previous, &current) {
            println!("{}", render::render_celebration(&event));
        }
        previous = current;
    }
}

fn print_screen(state: &TicTacToeGameState, mode_rx: &watch::Receiver<ModeSettings>) {
    let mode = *mode_rx.borrow();
    println!("\n{}", render::render_screen(state, &mode));
}

async fn run_input_loop(engine: &GameEngine) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}. Type 'help' for commands.", e);
                continue;
            }
        };

        match command {
            ClientCommand::Move { row, col } => {
                if let Err(e) = engine.try_make_move(row, col) {
                    println!("Move rejected: {}", e);
                }
            }
            ClientCommand::Reset => engine.reset(),
            ClientCommand::SetVsComputer(enabled) => engine.set_vs_computer_mode(enabled),
            ClientCommand::SetDifficulty(difficulty) => engine.set_difficulty(difficulty),
            ClientCommand::Status => {
                println!("\n{}", render::render_screen(&engine.state(), &engine.mode()));
            }
            ClientCommand::Help => println!("{}", HELP_TEXT),
            ClientCommand::Quit => break,
        }
    }

    Ok(())
}
