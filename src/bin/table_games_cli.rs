// src/bin/table_games_cli.rs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};

use table_games::engine::RandomSource;
use table_games::infra::{Console, DeterministicRng, ParticipantRegistry, SystemRng};
use table_games::{run_tic_tac_toe, run_twenty_one, EngineError, FirstMove, GameConfig};

#[derive(Parser)]
#[command(author, version, about = "Console Twenty-One and Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Seed для детерминированного RNG (воспроизводимые партии).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON-файл с GameConfig.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    game: Game,
}

#[derive(Subcommand)]
enum Game {
    /// Двадцать одно против дилера.
    #[command(alias = "21")]
    TwentyOne {
        #[arg(long)]
        dealer_stands_at: Option<u32>,
    },
    /// Крестики-нолики против компьютера, с сетами и матчем.
    #[command(alias = "ttt")]
    TicTacToe {
        #[arg(long)]
        games_in_set: Option<u32>,
        #[arg(long)]
        sets_in_match: Option<u32>,
        /// choose | human | computer
        #[arg(long)]
        first: Option<FirstMove>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match GameConfig::from_path(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[CLI] Ошибка конфига: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };
    apply_overrides(&mut config, &cli.game);
    if let Err(e) = config.validate() {
        eprintln!("[CLI] Ошибка конфига: {e}");
        return ExitCode::FAILURE;
    }

    let outcome = match cli.seed {
        Some(seed) => {
            info!("[CLI] детерминированный RNG, seed={seed}");
            play(&cli.game, &config, &mut DeterministicRng::from_seed(seed))
        }
        None => play(&cli.game, &config, &mut SystemRng),
    };

    match outcome {
        Ok(()) | Err(EngineError::InputClosed) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[CLI] игра прервана: {e}");
            eprintln!("[CLI] Ошибка: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Флаги командной строки поверх конфига.
fn apply_overrides(config: &mut GameConfig, game: &Game) {
    match game {
        Game::TwentyOne { dealer_stands_at } => {
            if let Some(v) = dealer_stands_at {
                config.twenty_one.dealer_stands_at = *v;
            }
        }
        Game::TicTacToe {
            games_in_set,
            sets_in_match,
            first,
        } => {
            let ttt = &mut config.tic_tac_toe;
            if let Some(v) = games_in_set {
                ttt.games_in_set = *v;
            }
            if let Some(v) = sets_in_match {
                ttt.sets_in_match = *v;
            }
            if let Some(v) = first {
                ttt.first_move = *v;
            }
        }
    }
}

fn play<G: RandomSource>(game: &Game, config: &GameConfig, rng: &mut G) -> Result<(), EngineError> {
    let registry = ParticipantRegistry::new();
    let mut console = Console::stdio();

    let summary = match game {
        Game::TwentyOne { .. } => run_twenty_one(&config.twenty_one, &registry, &mut console, rng)?,
        Game::TicTacToe { .. } => run_tic_tac_toe(&config.tic_tac_toe, &registry, &mut console, rng)?,
    };
    info!(
        "[CLI] {}: сыграно {}, побед {}, поражений {}, ничьих {}",
        summary.human_name,
        summary.rounds_played,
        summary.human_wins,
        summary.automated_wins,
        summary.ties
    );
    Ok(())
}
