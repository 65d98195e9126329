use anyhow::{Context, Result};
use chess_rules::core::{load_or_default, save_settings, settings_path, EngineSettings};
use chess_rules::game::{Game, GlyphStyle};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess_rules", version, about = "Two-player chess rules engine")]
struct Cli {
    /// Settings file (defaults to settings.json in the config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Glyph style for this run: uniform or case_by_color
    #[arg(long, global = true)]
    glyphs: Option<GlyphStyle>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game on the terminal, White first
    Play,

    /// Apply moves alternately from the starting position
    Replay {
        /// Moves in coordinate notation, e.g. e2e3 e7e6
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final game snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective settings
    Config {
        /// Write the effective settings back to the settings file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli.settings.clone().unwrap_or_else(settings_path);
    let mut settings = load_or_default(&path);
    if let Some(glyphs) = cli.glyphs {
        settings.glyph_style = glyphs;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!("[SETTINGS] Using {:?}", path);

    match cli.command {
        Command::Play => play(&settings),
        Command::Replay { moves, json } => replay(&settings, &moves, json),
        Command::Config { write } => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            if write {
                save_settings(&path, &settings)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            Ok(())
        }
    }
}

fn print_board(game: &Game, settings: &EngineSettings) {
    if settings.show_coordinates {
        println!("{}", game.board().render_with_coordinates());
    } else {
        println!("{}", game.board());
    }
}

fn play(settings: &EngineSettings) -> Result<()> {
    let mut game = Game::with_glyphs(settings.glyph_style);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(&game, settings);
        print!("{:?} to move (e.g. e2e3, 'moves e2', 'quit'): ", game.side_to_move());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        let input = line.trim();

        match input.split_whitespace().collect::<Vec<_>>().as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => return Ok(()),
            ["moves", square] => {
                let destinations = chess_rules::api::legal_destinations(&game, square);
                if destinations.is_empty() {
                    println!("No moves from '{square}'");
                } else {
                    let listed: Vec<String> =
                        destinations.iter().map(ToString::to_string).collect();
                    println!("{square}: {}", listed.join(" "));
                }
            }
            _ => match game.play(game.current_player_idx(), input) {
                Ok(outcome) => {
                    if let Some(captured) = outcome.captured {
                        println!("{:?} takes {:?}", outcome.piece.piece_type(), captured.piece_type());
                    }
                    if game.is_over() {
                        print_board(&game, settings);
                        println!("{}", game.state().message());
                        return Ok(());
                    }
                }
                Err(e) => println!("{e}"),
            },
        }
    }
}

fn replay(settings: &EngineSettings, moves: &[String], json: bool) -> Result<()> {
    let mut game = Game::with_glyphs(settings.glyph_style);

    for (number, raw_move) in moves.iter().enumerate() {
        game.play(game.current_player_idx(), raw_move)
            .with_context(|| format!("move {} '{}' rejected", number + 1, raw_move))?;
        if game.is_over() {
            break;
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    } else {
        print_board(&game, settings);
        if game.is_over() {
            println!("{}", game.state().message());
        }
    }
    Ok(())
}
