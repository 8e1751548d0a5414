//! Gomoku engine CLI
//!
//! Runs the engine on fixed scenarios, plays engine-vs-engine games and
//! suggests a move for a position given on the command line.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gomoku::{
    AIEngine, Board, DepthSchedule, Difficulty, EngineConfig, Game, GameMode, GameStatus, Pos,
    Side, Stone,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Gomoku decision engine
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Gomoku move engine: demo scenarios, self play and move suggestions", long_about = None)]
#[command(version)]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured difficulty
    #[arg(long, global = true, value_enum)]
    difficulty: Option<Level>,

    /// Override the configured hard-mode search depth
    #[arg(long, global = true)]
    depth: Option<u8>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the built-in scenarios and report PASS/FAIL
    Demo,

    /// Let the engine play both sides
    Selfplay {
        /// Difficulty for Black (defaults to the configured one)
        #[arg(long, value_enum)]
        black: Option<Level>,

        /// Difficulty for White (defaults to the configured one)
        #[arg(long, value_enum)]
        white: Option<Level>,

        /// Stop after this many stones
        #[arg(long, default_value_t = 225)]
        max_moves: u32,
    },

    /// Replay a position and print the engine's move
    Suggest {
        /// Moves as "x,y" pairs separated by spaces, Black first
        #[arg(long, default_value = "")]
        moves: String,

        /// Side to suggest for (defaults to the side to move)
        #[arg(long, value_enum)]
        side: Option<SideArg>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Easy,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Hard => Difficulty::Hard,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SideArg {
    Black,
    White,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Black => Side::Black,
            SideArg::White => Side::White,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    info!(?config, "engine configured");

    match cli.command {
        Command::Demo => run_demo(config),
        Command::Selfplay {
            black,
            white,
            max_moves,
        } => run_selfplay(config, black, white, max_moves),
        Command::Suggest { moves, side } => run_suggest(config, &moves, side.map(Side::from)),
    }
}

fn resolve_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    if let Some(level) = cli.difficulty {
        config.difficulty = level.into();
    }
    if let Some(depth) = cli.depth {
        config.depth = DepthSchedule::Fixed(depth);
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Parse "x,y x,y ..." into positions.
fn parse_moves(text: &str) -> Result<Vec<Pos>> {
    text.split_whitespace()
        .map(|token| {
            let (x, y) = token
                .split_once(',')
                .with_context(|| format!("move {token:?} is not of the form x,y"))?;
            let x: i32 = x.trim().parse().with_context(|| format!("bad x in {token:?}"))?;
            let y: i32 = y.trim().parse().with_context(|| format!("bad y in {token:?}"))?;
            Ok(Pos::try_new(x, y)?)
        })
        .collect()
}

fn run_demo(config: EngineConfig) -> Result<()> {
    println!("===========================================");
    println!("         Gomoku Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("===========================================\n");

    let mut engine = AIEngine::with_config(config);
    let mut failures = 0;

    println!("--- Test 1: Empty Board ---");
    let board = Board::new();
    failures += report(&mut engine, &board, Side::Black, &[Pos::center()]);

    println!("\n--- Test 2: Complete Own Four ---");
    let mut board = Board::new();
    for x in 3..7 {
        board.place_stone(Pos::new(x, 11), Stone::White);
    }
    board.place_stone(Pos::new(2, 11), Stone::Black);
    failures += report(&mut engine, &board, Side::White, &[Pos::new(7, 11)]);

    println!("\n--- Test 3: Block Open Four ---");
    let mut board = Board::new();
    for x in 5..9 {
        board.place_stone(Pos::new(x, 7), Stone::Black);
    }
    let mut blocker = AIEngine::with_config(EngineConfig {
        difficulty: Difficulty::Hard,
        ..config
    });
    failures += report(&mut blocker, &board, Side::White, &[Pos::new(4, 7), Pos::new(9, 7)]);

    println!("\n===========================================");
    if failures == 0 {
        println!("          All Scenarios Passed!");
    } else {
        println!("          {failures} Scenario(s) Failed");
    }
    println!("===========================================");

    if failures > 0 {
        bail!("{failures} demo scenario(s) failed");
    }
    Ok(())
}

/// Print one scenario's outcome; returns 1 on failure.
fn report(engine: &mut AIEngine, board: &Board, side: Side, expected: &[Pos]) -> u32 {
    let result = engine.get_move_with_stats(board, side);
    let Some(m) = result.best_move else {
        println!("  Result: FAIL - No move found");
        return 1;
    };

    println!("  {side} plays: {m}");
    println!("  Search type: {:?}", result.search_type);
    println!("  Score: {}", result.score);
    println!("  Nodes: {}", result.nodes);
    println!("  Time: {}ms", result.time_ms);
    let wanted: Vec<String> = expected.iter().map(ToString::to_string).collect();
    println!("  Expected: {}", wanted.join(" or "));

    if expected.contains(&m) {
        println!("  Result: PASS");
        0
    } else {
        println!("  Result: FAIL - Wrong move");
        1
    }
}

fn run_selfplay(
    config: EngineConfig,
    black: Option<Level>,
    white: Option<Level>,
    max_moves: u32,
) -> Result<()> {
    let engine_for = |level: Option<Level>| {
        AIEngine::with_config(EngineConfig {
            difficulty: level.map_or(config.difficulty, Difficulty::from),
            ..config
        })
    };
    let mut black_engine = engine_for(black);
    let mut white_engine = engine_for(white);
    let mut game = Game::new(GameMode::PvP, config);

    while !game.status().is_over() && game.move_count() < max_moves {
        let side = game.to_move();
        let engine = match side {
            Side::Black => &mut black_engine,
            Side::White => &mut white_engine,
        };
        let result = engine.get_move_with_stats(game.board(), side);
        let Some(pos) = result.best_move else {
            warn!(%side, "engine found no move");
            break;
        };
        game.play(pos)?;
        info!(
            %side,
            %pos,
            search = ?result.search_type,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "engine move"
        );
    }

    println!("{}", game.board());
    match game.status() {
        GameStatus::Won { winner, .. } => {
            println!("{winner} wins after {} moves", game.move_count());
        }
        GameStatus::Draw => println!("Draw: the board is full"),
        GameStatus::Playing => println!("Stopped after {} moves", game.move_count()),
    }
    Ok(())
}

fn run_suggest(config: EngineConfig, moves: &str, side: Option<Side>) -> Result<()> {
    let mut game = Game::new(GameMode::PvP, config);
    for pos in parse_moves(moves)? {
        game.play(pos)
            .with_context(|| format!("replaying move {pos}"))?;
    }

    println!("{}", game.board());
    if let GameStatus::Won { winner, .. } = game.status() {
        println!("{winner} has already won");
        return Ok(());
    }

    let side = side.unwrap_or_else(|| game.to_move());
    let mut engine = AIEngine::with_config(config);
    let result = engine.get_move_with_stats(game.board(), side);
    match result.best_move {
        Some(pos) => println!(
            "{side} should play {pos} ({:?}, score {}, {} nodes, {}ms)",
            result.search_type, result.score, result.nodes, result.time_ms
        ),
        None => println!("No move left for {side}"),
    }
    Ok(())
}
