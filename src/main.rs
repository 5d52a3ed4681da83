use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use word_warrior::build_info;
use word_warrior::config::{GameConfig, InputMode, TerminalEnv};
use word_warrior::core::constants::{DEFAULT_VOCABULARY_PATH, FRAME_INTERVAL_MS};
use word_warrior::core::{FrameLoop, LoopSettings, Session, SystemClock};
use word_warrior::error::GameError;
use word_warrior::logging::init_logging;
use word_warrior::screen::TerminalScreen;
use word_warrior::vocabulary::Vocabulary;
use word_warrior::GameSummary;

/// Terminal typing RPG: translate the word to strike the monster
#[derive(Parser, Debug)]
#[command(name = "word-warrior")]
#[command(version = build_info::VERSION_LINE)]
struct Args {
    /// Line input mode for terminals without raw key polling
    #[arg(short, long)]
    simple: bool,

    /// Vocabulary file, one `answer prompt` pair per line
    #[arg(short, long, default_value = DEFAULT_VOCABULARY_PATH)]
    words: PathBuf,

    /// Seed the random source for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds per frame in non-blocking mode
    #[arg(long, default_value_t = FRAME_INTERVAL_MS)]
    frame_ms: u64,
}

impl Args {
    fn into_config(self) -> GameConfig {
        GameConfig {
            input_mode: InputMode::detect(self.simple, &TerminalEnv::from_process()),
            vocabulary_path: self.words,
            frame_interval: Duration::from_millis(self.frame_ms.max(1)),
            seed: self.seed,
        }
    }
}

fn play(config: &GameConfig) -> Result<GameSummary, GameError> {
    let vocabulary = Vocabulary::load_or_default(&config.vocabulary_path);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(vocabulary, &mut rng);

    let screen = TerminalScreen::enter(config.input_mode)?;
    let settings = LoopSettings {
        mode: config.input_mode,
        frame_interval: config.frame_interval,
    };
    let mut game = FrameLoop::new(screen, SystemClock, rng, settings);
    // Terminal is restored when `game` drops at the end of this scope
    game.run(&mut session)
}

fn main() -> ExitCode {
    let _log_guard = init_logging();
    let config = Args::parse().into_config();
    tracing::info!(?config, version = build_info::VERSION_LINE, "starting");

    match play(&config) {
        Ok(summary) => {
            println!(
                "Final score: {}  Max level: {}",
                summary.score, summary.max_level
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "game aborted");
            eprintln!("word-warrior: {e}");
            ExitCode::FAILURE
        }
    }
}
