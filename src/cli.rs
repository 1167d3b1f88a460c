use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::{info, Level};

use crate::config::GameConfig;
use crate::core::engine::Engine;
use crate::core::session::Outcome;
use crate::games::reserved_words::ReservedWordsGame;
use crate::games::RESERVED_WORDS;

#[derive(Debug, Parser)]
#[command(name = "reserved-words")]
#[command(about = RESERVED_WORDS.description)]
#[command(version)]
pub struct Cli {
    /// JSON file with `duration_secs` and/or `words`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seconds on the clock
    #[arg(short, long)]
    pub duration: Option<u32>,

    /// Comma-separated word list to play with instead of the built-in one
    #[arg(short, long, value_delimiter = ',')]
    pub words: Option<Vec<String>>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// More log output; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Defaults, then the config file, then command-line flags
    pub fn game_config(&self) -> Result<GameConfig> {
        let base = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        Ok(base.with_overrides(self.duration, self.words.clone()))
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.game_config()?;
    let game = ReservedWordsGame::new(&config)?;
    info!(game = RESERVED_WORDS.id, words = config.words.len(), duration_secs = config.duration_secs, "launching");

    let terminal = ratatui::init();
    let result = Engine::new(game).run(terminal).await;
    ratatui::restore();
    let game = result?;

    let session = game.session();
    match session.outcome() {
        Some(Outcome::Victory) => println!("🎉 You found all {} words!", session.total()),
        Some(Outcome::Defeat) => println!("⏰ Time's up! Score: {} / {}", session.score(), session.total()),
        None => println!("👋 Quit with {} / {} words found", session.score(), session.total()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GameError;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["reserved-words", "--duration", "90", "--words", "fn,impl,trait"]);
        let config = cli.game_config().unwrap();
        assert_eq!(config.duration_secs, 90);
        assert_eq!(config.words, ["fn", "impl", "trait"]);
    }

    #[test]
    fn blank_word_in_flags_is_rejected() {
        let cli = Cli::parse_from(["reserved-words", "--words", "let,,self"]);
        let config = cli.game_config().unwrap();
        assert_eq!(config.words, ["let", "", "self"]);

        let err = ReservedWordsGame::new(&config).err().unwrap();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn no_flags_means_default_game() {
        let cli = Cli::parse_from(["reserved-words"]);
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn verbosity_is_counted() {
        let cli = Cli::parse_from(["reserved-words", "-vv"]);
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn config_file_sits_under_flags() {
        let path = std::env::temp_dir().join(format!("reserved-words-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "duration_secs": 42, "words": ["let"] }"#).unwrap();

        let cli = Cli::parse_from(["reserved-words", "--config", path.to_str().unwrap(), "-d", "7"]);
        let config = cli.game_config().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.duration_secs, 7);
        assert_eq!(config.words, ["let"]);
    }
}
