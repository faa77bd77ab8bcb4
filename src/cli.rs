//! Command-line interface for lights_out.

use clap::Parser;
use lights_out::{ConfigError, GameConfig, INSTRUCTIONS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use std::path::PathBuf;

/// Lights Out - switch every light off
#[derive(Parser, Debug)]
#[command(name = "lights_out")]
#[command(about = "Text-driven Lights Out puzzle", long_about = None)]
#[command(after_help = INSTRUCTIONS)]
#[command(version)]
pub struct Cli {
    /// Board size (1-10); defaults to 5
    #[arg(value_parser = clap::value_parser!(u8).range(MIN_BOARD_SIZE as i64..=MAX_BOARD_SIZE as i64))]
    pub size: Option<u8>,

    /// Path to a TOML config file (size, seed)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the board generator, for reproducible boards
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Merges defaults, the optional config file and command-line overrides.
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        config
            .with_size(self.size.map(usize::from))
            .map(|config| config.with_seed(self.seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_size_defaults_to_none() {
        let cli = Cli::try_parse_from(["lights_out"]).unwrap();
        assert_eq!(cli.size, None);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_size_in_range() {
        let cli = Cli::try_parse_from(["lights_out", "7", "--seed", "3"]).unwrap();
        assert_eq!(cli.size, Some(7));
        assert_eq!(cli.seed, Some(3));
    }

    #[test]
    fn test_size_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["lights_out", "0"]).is_err());
        assert!(Cli::try_parse_from(["lights_out", "11"]).is_err());
        assert!(Cli::try_parse_from(["lights_out", "five"]).is_err());
    }

    #[test]
    fn test_help_exits_with_instructions() {
        let err = Cli::try_parse_from(["lights_out", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("turn all the lights off"));
    }

    #[test]
    fn test_resolve_defaults_without_file() {
        let cli = Cli::try_parse_from(["lights_out"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_resolve_file_then_cli_overrides() {
        let file = config_file("size = 7\nseed = 42\n");
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["lights_out", "--config", path]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(*config.size(), 7);
        assert_eq!(*config.seed(), Some(42));

        let cli = Cli::try_parse_from(["lights_out", "3", "--config", path, "--seed", "9"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(*config.size(), 3);
        assert_eq!(*config.seed(), Some(9));
    }

    #[test]
    fn test_resolve_rejects_bad_file() {
        let file = config_file("size = 12\n");
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["lights_out", "--config", path]).unwrap();
        assert!(cli.resolve_config().is_err());

        let cli = Cli::try_parse_from(["lights_out", "4", "--config", path]).unwrap();
        assert!(cli.resolve_config().is_err());
    }
}
