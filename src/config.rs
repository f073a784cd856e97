//! Game configuration: defaults, JSON file and command-line flags.
//!
//! Later sources override earlier ones: defaults, then `--config <file>`,
//! then individual flags.

use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{Board, ConfigError, GameState};
use crate::types::{DEFAULT_BLOCK_SIZE, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_TICK_RATE};

pub const USAGE: &str = "\
usage: tui-snake [options]

options:
  --config <path>     load settings from a JSON file
  --width <n>         board width in grid units (default 640)
  --height <n>        board height in grid units (default 480)
  --block <n>         block size in grid units (default 20)
  --tick-rate <n>     steps per second (default 20)
  --seed <n>          food placement seed (default: from the clock)
  -h, --help          show this help

keys: arrows / wasd / hjkl steer, q or esc quits";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub block_size: i32,
    /// Steps per second
    pub tick_rate: u32,
    /// Fixed seed for reproducible food placement
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            block_size: DEFAULT_BLOCK_SIZE,
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("config: invalid JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("config: cannot read {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("config: in {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn board(&self) -> Result<Board, ConfigError> {
        Board::new(self.width, self.height, self.block_size)
    }

    /// Check everything a session needs before the terminal is touched.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate == 0 {
            bail!("config: tick rate must be positive");
        }
        self.board()?;
        Ok(())
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// The configured seed, or one derived from the system clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }

    pub fn build_game(&self) -> Result<GameState> {
        self.validate()?;
        Ok(GameState::with_board(self.board()?, self.resolve_seed()))
    }
}

/// Parse command-line arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String]) -> Result<Option<GameConfig>> {
    if args.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(None);
    }

    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => GameConfig::load(Path::new(flag_value(args, i)?))?,
        None => GameConfig::default(),
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {}
            "--width" => config.width = parse_flag(args, i)?,
            "--height" => config.height = parse_flag(args, i)?,
            "--block" => config.block_size = parse_flag(args, i)?,
            "--tick-rate" => config.tick_rate = parse_flag(args, i)?,
            "--seed" => config.seed = Some(parse_flag(args, i)?),
            other => bail!("unknown argument: {}", other),
        }
        i += 2;
    }

    Ok(Some(config))
}

fn flag_value(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", args[i]))
}

fn parse_flag<T: FromStr>(args: &[String], i: usize) -> Result<T> {
    let v = flag_value(args, i)?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", args[i], v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_match_classic_board() {
        let config = parse_args(&[]).unwrap().unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.block_size, 20);
        assert_eq!(config.tick_duration(), Duration::from_millis(50));
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse_args(&args(&["--width", "400", "--seed", "7", "--tick-rate", "10"]))
            .unwrap()
            .unwrap();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 480);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.resolve_seed(), 7);
        assert_eq!(config.tick_duration(), Duration::from_millis(100));
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse_args(&args(&["--width", "1", "--help"])).unwrap(), None);
    }

    #[test]
    fn bad_flags_are_reported() {
        let err = parse_args(&args(&["--width"])).unwrap_err();
        assert!(err.to_string().contains("missing value for --width"));

        let err = parse_args(&args(&["--seed", "abc"])).unwrap_err();
        assert!(err.to_string().contains("invalid --seed value: abc"));

        let err = parse_args(&args(&["--fullscreen"])).unwrap_err();
        assert!(err.to_string().contains("unknown argument"));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = GameConfig::from_json_str(r#"{"width": 200, "seed": 3}"#).unwrap();
        assert_eq!(config.width, 200);
        assert_eq!(config.height, 480);
        assert_eq!(config.seed, Some(3));

        let back = GameConfig::from_json_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn validate_rejects_bad_boards_and_rates() {
        let mut config = GameConfig::default();
        config.tick_rate = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.width = 650;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::Misaligned {
                axis: "width",
                value: 650,
                block: 20
            })
        );
    }

    #[test]
    fn huge_boards_are_rejected_before_allocating() {
        let config = parse_args(&args(&[
            "--width",
            "2000000000",
            "--height",
            "2000000000",
            "--block",
            "1",
        ]))
        .unwrap()
        .unwrap();
        let err = config.build_game().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::TooLarge { .. })
        ));
    }

    #[test]
    fn build_game_uses_configured_board() {
        let config = GameConfig {
            width: 200,
            height: 100,
            seed: Some(5),
            ..GameConfig::default()
        };
        let game = config.build_game().unwrap();
        assert_eq!(game.board().cols(), 10);
        assert_eq!(game.board().rows(), 5);
        assert_eq!(game.seed(), 5);
    }
}
