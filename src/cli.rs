//! Command-line options for the terminal binary.

use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::core::GameConfig;

/// Build the game config from `args` (program name already stripped).
///
/// `--config FILE` is applied first; explicit flags override it. Without
/// a seed from either source the clock supplies one.
pub fn parse_args(args: &[String]) -> Result<GameConfig> {
    let mut config = GameConfig::default();
    let mut seed: Option<u32> = None;
    let mut width: Option<u8> = None;
    let mut height: Option<u8> = None;
    let mut soft_drop_locks = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = value(args, i, "--config")?;
                let text = fs::read_to_string(path)
                    .with_context(|| format!("read config file {}", path))?;
                let file: ConfigFile = serde_json::from_str(&text)
                    .with_context(|| format!("parse config file {}", path))?;
                config = file.game;
                seed = seed.or(file.seed);
            }
            "--width" => {
                i += 1;
                width = Some(parse_num(args, i, "--width")?);
            }
            "--height" => {
                i += 1;
                height = Some(parse_num(args, i, "--height")?);
            }
            "--seed" => {
                i += 1;
                seed = Some(parse_num(args, i, "--seed")?);
            }
            "--soft-drop-locks" => soft_drop_locks = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    if let Some(w) = width {
        config.width = w;
    }
    if let Some(h) = height {
        config.height = h;
    }
    config.soft_drop_locks |= soft_drop_locks;
    config.seed = seed.unwrap_or_else(clock_seed);

    config.validate()?;
    Ok(config)
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_num<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = value(args, i, flag)?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

/// JSON config file. A missing `seed` falls back to the clock rather than
/// the library default.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    seed: Option<u32>,
    #[serde(flatten)]
    game: GameConfig,
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn explicit_flags_build_config() {
        let config = parse_args(&args(&["--width", "12", "--height", "22", "--seed", "9"])).unwrap();
        assert_eq!((config.width, config.height, config.seed), (12, 22, 9));
        assert!(!config.soft_drop_locks);
    }

    #[test]
    fn soft_drop_flag_sets_option() {
        let config = parse_args(&args(&["--seed", "1", "--soft-drop-locks"])).unwrap();
        assert!(config.soft_drop_locks);
    }

    #[test]
    fn bad_values_are_reported() {
        let err = parse_args(&args(&["--width", "wide"])).unwrap_err();
        assert!(err.to_string().contains("--width"));
        assert!(parse_args(&args(&["--height"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn config_file_seed_is_optional() {
        let file: ConfigFile = serde_json::from_str(r#"{"width": 12, "seed": 7}"#).unwrap();
        assert_eq!(file.seed, Some(7));
        assert_eq!(file.game.width, 12);

        let file: ConfigFile = serde_json::from_str(r#"{"height": 24}"#).unwrap();
        assert_eq!(file.seed, None);
        assert_eq!(file.game.height, 24);
    }

    #[test]
    fn config_file_values_yield_to_flags() {
        let path = std::env::temp_dir().join(format!("classic-tetris-cli-{}.json", std::process::id()));
        fs::write(&path, r#"{"width": 12, "height": 22, "seed": 5, "soft_drop_locks": true}"#).unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let config = parse_args(&args(&["--config", &path_arg, "--width", "14"])).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!((config.width, config.height, config.seed), (14, 22, 5));
        assert!(config.soft_drop_locks);
    }

    #[test]
    fn undersized_board_fails_validation() {
        assert!(parse_args(&args(&["--width", "3", "--seed", "1"])).is_err());
    }
}
