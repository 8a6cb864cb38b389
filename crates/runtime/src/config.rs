//! Game configuration from `BLOCKFALL_*` environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::core::{Board, RandomShapes, ShapeCatalog};
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, FRAME_MS, GRAVITY_MS, MAX_BOARD_DIM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub gravity_ms: u64,
    pub frame_ms: u64,
    /// Fixed seed for the shape source; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// `standard` or `classic`
    pub catalog: String,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gravity_ms: GRAVITY_MS,
            frame_ms: FRAME_MS,
            seed: None,
            catalog: "standard".to_string(),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read the process environment. Unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let catalog = lookup("BLOCKFALL_CATALOG")
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.catalog);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width: parsed(&lookup, "BLOCKFALL_WIDTH").unwrap_or(defaults.width),
            height: parsed(&lookup, "BLOCKFALL_HEIGHT").unwrap_or(defaults.height),
            gravity_ms: parsed(&lookup, "BLOCKFALL_GRAVITY_MS").unwrap_or(defaults.gravity_ms),
            frame_ms: parsed(&lookup, "BLOCKFALL_FRAME_MS").unwrap_or(defaults.frame_ms),
            seed: parsed(&lookup, "BLOCKFALL_SEED"),
            catalog,
            log_path,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "board must be at least 1x1 (got {}x{})",
                self.width,
                self.height
            );
        }
        if self.width > MAX_BOARD_DIM || self.height > MAX_BOARD_DIM {
            bail!(
                "board {}x{} exceeds the {} cell limit",
                self.width,
                self.height,
                MAX_BOARD_DIM
            );
        }
        if self.gravity_ms == 0 {
            bail!("BLOCKFALL_GRAVITY_MS must be greater than zero");
        }
        if ShapeCatalog::by_name(&self.catalog).is_none() {
            bail!("unknown shape catalog {:?}", self.catalog);
        }
        Ok(())
    }

    pub fn gravity_interval(&self) -> Duration {
        Duration::from_millis(self.gravity_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    /// Validate and build the board this configuration describes.
    pub fn build_board(&self) -> Result<Board> {
        self.validate()?;
        let catalog = ShapeCatalog::by_name(&self.catalog)
            .with_context(|| format!("unknown shape catalog {:?}", self.catalog))?;
        let board = Board::new(
            self.width,
            self.height,
            catalog,
            RandomShapes::new(self.seed),
        )
        .context("create board")?;
        Ok(board)
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(GameConfig::from_lookup(|_| None), GameConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = GameConfig::from_lookup(lookup(&[
            ("BLOCKFALL_WIDTH", "12"),
            ("BLOCKFALL_HEIGHT", " 24 "),
            ("BLOCKFALL_GRAVITY_MS", "250"),
            ("BLOCKFALL_FRAME_MS", "16"),
            ("BLOCKFALL_SEED", "7"),
            ("BLOCKFALL_CATALOG", "Classic"),
            ("BLOCKFALL_LOG_PATH", "/tmp/blockfall.jsonl"),
        ]));
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 24);
        assert_eq!(config.gravity_ms, 250);
        assert_eq!(config.frame_ms, 16);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.catalog, "classic");
        assert_eq!(config.log_path.as_deref(), Some("/tmp/blockfall.jsonl"));
    }

    #[test]
    fn garbage_values_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[
            ("BLOCKFALL_WIDTH", "wide"),
            ("BLOCKFALL_SEED", "-1"),
            ("BLOCKFALL_LOG_PATH", "   "),
        ]));
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let zero_width = GameConfig {
            width: 0,
            ..GameConfig::default()
        };
        assert!(zero_width.validate().is_err());

        let too_tall = GameConfig {
            height: MAX_BOARD_DIM + 1,
            ..GameConfig::default()
        };
        assert!(too_tall.validate().is_err());

        let no_gravity = GameConfig {
            gravity_ms: 0,
            ..GameConfig::default()
        };
        assert!(no_gravity.validate().is_err());

        let bad_catalog = GameConfig {
            catalog: "pentominoes".to_string(),
            ..GameConfig::default()
        };
        assert!(bad_catalog.validate().is_err());
    }

    #[test]
    fn build_board_uses_configured_size() {
        let config = GameConfig {
            width: 8,
            height: 16,
            seed: Some(3),
            ..GameConfig::default()
        };
        let snap = config.build_board().unwrap().snapshot();
        assert_eq!((snap.width, snap.height), (8, 16));
        assert!(snap.active.is_some());
    }

    #[test]
    fn build_board_rejects_too_narrow_grid() {
        // The I piece is four wide.
        let config = GameConfig {
            width: 3,
            ..GameConfig::default()
        };
        assert!(config.build_board().is_err());
    }
}
