// src/config/config_load.rs
//
// loading of config.toml

use nannou::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::{AnimationConfig, ChainConfig, StyleConfig, WindowConfig};
use super::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

// Smaller steps stall in f32 before a transition can complete
pub const MIN_STEP: f32 = 1e-3;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub chain: ChainConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try the executable's directory, then the working directory
        let path = Self::exe_dir_config()
            .filter(|path| path.exists())
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        Self::load_from(path)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn exe_dir_config() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        Some(exe_path.parent()?.join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "window",
                reason: format!(
                    "{}x{} has a zero dimension",
                    self.window.width, self.window.height
                ),
            });
        }
        if self.chain.nodes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chain.nodes",
                reason: String::from("must be at least 1"),
            });
        }
        if self.animation.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "animation.tick_interval_ms",
                reason: String::from("must be greater than 0"),
            });
        }
        let step = self.animation.step;
        if !(MIN_STEP..=1.0).contains(&step) {
            return Err(ConfigError::InvalidValue {
                field: "animation.step",
                reason: format!("{} is outside [{}, 1]", step, MIN_STEP),
            });
        }
        if self.style.stroke_weight < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "style.stroke_weight",
                reason: String::from("must not be negative"),
            });
        }
        self.background_color()?;
        self.glyph_color()?;
        Ok(())
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.animation.tick_interval_ms)
    }

    pub fn background_color(&self) -> Result<Rgb<f32>, ConfigError> {
        parse_hex_color(&self.style.background)
    }

    pub fn glyph_color(&self) -> Result<Rgb<f32>, ConfigError> {
        parse_hex_color(&self.style.glyph)
    }
}

/// Parses "#RRGGBB" (the leading '#' is optional) into a normalized color.
pub fn parse_hex_color(hex: &str) -> Result<Rgb<f32>, ConfigError> {
    let invalid = || ConfigError::InvalidColor(hex.to_string());
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| -> Result<f32, ConfigError> {
        u8::from_str_radix(&digits[range], 16)
            .map(|value| value as f32 / 255.0)
            .map_err(|_| invalid())
    };

    Ok(rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryPolicy;

    fn assert_color(color: Rgb<f32>, expected: (u8, u8, u8)) {
        let (r, g, b) = expected;
        assert!((color.red - r as f32 / 255.0).abs() < 1e-6, "red: {:?}", color);
        assert!((color.green - g as f32 / 255.0).abs() < 1e-6, "green: {:?}", color);
        assert!((color.blue - b as f32 / 255.0).abs() < 1e-6, "blue: {:?}", color);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.chain.nodes, 5);
        assert_eq!(config.chain.boundary, BoundaryPolicy::Reflect);
        assert_eq!(config.animation.tick_interval_ms, 50);
        assert_eq!(config.animation.step, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.chain.nodes, 5);
        assert_eq!(config.style.background, "#BDBDBD");
        assert_eq!(config.tick_interval(), std::time::Duration::from_millis(50));
    }

    #[test]
    fn test_partial_file() {
        let content = r##"
            [chain]
            nodes = 3
            boundary = "linger"

            [style]
            glyph = "#112233"
        "##;
        let config = Config::from_toml(content).unwrap();
        assert_eq!(config.chain.nodes, 3);
        assert_eq!(config.chain.boundary, BoundaryPolicy::Linger);
        assert_eq!(config.animation.step, 0.1);
        assert_color(config.glyph_color().unwrap(), (0x11, 0x22, 0x33));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_color(parse_hex_color("#BDBDBD").unwrap(), (0xBD, 0xBD, 0xBD));
        assert_color(parse_hex_color("#FFA726").unwrap(), (0xFF, 0xA7, 0x26));
        assert_color(parse_hex_color("ffa726").unwrap(), (0xFF, 0xA7, 0x26));
    }

    #[test]
    fn test_invalid_hex_color() {
        for hex in ["", "#FFF", "#GGGGGG", "#FFA7261", "#ÿÿÿ"] {
            assert!(
                matches!(parse_hex_color(hex), Err(ConfigError::InvalidColor(_))),
                "Expected {:?} to be rejected",
                hex
            );
        }
    }

    #[test]
    fn test_validation_errors() {
        let cases = [
            "[chain]\nnodes = 0",
            "[animation]\ntick_interval_ms = 0",
            "[animation]\nstep = 0.0",
            "[animation]\nstep = 1.5",
            "[animation]\nstep = 1e-8",
            "[window]\nwidth = 0",
            "[window]\nheight = 0",
            "[style]\nstroke_weight = -1.0",
        ];
        for content in cases {
            assert!(
                matches!(
                    Config::from_toml(content),
                    Err(ConfigError::InvalidValue { .. })
                ),
                "Expected rejection for {:?}",
                content
            );
        }

        assert!(matches!(
            Config::from_toml("[style]\nbackground = \"grey\""),
            Err(ConfigError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_smallest_step_completes() {
        use crate::animation::{State, StateUpdate};

        let config = Config::from_toml("[animation]\nstep = 0.001").unwrap();
        let mut state = State::new(config.animation.step);
        state.start_updating();

        let ticks = (1..=2000).find(|_| state.update() != StateUpdate::Continue);
        assert!(ticks.is_some(), "stalled at scale {}", state.scale());
        assert!(state.is_idle());
        assert_eq!(state.scale(), 1.0);
    }

    #[test]
    fn test_unknown_boundary_policy() {
        let result = Config::from_toml("[chain]\nboundary = \"wrap\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load_from("/definitely/not/here/config.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
