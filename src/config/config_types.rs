// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 800,
            title: String::from("pie step"),
            fullscreen: false,
        }
    }
}

/// What happens when the active node reaches either end of the chain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Turn around and move straight to the neighbour: 0,1,2,3,4,3,2,...
    #[default]
    Reflect,
    /// Turn around but stay on the end node, so it animates twice: 0,1,2,3,4,4,3,...
    Linger,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub nodes: usize,
    pub boundary: BoundaryPolicy,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            nodes: 5,
            boundary: BoundaryPolicy::Reflect,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub tick_interval_ms: u64, // Time between animation ticks
    pub step: f32,             // Scale added per tick (0.0-1.0]
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            step: 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: String,
    pub glyph: String,
    pub stroke_weight: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: String::from("#BDBDBD"),
            glyph: String::from("#FFA726"),
            stroke_weight: 4.0,
        }
    }
}
