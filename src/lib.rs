// src/lib.rs
//
// A vertical chain of pie glyphs. Each tap animates the current glyph
// between empty and filled, then moves on to its neighbour.

pub mod animation;
pub mod config;
pub mod draw;
pub mod models;
pub mod render;
