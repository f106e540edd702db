// src/draw/mod.rs
// Drawing of the pie glyphs with the Nannou Draw API

pub mod pie_draw;

pub use pie_draw::{ChainLayout, Quadrant, QuadrantShape};

use nannou::prelude::*;

/// Placement of one glyph quadrant: a half-turn about its anchor point.
#[derive(Debug, Clone, Copy)]
pub struct GlyphTransform {
    pub translation: Point2,
    pub rotation: f32,
}

/// Colour and line weight shared by every glyph in the chain.
#[derive(Debug, Clone)]
pub struct GlyphStyle {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}
