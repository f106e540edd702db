// src/render/mod.rs
// Frame composition: background, glyph chain and the tick-driven animation

pub mod renderer;

pub use renderer::Renderer;
