// src/render/renderer.rs
//
// The renderer ties the chain to the animator.
// `update` runs the due ticks and stops the animator as soon as the
// current node comes to rest. `render` only reads state.

use nannou::prelude::*;

use crate::animation::Animator;
use crate::config::{Config, ConfigError};
use crate::draw::{ChainLayout, GlyphStyle};
use crate::models::{PieStep, StepUpdate};

pub struct Renderer {
    pie_step: PieStep,
    animator: Animator,
    background: Rgb<f32>,
    glyph_style: GlyphStyle,
}

impl Renderer {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            pie_step: PieStep::new(
                config.chain.nodes,
                config.animation.step,
                config.chain.boundary,
            ),
            animator: Animator::new(config.tick_interval()),
            background: config.background_color()?,
            glyph_style: GlyphStyle {
                color: config.glyph_color()?,
                stroke_weight: config.style.stroke_weight,
            },
        })
    }

    pub fn render(&self, draw: &Draw, rect: Rect) {
        draw.background().color(self.background);
        let layout = ChainLayout::new(rect, self.pie_step.len());
        self.pie_step.draw(draw, &layout, &self.glyph_style);
    }

    /// Runs the animation ticks due after `dt` seconds.
    /// Returns the completion if the current node came to rest this frame.
    pub fn update(&mut self, dt: f32) -> StepUpdate {
        for _ in 0..self.animator.animate(dt) {
            if let completed @ StepUpdate::Completed { index, scale } = self.pie_step.update() {
                self.animator.stop();
                log::info!(
                    "Node {} came to rest at {}, next is node {}",
                    index,
                    scale,
                    self.pie_step.current()
                );
                return completed;
            }
        }
        StepUpdate::Continue
    }

    /// Starts the current node. Taps during an animation are ignored.
    pub fn handle_tap(&mut self) -> bool {
        if self.pie_step.start_updating() {
            log::debug!("Animating node {}", self.pie_step.current());
            self.animator.start();
            true
        } else {
            log::debug!("Tap ignored, node {} is animating", self.pie_step.current());
            false
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animated()
    }

    pub fn pie_step(&self) -> &PieStep {
        &self.pie_step
    }
}
