// src/models/pie_step.rs
//
// The chain orchestrator.
// Only the current node animates. When it comes to rest the current
// pointer moves along the chain, turning around at either end.

use nannou::prelude::*;

use super::node::{Direction, PsNode, Traversal};
use crate::config::BoundaryPolicy;
use crate::draw::{ChainLayout, GlyphStyle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepUpdate {
    Continue,
    Completed { index: usize, scale: f32 },
}

#[derive(Debug, Clone)]
pub struct PieStep {
    nodes: Vec<PsNode>,
    current: usize,
    direction: Direction,
    boundary: BoundaryPolicy,
}

impl PieStep {
    pub fn new(count: usize, step: f32, boundary: BoundaryPolicy) -> Self {
        Self {
            nodes: PsNode::chain(count.max(1), step),
            current: 0,
            direction: Direction::Forward,
            boundary,
        }
    }

    pub fn draw(&self, draw: &Draw, layout: &ChainLayout, style: &GlyphStyle) {
        for node in &self.nodes {
            node.draw(draw, layout, style);
        }
    }

    /// Advances the current node by one tick.
    pub fn update(&mut self) -> StepUpdate {
        match self.nodes[self.current].update() {
            Some((index, scale)) => {
                self.advance();
                StepUpdate::Completed { index, scale }
            }
            None => StepUpdate::Continue,
        }
    }

    /// Starts the current node; false if it is already animating.
    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.current].start_updating()
    }

    fn advance(&mut self) {
        match self.nodes[self.current].get_next(self.direction) {
            Traversal::Moved(next) => self.current = next,
            Traversal::ReachedBoundary => {
                self.direction = self.direction.flipped();
                log::debug!(
                    "Node {} is a chain end, now moving {:?}",
                    self.current,
                    self.direction
                );
                if self.boundary == BoundaryPolicy::Reflect {
                    if let Traversal::Moved(next) = self.nodes[self.current].get_next(self.direction) {
                        self.current = next;
                    }
                }
            }
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_animating(&self) -> bool {
        !self.nodes[self.current].state().is_idle()
    }

    pub fn nodes(&self) -> &[PsNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
