// src/models/node.rs
//
// One pie glyph in the vertical chain.
// Neighbours are addressed by index: node 0 has no previous node,
// the last node has no next one.

use nannou::prelude::*;

use crate::animation::{State, StateUpdate};
use crate::draw::{pie_draw, ChainLayout, GlyphStyle};

/// Traversal direction along the chain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Moved(usize),
    ReachedBoundary,
}

#[derive(Debug, Clone)]
pub struct PsNode {
    index: usize,
    last_index: usize,
    state: State,
}

impl PsNode {
    pub fn new(index: usize, count: usize, step: f32) -> Self {
        Self {
            index,
            last_index: count.saturating_sub(1),
            state: State::new(step),
        }
    }

    /// Builds every node of a chain of `count` nodes up front.
    pub fn chain(count: usize, step: f32) -> Vec<PsNode> {
        (0..count).map(|i| PsNode::new(i, count, step)).collect()
    }

    /// Advances the node's state, returning its index once it comes to rest.
    pub fn update(&mut self) -> Option<(usize, f32)> {
        match self.state.update() {
            StateUpdate::Completed(scale) => Some((self.index, scale)),
            StateUpdate::Continue => None,
        }
    }

    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }

    pub fn get_next(&self, direction: Direction) -> Traversal {
        match direction {
            Direction::Forward if self.index < self.last_index => Traversal::Moved(self.index + 1),
            Direction::Backward if self.index > 0 => Traversal::Moved(self.index - 1),
            _ => Traversal::ReachedBoundary,
        }
    }

    pub fn draw(&self, draw: &Draw, layout: &ChainLayout, style: &GlyphStyle) {
        pie_draw::draw_pie_node(draw, layout, self.index, self.state.scale(), style);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}
