// src/animation/state.rs
//
// Per-node scale tracker.
// A node rests at scale 0.0 (empty outline) or 1.0 (filled pie) and
// travels one full unit per animation, a fixed step per tick.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateUpdate {
    Continue,
    /// The node came to rest at the given scale.
    Completed(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    scale: f32,
    direction: f32,
    prev_scale: f32,
    step: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl State {
    pub fn new(step: f32) -> Self {
        Self {
            scale: 0.0,
            direction: 0.0,
            prev_scale: 0.0,
            step,
        }
    }

    pub fn update(&mut self) -> StateUpdate {
        self.scale += self.step * self.direction;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            // overshoot: snap to the unit boundary and go idle
            self.scale = self.prev_scale + self.direction;
            self.direction = 0.0;
            self.prev_scale = self.scale;
            return StateUpdate::Completed(self.prev_scale);
        }
        StateUpdate::Continue
    }

    /// Starts travelling toward the opposite rest scale.
    /// Returns false, and changes nothing, while already travelling.
    pub fn start_updating(&mut self) -> bool {
        if self.direction != 0.0 {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.prev_scale;
        true
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }
}
