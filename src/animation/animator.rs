// src/animation/animator.rs
//
// Fixed-interval ticker for the pie step animation.
// The app's update loop feeds it frame time; it reports how many
// ticks are due. Nothing here blocks or schedules redraws itself.

use std::time::Duration;

// Ticks run at most this many times for one frame after a stall
const MAX_CATCH_UP_TICKS: u32 = 4;

#[derive(Debug, Clone)]
pub struct Animator {
    animated: bool,
    frame_timer: f32,
    frame_duration: f32,
}

impl Animator {
    pub fn new(interval: Duration) -> Self {
        Self {
            animated: false,
            frame_timer: 0.0,
            frame_duration: interval.as_secs_f32(),
        }
    }

    /// Arms the ticker so the first tick fires on the next frame.
    pub fn start(&mut self) {
        if !self.animated {
            self.animated = true;
            self.frame_timer = self.frame_duration;
        }
    }

    pub fn stop(&mut self) {
        if self.animated {
            self.animated = false;
            self.frame_timer = 0.0;
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Accumulates `dt` seconds and returns the number of ticks now due.
    pub fn animate(&mut self, dt: f32) -> u32 {
        if !self.animated {
            return 0;
        }
        self.frame_timer += dt.max(0.0);

        let mut ticks = 0;
        while self.frame_timer >= self.frame_duration && ticks < MAX_CATCH_UP_TICKS {
            self.frame_timer -= self.frame_duration;
            ticks += 1;
        }
        if ticks == MAX_CATCH_UP_TICKS {
            // drop the backlog rather than bursting through it next frame
            self.frame_timer = self.frame_timer.min(self.frame_duration);
        }
        ticks
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f32(self.frame_duration)
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}
