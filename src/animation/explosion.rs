use glam::Vec3;

use crate::options::ExplosionOptions;

/// One live explosion billboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    /// Where the billboard is drawn.
    pub position: Vec3,
    /// Billboard size.
    pub size: f32,
    /// Scene time the explosion started.
    pub start_time: f32,
    age: f32,
    frames: u32,
    frame_duration: f32,
}

impl Explosion {
    /// Seconds since spawn.
    #[must_use]
    pub const fn age(&self) -> f32 {
        self.age
    }

    /// Total lifetime in seconds.
    #[must_use]
    pub fn lifetime(&self) -> f32 {
        self.frames as f32 * self.frame_duration
    }

    /// Sprite-sheet frame to draw, in `0..frames`.
    #[must_use]
    pub fn frame(&self) -> u32 {
        if self.frame_duration <= 0.0 {
            return 0;
        }
        let frame = (self.age / self.frame_duration).floor() as u32;
        frame.min(self.frames.saturating_sub(1))
    }

    /// Whether the explosion has played out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.age > self.lifetime()
    }
}

/// Spawns explosions and drops them once they have played out.
#[derive(Debug, Clone)]
pub struct ExplosionTracker {
    frames: u32,
    frame_duration: f32,
    size: f32,
    live: Vec<Explosion>,
}

impl ExplosionTracker {
    /// Tracker with the configured timing.
    #[must_use]
    pub fn new(options: &ExplosionOptions) -> Self {
        Self {
            frames: options.frames.max(1),
            frame_duration: options.frame_duration.max(0.0),
            size: options.size,
            live: Vec::new(),
        }
    }

    /// Start an explosion at `position`.
    pub fn spawn(&mut self, position: Vec3, now: f32) {
        self.live.push(Explosion {
            position,
            size: self.size,
            start_time: now,
            age: 0.0,
            frames: self.frames,
            frame_duration: self.frame_duration,
        });
    }

    /// Age every explosion by `dt`; returns how many were dropped.
    pub fn update(&mut self, dt: f32) -> usize {
        if dt.is_finite() && dt > 0.0 {
            for explosion in &mut self.live {
                explosion.age += dt;
            }
        }
        let before = self.live.len();
        self.live.retain(|e| !e.is_finished());
        before - self.live.len()
    }

    /// Explosions still playing.
    #[must_use]
    pub fn live(&self) -> &[Explosion] {
        &self.live
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.live.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_through_frames_then_expires() {
        let mut tracker = ExplosionTracker::new(&ExplosionOptions::default());
        tracker.spawn(Vec3::ONE, 3.0);
        assert_eq!(tracker.live()[0].frame(), 0);

        assert_eq!(tracker.update(0.5), 0);
        assert_eq!(tracker.live()[0].frame(), 25);
        assert!((tracker.live()[0].lifetime() - 1.68).abs() < 1e-5);

        assert_eq!(tracker.update(1.17), 0);
        assert_eq!(tracker.live()[0].frame(), 83);

        assert_eq!(tracker.update(0.1), 1);
        assert!(tracker.live().is_empty());
    }

    #[test]
    fn independent_lifetimes() {
        let mut tracker = ExplosionTracker::new(&ExplosionOptions::default());
        tracker.spawn(Vec3::ZERO, 0.0);
        let _ = tracker.update(1.0);
        tracker.spawn(Vec3::X, 1.0);
        assert_eq!(tracker.update(1.0), 1);
        assert_eq!(tracker.live().len(), 1);
        assert_eq!(tracker.live()[0].position, Vec3::X);
    }
}
