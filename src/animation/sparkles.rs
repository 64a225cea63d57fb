use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;

/// Most sparkles kept alive at once; the oldest fall off the front
const MAX_SPARKLES: usize = 20;
/// One sparkle is retired this often even if the pointer goes still
const EVICT_INTERVAL: f32 = 0.1;
/// Chance that a pointer move leaves a sparkle behind
const SPAWN_CHANCE: f64 = 0.3;

/// A single glitter cell left in the pointer's wake
#[derive(Debug, Clone)]
pub struct Sparkle {
    pub x: u16,
    pub y: u16,
    pub age: f32,
}

/// Sparkles trailing the pointer. Bounded two ways: a hard cap on how
/// many exist, and a steady drain that clears the tail when the
/// pointer stops moving.
pub struct SparkleTrail {
    sparkles: VecDeque<Sparkle>,
    evict_timer: f32,
}

impl SparkleTrail {
    pub fn new() -> Self {
        Self {
            sparkles: VecDeque::with_capacity(MAX_SPARKLES),
            evict_timer: 0.0,
        }
    }

    /// Call on every pointer move; most moves leave nothing
    pub fn pointer_moved(&mut self, x: u16, y: u16, rng: &mut StdRng) {
        if !rng.gen_bool(SPAWN_CHANCE) {
            return;
        }
        self.sparkles.push_back(Sparkle { x, y, age: 0.0 });
        while self.sparkles.len() > MAX_SPARKLES {
            self.sparkles.pop_front();
        }
    }

    pub fn tick(&mut self, dt: f32) {
        for sparkle in &mut self.sparkles {
            sparkle.age += dt;
        }
        self.evict_timer += dt;
        while self.evict_timer >= EVICT_INTERVAL {
            self.evict_timer -= EVICT_INTERVAL;
            self.sparkles.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.sparkles.clear();
        self.evict_timer = 0.0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sparkle> {
        self.sparkles.iter()
    }

    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }
}

impl Default for SparkleTrail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut trail = SparkleTrail::new();
        for i in 0..500 {
            trail.pointer_moved(i % 80, i % 24, &mut rng);
            assert!(trail.len() <= MAX_SPARKLES);
        }
        assert!(!trail.is_empty());
    }

    #[test]
    fn test_idle_trail_drains() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut trail = SparkleTrail::new();
        for i in 0..200 {
            trail.pointer_moved(i, 5, &mut rng);
        }
        // 3 seconds of stillness retires far more than 20 sparkles
        for _ in 0..90 {
            trail.tick(1.0 / 30.0);
        }
        assert!(trail.is_empty());
    }

    #[test]
    fn test_sparkles_age() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut trail = SparkleTrail::new();
        while trail.is_empty() {
            trail.pointer_moved(10, 10, &mut rng);
        }
        trail.tick(0.05);
        for sparkle in trail.iter() {
            assert!(sparkle.age >= 0.05);
        }
    }

    #[test]
    fn test_clear_empties_the_trail() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut trail = SparkleTrail::new();
        for i in 0..100 {
            trail.pointer_moved(i, i, &mut rng);
        }
        trail.clear();
        assert!(trail.is_empty());
    }
}
