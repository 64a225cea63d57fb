use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::Rng;

/// How many hearts drift behind the card at once
const HEART_COUNT: usize = 20;

/// One ambient heart. Coordinates are normalized 0..1 over the screen,
/// y growing downward, so the field survives terminal resizes untouched.
#[derive(Debug, Clone)]
pub struct FloatingHeart {
    pub x: f32,
    pub y: f32,
    pub glyph_index: usize,
    pub color_index: usize,
    /// Brightness factor, kept in a soft 0.3..0.7 band
    pub dim: f32,
    speed: f32,
    sway_phase: f32,
    sway_amount: f32,
}

impl FloatingHeart {
    /// Horizontal position with sway applied, still normalized
    pub fn display_x(&self, time: f32) -> f32 {
        (self.x + (time * 0.8 + self.sway_phase).sin() * self.sway_amount).clamp(0.0, 1.0)
    }
}

/// The drifting background field. Hearts rise slowly, sway a little,
/// and respawn below the bottom edge once they float off the top.
pub struct HeartField {
    hearts: Vec<FloatingHeart>,
    time: f32,
}

impl HeartField {
    pub fn new(rng: &mut StdRng) -> Self {
        let hearts = (0..HEART_COUNT)
            .map(|i| Self::spawn(rng, i, false))
            .collect();
        Self { hearts, time: 0.0 }
    }

    fn spawn(rng: &mut StdRng, index: usize, below_screen: bool) -> FloatingHeart {
        FloatingHeart {
            x: rng.gen_range(0.02..0.98),
            y: if below_screen {
                rng.gen_range(1.0..1.2)
            } else {
                rng.gen_range(0.0..1.0)
            },
            glyph_index: index,
            color_index: rng.gen_range(0..5),
            dim: rng.gen_range(0.3..0.7),
            // full climbs take 8 to 20 seconds
            speed: 1.0 / rng.gen_range(8.0..20.0),
            sway_phase: rng.gen_range(0.0..TAU),
            sway_amount: rng.gen_range(0.0..0.04),
        }
    }

    pub fn tick(&mut self, dt: f32, rng: &mut StdRng) {
        self.time += dt;
        for (i, heart) in self.hearts.iter_mut().enumerate() {
            heart.y -= heart.speed * dt;
            if heart.y < -0.05 {
                *heart = Self::spawn(rng, i, true);
            }
        }
    }

    pub fn hearts(&self) -> &[FloatingHeart] {
        &self.hearts
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}
