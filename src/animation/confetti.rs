use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::Rng;

/// Pieces in the celebration rain
const PIECE_COUNT: usize = 100;
/// Longest start delay for a piece, seconds
const MAX_DELAY: f32 = 3.0;

/// One falling confetti piece. `x` is normalized 0..1 across the
/// screen; vertical position comes from `ConfettiRain::progress`.
#[derive(Debug, Clone)]
pub struct ConfettiPiece {
    pub x: f32,
    pub color_index: usize,
    pub glyph_index: usize,
    delay: f32,
    fall_secs: f32,
}

/// Confetti raining over the celebration screen. Pieces start on
/// staggered delays and loop their fall for as long as the screen is
/// up.
pub struct ConfettiRain {
    pieces: Vec<ConfettiPiece>,
    time: f32,
}

impl ConfettiRain {
    pub fn new(rng: &mut StdRng) -> Self {
        let pieces = (0..PIECE_COUNT)
            .map(|_| ConfettiPiece {
                x: rng.gen_range(0.0..1.0),
                color_index: rng.gen_range(0..6),
                glyph_index: rng.gen_range(0..4),
                delay: rng.gen_range(0.0..MAX_DELAY),
                fall_secs: rng.gen_range(2.5..4.5),
            })
            .collect();
        Self { pieces, time: 0.0 }
    }

    pub fn tick(&mut self, dt: f32) {
        self.time += dt;
    }

    /// Fall progress 0..1 for one piece, None before its start delay
    pub fn progress(&self, piece: &ConfettiPiece) -> Option<f32> {
        let t = self.time - piece.delay;
        if t < 0.0 {
            None
        } else {
            Some((t / piece.fall_secs).fract())
        }
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }
}

/// Hearts in the one-shot radial burst
const BURST_COUNT: usize = 12;
/// Launch stagger between successive hearts, seconds
const LAUNCH_STEP: f32 = 0.1;
/// Flight time of one burst heart, seconds
const FLIGHT_SECS: f32 = 0.9;

/// One heart flying out of the burst
#[derive(Debug, Clone)]
pub struct BurstHeart {
    /// Launch direction in radians
    pub angle: f32,
    delay: f32,
}

/// A ring of hearts fired outward from the center when YES lands.
/// Twelve hearts, thirty degrees apart, launched in quick succession;
/// the whole burst is over in about two seconds.
pub struct HeartBurst {
    hearts: Vec<BurstHeart>,
    time: f32,
}

impl HeartBurst {
    pub fn new() -> Self {
        let hearts = (0..BURST_COUNT)
            .map(|i| BurstHeart {
                angle: i as f32 * TAU / BURST_COUNT as f32,
                delay: i as f32 * LAUNCH_STEP,
            })
            .collect();
        Self { hearts, time: 0.0 }
    }

    pub fn tick(&mut self, dt: f32) {
        self.time += dt;
    }

    /// Radial progress 0..1 for one heart, None before launch or after
    /// it lands
    pub fn progress(&self, heart: &BurstHeart) -> Option<f32> {
        let t = self.time - heart.delay;
        if !(0.0..=FLIGHT_SECS).contains(&t) {
            None
        } else {
            Some(t / FLIGHT_SECS)
        }
    }

    /// Whether every heart has landed
    pub fn finished(&self) -> bool {
        self.time > (BURST_COUNT - 1) as f32 * LAUNCH_STEP + FLIGHT_SECS
    }

    pub fn hearts(&self) -> &[BurstHeart] {
        &self.hearts
    }
}

impl Default for HeartBurst {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rain_piece_spread() {
        let mut rng = StdRng::seed_from_u64(42);
        let rain = ConfettiRain::new(&mut rng);
        assert_eq!(rain.pieces().len(), PIECE_COUNT);
        for piece in rain.pieces() {
            assert!((0.0..1.0).contains(&piece.x));
            assert!(piece.color_index < 6);
            assert!(piece.glyph_index < 4);
            assert!((0.0..MAX_DELAY).contains(&piece.delay));
        }
    }

    #[test]
    fn test_rain_waits_out_delays() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut rain = ConfettiRain::new(&mut rng);
        rain.tick(0.01);
        let waiting = rain
            .pieces()
            .iter()
            .filter(|p| rain.progress(p).is_none())
            .count();
        assert!(waiting > 0);
    }

    #[test]
    fn test_rain_loops_forever() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut rain = ConfettiRain::new(&mut rng);
        rain.tick(60.0);
        for piece in rain.pieces() {
            let p = rain.progress(piece);
            assert!(matches!(p, Some(v) if (0.0..1.0).contains(&v)));
        }
    }

    #[test]
    fn test_burst_covers_the_full_circle() {
        let burst = HeartBurst::new();
        assert_eq!(burst.hearts().len(), BURST_COUNT);
        for (i, heart) in burst.hearts().iter().enumerate() {
            let expected = i as f32 * TAU / 12.0;
            assert!((heart.angle - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_burst_staggers_launches() {
        let mut burst = HeartBurst::new();
        burst.tick(0.35);
        let flying = burst
            .hearts()
            .iter()
            .filter(|h| burst.progress(h).is_some())
            .count();
        assert_eq!(flying, 4);
    }

    #[test]
    fn test_burst_finishes() {
        let mut burst = HeartBurst::new();
        burst.tick(1.0);
        assert!(!burst.finished());
        burst.tick(1.5);
        assert!(burst.finished());
        for heart in burst.hearts() {
            assert!(burst.progress(heart).is_none());
        }
    }
}
