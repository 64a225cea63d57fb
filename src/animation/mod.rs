pub mod confetti;
pub mod hearts;
pub mod pulse;
pub mod sparkles;

pub use confetti::{ConfettiRain, HeartBurst};
pub use hearts::HeartField;
pub use pulse::PulseAnimation;
pub use sparkles::SparkleTrail;

use std::time::{Duration, Instant};

/// Target frame rate
pub const TARGET_FPS: u32 = 30;

/// Frame duration for target FPS
pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / TARGET_FPS as u64);

/// Animation loop state
pub struct AnimationLoop {
    last_frame: Instant,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Check if it's time for a new frame
    pub fn should_render(&self) -> bool {
        self.last_frame.elapsed() >= FRAME_DURATION
    }

    /// Get delta time since last frame
    pub fn delta_time(&self) -> f32 {
        self.last_frame.elapsed().as_secs_f32()
    }

    /// Mark frame as rendered
    pub fn frame_rendered(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Time until next frame
    pub fn time_until_next_frame(&self) -> Duration {
        let elapsed = self.last_frame.elapsed();
        if elapsed >= FRAME_DURATION {
            Duration::ZERO
        } else {
            FRAME_DURATION - elapsed
        }
    }
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new()
    }
}
