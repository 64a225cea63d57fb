use super::Point;

/// How long the dodging control takes to glide to a new spot, seconds
pub const GLIDE_DURATION: f32 = 0.25;

/// Easing curve selection for interpolated movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingFunction {
    Linear,
    EaseOutCubic,
    EaseOutElastic,
}

/// Cubic ease-out: fast start, gentle landing
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Elastic ease-out: overshoots the target and springs back
pub fn ease_out_elastic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let c4 = (2.0 * std::f32::consts::PI) / 3.0;
    (2.0_f32).powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
}

/// Interpolate between two points with the chosen easing
pub fn smooth_lerp(from: Point, to: Point, t: f32, easing: EasingFunction) -> Point {
    let eased = match easing {
        EasingFunction::Linear => t.clamp(0.0, 1.0),
        EasingFunction::EaseOutCubic => ease_out_cubic(t),
        EasingFunction::EaseOutElastic => ease_out_elastic(t),
    };
    Point::new(
        from.x + (to.x - from.x) * eased,
        from.y + (to.y - from.y) * eased,
    )
}

/// Animated slide between two placements. Each dodge retargets the
/// glide, so the control springs toward its new spot instead of
/// teleporting.
#[derive(Debug, Clone)]
pub struct Glide {
    from: Point,
    to: Point,
    elapsed: f32,
    duration: f32,
}

impl Glide {
    /// A glide already at rest on `at`
    pub fn settled(at: Point) -> Self {
        Self {
            from: at,
            to: at,
            elapsed: GLIDE_DURATION,
            duration: GLIDE_DURATION,
        }
    }

    /// Start sliding toward a new spot from wherever the glide is now
    pub fn retarget(&mut self, to: Point) {
        self.from = self.current();
        self.to = to;
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Eased position for this instant. May overshoot the segment while
    /// the elastic spring rings; callers clamp to their bounds.
    pub fn current(&self) -> Point {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        smooth_lerp(self.from, self.to, t, EasingFunction::EaseOutElastic)
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}
