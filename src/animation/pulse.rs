use std::f32::consts::PI;

/// Pulse animation for button and accent brightness
#[derive(Debug, Clone)]
pub struct PulseAnimation {
    phase: f32,
    frequency: f32,
    min_value: f32,
    max_value: f32,
}

impl PulseAnimation {
    pub fn new(frequency: f32) -> Self {
        Self {
            phase: 0.0,
            frequency,
            min_value: 0.6,
            max_value: 1.0,
        }
    }

    /// Pin the pulse to a custom brightness band
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Update animation state
    pub fn update(&mut self, dt: f32) {
        self.phase = (self.phase + dt * self.frequency * 2.0 * PI) % (2.0 * PI);
    }

    /// Get current value
    pub fn value(&self) -> f32 {
        let normalized = (self.phase.sin() + 1.0) / 2.0;
        self.min_value + normalized * (self.max_value - self.min_value)
    }
}

impl Default for PulseAnimation {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Heartbeat animation (quick pulse followed by pause)
pub fn heartbeat(time: f32, bpm: f32) -> f32 {
    let period = 60.0 / bpm;
    let t = (time % period) / period;

    if t < 0.1 {
        // First beat
        let x = t / 0.1;
        (x * PI).sin()
    } else if t < 0.2 {
        // First beat down
        let x = (t - 0.1) / 0.1;
        (1.0 - x) * (x * PI).cos().abs()
    } else if t < 0.25 {
        // Second beat
        let x = (t - 0.2) / 0.05;
        (x * PI).sin() * 0.7
    } else {
        // Rest
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_stays_in_range() {
        let mut pulse = PulseAnimation::new(1.2).with_range(0.75, 1.0);
        for _ in 0..300 {
            pulse.update(1.0 / 30.0);
            let v = pulse.value();
            assert!((0.75..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_pulse_actually_moves() {
        let mut pulse = PulseAnimation::new(1.0);
        let start = pulse.value();
        pulse.update(0.25);
        assert!((pulse.value() - start).abs() > 0.01);
    }

    #[test]
    fn test_heartbeat_rests_between_beats() {
        // 60 bpm puts the rest window at 0.25..1.0 within each second
        assert_eq!(heartbeat(0.5, 60.0), 0.0);
        assert_eq!(heartbeat(0.9, 60.0), 0.0);
    }

    #[test]
    fn test_heartbeat_peaks_and_stays_bounded() {
        let mut peak = 0.0_f32;
        for i in 0..200 {
            let v = heartbeat(i as f32 / 200.0, 60.0);
            assert!((0.0..=1.0).contains(&v));
            peak = peak.max(v);
        }
        assert!(peak > 0.9);
    }
}
