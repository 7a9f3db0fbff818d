/// Per-animation parameters for a wheel coasting over `distance` pixels.
///
/// The wheel first travels at a constant `initial_speed`, then brakes with a
/// constant deceleration over `decelerate_frames` ticks. Both phases cover
/// roughly half the distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Deceleration {
    distance: f64,
    deceleration: f64,
    decelerate_frames: u32,
    initial_speed: f64,
    repeat_count: u32,
    tick: u32,
}

impl Deceleration {
    /// Returns `None` when there is nothing to animate.
    ///
    /// `frames` tunes how hard the wheel brakes: the deceleration is sized so a
    /// travel of one wheel height stops in that many ticks.
    pub fn new(distance: f64, height: f64, frames: f64) -> Option<Self> {
        if distance == 0.0 || !distance.is_finite() {
            return None;
        }
        let deceleration = -distance.abs().max(height) / (frames * frames);
        let decelerate_frames = (distance / -deceleration).abs().sqrt().round() as u32;
        let initial_speed = -deceleration * decelerate_frames as f64;
        if initial_speed == 0.0 {
            return None;
        }
        let coasting = ((distance / initial_speed).round() / 2.0).trunc().abs() as u32;

        Some(Self {
            distance,
            deceleration,
            decelerate_frames,
            initial_speed,
            repeat_count: decelerate_frames + coasting,
            tick: 0,
        })
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    pub fn is_finished(&self) -> bool {
        self.tick >= self.repeat_count
    }

    fn braking_position(&self, frame: u32) -> f64 {
        let n = frame as f64;
        self.initial_speed * n + self.deceleration * n * n / 2.0
    }

    /// Signed travel for the next tick. Finished animations do not move.
    pub fn step(&mut self) -> f64 {
        if self.is_finished() {
            return 0.0;
        }
        let remaining = self.repeat_count - self.tick;
        let travel = if remaining > self.decelerate_frames {
            self.initial_speed
        } else {
            let frame = self.decelerate_frames - remaining + 1;
            self.braking_position(frame) - self.braking_position(frame.saturating_sub(1))
        };
        self.tick += 1;
        travel * self.distance.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut animation: Deceleration) -> (f64, u32) {
        let mut travelled = 0.0;
        let mut ticks = 0;
        while !animation.is_finished() {
            travelled += animation.step();
            ticks += 1;
            assert!(ticks < 10_000);
        }
        (travelled, ticks)
    }

    #[test]
    fn test_one_wheel_height() {
        let animation = Deceleration::new(300.0, 300.0, 120.0).unwrap();
        assert_eq!(animation.repeat_count(), 180);
        let (travelled, ticks) = run(animation);
        assert_eq!(ticks, 180);
        assert!((travelled - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_short_travel_lands_close() {
        for distance in [-60.0, -30.0, 12.0, 30.0, 90.0] {
            let animation = Deceleration::new(distance, 300.0, 60.0).unwrap();
            let (travelled, _) = run(animation);
            assert_eq!(travelled.signum(), distance.signum());
            assert!((travelled - distance).abs() < 30.0 / 2.0, "{distance} -> {travelled}");
        }
    }

    #[test]
    fn test_speed_never_increases() {
        let mut animation = Deceleration::new(-500.0, 300.0, 120.0).unwrap();
        let mut last = f64::INFINITY;
        while !animation.is_finished() {
            let speed = animation.step().abs();
            assert!(speed <= last + 1e-9);
            last = speed;
        }
        assert_eq!(animation.step(), 0.0);
    }

    #[test]
    fn test_nothing_to_animate() {
        assert!(Deceleration::new(0.0, 300.0, 120.0).is_none());
        assert!(Deceleration::new(f64::NAN, 300.0, 120.0).is_none());
    }
}
