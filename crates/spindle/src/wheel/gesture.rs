use super::{
    CELLS_PER_WHEEL, DRAG_DAMPING, INERTIAL_PREDICTED_WINDOW, INERTIAL_WINDOW, MAX_FLING_WHEELS,
    SETTLE_DELTA, SETTLE_PAUSE,
};
use std::collections::VecDeque;
use std::time::Duration;

/// Vertical drag translation in pixels since the gesture started, at an
/// event timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSample {
    pub translation: f64,
    pub time: Duration,
}

impl DragSample {
    pub fn new(translation: f64, time: Duration) -> Self {
        Self { translation, time }
    }
}

/// The last sample of a drag plus where a free-spinning wheel would stop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragRelease {
    pub sample: DragSample,
    pub predicted_end: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    /// Settle on the nearest stop.
    Snap,
    /// Keep spinning towards the predicted stop.
    Fling,
}

/// Timing and travel of a release, in seconds and damped pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseMetrics {
    pub since_first: f64,
    pub since_last: f64,
    pub delta: f64,
    pub predicted: f64,
    pub height: f64,
}

impl ReleaseMetrics {
    pub fn new(
        first: DragSample,
        last: DragSample,
        release: DragRelease,
        carried: f64,
        height: f64,
    ) -> Self {
        Self {
            since_first: elapsed(first.time, release.sample.time),
            since_last: elapsed(last.time, release.sample.time),
            delta: (release.sample.translation - last.translation) * DRAG_DAMPING,
            predicted: release.predicted_end * DRAG_DAMPING + carried,
            height,
        }
    }

    pub fn is_inertial(&self) -> bool {
        self.since_first < INERTIAL_WINDOW
            || (self.since_first < INERTIAL_PREDICTED_WINDOW && self.predicted.abs() > self.height)
    }

    pub fn is_minimum_rotation(&self) -> bool {
        let predicted = self.predicted.abs();
        (predicted < self.height * 2.0 && self.delta.abs() < SETTLE_DELTA)
            || predicted < self.height * 1.5
            || self.since_last > SETTLE_PAUSE
    }

    pub fn kind(&self) -> ReleaseKind {
        if !self.is_inertial() && self.is_minimum_rotation() {
            ReleaseKind::Snap
        } else {
            ReleaseKind::Fling
        }
    }
}

fn elapsed(from: Duration, to: Duration) -> f64 {
    to.saturating_sub(from).as_secs_f64()
}

/// Travel needed to settle `translation` on the closest stop.
pub fn snap_distance(translation: f64, height: f64) -> f64 {
    let cell = height / CELLS_PER_WHEEL;
    let remainder = translation % cell;
    if remainder == 0.0 {
        0.0
    } else if remainder.abs() < cell / 2.0 {
        -remainder
    } else {
        (cell - remainder.abs()) * remainder.signum()
    }
}

/// Travel towards the stop nearest to `end_translation`, at most a few wheel
/// heights from where the wheel is now.
pub fn fling_distance(end_translation: f64, translation: f64, height: f64) -> f64 {
    let cell = height / CELLS_PER_WHEEL;
    let limit = height * MAX_FLING_WHEELS;
    let target = (end_translation / cell).round() * cell;
    (target - translation).clamp(-limit, limit)
}

const HISTORY_SIZE: usize = 20;
const HORIZON: Duration = Duration::from_millis(100);
const ASSUME_STOPPED: Duration = Duration::from_millis(40);
// Per-millisecond velocity decay of a free-spinning scroll view
const DECELERATION_RATE: f64 = 0.998;

/// Estimates release velocity from recent drag samples and projects where the
/// wheel would coast to.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    samples: VecDeque<DragSample>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn push(&mut self, sample: DragSample) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Pixels per second, least squares over the samples inside the horizon.
    pub fn velocity(&self) -> f64 {
        let Some(newest) = self.samples.back() else {
            return 0.0;
        };

        let mut window = Vec::with_capacity(self.samples.len());
        let mut previous = newest.time;
        for sample in self.samples.iter().rev() {
            if newest.time.saturating_sub(sample.time) > HORIZON
                || previous.saturating_sub(sample.time) > ASSUME_STOPPED
            {
                break;
            }
            window.push((
                -newest.time.saturating_sub(sample.time).as_secs_f64(),
                sample.translation,
            ));
            previous = sample.time;
        }

        if window.len() < 2 {
            return 0.0;
        }

        let n = window.len() as f64;
        let mean_t = window.iter().map(|(t, _)| t).sum::<f64>() / n;
        let mean_x = window.iter().map(|(_, x)| x).sum::<f64>() / n;
        let (covariance, variance) = window.iter().fold((0.0, 0.0), |(c, v), (t, x)| {
            let dt = t - mean_t;
            (c + dt * (x - mean_x), v + dt * dt)
        });

        if variance == 0.0 {
            0.0
        } else {
            covariance / variance
        }
    }

    pub fn predicted_end(&self) -> f64 {
        let translation = self.samples.back().map_or(0.0, |s| s.translation);
        translation + project(self.velocity())
    }

    pub fn release(&self) -> Option<DragRelease> {
        self.samples.back().map(|&sample| DragRelease {
            sample,
            predicted_end: self.predicted_end(),
        })
    }
}

fn project(velocity: f64) -> f64 {
    velocity / 1000.0 * DECELERATION_RATE / (1.0 - DECELERATION_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f64 = 300.0;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn metrics(since_first: f64, since_last: f64, delta: f64, predicted: f64) -> ReleaseMetrics {
        ReleaseMetrics {
            since_first,
            since_last,
            delta,
            predicted,
            height: HEIGHT,
        }
    }

    #[test]
    fn test_quick_flick_is_fling() {
        assert_eq!(metrics(0.05, 0.0, 0.0, 10.0).kind(), ReleaseKind::Fling);
        assert_eq!(metrics(0.12, 0.0, 0.0, -400.0).kind(), ReleaseKind::Fling);
    }

    #[test]
    fn test_slow_release_snaps() {
        assert_eq!(metrics(0.5, 0.02, 10.0, 900.0).kind(), ReleaseKind::Snap);
        assert_eq!(metrics(0.5, 0.0, 0.5, 500.0).kind(), ReleaseKind::Snap);
        assert_eq!(metrics(0.5, 0.0, 30.0, 400.0).kind(), ReleaseKind::Snap);
    }

    #[test]
    fn test_fast_long_drag_flings() {
        assert_eq!(metrics(0.5, 0.005, 12.0, 700.0).kind(), ReleaseKind::Fling);
    }

    #[test]
    fn test_snap_distance_picks_nearest_stop() {
        assert_eq!(snap_distance(0.0, HEIGHT), 0.0);
        assert_eq!(snap_distance(-60.0, HEIGHT), 0.0);
        assert_eq!(snap_distance(10.0, HEIGHT), -10.0);
        assert_eq!(snap_distance(-42.0, HEIGHT), 12.0);
        assert_eq!(snap_distance(50.0, HEIGHT), 10.0);
        assert_eq!(snap_distance(-20.0, HEIGHT), -10.0);
    }

    #[test]
    fn test_fling_distance_rounds_and_clamps() {
        assert_eq!(fling_distance(95.0, 0.0, HEIGHT), 90.0);
        assert_eq!(fling_distance(95.0, 12.0, HEIGHT), 78.0);
        assert_eq!(fling_distance(-5000.0, 0.0, HEIGHT), -900.0);
        assert_eq!(fling_distance(5000.0, 0.0, HEIGHT), 900.0);
    }

    #[test]
    fn test_tracker_measures_constant_velocity() {
        let mut tracker = DragTracker::new();
        for i in 0..6 {
            tracker.push(DragSample::new(i as f64 * 10.0, ms(i * 10)));
        }
        // 10 px every 10 ms
        assert!((tracker.velocity() - 1000.0).abs() < 1e-6);
        assert!(tracker.predicted_end() > 50.0 + 400.0);
    }

    #[test]
    fn test_tracker_ignores_stale_samples() {
        let mut tracker = DragTracker::new();
        tracker.push(DragSample::new(0.0, ms(0)));
        tracker.push(DragSample::new(100.0, ms(10)));
        tracker.push(DragSample::new(100.0, ms(300)));
        assert_eq!(tracker.velocity(), 0.0);
        assert_eq!(tracker.predicted_end(), 100.0);
    }

    #[test]
    fn test_empty_tracker() {
        let tracker = DragTracker::new();
        assert_eq!(tracker.velocity(), 0.0);
        assert!(tracker.release().is_none());
    }
}
