use std::time::{Duration, Instant};

/// A one-shot tween from 0.0 to 1.0 with ease-out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    started: Instant,
    duration: Duration,
}

impl Animation {
    pub fn new(started: Instant, duration: Duration) -> Self {
        Self { started, duration }
    }

    /// Eased progress at `now`, clamped to `0.0..=1.0`
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        ease_out_cubic(t)
    }

    pub fn is_running_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.duration
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_is_finished() {
        let now = Instant::now();
        let anim = Animation::new(now, Duration::ZERO);
        assert_eq!(anim.progress_at(now), 1.0);
        assert!(!anim.is_running_at(now));
    }

    #[test]
    fn progress_is_eased_and_clamped() {
        let start = Instant::now();
        let anim = Animation::new(start, Duration::from_millis(100));

        assert_eq!(anim.progress_at(start), 0.0);
        let half = anim.progress_at(start + Duration::from_millis(50));
        assert!(half > 0.5 && half < 1.0);
        assert_eq!(anim.progress_at(start + Duration::from_secs(1)), 1.0);
        assert!(anim.is_running_at(start + Duration::from_millis(99)));
    }
}
