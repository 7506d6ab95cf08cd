//! Fixed-period tick scheduler.

use web_time::{Duration, Instant};

/// Ticks delivered by a single [`Animator::poll`] after a long stall
/// (window hidden, debugger pause). Anything beyond is dropped and the
/// schedule restarts from the poll time.
const MAX_CATCH_UP: u32 = 5;

/// Repeating timer with idempotent start/stop.
///
/// The animator knows nothing about what it ticks. The event loop sleeps
/// until [`next_deadline`](Self::next_deadline), then asks
/// [`poll`](Self::poll) how many ticks are due and runs them in order.
#[derive(Debug, Clone)]
pub struct Animator {
    period: Duration,
    next_tick: Option<Instant>,
}

impl Animator {
    /// Idle animator ticking every `period` once started.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_tick: None,
        }
    }

    /// Tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether ticks are being scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// When the next tick is due, `None` while idle.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Begin ticking, first tick one period after `now`.
    ///
    /// Returns `false` if already running; the existing schedule is kept.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.next_tick.is_some() {
            return false;
        }
        self.next_tick = Some(now + self.period);
        log::debug!("animator started ({:?} period)", self.period);
        true
    }

    /// Cancel all further ticks. Returns `false` if already idle.
    pub fn stop(&mut self) -> bool {
        if self.next_tick.take().is_none() {
            return false;
        }
        log::debug!("animator stopped");
        true
    }

    /// Number of ticks that fell due up to `now`; 0 while idle.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(next) = self.next_tick else {
            return 0;
        };
        if now < next {
            return 0;
        }

        let behind = now.duration_since(next);
        let extra = behind.as_nanos() / self.period.as_nanos().max(1);
        let due = u32::try_from(extra).unwrap_or(u32::MAX).saturating_add(1);

        if due > MAX_CATCH_UP {
            log::warn!("animator fell {due} ticks behind, dropping the excess");
            self.next_tick = Some(now + self.period);
            return MAX_CATCH_UP;
        }
        self.next_tick = Some(next + self.period * due);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(20);

    #[test]
    fn idle_animator_never_ticks() {
        let mut animator = Animator::new(PERIOD);
        let now = Instant::now();
        assert!(!animator.is_running());
        assert_eq!(animator.poll(now + Duration::from_secs(1)), 0);
        assert_eq!(animator.next_deadline(), None);
    }

    #[test]
    fn ticks_once_per_period() {
        let mut animator = Animator::new(PERIOD);
        let t0 = Instant::now();
        assert!(animator.start(t0));
        assert_eq!(animator.next_deadline(), Some(t0 + PERIOD));

        assert_eq!(animator.poll(t0 + Duration::from_millis(19)), 0);
        assert_eq!(animator.poll(t0 + Duration::from_millis(20)), 1);
        assert_eq!(animator.poll(t0 + Duration::from_millis(25)), 0);
        assert_eq!(animator.poll(t0 + Duration::from_millis(61)), 2);
        assert_eq!(animator.next_deadline(), Some(t0 + PERIOD * 4));
    }

    #[test]
    fn double_start_keeps_one_schedule() {
        let t0 = Instant::now();
        let mut animator = Animator::new(PERIOD);
        assert!(animator.start(t0));
        assert!(!animator.start(t0 + Duration::from_millis(10)));

        // One timer over 100ms: ticks at 20, 40, 60, 80, 100.
        let mut ticks = 0;
        for ms in (0..=100).step_by(5) {
            ticks += animator.poll(t0 + Duration::from_millis(ms));
        }
        assert_eq!(ticks, 5);
    }

    #[test]
    fn stop_cancels_future_ticks() {
        let t0 = Instant::now();
        let mut animator = Animator::new(PERIOD);
        let _ = animator.start(t0);
        assert!(animator.stop());
        assert!(!animator.stop());
        assert_eq!(animator.poll(t0 + Duration::from_secs(1)), 0);
    }

    #[test]
    fn restart_after_stop_uses_new_origin() {
        let t0 = Instant::now();
        let mut animator = Animator::new(PERIOD);
        let _ = animator.start(t0);
        let _ = animator.stop();

        let t1 = t0 + Duration::from_millis(500);
        assert!(animator.start(t1));
        assert_eq!(animator.next_deadline(), Some(t1 + PERIOD));
    }

    #[test]
    fn long_stall_is_capped() {
        let t0 = Instant::now();
        let mut animator = Animator::new(PERIOD);
        let _ = animator.start(t0);

        let late = t0 + Duration::from_secs(2);
        assert_eq!(animator.poll(late), MAX_CATCH_UP);
        assert_eq!(animator.next_deadline(), Some(late + PERIOD));
    }
}
