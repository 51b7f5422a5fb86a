//! Auto-battle timer.
//!
//! The driver loop asks [`AutoBattle::poll_tick`] on every pass; each due
//! tick is worth one win. Only one timer handle exists at a time: starting
//! again replaces it, and stopping drops it before the next check.

use super::constants::AUTO_BATTLE_INTERVAL_MS;
use std::time::{Duration, Instant};

/// The one live timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    /// Bumped on every start so a stale handle is recognisable.
    pub generation: u64,
    pub started_at: Instant,
    last_tick: Instant,
}

#[derive(Debug, Clone)]
pub struct AutoBattle {
    interval: Duration,
    handle: Option<TimerHandle>,
    generation: u64,
}

impl Default for AutoBattle {
    fn default() -> Self {
        Self::new(Duration::from_millis(AUTO_BATTLE_INTERVAL_MS))
    }
}

impl AutoBattle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            handle: None,
            generation: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&TimerHandle> {
        self.handle.as_ref()
    }

    /// Starts a fresh timer, cancelling any existing one first.
    pub fn start(&mut self, now: Instant) -> TimerHandle {
        if self.handle.take().is_some() {
            log::debug!("Auto-battle restart: previous timer cancelled");
        }
        self.generation += 1;
        let handle = TimerHandle {
            generation: self.generation,
            started_at: now,
            last_tick: now,
        };
        self.handle = Some(handle);
        log::info!(
            "Auto-battle started ({} ms per win)",
            self.interval.as_millis()
        );
        handle
    }

    /// Cancels the timer. Safe to call when already stopped.
    pub fn stop(&mut self) {
        if self.handle.take().is_some() {
            log::info!("Auto-battle stopped");
        }
    }

    /// Mirrors a switch widget: `true` starts (or restarts), `false` stops.
    pub fn set(&mut self, on: bool, now: Instant) {
        if on {
            self.start(now);
        } else {
            self.stop();
        }
    }

    pub fn toggle(&mut self, now: Instant) {
        let on = !self.is_running();
        self.set(on, now);
    }

    /// Returns true once per elapsed interval. Missed intervals are not replayed.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        let interval = self.interval;
        match self.handle.as_mut() {
            Some(handle) if now.saturating_duration_since(handle.last_tick) >= interval => {
                handle.last_tick = now;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_stopped_timer_never_ticks() {
        let mut auto = AutoBattle::new(ms(50));
        let t0 = Instant::now();
        assert!(!auto.is_running());
        assert!(!auto.poll_tick(t0 + ms(500)));
    }

    #[test]
    fn test_ticks_once_per_interval() {
        let mut auto = AutoBattle::new(ms(50));
        let t0 = Instant::now();
        auto.start(t0);

        assert!(!auto.poll_tick(t0 + ms(49)));
        assert!(auto.poll_tick(t0 + ms(50)));
        assert!(!auto.poll_tick(t0 + ms(60)));
        assert!(auto.poll_tick(t0 + ms(100)));
    }

    #[test]
    fn test_missed_intervals_not_replayed() {
        let mut auto = AutoBattle::new(ms(50));
        let t0 = Instant::now();
        auto.start(t0);

        assert!(auto.poll_tick(t0 + ms(1000)));
        assert!(!auto.poll_tick(t0 + ms(1001)));
    }

    #[test]
    fn test_restart_replaces_handle() {
        let mut auto = AutoBattle::new(ms(50));
        let t0 = Instant::now();
        let first = auto.start(t0);
        let second = auto.start(t0 + ms(10));

        assert_ne!(first.generation, second.generation);
        assert_eq!(auto.handle().map(|h| h.generation), Some(second.generation));
        // The new timer counts from its own start
        assert!(!auto.poll_tick(t0 + ms(55)));
        assert!(auto.poll_tick(t0 + ms(60)));
    }

    #[test]
    fn test_stop_is_idempotent_and_cancels_pending_tick() {
        let mut auto = AutoBattle::new(ms(50));
        let t0 = Instant::now();
        auto.start(t0);
        auto.stop();
        auto.stop();

        assert!(!auto.is_running());
        assert!(!auto.poll_tick(t0 + ms(200)));
    }

    #[test]
    fn test_toggle() {
        let mut auto = AutoBattle::default();
        let t0 = Instant::now();
        auto.toggle(t0);
        assert!(auto.is_running());
        auto.toggle(t0);
        assert!(!auto.is_running());
        assert_eq!(auto.interval(), ms(50));
    }
}
