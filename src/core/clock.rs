//! One-second countdown with cancellable callbacks.
//!
//! The clock does not own a timer. Whatever drives it (the engine's
//! interval) calls [`GameClock::tick`] once per second with the handle
//! returned by [`GameClock::start`].

use tracing::debug;

type OnTick = Box<dyn FnMut(u32) + Send>;
type OnExpire = Box<dyn FnOnce() + Send>;

/// Identifies one armed countdown. Ticks carrying a handle from an
/// earlier `start` are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockHandle {
    epoch: u64,
}

struct Countdown {
    on_tick: OnTick,
    on_expire: Option<OnExpire>,
}

pub struct GameClock {
    remaining: u32,
    epoch: u64,
    countdown: Option<Countdown>,
}

impl GameClock {
    pub fn new() -> Self {
        Self { remaining: 0, epoch: 0, countdown: None }
    }

    /// Arm a countdown from `duration_secs`. A countdown already running
    /// is cancelled first.
    pub fn start<T, E>(&mut self, duration_secs: u32, on_tick: T, on_expire: E) -> ClockHandle
    where
        T: FnMut(u32) + Send + 'static,
        E: FnOnce() + Send + 'static,
    {
        self.stop();
        self.remaining = duration_secs;
        self.countdown = Some(Countdown {
            on_tick: Box::new(on_tick),
            on_expire: Some(Box::new(on_expire)),
        });
        debug!(duration_secs, epoch = self.epoch, "clock started");
        ClockHandle { epoch: self.epoch }
    }

    /// Fire one tick. Returns false when nothing fired.
    pub fn tick(&mut self, handle: ClockHandle) -> bool {
        if handle.epoch != self.epoch {
            return false;
        }
        let Some(countdown) = self.countdown.as_mut() else {
            return false;
        };

        if self.remaining > 0 {
            self.remaining -= 1;
            (countdown.on_tick)(self.remaining);
            return true;
        }

        // Out of time: drop the callbacks before firing so nothing can run again.
        let expire = self.countdown.take().and_then(|c| c.on_expire);
        self.epoch += 1;
        debug!("clock expired");
        if let Some(expire) = expire {
            expire();
        }
        true
    }

    /// Cancel the countdown. No callback fires after this returns.
    pub fn stop(&mut self) {
        if self.countdown.take().is_some() {
            self.epoch += 1;
            debug!(remaining = self.remaining, "clock stopped");
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.countdown.is_some()
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// `MM:SS`, minutes wrapping at one hour
pub fn format_clock(total_secs: u32) -> String {
    let seconds = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, PartialEq)]
    enum Fired {
        Tick(u32),
        Expire,
    }

    fn recording_clock(secs: u32) -> (GameClock, ClockHandle, Arc<Mutex<Vec<Fired>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut clock = GameClock::new();
        let ticks = log.clone();
        let expiry = log.clone();
        let handle = clock.start(
            secs,
            move |n| ticks.lock().unwrap().push(Fired::Tick(n)),
            move || expiry.lock().unwrap().push(Fired::Expire),
        );
        (clock, handle, log)
    }

    #[test]
    fn counts_down_then_expires_once() {
        let (mut clock, handle, log) = recording_clock(5);
        assert!(clock.is_running());

        for _ in 0..5 {
            assert!(clock.tick(handle));
        }
        assert_eq!(
            *log.lock().unwrap(),
            vec![Fired::Tick(4), Fired::Tick(3), Fired::Tick(2), Fired::Tick(1), Fired::Tick(0)]
        );
        assert!(clock.is_running());

        assert!(clock.tick(handle));
        assert!(!clock.is_running());
        for _ in 0..3 {
            assert!(!clock.tick(handle));
        }

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 6);
        assert_eq!(log[5], Fired::Expire);
    }

    #[test]
    fn zero_duration_expires_on_first_tick() {
        let (mut clock, handle, log) = recording_clock(0);
        assert!(clock.tick(handle));
        assert_eq!(*log.lock().unwrap(), vec![Fired::Expire]);
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn stop_mid_countdown_silences_callbacks() {
        let (mut clock, handle, log) = recording_clock(5);
        clock.tick(handle);
        clock.tick(handle);
        clock.stop();

        for _ in 0..10 {
            assert!(!clock.tick(handle));
        }
        assert_eq!(*log.lock().unwrap(), vec![Fired::Tick(4), Fired::Tick(3)]);
        assert_eq!(clock.remaining(), 3);
        assert!(!clock.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut clock = GameClock::new();
        clock.stop();
        let (mut clock2, _, _) = recording_clock(3);
        clock2.stop();
        clock2.stop();
        assert!(!clock.is_running());
        assert!(!clock2.is_running());
    }

    #[test]
    fn stale_handle_cannot_drive_a_restarted_clock() {
        let (mut clock, old, log) = recording_clock(5);
        let fresh_log = Arc::new(Mutex::new(Vec::new()));
        let sink = fresh_log.clone();
        let fresh = clock.start(2, move |n| sink.lock().unwrap().push(n), || {});

        assert!(!clock.tick(old));
        assert!(clock.tick(fresh));
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(*fresh_log.lock().unwrap(), vec![1]);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_clock(300), "05:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(3601), "00:01");
    }
}
