use log::debug;
use std::{
    cmp::min,
    time::{Duration, Instant},
};

/// Fixed-interval tick scheduling, the simulation is advanced in
/// whole ticks regardless of how often ggez calls update()
pub struct Control {
    tick_interval: Duration,
    last_update: Instant,

    // amount of time which ticks have not yet been
    // accounted for (will be included next time this is done)
    remainder: f64, // ticks

    // number of ticks that still need to be
    // performed to catch up with the current time
    missed_updates: Option<usize>,

    running: bool,
}

impl Control {
    /// Ticks that fell behind by more than this are dropped instead
    /// of being replayed in one burst
    const MAX_CATCH_UP: usize = 3;

    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            last_update: Instant::now(),
            remainder: 0.,
            missed_updates: None,
            running: false,
        }
    }

    pub fn set_tick_interval(&mut self, tick_interval: Duration) {
        if self.tick_interval != tick_interval {
            debug!("tick interval set to {}ms", tick_interval.as_millis());
            self.tick_interval = tick_interval;
            self.remainder = 0.;
        }
    }

    // repeatedly called in update() as while loop condition
    pub fn can_update(&mut self) -> bool {
        if !self.running {
            return false;
        }

        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                // calculate how many ticks should have occurred
                // since the last call to can_update
                let ticks = self.last_update.elapsed().as_secs_f64()
                    / self.tick_interval.as_secs_f64()
                    + self.remainder;
                let missed_updates = ticks as usize;

                if missed_updates > 0 {
                    self.remainder = ticks % 1.;
                    self.last_update = Instant::now();

                    let missed_updates = min(missed_updates, Self::MAX_CATCH_UP);
                    self.missed_updates = Some(missed_updates - 1);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// How long update() may block before the next tick is due
    pub fn until_next_tick(&self) -> Duration {
        let due = self
            .tick_interval
            .mul_f64((1. - self.remainder).max(0.));
        due.saturating_sub(self.last_update.elapsed())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resume ticking, the first tick comes one full interval from now
    pub fn play(&mut self) {
        if !self.running {
            self.running = true;
            self.last_update = Instant::now();
            self.remainder = 0.;
            self.missed_updates = None;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
        self.missed_updates = None;
    }
}

#[test]
fn test_paused_never_updates() {
    let mut control = Control::new(Duration::from_millis(1));
    std::thread::sleep(Duration::from_millis(5));
    assert!(!control.can_update());
    control.play();
    control.pause();
    std::thread::sleep(Duration::from_millis(5));
    assert!(!control.can_update());
}

#[test]
fn test_first_tick_waits_one_interval() {
    let mut control = Control::new(Duration::from_secs(60));
    control.play();
    assert!(!control.can_update());
    assert!(control.until_next_tick() > Duration::from_secs(59));
}

#[test]
fn test_catch_up_is_bounded() {
    let mut control = Control::new(Duration::from_millis(1));
    control.play();
    std::thread::sleep(Duration::from_millis(30));
    let mut ticks = 0;
    while control.can_update() {
        ticks += 1;
    }
    assert!(ticks >= 1);
    assert!(ticks <= Control::MAX_CATCH_UP, "{} ticks", ticks);
}

#[test]
fn test_due_tick_fires_after_sleep() {
    let mut control = Control::new(Duration::from_millis(10));
    control.play();
    std::thread::sleep(control.until_next_tick());
    std::thread::sleep(Duration::from_millis(2));
    assert!(control.can_update());
}
