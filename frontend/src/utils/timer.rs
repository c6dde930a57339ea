use gloo_timers::callback::{Interval, Timeout};

/// Source of delayed and recurring callbacks. Dropping a handle cancels
/// the callback.
pub trait Scheduler {
    type Handle;

    fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    fn after(&self, millis: u32, done: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setInterval` / `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(millis, tick))
    }

    fn after(&self, millis: u32, done: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(millis, done))
    }
}

/// Holds at most one recurring timer. Resuming replaces whatever was
/// running, so repeated resumes never stack ticks.
pub struct Autoplay<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    running: Option<S::Handle>,
}

impl<S: Scheduler> Autoplay<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self { scheduler, period_ms, running: None }
    }

    pub fn resume(&mut self, tick: impl FnMut() + 'static) {
        // Drop the old timer before arming the new one.
        self.running = None;
        self.running = Some(self.scheduler.every(self.period_ms, Box::new(tick)));
    }

    pub fn pause(&mut self) {
        self.running = None;
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::Scheduler;

    type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

    struct Pending {
        period: u32,
        remaining: u32,
        tick: Option<Tick>,
        once: Option<Box<dyn FnOnce()>>,
        alive: Weak<()>,
    }

    /// Scheduler driven by hand from tests. `advance` fires whatever is due
    /// and skips timers whose handle was dropped.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        pending: Rc<RefCell<Vec<Pending>>>,
    }

    pub struct ManualHandle {
        _alive: Rc<()>,
    }

    impl ManualScheduler {
        pub fn live_timers(&self) -> usize {
            self.pending
                .borrow()
                .iter()
                .filter(|p| p.alive.strong_count() > 0)
                .count()
        }

        pub fn advance(&self, millis: u32) {
            for _ in 0..millis {
                let mut due_ticks = Vec::new();
                let mut due_once = Vec::new();
                {
                    let mut pending = self.pending.borrow_mut();
                    pending.retain(|p| p.alive.strong_count() > 0);
                    for p in pending.iter_mut() {
                        p.remaining -= 1;
                        if p.remaining == 0 {
                            if let Some(tick) = &p.tick {
                                due_ticks.push(tick.clone());
                                p.remaining = p.period;
                            } else if let Some(once) = p.once.take() {
                                due_once.push(once);
                            }
                        }
                    }
                    pending.retain(|p| p.tick.is_some() || p.once.is_some());
                }
                for tick in due_ticks {
                    (tick.borrow_mut())();
                }
                for once in due_once {
                    once();
                }
            }
        }

        fn push(&self, period: u32, tick: Option<Tick>, once: Option<Box<dyn FnOnce()>>) -> ManualHandle {
            let alive = Rc::new(());
            self.pending.borrow_mut().push(Pending {
                period,
                remaining: period.max(1),
                tick,
                once,
                alive: Rc::downgrade(&alive),
            });
            ManualHandle { _alive: alive }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
            self.push(millis.max(1), Some(Rc::new(RefCell::new(tick))), None)
        }

        fn after(&self, millis: u32, done: Box<dyn FnOnce()>) -> ManualHandle {
            self.push(millis, None, Some(done))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::manual::ManualScheduler;
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn ticks_on_each_period() {
        let scheduler = ManualScheduler::default();
        let mut autoplay = Autoplay::new(scheduler.clone(), 6_000);
        let (count, tick) = counter();
        autoplay.resume(tick);
        scheduler.advance(5_999);
        assert_eq!(count.get(), 0);
        scheduler.advance(1);
        assert_eq!(count.get(), 1);
        scheduler.advance(12_000);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn repeated_resume_never_stacks() {
        let scheduler = ManualScheduler::default();
        let mut autoplay = Autoplay::new(scheduler.clone(), 100);
        let (count, _) = counter();
        for _ in 0..5 {
            let inner = count.clone();
            autoplay.resume(move || inner.set(inner.get() + 1));
            assert_eq!(scheduler.live_timers(), 1);
        }
        scheduler.advance(100);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn pause_cancels_pending_tick() {
        let scheduler = ManualScheduler::default();
        let mut autoplay = Autoplay::new(scheduler.clone(), 100);
        let (count, tick) = counter();
        autoplay.resume(tick);
        scheduler.advance(50);
        autoplay.pause();
        assert!(!autoplay.is_running());
        assert_eq!(scheduler.live_timers(), 0);
        scheduler.advance(500);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn visibility_toggles_leave_nothing_behind() {
        let scheduler = ManualScheduler::default();
        let mut autoplay = Autoplay::new(scheduler.clone(), 100);
        for visible in [true, false, true, true, false, true, false] {
            if visible {
                autoplay.resume(|| {});
            } else {
                autoplay.pause();
            }
            assert!(scheduler.live_timers() <= 1);
        }
        assert_eq!(scheduler.live_timers(), 0);
    }

    #[test]
    fn one_shot_fires_once_unless_dropped() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let inner = fired.clone();
        let _kept = scheduler.after(1_500, Box::new(move || inner.set(inner.get() + 1)));
        let inner = fired.clone();
        drop(scheduler.after(1_500, Box::new(move || inner.set(inner.get() + 10))));
        scheduler.advance(3_000);
        assert_eq!(fired.get(), 1);
    }
}
