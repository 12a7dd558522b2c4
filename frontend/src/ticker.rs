use gloo_timers::callback::Interval;

/// Cancels a periodic callback registered with a [`Scheduler`].
#[cfg_attr(test, mockall::automock)]
pub trait TickHandle {
    fn cancel(&mut self);
}

/// Callback run on every tick.
pub type TickFn = Box<dyn FnMut()>;

/// Host facility that invokes a callback every `period_ms` until cancelled.
#[cfg_attr(test, mockall::automock)]
pub trait Scheduler {
    fn every(&self, period_ms: u32, tick: TickFn) -> Box<dyn TickHandle>;
}

pub struct BrowserScheduler;

struct IntervalHandle(Option<Interval>);

impl TickHandle for IntervalHandle {
    fn cancel(&mut self) {
        if let Some(interval) = self.0.take() {
            interval.cancel();
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn every(&self, period_ms: u32, mut tick: TickFn) -> Box<dyn TickHandle> {
        let interval = Interval::new(period_ms, move || tick());
        Box::new(IntervalHandle(Some(interval)))
    }
}

/// Owns a running periodic callback. Dropping it cancels the callback.
pub struct Ticker {
    handle: Option<Box<dyn TickHandle>>,
}

impl Ticker {
    /// Runs `tick` once right away, then every `period_ms`.
    pub fn start<F>(scheduler: &dyn Scheduler, period_ms: u32, mut tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        tick();
        let handle = scheduler.every(period_ms, Box::new(tick));
        Self {
            handle: Some(handle),
        }
    }

    pub fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::{Countdown, Phase, TimeLeft, TICK_INTERVAL_MS};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Slot = Rc<RefCell<Option<TickFn>>>;

    /// Scheduler whose callback is fired by hand. The slot stands in for the
    /// host's timer table: cancelling empties it, the way clearing a browser
    /// interval drops its callback.
    fn manual_scheduler(slot: Slot, cancels: Rc<Cell<u32>>) -> MockScheduler {
        let mut handle = MockTickHandle::new();
        {
            let slot = slot.clone();
            handle.expect_cancel().times(1).returning_st(move || {
                cancels.set(cancels.get() + 1);
                slot.borrow_mut().take();
            });
        }

        let mut handle = Some(handle);
        let mut scheduler = MockScheduler::new();
        scheduler
            .expect_every()
            .withf(|period, _| *period == TICK_INTERVAL_MS)
            .times(1)
            .returning_st(move |_, tick| {
                *slot.borrow_mut() = Some(tick);
                Box::new(handle.take().expect("scheduled twice")) as Box<dyn TickHandle>
            });
        scheduler
    }

    fn fire(slot: &Slot) -> bool {
        match slot.borrow_mut().as_mut() {
            Some(tick) => {
                tick();
                true
            }
            None => false,
        }
    }

    #[test]
    fn interval_handle_cancel_is_idempotent() {
        let mut handle = IntervalHandle(None);
        handle.cancel();
        handle.cancel();
        assert!(handle.0.is_none());
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 20, 8, 0, 0).unwrap()
    }

    #[test]
    fn runs_once_before_first_interval() {
        let slot: Slot = Rc::new(RefCell::new(None));
        let cancels = Rc::new(Cell::new(0));
        let scheduler = manual_scheduler(slot.clone(), cancels.clone());
        let runs = Rc::new(Cell::new(0));

        let ticker = {
            let runs = runs.clone();
            Ticker::start(&scheduler, TICK_INTERVAL_MS, move || runs.set(runs.get() + 1))
        };
        assert_eq!(runs.get(), 1);
        assert!(slot.borrow().is_some());

        assert!(fire(&slot));
        assert!(fire(&slot));
        assert_eq!(runs.get(), 3);
        drop(ticker);
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn teardown_cancels_once_and_stops_updates() {
        let slot: Slot = Rc::new(RefCell::new(None));
        let cancels = Rc::new(Cell::new(0));
        let scheduler = manual_scheduler(slot.clone(), cancels.clone());

        let now = Rc::new(Cell::new(start()));
        let shown = Rc::new(RefCell::new(Countdown::new(Some(start() + Duration::days(2)))));
        let updates = Rc::new(Cell::new(0));

        let mut ticker = {
            let now = now.clone();
            let shown = shown.clone();
            let updates = updates.clone();
            let mut countdown = *shown.borrow();
            Ticker::start(&scheduler, TICK_INTERVAL_MS, move || {
                if countdown.tick(now.get()) {
                    updates.set(updates.get() + 1);
                    *shown.borrow_mut() = countdown;
                }
            })
        };
        assert_eq!(updates.get(), 1);
        assert_eq!(shown.borrow().time_left().days, 2);

        now.set(start() + Duration::seconds(1));
        assert!(fire(&slot));
        assert_eq!(updates.get(), 2);

        ticker.stop();
        ticker.stop();
        drop(ticker);
        assert_eq!(cancels.get(), 1);

        now.set(start() + Duration::seconds(2));
        assert!(!fire(&slot));
        assert_eq!(updates.get(), 2);
        assert_eq!(
            shown.borrow().time_left(),
            TimeLeft { days: 1, hours: 23, minutes: 59, seconds: 59 }
        );
        assert_eq!(shown.borrow().phase(), Phase::CountingDown);
    }

    #[test]
    fn teardown_after_expiry_still_cancels() {
        let slot: Slot = Rc::new(RefCell::new(None));
        let cancels = Rc::new(Cell::new(0));
        let scheduler = manual_scheduler(slot.clone(), cancels.clone());

        let mut countdown = Countdown::new(Some(start() - Duration::seconds(10)));
        let ticker = Ticker::start(&scheduler, TICK_INTERVAL_MS, move || {
            countdown.tick(start());
        });
        assert!(fire(&slot));
        drop(ticker);
        assert_eq!(cancels.get(), 1);
    }
}
