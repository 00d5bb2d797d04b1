//! Periodic clock ticks bound to view visibility
//!
//! egui has no timers of its own; a frame runs when input arrives or when a
//! repaint was requested. A [`TickSubscription`] keeps the deadline for the
//! next tick so the app can ask egui to wake it up in time, and the
//! [`ClockDriver`] turns due ticks into [`Message`]s for the store.
//!
//! The subscription exists only while the view is visible. Detaching drops
//! it, after which the clock is no longer read at all.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crate::state::Message;
use crate::time::TimeSource;

/// The clock refreshes once per second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// One delivery from a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// 1 for the tick delivered on attach, then counting up.
    pub seq: u64,
    /// When the tick was observed.
    pub at: Instant,
}

/// A cancellable periodic tick source.
///
/// The first tick is due at attach time. A poll that arrives late delivers a
/// single tick and re-anchors the schedule instead of replaying every missed
/// interval.
#[derive(Debug)]
pub struct TickSubscription {
    interval: Duration,
    next_due: Instant,
    seq: u64,
}

impl TickSubscription {
    pub fn attach(now: Instant, interval: Duration) -> Self {
        Self {
            interval,
            next_due: now,
            seq: 0,
        }
    }

    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        if now < self.next_due {
            return None;
        }
        self.seq += 1;
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        Some(Tick { seq: self.seq, at: now })
    }

    /// Time left before the next tick is due (zero if overdue).
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    pub fn ticks_delivered(&self) -> u64 {
        self.seq
    }
}

/// Reads the clock on every tick and posts the result to the store.
pub struct ClockDriver<S: TimeSource> {
    source: S,
    interval: Duration,
    subscription: Option<TickSubscription>,
    tx: Sender<Message>,
}

impl<S: TimeSource> ClockDriver<S> {
    pub fn new(source: S, tx: Sender<Message>) -> Self {
        Self::with_interval(source, tx, TICK_INTERVAL)
    }

    pub fn with_interval(source: S, tx: Sender<Message>, interval: Duration) -> Self {
        Self {
            source,
            interval,
            subscription: None,
            tx,
        }
    }

    /// Start ticking. The first reading is taken on the next pump.
    pub fn attach(&mut self, now: Instant) {
        if self.subscription.is_none() {
            log::debug!("clock driver attached");
            self.subscription = Some(TickSubscription::attach(now, self.interval));
        }
    }

    /// Stop ticking and release the subscription.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            log::debug!(
                "clock driver detached after {} ticks",
                subscription.ticks_delivered()
            );
        }
    }

    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if visible {
            self.attach(now);
        } else {
            self.detach();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Deliver a due tick, if any. Returns `true` if a message was sent.
    pub fn pump(&mut self, now: Instant) -> bool {
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };
        let Some(tick) = subscription.poll(now) else {
            return false;
        };

        log::trace!("tick {} at {:?}", tick.seq, tick.at);
        let message = match self.source.now() {
            Ok(sample) => Message::Sample(sample),
            Err(e) => {
                log::warn!("clock read failed on tick {}: {}", tick.seq, e);
                Message::ClockUnavailable
            }
        };

        if self.tx.send(message).is_err() {
            log::warn!("clock store is gone, detaching driver");
            self.detach();
            return false;
        }
        true
    }

    /// How long until the next tick, or `None` while detached.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.subscription.as_ref().map(|s| s.until_next(now))
    }
}

impl<S: TimeSource> Drop for ClockDriver<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ClockStore;
    use crate::time::{Result as TimeResult, TimeError, TimeSample};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts reads and always reports 10:20:30.
    struct CountingClock {
        reads: Rc<Cell<u32>>,
    }

    impl TimeSource for CountingClock {
        fn now(&self) -> TimeResult<TimeSample> {
            self.reads.set(self.reads.get() + 1);
            TimeSample::new(10, 20, 30)
        }
    }

    struct BrokenClock;

    impl TimeSource for BrokenClock {
        fn now(&self) -> TimeResult<TimeSample> {
            Err(TimeError::OutOfRange { field: "hour", value: 99 })
        }
    }

    fn counting() -> (CountingClock, Rc<Cell<u32>>) {
        let reads = Rc::new(Cell::new(0));
        (CountingClock { reads: reads.clone() }, reads)
    }

    #[test]
    fn test_first_tick_is_immediate() {
        let t0 = Instant::now();
        let mut sub = TickSubscription::attach(t0, TICK_INTERVAL);
        assert_eq!(sub.until_next(t0), Duration::ZERO);
        let tick = sub.poll(t0).unwrap();
        assert_eq!(tick.seq, 1);
        assert_eq!(tick.at, t0);
        assert_eq!(sub.until_next(t0), TICK_INTERVAL);
    }

    #[test]
    fn test_one_tick_per_interval() {
        let t0 = Instant::now();
        let mut sub = TickSubscription::attach(t0, TICK_INTERVAL);
        assert!(sub.poll(t0).is_some());
        assert!(sub.poll(t0 + Duration::from_millis(500)).is_none());
        assert!(sub.poll(t0 + Duration::from_millis(1000)).is_some());
        assert!(sub.poll(t0 + Duration::from_millis(1500)).is_none());
        assert!(sub.poll(t0 + Duration::from_millis(2000)).is_some());
        assert_eq!(sub.ticks_delivered(), 3);
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let t0 = Instant::now();
        let mut sub = TickSubscription::attach(t0, TICK_INTERVAL);
        sub.poll(t0);
        let late = t0 + Duration::from_secs(10);
        assert!(sub.poll(late).is_some());
        assert!(sub.poll(late).is_none());
        assert_eq!(sub.until_next(late), TICK_INTERVAL);
    }

    #[test]
    fn test_driver_ticks_into_store() {
        let mut store = ClockStore::default();
        let (clock, reads) = counting();
        let mut driver = ClockDriver::new(clock, store.sender());
        let t0 = Instant::now();

        assert!(!driver.pump(t0));
        driver.attach(t0);
        assert!(driver.pump(t0));
        assert!(store.drain());
        assert_eq!(store.state().label, "10:20 AM");
        assert_eq!(reads.get(), 1);

        assert!(!driver.pump(t0 + Duration::from_millis(200)));
        assert!(driver.pump(t0 + TICK_INTERVAL));
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn test_no_reads_after_detach() {
        let mut store = ClockStore::default();
        let (clock, reads) = counting();
        let mut driver = ClockDriver::new(clock, store.sender());
        let t0 = Instant::now();

        driver.set_visible(true, t0);
        assert!(driver.pump(t0));
        store.drain();
        let seen = store.state().samples_seen;

        driver.set_visible(false, t0);
        assert!(!driver.is_attached());
        assert_eq!(driver.until_next(t0), None);
        for s in 1..5 {
            assert!(!driver.pump(t0 + Duration::from_secs(s)));
        }
        assert_eq!(reads.get(), 1);
        assert!(!store.drain());
        assert_eq!(store.state().samples_seen, seen);
    }

    #[test]
    fn test_reattach_ticks_immediately() {
        let store = ClockStore::default();
        let (clock, reads) = counting();
        let mut driver = ClockDriver::new(clock, store.sender());
        let t0 = Instant::now();

        driver.attach(t0);
        driver.pump(t0);
        driver.detach();
        let t1 = t0 + Duration::from_millis(300);
        driver.attach(t1);
        assert_eq!(driver.until_next(t1), Some(Duration::ZERO));
        assert!(driver.pump(t1));
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn test_broken_clock_posts_unavailable() {
        let mut store = ClockStore::default();
        let mut driver = ClockDriver::new(BrokenClock, store.sender());
        let t0 = Instant::now();
        driver.attach(t0);
        assert!(driver.pump(t0));
        store.drain();
        assert!(store.state().sample.is_none());
    }

    #[test]
    fn test_closed_channel_detaches() {
        let store = ClockStore::default();
        let (clock, _) = counting();
        let mut driver = ClockDriver::new(clock, store.sender());
        drop(store);
        let t0 = Instant::now();
        driver.attach(t0);
        assert!(!driver.pump(t0));
        assert!(!driver.is_attached());
    }
}
