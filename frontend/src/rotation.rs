//! Auto-advancing carousel position.
//!
//! [`Rotation`] is the index state. [`RotationTimer`] owns the periodic
//! timer that drives it, and [`use_rotation`] wires both into a component.

use std::num::NonZeroUsize;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use thiserror::Error;
use yew::prelude::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RotationError {
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Position of the carousel within a fixed-size list.
///
/// `active` is always a valid index. The visible pair is the active item and
/// its successor, wrapping at the end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    active: usize,
    len: NonZeroUsize,
}

impl Rotation {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    pub fn tick(&mut self) {
        self.active = (self.active + 1) % self.len.get();
    }

    pub fn select(&mut self, index: usize) -> Result<(), RotationError> {
        if index >= self.len.get() {
            return Err(RotationError::OutOfRange {
                index,
                len: self.len.get(),
            });
        }
        self.active = index;
        Ok(())
    }

    /// Returns `(items[active], items[(active + 1) % len])`.
    ///
    /// `None` only if `items` is shorter than the rotation length.
    pub fn visible_pair<'a, T>(&self, items: &'a [T]) -> Option<(&'a T, &'a T)> {
        let next = (self.active + 1) % self.len.get();
        items.get(self.active).zip(items.get(next))
    }
}

pub enum RotationAction {
    Tick,
    Select(usize),
}

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            RotationAction::Tick => next.tick(),
            RotationAction::Select(index) => {
                if let Err(e) = next.select(index) {
                    warn!("Ignoring carousel selection: {}", e);
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// Source of periodic callbacks. Dropping the returned handle cancels them.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, callback)
    }
}

/// Scoped ownership of a running rotation timer.
///
/// The schedule is released on the first of `stop()` or drop, and never twice.
pub struct RotationTimer<H> {
    handle: Option<H>,
    period_ms: u32,
}

impl<H> RotationTimer<H> {
    pub fn start<S, F>(scheduler: &S, period_ms: u32, tick: F) -> Self
    where
        S: Scheduler<Handle = H>,
        F: FnMut() + 'static,
    {
        debug!("Starting rotation timer ({}ms)", period_ms);
        let handle = scheduler.every(period_ms, Box::new(tick));
        Self {
            handle: Some(handle),
            period_ms,
        }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            drop(handle);
            debug!("Released rotation timer ({}ms)", self.period_ms);
        }
    }
}

impl<H> Drop for RotationTimer<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Rotation state for one mounted carousel, advanced every `period_ms`.
///
/// The timer is acquired on mount and released on unmount. Manual selection
/// goes through the returned handle and leaves the timer schedule untouched.
#[hook]
pub fn use_rotation(len: NonZeroUsize, period_ms: u32) -> UseReducerHandle<Rotation> {
    let rotation = use_reducer(move || Rotation::new(len));

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |_| {
                let mut timer = RotationTimer::start(&BrowserScheduler, period_ms, move || {
                    dispatcher.dispatch(RotationAction::Tick);
                });
                move || timer.stop()
            },
            (),
        );
    }

    rotation
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn rotation(len: usize) -> Rotation {
        Rotation::new(NonZeroUsize::new(len).expect("non-zero length"))
    }

    struct Job {
        period: u64,
        next_due: u64,
        callback: Box<dyn FnMut()>,
        cancelled: Rc<Cell<bool>>,
    }

    /// Deterministic clock: jobs only fire inside `advance`.
    #[derive(Default)]
    struct ManualScheduler {
        now: Cell<u64>,
        jobs: RefCell<Vec<Job>>,
        releases: Rc<Cell<usize>>,
    }

    struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
        releases: Rc<Cell<usize>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
            self.releases.set(self.releases.get() + 1);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.jobs.borrow_mut().push(Job {
                period: u64::from(period_ms),
                next_due: self.now.get() + u64::from(period_ms),
                callback,
                cancelled: cancelled.clone(),
            });
            ManualHandle {
                cancelled,
                releases: self.releases.clone(),
            }
        }
    }

    impl ManualScheduler {
        fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let mut jobs = self.jobs.borrow_mut();
                let due = jobs
                    .iter_mut()
                    .filter(|job| !job.cancelled.get() && job.next_due <= target)
                    .min_by_key(|job| job.next_due);
                let Some(job) = due else { break };
                self.now.set(job.next_due);
                job.next_due += job.period;
                (job.callback)();
            }
            self.now.set(target);
        }

        fn next_due(&self) -> Option<u64> {
            self.jobs
                .borrow()
                .iter()
                .filter(|job| !job.cancelled.get())
                .map(|job| job.next_due)
                .min()
        }
    }

    /// Rotation driven by a manual scheduler, shared with the timer callback.
    fn mounted(
        scheduler: &ManualScheduler,
        len: usize,
    ) -> (Rc<RefCell<Rotation>>, RotationTimer<ManualHandle>) {
        let state = Rc::new(RefCell::new(rotation(len)));
        let ticked = state.clone();
        let timer = RotationTimer::start(scheduler, 3000, move || ticked.borrow_mut().tick());
        (state, timer)
    }

    #[test]
    fn tick_stays_in_bounds() {
        for len in 1..=7 {
            let mut r = rotation(len);
            for _ in 0..50 {
                r.tick();
                assert!(r.active() < len);
            }
        }
    }

    #[test]
    fn len_ticks_return_to_start() {
        for len in 1..=6 {
            for start in 0..len {
                let mut r = rotation(len);
                r.select(start).unwrap();
                for _ in 0..len {
                    r.tick();
                }
                assert_eq!(r.active(), start);
            }
        }
    }

    #[test]
    fn visible_pair_follows_selection() {
        let items = [10, 20, 30, 40];
        let mut r = rotation(items.len());
        for i in 0..items.len() {
            r.select(i).unwrap();
            let (first, second) = r.visible_pair(&items).unwrap();
            assert_eq!(*first, items[i]);
            assert_eq!(*second, items[(i + 1) % items.len()]);
        }
    }

    #[test]
    fn three_item_walkthrough() {
        let ids = [1, 2, 3];
        let mut r = rotation(3);
        let pair = |r: &Rotation| r.visible_pair(&ids).map(|(a, b)| (*a, *b));

        assert_eq!(r.active(), 0);
        assert_eq!(pair(&r), Some((1, 2)));
        r.tick();
        assert_eq!(r.active(), 1);
        assert_eq!(pair(&r), Some((2, 3)));
        r.tick();
        assert_eq!(r.active(), 2);
        assert_eq!(pair(&r), Some((3, 1)));
        r.select(0).unwrap();
        assert_eq!(pair(&r), Some((1, 2)));
    }

    #[test]
    fn select_then_tick_wraps() {
        let mut r = rotation(3);
        r.select(2).unwrap();
        r.tick();
        assert_eq!(r.active(), 0);
    }

    #[test]
    fn single_item_pairs_with_itself() {
        let items = ["only"];
        let mut r = rotation(1);
        r.tick();
        assert_eq!(r.active(), 0);
        assert_eq!(r.visible_pair(&items), Some((&"only", &"only")));
    }

    #[test]
    fn out_of_range_select_is_rejected() {
        let mut r = rotation(3);
        r.tick();
        assert_eq!(
            r.select(3),
            Err(RotationError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(r.active(), 1);
    }

    #[test]
    fn reducer_keeps_state_on_bad_selection() {
        let state = Rc::new(rotation(3));
        let same = state.clone().reduce(RotationAction::Select(5));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.reduce(RotationAction::Select(2));
        assert_eq!(moved.active(), 2);
        let ticked = moved.reduce(RotationAction::Tick);
        assert_eq!(ticked.active(), 0);
    }

    #[test]
    fn timer_ticks_on_period() {
        let scheduler = ManualScheduler::default();
        let (state, _timer) = mounted(&scheduler, 3);

        scheduler.advance(2999);
        assert_eq!(state.borrow().active(), 0);
        scheduler.advance(1);
        assert_eq!(state.borrow().active(), 1);
        scheduler.advance(6000);
        assert_eq!(state.borrow().active(), 0);
    }

    #[test]
    fn select_keeps_timer_schedule() {
        let scheduler = ManualScheduler::default();
        let (state, _timer) = mounted(&scheduler, 3);

        scheduler.advance(6000);
        assert_eq!(state.borrow().active(), 2);
        let due_before = scheduler.next_due();

        scheduler.advance(1000);
        state.borrow_mut().select(0).unwrap();
        assert_eq!(scheduler.next_due(), due_before);

        scheduler.advance(1999);
        assert_eq!(state.borrow().active(), 0);
        scheduler.advance(1);
        assert_eq!(state.borrow().active(), 1);
    }

    #[test]
    fn dispatched_select_keeps_timer_schedule() {
        let scheduler = ManualScheduler::default();
        let state = Rc::new(RefCell::new(Rc::new(rotation(3))));
        let dispatch = {
            let state = state.clone();
            move |action: RotationAction| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(action);
            }
        };
        let _timer = RotationTimer::start(&scheduler, 3000, {
            let dispatch = dispatch.clone();
            move || dispatch(RotationAction::Tick)
        });

        scheduler.advance(3000);
        assert_eq!(state.borrow().active(), 1);
        let due_before = scheduler.next_due();

        scheduler.advance(500);
        dispatch(RotationAction::Select(2));
        assert_eq!(state.borrow().active(), 2);
        assert_eq!(scheduler.next_due(), due_before);

        scheduler.advance(2499);
        assert_eq!(state.borrow().active(), 2);
        scheduler.advance(1);
        assert_eq!(state.borrow().active(), 0);
    }

    #[test]
    fn no_ticks_after_stop() {
        let scheduler = ManualScheduler::default();
        let (state, mut timer) = mounted(&scheduler, 3);

        scheduler.advance(3000);
        timer.stop();
        scheduler.advance(60_000);
        assert_eq!(state.borrow().active(), 1);
        assert_eq!(scheduler.next_due(), None);
    }

    #[test]
    fn drop_releases_timer() {
        let scheduler = ManualScheduler::default();
        let (state, timer) = mounted(&scheduler, 3);

        drop(timer);
        scheduler.advance(60_000);
        assert_eq!(state.borrow().active(), 0);
        assert_eq!(scheduler.releases.get(), 1);
    }

    #[test]
    fn release_happens_once() {
        let scheduler = ManualScheduler::default();
        let (_state, mut timer) = mounted(&scheduler, 3);

        timer.stop();
        timer.stop();
        drop(timer);
        assert_eq!(scheduler.releases.get(), 1);
    }

    #[test]
    fn instances_rotate_independently() {
        let scheduler = ManualScheduler::default();
        let (first, _first_timer) = mounted(&scheduler, 3);
        let (second, mut second_timer) = mounted(&scheduler, 4);

        scheduler.advance(3000);
        second_timer.stop();
        first.borrow_mut().select(2).unwrap();
        scheduler.advance(3000);

        assert_eq!(first.borrow().active(), 0);
        assert_eq!(second.borrow().active(), 1);
    }
}
