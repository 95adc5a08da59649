//! Delayed repeating tasks.
//!
//! A task is armed once: it fires after `first_delay_ms`, then every
//! `period_ms` until its handle is cancelled or dropped. Cancelling twice is
//! a no-op.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;

pub type Task = Rc<dyn Fn()>;

pub trait TaskHandle {
    fn cancel(&mut self);
}

pub trait Scheduler {
    type Handle: TaskHandle;

    fn schedule_repeating_after(&self, first_delay_ms: u32, period_ms: u32, task: Task) -> Self::Handle;
}

/// Browser timers backed by `setTimeout` / `setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

pub struct BrowserTaskHandle {
    timeout: Option<Timeout>,
    interval: Rc<RefCell<Option<Interval>>>,
    cancelled: Rc<Cell<bool>>,
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTaskHandle;

    fn schedule_repeating_after(&self, first_delay_ms: u32, period_ms: u32, task: Task) -> BrowserTaskHandle {
        let interval = Rc::new(RefCell::new(None));
        let cancelled = Rc::new(Cell::new(false));

        let timeout = {
            let interval = interval.clone();
            let cancelled = cancelled.clone();
            Timeout::new(first_delay_ms, move || {
                if cancelled.get() {
                    return;
                }
                task();
                // The task itself may have cancelled us.
                if cancelled.get() {
                    return;
                }
                *interval.borrow_mut() = Some(Interval::new(period_ms, move || task()));
            })
        };

        BrowserTaskHandle {
            timeout: Some(timeout),
            interval,
            cancelled,
        }
    }
}

impl TaskHandle for BrowserTaskHandle {
    fn cancel(&mut self) {
        if self.cancelled.replace(true) {
            return;
        }
        // Dropping gloo timers clears them.
        self.timeout.take();
        self.interval.borrow_mut().take();
        debug!("Browser timer cancelled");
    }
}

impl Drop for BrowserTaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::{Scheduler, Task, TaskHandle};

    struct ScheduledTask {
        id: u64,
        due_ms: u64,
        period_ms: u64,
        task: Task,
    }

    #[derive(Default)]
    struct ManualClock {
        now_ms: u64,
        next_id: u64,
        tasks: Vec<ScheduledTask>,
    }

    /// Virtual clock for driving timers deterministically in tests.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<ManualClock>>,
    }

    pub struct ManualTaskHandle {
        id: u64,
        clock: Weak<RefCell<ManualClock>>,
        active: bool,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now_ms(&self) -> u64 {
            self.clock.borrow().now_ms
        }

        pub fn pending_tasks(&self) -> usize {
            self.clock.borrow().tasks.len()
        }

        /// Moves the clock forward, firing every due callback in time order.
        pub fn advance_by(&self, ms: u64) {
            let target = self.clock.borrow().now_ms + ms;
            loop {
                let task = {
                    let mut clock = self.clock.borrow_mut();
                    let next = clock
                        .tasks
                        .iter_mut()
                        .filter(|t| t.due_ms <= target)
                        .min_by_key(|t| (t.due_ms, t.id));
                    let (due, task) = match next {
                        Some(scheduled) => {
                            let due = scheduled.due_ms;
                            scheduled.due_ms += scheduled.period_ms;
                            (due, scheduled.task.clone())
                        }
                        None => break,
                    };
                    clock.now_ms = due;
                    task
                };
                task();
            }
            self.clock.borrow_mut().now_ms = target;
        }

        /// Moves the clock to an absolute time.
        pub fn advance_to(&self, at_ms: u64) {
            let now = self.now_ms();
            self.advance_by(at_ms.saturating_sub(now));
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualTaskHandle;

        fn schedule_repeating_after(&self, first_delay_ms: u32, period_ms: u32, task: Task) -> ManualTaskHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due_ms = clock.now_ms + u64::from(first_delay_ms);
            clock.tasks.push(ScheduledTask {
                id,
                due_ms,
                period_ms: u64::from(period_ms.max(1)),
                task,
            });
            ManualTaskHandle {
                id,
                clock: Rc::downgrade(&self.clock),
                active: true,
            }
        }
    }

    impl TaskHandle for ManualTaskHandle {
        fn cancel(&mut self) {
            if !self.active {
                return;
            }
            self.active = false;
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().tasks.retain(|t| t.id != self.id);
            }
        }
    }

    impl ManualTaskHandle {
        pub fn is_active(&self) -> bool {
            self.active
        }
    }

    impl Drop for ManualTaskHandle {
        fn drop(&mut self) {
            self.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, Task) {
        let fired = Rc::new(Cell::new(0));
        let task: Task = {
            let fired = fired.clone();
            Rc::new(move || fired.set(fired.get() + 1))
        };
        (fired, task)
    }

    #[test]
    fn first_delay_then_fixed_period() {
        let scheduler = ManualScheduler::new();
        let (fired, task) = counter();
        let _handle = scheduler.schedule_repeating_after(1_000, 3_000, task);

        scheduler.advance_to(999);
        assert_eq!(fired.get(), 0);
        scheduler.advance_to(1_000);
        assert_eq!(fired.get(), 1);
        scheduler.advance_to(3_999);
        assert_eq!(fired.get(), 1);
        scheduler.advance_to(10_000);
        assert_eq!(fired.get(), 4);
    }

    #[test]
    fn cancel_is_idempotent_and_stops_firing() {
        let scheduler = ManualScheduler::new();
        let (fired, task) = counter();
        let mut handle = scheduler.schedule_repeating_after(10, 10, task);

        scheduler.advance_by(10);
        handle.cancel();
        handle.cancel();
        assert!(!handle.is_active());
        assert_eq!(scheduler.pending_tasks(), 0);

        scheduler.advance_by(1_000);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let (fired, task) = counter();
        drop(scheduler.schedule_repeating_after(5, 5, task));

        scheduler.advance_by(100);
        assert_eq!(fired.get(), 0);
        assert_eq!(scheduler.pending_tasks(), 0);
    }
}
