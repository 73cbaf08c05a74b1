//! Frame and timer scheduling with cancellable task handles.
//!
//! DESIGN
//! ======
//! A transition is a short chain of "next animation frame" and "after N ms"
//! callbacks. Each step is wrapped so its [`ScheduledTask`] handle can turn it
//! into a no-op, which keeps cancellation independent of whether the
//! underlying timer API supports clearing.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::Cell;
use std::rc::Rc;

/// Source of deferred execution on the UI thread.
pub trait Scheduler {
    /// Run `task` at the next animation-frame boundary.
    fn on_next_frame(&self, task: Box<dyn FnOnce()>);

    /// Run `task` once after `delay_ms` milliseconds.
    fn after_ms(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Handle to one scheduled step.
#[derive(Clone, Debug, Default)]
pub struct ScheduledTask {
    cancelled: Rc<Cell<bool>>,
    ran: Rc<Cell<bool>>,
}

impl ScheduledTask {
    /// Prevent the step from running. No effect once it has run.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    #[must_use]
    pub fn has_run(&self) -> bool {
        self.ran.get()
    }

    fn guard(&self, f: impl FnOnce() + 'static) -> Box<dyn FnOnce()> {
        let cancelled = Rc::clone(&self.cancelled);
        let ran = Rc::clone(&self.ran);
        Box::new(move || {
            if cancelled.get() {
                return;
            }
            ran.set(true);
            f();
        })
    }
}

/// Schedule `f` for the next animation frame.
pub fn schedule_frame<S: Scheduler + ?Sized>(scheduler: &S, f: impl FnOnce() + 'static) -> ScheduledTask {
    let task = ScheduledTask::default();
    scheduler.on_next_frame(task.guard(f));
    task
}

/// Schedule `f` to run after `delay_ms`.
pub fn schedule_after<S: Scheduler + ?Sized>(
    scheduler: &S,
    delay_ms: u32,
    f: impl FnOnce() + 'static,
) -> ScheduledTask {
    let task = ScheduledTask::default();
    scheduler.after_ms(delay_ms, task.guard(f));
    task
}
