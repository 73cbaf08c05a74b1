use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::nav::testing::ManualScheduler;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_for = Rc::clone(&log);
    let make = move |name: &'static str| {
        let log = Rc::clone(&log_for);
        Box::new(move || log.borrow_mut().push(name)) as Box<dyn FnOnce()>
    };
    (log, make)
}

#[test]
fn frame_task_runs_on_next_frame_only() {
    let scheduler = ManualScheduler::default();
    let (log, make) = recorder();
    let task = schedule_frame(&scheduler, make("frame"));

    assert!(!task.has_run());
    assert!(log.borrow().is_empty());
    assert_eq!(scheduler.run_frame(), 1);
    assert!(task.has_run());
    assert_eq!(*log.borrow(), ["frame"]);
}

#[test]
fn timer_task_waits_for_full_delay() {
    let scheduler = ManualScheduler::default();
    let (log, make) = recorder();
    let task = schedule_after(&scheduler, 500, make("timer"));

    scheduler.advance(499);
    assert!(!task.has_run());
    scheduler.advance(1);
    assert!(task.has_run());
    assert_eq!(*log.borrow(), ["timer"]);
}

#[test]
fn timers_fire_in_due_then_insertion_order() {
    let scheduler = ManualScheduler::default();
    let (log, make) = recorder();
    schedule_after(&scheduler, 300, make("late"));
    schedule_after(&scheduler, 100, make("early-a"));
    schedule_after(&scheduler, 100, make("early-b"));

    scheduler.advance(1_000);
    assert_eq!(*log.borrow(), ["early-a", "early-b", "late"]);
}

#[test]
fn cancelled_task_never_runs() {
    let scheduler = ManualScheduler::default();
    let (log, make) = recorder();
    let frame = schedule_frame(&scheduler, make("frame"));
    let timer = schedule_after(&scheduler, 10, make("timer"));
    frame.cancel();
    timer.cancel();

    scheduler.settle();
    assert!(frame.is_cancelled());
    assert!(!frame.has_run());
    assert!(!timer.has_run());
    assert!(log.borrow().is_empty());
}

#[test]
fn cancel_after_run_is_harmless() {
    let scheduler = ManualScheduler::default();
    let (_log, make) = recorder();
    let task = schedule_frame(&scheduler, make("frame"));
    scheduler.run_frame();
    task.cancel();
    assert!(task.has_run());
    assert!(task.is_cancelled());
}

#[test]
fn settle_drains_chained_frame_then_timer() {
    let scheduler = ManualScheduler::default();
    let (log, make) = recorder();
    let inner = scheduler.clone();
    let after = make("after");
    schedule_frame(&scheduler, move || {
        schedule_after(&inner, 250, after);
    });

    scheduler.settle();
    assert_eq!(*log.borrow(), ["after"]);
    assert_eq!(scheduler.now_ms(), 250);
    assert!(scheduler.is_idle());
}
