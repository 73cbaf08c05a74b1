//! In-memory surface and virtual-clock scheduler for navigator tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::schedule::Scheduler;
use super::surface::{PageSurface, SectionStyle, StyleProp};
use crate::config::{HighlightGroup, default_highlight_groups};
use crate::state::page::PageId;

// =============================================================
// RecordingSurface
// =============================================================

/// One navigation element: the group it belongs to, its page attribute and
/// whether it carries the active class.
struct HighlightElement {
    group: String,
    value: Option<String>,
    active: bool,
}

#[derive(Default)]
struct SurfaceLog {
    sections: HashSet<PageId>,
    styles: HashMap<PageId, HashMap<StyleProp, String>>,
    active: HashSet<PageId>,
    highlights: Vec<HighlightElement>,
    pushed: Vec<String>,
    fragment: String,
    scrolls: usize,
    mutations: usize,
}

/// Page stand-in that records every mutation the navigator makes.
#[derive(Default)]
pub(crate) struct RecordingSurface {
    log: RefCell<SurfaceLog>,
}

impl RecordingSurface {
    /// Surface with sections for `pages` and, for every default highlight
    /// group, one element per page.
    pub(crate) fn with_pages(pages: &[PageId]) -> Self {
        let surface = Self::default();
        {
            let mut log = surface.log.borrow_mut();
            log.sections.extend(pages.iter().copied());
            for group in default_highlight_groups() {
                for page in PageId::ALL {
                    log.highlights.push(HighlightElement {
                        group: group.name.clone(),
                        value: Some(page.as_str().to_owned()),
                        active: false,
                    });
                }
            }
        }
        surface
    }

    /// Add one more element to `group`; `None` means the attribute is absent.
    pub(crate) fn with_highlight_element(self, group: &str, value: Option<&str>) -> Self {
        self.log.borrow_mut().highlights.push(HighlightElement {
            group: group.to_owned(),
            value: value.map(str::to_owned),
            active: false,
        });
        self
    }

    pub(crate) fn with_all_pages() -> Self {
        Self::with_pages(&PageId::ALL)
    }

    pub(crate) fn with_fragment(self, fragment: &str) -> Self {
        self.log.borrow_mut().fragment = fragment.to_owned();
        self
    }

    pub(crate) fn set_fragment(&self, fragment: &str) {
        self.log.borrow_mut().fragment = fragment.to_owned();
    }

    /// Active sections in canonical order.
    pub(crate) fn active_sections(&self) -> Vec<PageId> {
        let log = self.log.borrow();
        PageId::ALL.into_iter().filter(|p| log.active.contains(p)).collect()
    }

    pub(crate) fn style(&self, page: PageId, prop: StyleProp) -> Option<String> {
        self.log.borrow().styles.get(&page).and_then(|s| s.get(&prop)).cloned()
    }

    /// Attribute values of the active elements in `group`, in insertion order.
    pub(crate) fn active_highlights(&self, group: &str) -> Vec<Option<String>> {
        self.log
            .borrow()
            .highlights
            .iter()
            .filter(|el| el.group == group && el.active)
            .map(|el| el.value.clone())
            .collect()
    }

    pub(crate) fn pushed(&self) -> Vec<String> {
        self.log.borrow().pushed.clone()
    }

    pub(crate) fn scrolls(&self) -> usize {
        self.log.borrow().scrolls
    }

    pub(crate) fn mutations(&self) -> usize {
        self.log.borrow().mutations
    }
}

impl PageSurface for RecordingSurface {
    fn has_section(&self, page: PageId) -> bool {
        self.log.borrow().sections.contains(&page)
    }

    fn style_section(&self, page: PageId, style: &SectionStyle) {
        let mut log = self.log.borrow_mut();
        if !log.sections.contains(&page) {
            return;
        }
        log.mutations += 1;
        let entry = log.styles.entry(page).or_default();
        for (prop, value) in style.declarations() {
            if value.is_empty() {
                entry.remove(prop);
            } else {
                entry.insert(*prop, value.clone());
            }
        }
    }

    fn set_section_active(&self, page: PageId, active: bool) {
        let mut log = self.log.borrow_mut();
        if !log.sections.contains(&page) {
            return;
        }
        log.mutations += 1;
        if active {
            log.active.insert(page);
        } else {
            log.active.remove(&page);
        }
    }

    fn sync_highlights(&self, group: &HighlightGroup, page: PageId) {
        let mut log = self.log.borrow_mut();
        log.mutations += 1;
        for el in log.highlights.iter_mut().filter(|el| el.group == group.name) {
            el.active = group.is_active_for(el.value.as_deref(), page);
        }
    }

    fn push_fragment(&self, page: PageId) {
        let mut log = self.log.borrow_mut();
        log.mutations += 1;
        log.fragment = page.fragment();
        log.pushed.push(page.fragment());
    }

    fn current_fragment(&self) -> String {
        self.log.borrow().fragment.clone()
    }

    fn scroll_to_top(&self) {
        let mut log = self.log.borrow_mut();
        log.mutations += 1;
        log.scrolls += 1;
    }
}

// =============================================================
// ManualScheduler
// =============================================================

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct Queue {
    now_ms: u64,
    seq: u64,
    frames: Vec<Task>,
    timers: Vec<(u64, u64, Task)>,
}

/// Scheduler driven explicitly by the test. Clones share one queue.
#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub(crate) fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    pub(crate) fn pending_frames(&self) -> usize {
        self.queue.borrow().frames.len()
    }

    pub(crate) fn pending_timers(&self) -> usize {
        self.queue.borrow().timers.len()
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.pending_frames() == 0 && self.pending_timers() == 0
    }

    /// Run every callback queued for the current frame.
    pub(crate) fn run_frame(&self) -> usize {
        let frames = std::mem::take(&mut self.queue.borrow_mut().frames);
        let count = frames.len();
        for task in frames {
            task();
        }
        count
    }

    /// Move the clock forward, firing due timers in order.
    pub(crate) fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.queue.borrow_mut().now_ms = target;
    }

    /// Drain frames and timers until nothing is pending.
    pub(crate) fn settle(&self) {
        loop {
            if self.pending_frames() > 0 {
                self.run_frame();
                continue;
            }
            let next_due = self.queue.borrow().timers.iter().map(|(due, _, _)| *due).min();
            match next_due {
                Some(due) => {
                    let now = self.now_ms();
                    self.advance(due.saturating_sub(now));
                }
                None => break,
            }
        }
    }

    fn pop_due(&self, limit: u64) -> Option<Task> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .timers
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= limit)
            .min_by_key(|(_, (due, seq, _))| (*due, *seq))
            .map(|(i, _)| i)?;
        let (due, _, task) = queue.timers.remove(index);
        queue.now_ms = due;
        Some(task)
    }
}

impl Scheduler for ManualScheduler {
    fn on_next_frame(&self, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().frames.push(task);
    }

    fn after_ms(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now_ms + u64::from(delay_ms);
        let seq = queue.seq;
        queue.seq += 1;
        queue.timers.push((due, seq, task));
    }
}
