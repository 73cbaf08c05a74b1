//! Page navigator: guarded, timed transitions between page sections.
//!
//! ARCHITECTURE
//! ============
//! `PageNavigator` is a cheap clonable handle over shared state. Scheduled
//! transition steps hold their own clone, so the sequence keeps running after
//! the caller returns.
//!
//! Sequence for `navigate_to(target)`:
//! 1. outgoing section starts sliding out; hidden and reset after `D`
//! 2. incoming section placed at its off-screen "from" position
//! 3. next frame: incoming marked active and moved to neutral
//! 4. `D` later: transition style cleared, viewport scrolled, state committed,
//!    highlights synced, activation listeners called
//!
//! No `RefCell` borrow is held across a surface call or a listener call.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::schedule::{ScheduledTask, Scheduler, schedule_after, schedule_frame};
use super::surface::PageSurface;
use super::transition;
use crate::config::NavConfig;
use crate::error::NavError;
use crate::state::navigation::{Direction, HistoryMode, NavOutcome, NavigationState, PageActivation};
use crate::state::page::PageId;

type ActivationListener = Rc<dyn Fn(&PageActivation)>;

/// Steps of the transition currently running.
struct InFlight {
    target: PageId,
    tasks: Vec<ScheduledTask>,
}

struct Shared<S, C> {
    surface: S,
    scheduler: C,
    config: NavConfig,
    state: RefCell<NavigationState>,
    in_flight: RefCell<Option<InFlight>>,
    listeners: RefCell<Vec<ActivationListener>>,
}

/// Owner of the current page and driver of page transitions.
pub struct PageNavigator<S, C> {
    shared: Rc<Shared<S, C>>,
}

impl<S, C> Clone for PageNavigator<S, C> {
    fn clone(&self) -> Self {
        Self { shared: Rc::clone(&self.shared) }
    }
}

impl<S, C> PageNavigator<S, C>
where
    S: PageSurface + 'static,
    C: Scheduler + 'static,
{
    pub fn new(surface: S, scheduler: C, config: NavConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                surface,
                scheduler,
                config,
                state: RefCell::new(NavigationState::default()),
                in_flight: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        *self.shared.state.borrow()
    }

    #[must_use]
    pub fn current_page(&self) -> PageId {
        self.shared.state.borrow().current_page
    }

    #[must_use]
    pub fn previous_page(&self) -> Option<PageId> {
        self.shared.state.borrow().previous_page
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.shared.state.borrow().is_transitioning
    }

    /// Page the running transition is heading to, if any.
    #[must_use]
    pub fn pending_target(&self) -> Option<PageId> {
        self.shared.in_flight.borrow().as_ref().map(|f| f.target)
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.shared.surface
    }

    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.shared.config
    }

    /// Register a callback run after every committed navigation.
    pub fn on_page_activated(&self, listener: impl Fn(&PageActivation) + 'static) {
        self.shared.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Show only the current page, then resync against the URL fragment.
    pub fn start(&self) -> Result<NavOutcome, NavError> {
        self.reset_visibility();
        let fragment = self.shared.surface.current_fragment();
        self.sync_from_fragment(&fragment)
    }

    /// Force the page set into a clean stable layout for the current page.
    ///
    /// Every other section is hidden and unmarked, and highlight groups are
    /// synced. Used at startup and when `shutdown` rolls back a transition.
    pub fn reset_visibility(&self) {
        let current = self.current_page();
        let surface = &self.shared.surface;
        for page in PageId::ALL {
            if !surface.has_section(page) {
                continue;
            }
            let is_current = page == current;
            let style = if is_current { transition::shown() } else { transition::hidden() };
            surface.style_section(page, &style);
            surface.set_section_active(page, is_current);
        }
        self.sync_highlights(current);
    }

    /// Navigate to the page named by a URL fragment without adding history.
    ///
    /// Empty or unknown fragments fall back to home.
    pub fn sync_from_fragment(&self, fragment: &str) -> Result<NavOutcome, NavError> {
        let target = match PageId::from_fragment(fragment) {
            Ok(Some(page)) => page,
            Ok(None) => PageId::Home,
            Err(e) => {
                leptos::logging::warn!("{e}; showing {}", PageId::Home);
                PageId::Home
            }
        };
        self.navigate_to(target, HistoryMode::Replace)
    }

    /// Start a transition to `target`.
    ///
    /// Ignored while another transition runs or when `target` is already
    /// current. Fails without side effects when the section is missing.
    pub fn navigate_to(&self, target: PageId, history: HistoryMode) -> Result<NavOutcome, NavError> {
        if let Err(reason) = self.shared.state.borrow().admit(target) {
            return Ok(NavOutcome::Ignored(reason));
        }
        if !self.shared.surface.has_section(target) {
            leptos::logging::error!("page section \"{target}\" not found; staying on {}", self.current_page());
            return Err(NavError::SectionMissing(target));
        }
        let (outgoing, direction) = {
            let mut state = self.shared.state.borrow_mut();
            (state.current_page, state.begin(target))
        };

        *self.shared.in_flight.borrow_mut() = Some(InFlight { target, tasks: Vec::new() });

        let surface = &self.shared.surface;
        if history == HistoryMode::Push {
            surface.push_fragment(target);
        }

        let cfg = &self.shared.config.transition;
        let duration_ms = cfg.duration_ms;

        surface.style_section(outgoing, &transition::outgoing(direction, cfg));
        let nav = self.clone();
        self.track(schedule_after(&self.shared.scheduler, duration_ms, move || {
            nav.shared.surface.set_section_active(outgoing, false);
            nav.shared.surface.style_section(outgoing, &transition::outgoing_reset());
        }));

        surface.style_section(target, &transition::incoming_start(direction, cfg));
        let nav = self.clone();
        self.track(schedule_frame(&self.shared.scheduler, move || {
            nav.settle_incoming(target, direction, duration_ms);
        }));

        Ok(NavOutcome::Started(direction))
    }

    /// Cancel pending transition steps and release the guard.
    ///
    /// A half-run slide is rolled back: the committed page is shown and
    /// marked again, every other section is hidden.
    pub fn shutdown(&self) {
        let in_flight = self.shared.in_flight.borrow_mut().take();
        let Some(in_flight) = in_flight else {
            return;
        };
        for task in &in_flight.tasks {
            task.cancel();
        }
        self.shared.state.borrow_mut().abort();
        self.reset_visibility();
        leptos::logging::warn!("navigation to {} cancelled by shutdown", in_flight.target);
    }

    fn settle_incoming(&self, target: PageId, direction: Direction, duration_ms: u32) {
        let surface = &self.shared.surface;
        surface.set_section_active(target, true);
        surface.style_section(target, &transition::incoming_settle());

        let nav = self.clone();
        self.track(schedule_after(&self.shared.scheduler, duration_ms, move || {
            nav.finish(target, direction);
        }));
    }

    fn finish(&self, target: PageId, direction: Direction) {
        let surface = &self.shared.surface;
        surface.style_section(target, &transition::incoming_finish());
        surface.scroll_to_top();

        self.shared.in_flight.borrow_mut().take();
        let activation = self.shared.state.borrow_mut().commit(target, direction);
        self.sync_highlights(target);
        leptos::logging::log!("page {target} active");

        let listeners: Vec<ActivationListener> = self.shared.listeners.borrow().clone();
        for listener in listeners {
            listener(&activation);
        }
    }

    fn sync_highlights(&self, page: PageId) {
        for group in &self.shared.config.highlight_groups {
            self.shared.surface.sync_highlights(group, page);
        }
    }

    fn track(&self, task: ScheduledTask) {
        if let Some(in_flight) = self.shared.in_flight.borrow_mut().as_mut() {
            in_flight.tasks.push(task);
        }
    }
}
