//! Inline style plans for the page slide transition.
//!
//! Each function returns the declarations for one step of the sequence in
//! `navigator`. Offsets mirror each other: going forward the outgoing page
//! leaves to the left while the incoming one arrives from the right.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use super::surface::{SectionStyle, StyleProp};
use crate::config::TransitionConfig;
use crate::state::navigation::Direction;

pub const OFFSCREEN_LEFT: &str = "translateX(-100%)";
pub const OFFSCREEN_RIGHT: &str = "translateX(100%)";
pub const ONSCREEN: &str = "translateX(0)";
/// Parking spot for hidden sections so they never take part in layout.
pub const PARKED_LEFT: &str = "-9999px";

#[must_use]
pub fn exit_offset(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => OFFSCREEN_LEFT,
        Direction::Backward => OFFSCREEN_RIGHT,
    }
}

#[must_use]
pub fn enter_offset(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => OFFSCREEN_RIGHT,
        Direction::Backward => OFFSCREEN_LEFT,
    }
}

/// CSS `transition` value animating transform and opacity together.
#[must_use]
pub fn transition_value(cfg: &TransitionConfig) -> String {
    format!(
        "transform {ms}ms {easing}, opacity {ms}ms {easing}",
        ms = cfg.duration_ms,
        easing = cfg.easing
    )
}

/// Outgoing page starts sliding off-screen.
#[must_use]
pub fn outgoing(direction: Direction, cfg: &TransitionConfig) -> SectionStyle {
    SectionStyle::new()
        .set(StyleProp::Transition, transition_value(cfg))
        .set(StyleProp::Transform, exit_offset(direction))
        .set(StyleProp::Opacity, "0")
}

/// Outgoing page after the slide: hidden, transient styles cleared.
#[must_use]
pub fn outgoing_reset() -> SectionStyle {
    SectionStyle::new()
        .set(StyleProp::Display, "none")
        .clear(StyleProp::Transform)
        .clear(StyleProp::Opacity)
        .clear(StyleProp::Transition)
}

/// Incoming page placed at its "from" position, still transparent.
#[must_use]
pub fn incoming_start(direction: Direction, cfg: &TransitionConfig) -> SectionStyle {
    SectionStyle::new()
        .set(StyleProp::Display, "block")
        .clear(StyleProp::Visibility)
        .set(StyleProp::Position, "relative")
        .set(StyleProp::Left, "auto")
        .set(StyleProp::Transform, enter_offset(direction))
        .set(StyleProp::Opacity, "0")
        .set(StyleProp::Transition, transition_value(cfg))
}

/// Incoming page target state, applied one frame after [`incoming_start`].
#[must_use]
pub fn incoming_settle() -> SectionStyle {
    SectionStyle::new()
        .set(StyleProp::Transform, ONSCREEN)
        .set(StyleProp::Opacity, "1")
}

#[must_use]
pub fn incoming_finish() -> SectionStyle {
    SectionStyle::new().clear(StyleProp::Transition)
}

/// Stable layout for the current page. Also drops any half-applied slide.
#[must_use]
pub fn shown() -> SectionStyle {
    SectionStyle::new()
        .set(StyleProp::Display, "block")
        .set(StyleProp::Visibility, "visible")
        .set(StyleProp::Position, "relative")
        .set(StyleProp::Left, "auto")
        .clear(StyleProp::Transform)
        .clear(StyleProp::Opacity)
        .clear(StyleProp::Transition)
}

/// Stable layout for every other page: hidden and parked off-canvas.
#[must_use]
pub fn hidden() -> SectionStyle {
    SectionStyle::new()
        .set(StyleProp::Display, "none")
        .set(StyleProp::Visibility, "hidden")
        .set(StyleProp::Position, "absolute")
        .set(StyleProp::Left, PARKED_LEFT)
        .clear(StyleProp::Transform)
        .clear(StyleProp::Opacity)
        .clear(StyleProp::Transition)
}
