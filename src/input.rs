//! Input model: mouse buttons, graph-editor gestures, and the minimap's
//! drag state machine.
//!
//! A press on the minimap either grabs the locator (when it lands on it) or
//! centres the locator on the pointer by panning the window; either way the
//! rest of the gesture drags the locator. [`InputState`] remembers where on
//! the locator the pointer holds it so drags stay correct even when the
//! layout pass that follows a click has not run yet.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// Pointer button. Only [`Button::Primary`] drives the minimap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

/// Kinds of input gesture a graph editor arbitrates between.
///
/// Only one gesture should be active at a time; the minimap reports
/// [`Gesture::Pan`] while the locator is being dragged so the editor can
/// refuse competing gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Panning the editor viewport.
    Pan,
    /// Zooming the editor viewport.
    Zoom,
    /// Resizing editor elements.
    Resize,
    /// Moving editor elements.
    Move,
    /// Connecting editor elements.
    Connect,
    /// Selecting editor elements.
    Select,
}

/// Gesture state tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The locator follows the pointer.
    DraggingLocator {
        /// Pointer position relative to the locator's top-left corner.
        grab_offset: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn gesture(&self) -> Option<Gesture> {
        match self {
            Self::Idle => None,
            Self::DraggingLocator { .. } => Some(Gesture::Pan),
        }
    }
}

/// Outcome of an input handler, for the host to act on. Ignored events
/// produce no actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// The window was asked to pan to this offset.
    PanRequested { x: f64, y: f64 },
    /// A drag started or ended; the host may want to capture the pointer.
    GestureChanged(Option<Gesture>),
}
