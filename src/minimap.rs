//! The minimap panel.
//!
//! ARCHITECTURE
//! ============
//! The panel watches two collaborators it does not own: the panning window
//! and the content surface. Every property it cares about on them is an
//! [`Observable`]; the panel subscribes when a reference is set and
//! unsubscribes when it is replaced or the panel is dropped. Those listeners
//! only raise a "layout requested" flag, so any number of changes between two
//! frames collapse into one [`Minimap::layout_if_needed`] call, and no
//! listener ever needs to borrow the panel.
//!
//! The layout pass is the single place where geometry is reconciled: it
//! recomputes the scale factor, sizes the content representation and redraws
//! the locator.
//!
//! The other direction starts at the locator. Its position is observable too,
//! and the panel's listener turns every position change into a pan command on
//! the window. `draw` moves the locator as well, so the layout pass raises a
//! repositioning guard around it; programmatic moves never pan. Together with
//! observables that only notify on change and an idempotent `pan_to`, a drag
//! settles after one round: drag, pan, layout, redraw at the same spot.

#[cfg(test)]
#[path = "minimap_test.rs"]
mod minimap_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::MinimapConfig;
use crate::consts::UNZOOMED;
use crate::content::ContentSurface;
use crate::error::MinimapError;
use crate::geometry::{Point, Rect, Size};
use crate::input::{Action, Button, Gesture, InputState};
use crate::locator::Locator;
use crate::observable::{Observable, SubscriptionId};
use crate::representation::ContentRepresentation;
use crate::window::PanningWindow;

/// A child of the minimap, in paint order.
pub enum Child<'a> {
    Representation(&'a dyn ContentRepresentation),
    Locator(&'a Locator),
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// State shared between the panel and its locator listeners.
struct Links {
    padding: f64,
    window: RefCell<Option<Rc<dyn PanningWindow>>>,
    content: RefCell<Option<Rc<dyn ContentSurface>>>,
    scale_factor: Cell<f64>,
    /// Raised while the layout pass repositions the locator.
    repositioning: Cell<bool>,
    /// Most recent pan issued by a locator move.
    last_pan: Cell<Option<Point>>,
}

impl Links {
    /// Window and content, if both are set and have a non-zero size.
    fn ready(&self) -> Option<(Rc<dyn PanningWindow>, Rc<dyn ContentSurface>)> {
        let window = self.window.borrow().clone()?;
        let content = self.content.borrow().clone()?;
        (window.is_ready() && content.is_ready()).then_some((window, content))
    }

    fn zoom_factor(&self) -> f64 {
        self.content.borrow().as_ref().map_or(UNZOOMED, |content| content.zoom())
    }

    /// Window offset implied by a locator coordinate on one axis.
    fn window_offset(&self, locator_coordinate: f64) -> f64 {
        let effective = self.scale_factor.get() / self.zoom_factor();
        (locator_coordinate - self.padding) / effective
    }

    fn on_locator_moved(&self, axis: Axis, coordinate: f64) {
        if self.repositioning.get() {
            return;
        }
        let Some((window, _content)) = self.ready() else {
            return;
        };
        let target = self.window_offset(coordinate);
        let (x, y) = match axis {
            Axis::X => (target, window.window_y().get()),
            Axis::Y => (window.window_x().get(), target),
        };
        tracing::debug!(?axis, x, y, "locator moved, panning window");
        window.pan_to(x, y);
        self.last_pan.set(Some(Point::new(x, y)));
    }
}

struct WindowSubscriptions {
    width: SubscriptionId,
    height: SubscriptionId,
    window_x: SubscriptionId,
    window_y: SubscriptionId,
}

impl WindowSubscriptions {
    fn attach(window: &dyn PanningWindow, layout_requested: &Rc<Cell<bool>>) -> Self {
        Self {
            width: request_on_change(window.width(), layout_requested),
            height: request_on_change(window.height(), layout_requested),
            window_x: request_on_change(window.window_x(), layout_requested),
            window_y: request_on_change(window.window_y(), layout_requested),
        }
    }

    fn detach(self, window: &dyn PanningWindow) {
        window.width().unsubscribe(self.width);
        window.height().unsubscribe(self.height);
        window.window_x().unsubscribe(self.window_x);
        window.window_y().unsubscribe(self.window_y);
    }
}

struct ContentSubscriptions {
    width: SubscriptionId,
    height: SubscriptionId,
    layout_x: SubscriptionId,
    layout_y: SubscriptionId,
    transform: SubscriptionId,
}

impl ContentSubscriptions {
    fn attach(content: &dyn ContentSurface, layout_requested: &Rc<Cell<bool>>) -> Self {
        Self {
            width: request_on_change(content.width(), layout_requested),
            height: request_on_change(content.height(), layout_requested),
            layout_x: request_on_change(content.layout_x(), layout_requested),
            layout_y: request_on_change(content.layout_y(), layout_requested),
            transform: request_on_change(content.local_to_screen(), layout_requested),
        }
    }

    fn detach(self, content: &dyn ContentSurface) {
        content.width().unsubscribe(self.width);
        content.height().unsubscribe(self.height);
        content.layout_x().unsubscribe(self.layout_x);
        content.layout_y().unsubscribe(self.layout_y);
        content.local_to_screen().unsubscribe(self.transform);
    }
}

fn request_on_change<T: Copy + PartialEq + 'static>(
    observable: &Observable<T>,
    layout_requested: &Rc<Cell<bool>>,
) -> SubscriptionId {
    let flag = Rc::clone(layout_requested);
    observable.subscribe(move |_, _| flag.set(true))
}

/// A minimap showing where a [`PanningWindow`] is over its content, and
/// navigating the window by click or drag.
pub struct Minimap {
    links: Rc<Links>,
    layout_requested: Rc<Cell<bool>>,
    locator: Locator,
    representation: Option<Box<dyn ContentRepresentation>>,
    window_subscriptions: Option<WindowSubscriptions>,
    content_subscriptions: Option<ContentSubscriptions>,
    width: f64,
    height: f64,
    visible: bool,
    input: InputState,
}

impl Default for Minimap {
    fn default() -> Self {
        Self::from_valid_config(MinimapConfig::default())
    }
}

impl Minimap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a minimap with the given padding and initial scale factor.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`MinimapConfig::validate`]; a NaN or negative
    /// padding would otherwise poison every layout pass.
    pub fn with_config(config: MinimapConfig) -> Result<Self, MinimapError> {
        config.validate().map(Self::from_valid_config)
    }

    fn from_valid_config(config: MinimapConfig) -> Self {
        let links = Rc::new(Links {
            padding: config.padding,
            window: RefCell::new(None),
            content: RefCell::new(None),
            scale_factor: Cell::new(config.initial_scale_factor),
            repositioning: Cell::new(false),
            last_pan: Cell::new(None),
        });

        let locator = Locator::new(config.padding);
        let on_x = Rc::clone(&links);
        locator.x().subscribe(move |_, x| on_x.on_locator_moved(Axis::X, x));
        let on_y = Rc::clone(&links);
        locator.y().subscribe(move |_, y| on_y.on_locator_moved(Axis::Y, y));

        Self {
            links,
            layout_requested: Rc::new(Cell::new(true)),
            locator,
            representation: None,
            window_subscriptions: None,
            content_subscriptions: None,
            width: 0.0,
            height: 0.0,
            visible: true,
            input: InputState::Idle,
        }
    }

    // --- Collaborators ---

    /// Replace the content representation shown beneath the locator.
    ///
    /// Returns the previous representation, which is no longer displayed.
    pub fn set_content_representation(
        &mut self,
        representation: Option<Box<dyn ContentRepresentation>>,
    ) -> Option<Box<dyn ContentRepresentation>> {
        let previous = std::mem::replace(&mut self.representation, representation);
        self.request_layout();
        previous
    }

    #[must_use]
    pub fn content_representation(&self) -> Option<&(dyn ContentRepresentation + 'static)> {
        self.representation.as_deref()
    }

    pub fn content_representation_mut(&mut self) -> Option<&mut (dyn ContentRepresentation + 'static)> {
        self.representation.as_deref_mut()
    }

    /// Set the panning window this minimap represents.
    ///
    /// Listeners move from the previous window (if any) to the new one. The
    /// window is drawn as the locator rectangle.
    pub fn set_window(&mut self, window: Option<Rc<dyn PanningWindow>>) {
        let previous = self.links.window.replace(window.clone());
        if let (Some(previous), Some(subscriptions)) = (previous, self.window_subscriptions.take()) {
            subscriptions.detach(previous.as_ref());
        }
        if let Some(window) = &window {
            self.window_subscriptions = Some(WindowSubscriptions::attach(window.as_ref(), &self.layout_requested));
        }
        tracing::debug!(attached = window.is_some(), "minimap window set");

        if self.visible {
            self.request_layout();
        }
    }

    #[must_use]
    pub fn window(&self) -> Option<Rc<dyn PanningWindow>> {
        self.links.window.borrow().clone()
    }

    /// Set the content this minimap represents.
    ///
    /// This should be the same content that is shown inside the window.
    /// Clearing the content also clears the representation's children.
    pub fn set_content(&mut self, content: Option<Rc<dyn ContentSurface>>) {
        let previous = self.links.content.replace(content.clone());
        if let (Some(previous), Some(subscriptions)) = (previous, self.content_subscriptions.take()) {
            subscriptions.detach(previous.as_ref());
        }
        match &content {
            Some(content) => {
                self.content_subscriptions =
                    Some(ContentSubscriptions::attach(content.as_ref(), &self.layout_requested));
            }
            None => {
                if let Some(representation) = self.representation.as_mut() {
                    representation.clear_children();
                }
            }
        }
        tracing::debug!(attached = content.is_some(), "minimap content set");

        self.request_layout();
    }

    #[must_use]
    pub fn content(&self) -> Option<Rc<dyn ContentSurface>> {
        self.links.content.borrow().clone()
    }

    // --- Geometry ---

    /// Resize the minimap panel itself.
    #[allow(clippy::float_cmp)]
    pub fn resize(&mut self, width: f64, height: f64) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.request_layout();
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.links.padding
    }

    /// The padded area the content representation is drawn into.
    #[must_use]
    pub fn drawable_area(&self) -> Rect {
        let padding = self.links.padding;
        Rect::new(padding, padding, self.width - 2.0 * padding, self.height - 2.0 * padding)
    }

    /// How much smaller the minimap is than the content it represents.
    ///
    /// Always greater than zero; usually much less than one.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.links.scale_factor.get()
    }

    /// How much the content is zoomed in (1 when there is no content).
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.links.zoom_factor()
    }

    /// Window offset that would place the locator's top-left corner at
    /// `locator_position`. Inverse of the locator's draw formula.
    #[must_use]
    pub fn window_offset_for(&self, locator_position: Point) -> Point {
        Point::new(self.links.window_offset(locator_position.x), self.links.window_offset(locator_position.y))
    }

    #[must_use]
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Children bottom to top: the content representation (if any) beneath
    /// the locator.
    #[must_use]
    pub fn children(&self) -> Vec<Child<'_>> {
        let mut children = Vec::with_capacity(2);
        if let Some(representation) = self.representation.as_deref() {
            children.push(Child::Representation(representation));
        }
        children.push(Child::Locator(&self.locator));
        children
    }

    // --- Visibility ---

    pub fn set_visible(&mut self, visible: bool) {
        if visible && !self.visible {
            self.request_layout();
        }
        self.visible = visible;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // --- Layout ---

    /// Ask for a layout pass on the next [`Minimap::layout_if_needed`].
    pub fn request_layout(&self) {
        self.layout_requested.set(true);
    }

    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.layout_requested.get()
    }

    /// Run the layout pass if anything requested one since the last pass.
    ///
    /// A hidden minimap skips the pass and keeps the request pending until it
    /// is shown again. Returns whether a pass ran.
    pub fn layout_if_needed(&mut self) -> bool {
        if !self.visible || !self.layout_requested.get() {
            return false;
        }
        self.layout();
        true
    }

    /// Recompute the scale factor, size the content representation and
    /// redraw the locator.
    #[allow(clippy::float_cmp)]
    pub fn layout(&mut self) {
        self.layout_requested.set(false);

        if let Some(scale_factor) = self.calculate_scale_factor() {
            self.links.scale_factor.set(scale_factor);
        }
        let scale_factor = self.links.scale_factor.get();
        let padding = self.links.padding;
        let ready = self.links.ready().is_some();

        if ready {
            if let Some(representation) = self.representation.as_mut() {
                representation.relocate(padding, padding);

                let width = self.width - padding * 2.0;
                let height = self.height - padding * 2.0;
                if width != representation.width()
                    || height != representation.height()
                    || scale_factor != representation.scale_factor()
                {
                    representation.set_scale_factor(scale_factor);
                    representation.resize(width, height);
                }
            }
        }

        let window = self.links.window.borrow().clone();
        let content = self.links.content.borrow().clone();
        let zoom_factor = self.links.zoom_factor();

        self.links.repositioning.set(true);
        self.locator.draw(window.as_deref(), content.as_deref(), scale_factor, zoom_factor);
        self.links.repositioning.set(false);

        tracing::trace!(scale_factor, zoom_factor, locator = ?self.locator.bounds(), "minimap laid out");
    }

    /// Ratio of the drawable size to the content size, the smaller of the
    /// two axes so that everything fits. `None` while it cannot be computed.
    fn calculate_scale_factor(&self) -> Option<f64> {
        let content = self.links.content.borrow();
        let content = content.as_ref()?;
        if !content.is_ready() {
            return None;
        }
        let drawable = Size::new(self.width - 2.0 * self.links.padding, self.height - 2.0 * self.links.padding);
        if !drawable.is_positive() {
            return None;
        }
        let scale_x = drawable.width / content.width().get();
        let scale_y = drawable.height / content.height().get();
        let scale = scale_x.min(scale_y);
        (scale.is_finite() && scale > 0.0).then_some(scale)
    }

    // --- Input ---

    /// The gesture currently driven by the minimap, if any.
    #[must_use]
    pub fn active_gesture(&self) -> Option<Gesture> {
        self.input.gesture()
    }

    /// Handle a press at `point` (minimap coordinates).
    ///
    /// A primary press pans the window so the locator is centred on the
    /// pointer, wherever the press lands, then keeps dragging from there.
    /// Nothing happens until window and content are ready.
    pub fn on_pointer_down(&mut self, point: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let Some((window, _content)) = self.links.ready() else {
            return Vec::new();
        };

        let half_width = self.locator.width() / 2.0;
        let half_height = self.locator.height() / 2.0;
        let padding = self.links.padding;
        let x = point.x - padding - half_width;
        let y = point.y - padding - half_height;

        let zoom_factor = self.links.zoom_factor();
        let scale_factor = self.links.scale_factor.get();
        let target = Point::new(x / scale_factor * zoom_factor, y / scale_factor * zoom_factor);

        tracing::debug!(x = target.x, y = target.y, "minimap click, panning window");
        window.pan_to(target.x, target.y);

        self.input = InputState::DraggingLocator { grab_offset: Point::new(half_width, half_height) };
        vec![Action::PanRequested { x: target.x, y: target.y }, Action::GestureChanged(self.input.gesture())]
    }

    /// Handle pointer motion. While dragging, the locator follows the pointer
    /// and its position listener pans the window.
    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        let InputState::DraggingLocator { grab_offset } = self.input else {
            return Vec::new();
        };
        self.links.last_pan.set(None);
        self.locator.relocate(point.x - grab_offset.x, point.y - grab_offset.y);
        self.links
            .last_pan
            .take()
            .map(|p| Action::PanRequested { x: p.x, y: p.y })
            .into_iter()
            .collect()
    }

    /// Handle a release, ending any drag started by the matching press.
    pub fn on_pointer_up(&mut self, _point: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.input == InputState::Idle {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::GestureChanged(None)]
    }
}

impl Drop for Minimap {
    fn drop(&mut self) {
        if let (Some(window), Some(subscriptions)) = (self.links.window.take(), self.window_subscriptions.take()) {
            subscriptions.detach(window.as_ref());
        }
        if let (Some(content), Some(subscriptions)) = (self.links.content.take(), self.content_subscriptions.take()) {
            subscriptions.detach(content.as_ref());
        }
    }
}
