//! The locator: the rectangle inside the minimap that marks the part of the
//! content currently visible in the panning window.
//!
//! Its size is always an output of [`Locator::draw`]. Its position is an
//! output of `draw` too, except while the user drags it; that is why the
//! position is observable and the size is not. The minimap listens to the
//! position and turns user moves into pan commands.

#[cfg(test)]
#[path = "locator_test.rs"]
mod locator_test;

use crate::content::ContentSurface;
use crate::geometry::{Point, Rect, Size};
use crate::observable::Observable;
use crate::window::PanningWindow;

#[derive(Debug)]
pub struct Locator {
    padding: f64,
    x: Observable<f64>,
    y: Observable<f64>,
    width: f64,
    height: f64,
}

impl Locator {
    /// A zero-size locator parked at the padded origin.
    #[must_use]
    pub fn new(padding: f64) -> Self {
        Self { padding, x: Observable::new(padding), y: Observable::new(padding), width: 0.0, height: 0.0 }
    }

    /// Observable X position in minimap coordinates.
    #[must_use]
    pub fn x(&self) -> &Observable<f64> {
        &self.x
    }

    /// Observable Y position in minimap coordinates.
    #[must_use]
    pub fn y(&self) -> &Observable<f64> {
        &self.y
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
    pub fn position(&self) -> Point {
        Point::new(self.x.get(), self.y.get())
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.size())
    }

    /// Whether `p` (minimap coordinates) falls on the locator.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.bounds().contains(p)
    }

    /// Move the locator. X is written before Y, so position listeners see
    /// the horizontal move first.
    pub fn relocate(&self, x: f64, y: f64) {
        self.x.set(x);
        self.y.set(y);
    }

    /// Position and size the locator so that it shows the window's visible
    /// region over the content.
    ///
    /// With `effective = scale_factor / zoom_factor` the locator sits at
    /// `padding + window offset * effective` and measures
    /// `window size * effective`. The result is clamped into the scaled
    /// content extent. Without a ready window and content the locator
    /// collapses to a zero-size rectangle at the padded origin.
    pub fn draw(
        &mut self,
        window: Option<&dyn PanningWindow>,
        content: Option<&dyn ContentSurface>,
        scale_factor: f64,
        zoom_factor: f64,
    ) {
        let (Some(window), Some(content)) = (window, content) else {
            self.collapse();
            return;
        };
        if !window.is_ready() || !content.is_ready() {
            self.collapse();
            return;
        }

        let effective = scale_factor / zoom_factor;
        let extent = content.size().scaled(scale_factor);
        let visible = window.visible_rect();

        self.width = (visible.width * effective).min(extent.width);
        self.height = (visible.height * effective).min(extent.height);

        // Slack is floored at zero: when the locator fills the extent,
        // `(padding + extent) - extent` can round to just below `padding`.
        let max_x = self.padding + (extent.width - self.width).max(0.0);
        let max_y = self.padding + (extent.height - self.height).max(0.0);
        let x = (self.padding + visible.x * effective).min(max_x).max(self.padding);
        let y = (self.padding + visible.y * effective).min(max_y).max(self.padding);
        self.relocate(x, y);
    }

    fn collapse(&mut self) {
        self.width = 0.0;
        self.height = 0.0;
        self.relocate(self.padding, self.padding);
    }
}
