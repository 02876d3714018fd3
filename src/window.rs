//! The panning window the minimap navigates.
//!
//! A panning window shows part of a larger content surface. Its pan offset
//! (`window_x`, `window_y`) is the position of the window's top-left corner
//! over the zoomed content, in screen pixels. The minimap never owns a window;
//! it holds an `Rc<dyn PanningWindow>` and watches its observables.

#[cfg(test)]
#[path = "window_test.rs"]
mod window_test;

use std::cell::Cell;

use crate::geometry::{Rect, Size};
use crate::observable::Observable;

/// Viewport collaborator consumed by the minimap.
pub trait PanningWindow {
    /// On-screen width of the window.
    fn width(&self) -> &Observable<f64>;
    /// On-screen height of the window.
    fn height(&self) -> &Observable<f64>;
    /// Horizontal pan offset.
    fn window_x(&self) -> &Observable<f64>;
    /// Vertical pan offset.
    fn window_y(&self) -> &Observable<f64>;
    /// Pan to an absolute offset.
    ///
    /// Must be idempotent: panning to the current offset changes nothing and
    /// notifies nobody.
    fn pan_to(&self, x: f64, y: f64);

    /// Whether the window has been laid out with a non-zero size.
    fn is_ready(&self) -> bool {
        self.width().get() > 0.0 && self.height().get() > 0.0
    }

    /// The visible region as a rectangle in screen pixels over the content.
    fn visible_rect(&self) -> Rect {
        Rect::new(self.window_x().get(), self.window_y().get(), self.width().get(), self.height().get())
    }
}

/// A plain panning window with optional clamping of the pan offset.
///
/// Without clamping any offset is accepted, including negative ones. With
/// clamping the offset is limited to `[0, content - window]` per axis, where
/// `content` is the zoomed content size given to [`Viewport::with_clamping`]
/// or [`Viewport::set_content_size`].
#[derive(Debug, Default)]
pub struct Viewport {
    width: Observable<f64>,
    height: Observable<f64>,
    window_x: Observable<f64>,
    window_y: Observable<f64>,
    clamp_to: Cell<Option<Size>>,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Observable::new(width),
            height: Observable::new(height),
            ..Self::default()
        }
    }

    /// Limit panning to the extent of zoomed content of `content` size.
    #[must_use]
    pub fn with_clamping(self, content: Size) -> Self {
        self.clamp_to.set(Some(content));
        self
    }

    /// Update the clamping extent, e.g. after the content was zoomed.
    pub fn set_content_size(&self, content: Size) {
        self.clamp_to.set(Some(content));
    }

    /// Resize the window.
    pub fn resize(&self, width: f64, height: f64) {
        self.width.set(width);
        self.height.set(height);
    }

    fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        let Some(content) = self.clamp_to.get() else {
            return (x, y);
        };
        let max_x = (content.width - self.width.get()).max(0.0);
        let max_y = (content.height - self.height.get()).max(0.0);
        (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
    }
}

impl PanningWindow for Viewport {
    fn width(&self) -> &Observable<f64> {
        &self.width
    }

    fn height(&self) -> &Observable<f64> {
        &self.height
    }

    fn window_x(&self) -> &Observable<f64> {
        &self.window_x
    }

    fn window_y(&self) -> &Observable<f64> {
        &self.window_y
    }

    fn pan_to(&self, x: f64, y: f64) {
        let (x, y) = self.clamp(x, y);
        let moved_x = self.window_x.set(x);
        let moved_y = self.window_y.set(y);
        if moved_x || moved_y {
            tracing::trace!(x, y, "viewport panned");
        }
    }
}
