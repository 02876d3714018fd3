//! The content surface the minimap represents.
//!
//! For sensible behaviour this is the same content that is shown inside the
//! [`crate::PanningWindow`]. Its width and height are the content's natural
//! (unzoomed) size; `local_to_screen` carries the zoom the editor applies.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::consts::UNZOOMED;
use crate::geometry::{Size, Transform};
use crate::observable::Observable;

/// Content collaborator consumed by the minimap.
pub trait ContentSurface {
    fn width(&self) -> &Observable<f64>;
    fn height(&self) -> &Observable<f64>;
    fn layout_x(&self) -> &Observable<f64>;
    fn layout_y(&self) -> &Observable<f64>;
    /// Content-to-screen transform.
    fn local_to_screen(&self) -> &Observable<Transform>;

    /// Whether the content has been laid out with a non-zero size.
    fn is_ready(&self) -> bool {
        self.width().get() > 0.0 && self.height().get() > 0.0
    }

    #[must_use]
    fn size(&self) -> Size {
        Size::new(self.width().get(), self.height().get())
    }

    /// Zoom level of the content, always strictly positive.
    ///
    /// Read from the transform's X-axis scale (see
    /// [`Transform::uniform_scale`]); a degenerate scale reads as unzoomed.
    fn zoom(&self) -> f64 {
        let zoom = self.local_to_screen().get().uniform_scale();
        if zoom.is_finite() && zoom > 0.0 { zoom } else { UNZOOMED }
    }
}

/// A plain content region with observable geometry.
#[derive(Debug, Default)]
pub struct ContentRegion {
    width: Observable<f64>,
    height: Observable<f64>,
    layout_x: Observable<f64>,
    layout_y: Observable<f64>,
    local_to_screen: Observable<Transform>,
}

impl ContentRegion {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: Observable::new(width), height: Observable::new(height), ..Self::default() }
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.width.set(width);
        self.height.set(height);
    }

    pub fn relocate(&self, x: f64, y: f64) {
        self.layout_x.set(x);
        self.layout_y.set(y);
    }

    /// Apply a uniform zoom, keeping the current translation.
    pub fn set_zoom(&self, zoom: f64) {
        let current = self.local_to_screen.get();
        self.local_to_screen.set(Transform::scale_translate(zoom, current.tx, current.ty));
    }

    pub fn set_transform(&self, transform: Transform) {
        self.local_to_screen.set(transform);
    }
}

impl ContentSurface for ContentRegion {
    fn width(&self) -> &Observable<f64> {
        &self.width
    }

    fn height(&self) -> &Observable<f64> {
        &self.height
    }

    fn layout_x(&self) -> &Observable<f64> {
        &self.layout_x
    }

    fn layout_y(&self) -> &Observable<f64> {
        &self.layout_y
    }

    fn local_to_screen(&self) -> &Observable<Transform> {
        &self.local_to_screen
    }
}
