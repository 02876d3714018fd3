//! Minimap overlay for a pannable graph-editing canvas.
//!
//! The minimap draws a scaled-down copy of the editor content together with a
//! locator rectangle marking the part of the content currently visible in the
//! editor's panning window. Clicking or dragging inside the minimap pans that
//! window. Nothing here depends on a particular GUI toolkit: the window and
//! the content are reached through small traits whose properties are
//! [`observable::Observable`] values, and the host rasterizes the
//! [`render::scene`] paint list however it likes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`minimap`] | The panel: scale factor, layout pass, click/drag to pan |
//! | [`locator`] | Viewport rectangle drawn inside the minimap |
//! | [`representation`] | Scaled proxy of the editor content |
//! | [`window`] | Panning-window collaborator trait and a reference viewport |
//! | [`content`] | Content-surface collaborator trait and a reference region |
//! | [`observable`] | Observable values with explicit subscriptions |
//! | [`geometry`] | Points, sizes, rectangles and affine transforms |
//! | [`input`] | Pointer buttons, gestures and the drag state machine |
//! | [`render`] | Toolkit-neutral paint list |
//! | [`config`] | Minimap configuration |
//! | [`error`] | Error type for the configuration boundary |
//! | [`consts`] | Shared numeric constants |
//!
//! ## Threading
//!
//! Everything is single-threaded and event driven. Collaborators notify
//! synchronously; listeners only record that a layout pass is due, and the
//! host runs [`minimap::Minimap::layout_if_needed`] once per frame.

pub mod config;
pub mod consts;
pub mod content;
pub mod error;
pub mod geometry;
pub mod input;
pub mod locator;
pub mod minimap;
pub mod observable;
pub mod render;
pub mod representation;
pub mod window;

pub use config::MinimapConfig;
pub use content::{ContentRegion, ContentSurface};
pub use error::MinimapError;
pub use geometry::{Point, Rect, Size, Transform};
pub use locator::Locator;
pub use minimap::Minimap;
pub use representation::{ContentRepresentation, NodeGroup};
pub use window::{PanningWindow, Viewport};
