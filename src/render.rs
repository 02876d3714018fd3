//! Rendering: a toolkit-neutral paint list for the minimap.
//!
//! Nothing in this crate touches pixels. [`scene`] walks the minimap's
//! children bottom to top and produces [`Primitive`]s in minimap coordinates;
//! the host maps each [`Role`] to its own styling and draws them in order.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::minimap::{Child, Minimap};

/// What a primitive depicts, for the host to style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The minimap panel itself.
    Background,
    /// A content node in the representation.
    Node,
    /// A connection between two content nodes.
    Connection,
    /// The viewport locator.
    Locator,
}

/// A single paint instruction in minimap coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Primitive {
    Rect { bounds: Rect, role: Role },
    Line { from: Point, to: Point, role: Role },
}

impl Primitive {
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Rect { role, .. } | Self::Line { role, .. } => *role,
        }
    }

    /// Shift the primitive by `(dx, dy)`.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        match self {
            Self::Rect { bounds, role } => Self::Rect { bounds: bounds.translated(dx, dy), role },
            Self::Line { from, to, role } => Self::Line { from: from.offset(dx, dy), to: to.offset(dx, dy), role },
        }
    }
}

/// Build the paint list for the minimap: background, content representation,
/// then the locator on top.
#[must_use]
pub fn scene(minimap: &Minimap) -> Vec<Primitive> {
    let mut out = vec![Primitive::Rect {
        bounds: Rect::new(0.0, 0.0, minimap.width(), minimap.height()),
        role: Role::Background,
    }];

    for child in minimap.children() {
        match child {
            Child::Representation(representation) => {
                let origin = representation.position();
                let mut local = Vec::new();
                representation.paint(&mut local);
                out.extend(local.into_iter().map(|p| p.translated(origin.x, origin.y)));
            }
            Child::Locator(locator) => {
                out.push(Primitive::Rect { bounds: locator.bounds(), role: Role::Locator });
            }
        }
    }
    out
}
