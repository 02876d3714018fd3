//! Content representation: the scaled-down copy of the editor content drawn
//! underneath the locator.
//!
//! The minimap only ever pushes a scale factor into the representation,
//! resizes and relocates it, and clears it when the content goes away. What
//! the representation draws is up to the implementation. [`NodeGroup`] is the
//! graph flavour: node rectangles plus straight connections between them.

#[cfg(test)]
#[path = "representation_test.rs"]
mod representation_test;

use crate::consts::DEFAULT_SCALE_FACTOR;
use crate::geometry::{Point, Rect, Size};
use crate::render::{Primitive, Role};

/// Content-representation collaborator owned by the minimap.
pub trait ContentRepresentation {
    /// Store the factor applied to children on the next resize.
    fn set_scale_factor(&mut self, factor: f64);
    fn scale_factor(&self) -> f64;
    /// Set the drawable extent and rescale every child.
    fn resize(&mut self, width: f64, height: f64);
    /// Move the representation inside the minimap.
    fn relocate(&mut self, x: f64, y: f64);
    fn position(&self) -> Point;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear_children(&mut self);
    fn child_count(&self) -> usize;
    /// Append paint instructions in the representation's own coordinates.
    fn paint(&self, out: &mut Vec<Primitive>);
}

/// One node of the graph, in content space and as drawn in the minimap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapNode {
    /// Bounds in content space.
    pub source: Rect,
    /// Bounds after scaling, relative to the representation's origin.
    pub bounds: Rect,
}

/// A connection between two nodes, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub source: usize,
    pub target: usize,
}

/// Graph representation: nodes and the connections between them.
#[derive(Debug, Clone)]
pub struct NodeGroup {
    nodes: Vec<MinimapNode>,
    connections: Vec<Connection>,
    scale_factor: f64,
    position: Point,
    size: Size,
}

impl Default for NodeGroup {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
            scale_factor: DEFAULT_SCALE_FACTOR,
            position: Point::default(),
            size: Size::default(),
        }
    }
}

impl NodeGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node given its content-space bounds. Returns its index.
    pub fn add_node(&mut self, source: Rect) -> usize {
        self.nodes.push(MinimapNode { source, bounds: source.scaled(self.scale_factor) });
        self.nodes.len() - 1
    }

    /// Connect two existing nodes. Returns `false` if either index is unknown.
    pub fn connect(&mut self, source: usize, target: usize) -> bool {
        if source >= self.nodes.len() || target >= self.nodes.len() {
            return false;
        }
        self.connections.push(Connection { source, target });
        true
    }

    /// Replace every child with the given nodes and connections.
    ///
    /// Connections referring to missing nodes are dropped.
    pub fn sync_from(&mut self, nodes: &[Rect], connections: &[(usize, usize)]) {
        self.clear_children();
        for node in nodes {
            self.add_node(*node);
        }
        for &(source, target) in connections {
            if !self.connect(source, target) {
                tracing::debug!(source, target, "dropping connection to unknown node");
            }
        }
    }

    #[must_use]
    pub fn nodes(&self) -> &[MinimapNode] {
        &self.nodes
    }

    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    fn rescale_children(&mut self) {
        let factor = self.scale_factor;
        for node in &mut self.nodes {
            node.bounds = node.source.scaled(factor);
        }
    }
}

impl ContentRepresentation for NodeGroup {
    fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
        self.rescale_children();
    }

    fn relocate(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    fn position(&self) -> Point {
        self.position
    }

    fn width(&self) -> f64 {
        self.size.width
    }

    fn height(&self) -> f64 {
        self.size.height
    }

    fn clear_children(&mut self) {
        self.nodes.clear();
        self.connections.clear();
    }

    fn child_count(&self) -> usize {
        self.nodes.len() + self.connections.len()
    }

    fn paint(&self, out: &mut Vec<Primitive>) {
        for connection in &self.connections {
            let from = self.nodes[connection.source].bounds.center();
            let to = self.nodes[connection.target].bounds.center();
            out.push(Primitive::Line { from, to, role: Role::Connection });
        }
        for node in &self.nodes {
            out.push(Primitive::Rect { bounds: node.bounds, role: Role::Node });
        }
    }
}
