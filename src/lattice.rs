//! Tonnetz Lattice
//!
//! Deterministic generation of the triangular pitch lattice: node pitch
//! classes follow the periodic `(7*col + 3*row) mod 12` rule, so stepping a
//! column is a perfect fifth and stepping a row is a minor third. Edge
//! creation in the three forward directions is gated on the defining
//! intervals; the two backward directions are unconditional back-pointers
//! kept for connectivity.

use std::collections::{HashMap, HashSet};
use std::f32::consts::PI;

use log::debug;
use thiserror::Error;

use crate::note::NoteName;

/// Errors when building a lattice.
#[derive(Debug, Error)]
pub enum LatticeError {
    /// An error occurred during the configuration of the lattice.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Grid identity of a lattice node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    /// Grid row.
    pub row: u32,
    /// Grid column.
    pub col: u32,
}

/// A node of the built lattice. Immutable once built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatticeNode {
    /// Grid identity.
    pub id: NodeId,
    /// Center x in surface coordinates.
    pub x: f32,
    /// Center y in surface coordinates.
    pub y: f32,
    /// Pitch class in `0..12`, `(7*col + 3*row) mod 12`.
    pub semitone: u8,
    /// Note name for `semitone`.
    pub note: NoteName,
}

/// Direction of an edge relative to its `from` node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Toward `(row, col + 1)`; requires a perfect-fifth interval.
    Right,
    /// Toward `(row - 1, col + 1)`; requires a minor-third interval.
    TopRight,
    /// Toward `(row + 1, col)`; requires a major-third interval.
    BottomRight,
    /// Toward `(row - 1, col)`; unconditional back-pointer.
    TopLeft,
    /// Toward `(row + 1, col - 1)`; unconditional back-pointer.
    BottomLeft,
}

impl EdgeKind {
    /// Interval gate for edge creation; `None` for the unconditional
    /// back-pointer kinds.
    pub const fn required_interval(self) -> Option<u8> {
        match self {
            EdgeKind::Right => Some(7),
            EdgeKind::TopRight => Some(3),
            EdgeKind::BottomRight => Some(4),
            EdgeKind::TopLeft | EdgeKind::BottomLeft => None,
        }
    }

    /// Grid offset `(row, col)` of the target node.
    const fn offset(self) -> (i32, i32) {
        match self {
            EdgeKind::Right => (0, 1),
            EdgeKind::TopRight => (-1, 1),
            EdgeKind::BottomRight => (1, 0),
            EdgeKind::TopLeft => (-1, 0),
            EdgeKind::BottomLeft => (1, -1),
        }
    }
}

/// Enumeration order of neighbor directions, shared by edge generation and
/// the per-node neighbor query.
const EDGE_KINDS: [EdgeKind; 5] = [
    EdgeKind::Right,
    EdgeKind::TopRight,
    EdgeKind::BottomRight,
    EdgeKind::TopLeft,
    EdgeKind::BottomLeft,
];

/// Directed relation between two existing nodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LatticeEdge {
    /// Origin node.
    pub from: NodeId,
    /// Target node.
    pub to: NodeId,
    /// Direction kind.
    pub kind: EdgeKind,
    /// Pitch-class difference `to - from`, mod 12.
    pub interval: u8,
}

/// Builder for a [`Lattice`] to customize grid size and geometry.
pub struct LatticeBuilder {
    rows: u32,
    cols: u32,
    spacing: f32,
    node_radius: f32,
    origin: (f32, f32),
}

impl LatticeBuilder {
    /// Start with default parameters:
    /// rows = 14, cols = 25, spacing = 80.0,
    /// node_radius = 25.0, origin = (0.0, 0.0).
    pub fn new() -> Self {
        LatticeBuilder {
            rows: 14,
            cols: 25,
            spacing: 80.0,
            node_radius: 25.0,
            origin: (0.0, 0.0),
        }
    }

    /// Set the number of grid rows.
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of grid columns in row 0. Rows shrink by
    /// `row / 2` columns as they ascend.
    pub fn cols(mut self, cols: u32) -> Self {
        self.cols = cols;
        self
    }

    /// Set the distance between horizontally adjacent node centers.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the hit-test radius of a node.
    pub fn node_radius(mut self, radius: f32) -> Self {
        self.node_radius = radius;
        self
    }

    /// Set the center of the drawing surface the grid is laid out around.
    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.origin = (x, y);
        self
    }

    /// Finalize and build the lattice.
    pub fn build(self) -> Result<Lattice, LatticeError> {
        if self.rows == 0 {
            return Err(LatticeError::Configuration("rows cannot be zero".into()));
        }
        if self.cols == 0 {
            return Err(LatticeError::Configuration("cols cannot be zero".into()));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(LatticeError::Configuration(
                "spacing must be a positive finite number".into(),
            ));
        }
        if !self.node_radius.is_finite() || self.node_radius <= 0.0 {
            return Err(LatticeError::Configuration(
                "node_radius must be a positive finite number".into(),
            ));
        }

        let row_height = (PI / 3.0).sin();
        let (origin_x, origin_y) = self.origin;

        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        for row in 0..self.rows {
            // Rows narrower than their shrink are simply empty.
            for col in 0..self.cols.saturating_sub(row / 2) {
                let x = origin_x - self.cols as f32 * self.spacing / 2.0
                    + col as f32 * self.spacing
                    + row as f32 * self.spacing / 2.0;
                let y = origin_y + self.rows as f32 * self.spacing / 2.0
                    - row as f32 * self.spacing * row_height;
                let semitone = ((7 * col + 3 * row) % 12) as u8;
                let id = NodeId { row, col };
                index.insert(id, nodes.len());
                nodes.push(LatticeNode {
                    id,
                    x,
                    y,
                    semitone,
                    note: NoteName::from_semitone(semitone as i32),
                });
            }
        }

        let mut lattice = Lattice {
            nodes,
            index,
            edges: Vec::new(),
            node_radius: self.node_radius,
        };
        let mut edges = Vec::new();
        for node in &lattice.nodes {
            edges.extend(lattice.neighbors_of(node.id));
        }
        lattice.edges = edges;

        debug!(
            "built lattice: {} nodes, {} edges",
            lattice.nodes.len(),
            lattice.edges.len()
        );
        Ok(lattice)
    }
}

impl Default for LatticeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The built triangular pitch lattice. Shared-immutable after `build`.
#[derive(Debug, Clone)]
pub struct Lattice {
    nodes: Vec<LatticeNode>,
    index: HashMap<NodeId, usize>,
    edges: Vec<LatticeEdge>,
    node_radius: f32,
}

impl Lattice {
    /// Return a builder to customize grid size and geometry.
    pub fn builder() -> LatticeBuilder {
        LatticeBuilder::new()
    }

    /// All nodes, in build (row-major) order.
    pub fn nodes(&self) -> &[LatticeNode] {
        &self.nodes
    }

    /// All edges, in build order.
    pub fn edges(&self) -> &[LatticeEdge] {
        &self.edges
    }

    /// Hit-test radius the lattice was built with.
    pub fn node_radius(&self) -> f32 {
        self.node_radius
    }

    /// Look up a node by identity.
    pub fn node(&self, id: NodeId) -> Option<&LatticeNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    /// Edges leaving `id`, in the fixed direction order right, top-right,
    /// bottom-right, top-left, bottom-left.
    ///
    /// The three forward kinds are emitted only when the pitch-class
    /// difference matches their required interval; missing neighbors at grid
    /// seams just shorten the list.
    pub fn neighbors_of(&self, id: NodeId) -> Vec<LatticeEdge> {
        let Some(node) = self.node(id) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(EDGE_KINDS.len());
        for kind in EDGE_KINDS {
            let (row_off, col_off) = kind.offset();
            let Some(row) = node.id.row.checked_add_signed(row_off) else {
                continue;
            };
            let Some(col) = node.id.col.checked_add_signed(col_off) else {
                continue;
            };
            let Some(neighbor) = self.node(NodeId { row, col }) else {
                continue;
            };
            let interval = (neighbor.semitone + 12 - node.semitone) % 12;
            if let Some(required) = kind.required_interval() {
                if interval != required {
                    continue;
                }
            }
            out.push(LatticeEdge {
                from: id,
                to: neighbor.id,
                kind,
                interval,
            });
        }
        out
    }

    /// The node whose center is within `node_radius` of `(x, y)`.
    ///
    /// When hit circles overlap, the nearest center wins; exact distance
    /// ties resolve to the earliest node in build order.
    pub fn node_at(&self, x: f32, y: f32) -> Option<NodeId> {
        let radius_sq = self.node_radius * self.node_radius;
        let mut best: Option<(NodeId, f32)> = None;
        for node in &self.nodes {
            let dx = x - node.x;
            let dy = y - node.y;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq <= radius_sq {
                let nearer = match best {
                    Some((_, best_sq)) => dist_sq < best_sq,
                    None => true,
                };
                if nearer {
                    best = Some((node.id, dist_sq));
                }
            }
        }
        best.map(|(id, _)| id)
    }

    /// Maximal groups of `selection` nodes mutually reachable through edges
    /// whose both endpoints are selected. An edge connects regardless of
    /// which endpoint it was generated from.
    ///
    /// Group order follows the first-seen order of `selection`; members
    /// follow depth-first pop order.
    pub fn connected_components(&self, selection: &[NodeId]) -> Vec<Vec<NodeId>> {
        let selected: HashSet<NodeId> = selection.iter().copied().collect();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut groups = Vec::new();

        for &start in selection {
            if visited.contains(&start) {
                continue;
            }
            let mut group = Vec::new();
            let mut stack = vec![start];
            while let Some(current) = stack.pop() {
                if !visited.insert(current) {
                    continue;
                }
                group.push(current);
                for edge in &self.edges {
                    if edge.from == current
                        && selected.contains(&edge.to)
                        && !visited.contains(&edge.to)
                    {
                        stack.push(edge.to);
                    }
                    if edge.to == current
                        && selected.contains(&edge.from)
                        && !visited.contains(&edge.from)
                    {
                        stack.push(edge.from);
                    }
                }
            }
            groups.push(group);
        }
        groups
    }
}
