//! Interaction Controller
//!
//! Owns hover and selection state over a built lattice and derives the
//! per-frame render description. Driven by a caller-owned event loop; every
//! method is a plain synchronous command or query, and connected groups and
//! chord labels are recomputed on demand rather than stored.

use log::debug;

use crate::chord::ChordRecognizer;
use crate::lattice::{EdgeKind, Lattice, LatticeNode, NodeId};
use crate::note::NoteName;
use crate::palette::{edge_stroke, node_fill, StrokeStyle};

/// Label used in tooltip text when a group's notes match no dictionary
/// entry.
pub const NO_CHORD_FOUND: &str = "No Chord Found";

/// Tooltip offset from its anchor node's hit circle, in surface units.
const TOOLTIP_MARGIN: f32 = 5.0;

/// Border emphasis of a rendered node; selection outranks hover.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BorderState {
    /// Neither hovered nor selected.
    Normal,
    /// The pointer is within the node's hit circle.
    Hovered,
    /// The node is in the selection set.
    Selected,
}

/// A node ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Lattice identity.
    pub id: NodeId,
    /// Center x in surface coordinates.
    pub x: f32,
    /// Center y in surface coordinates.
    pub y: f32,
    /// Note label drawn on the node.
    pub note: NoteName,
    /// Pitch class, drawn as an annotation while hovered.
    pub semitone: u8,
    /// Fill color for the current selection state.
    pub fill: &'static str,
    /// Border emphasis.
    pub border: BorderState,
}

/// An edge ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneEdge {
    /// Origin endpoint position.
    pub from: (f32, f32),
    /// Target endpoint position.
    pub to: (f32, f32),
    /// Direction kind of the underlying lattice edge.
    pub kind: EdgeKind,
    /// Stroke style for `kind`.
    pub stroke: StrokeStyle,
}

/// A tooltip for one connected group of selected nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Anchor x, offset outward from the group's anchor node.
    pub x: f32,
    /// Anchor y, offset outward from the group's anchor node.
    pub y: f32,
    /// Sorted, comma-joined note names followed by the chord label.
    pub text: String,
}

/// Everything the renderer needs for one frame, in draw order: edges
/// underneath, then nodes, then tooltips.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Styled nodes.
    pub nodes: Vec<SceneNode>,
    /// Styled edges.
    pub edges: Vec<SceneEdge>,
    /// One tooltip per connected group of two or more selected nodes.
    pub tooltips: Vec<Tooltip>,
}

/// Tracks hover and selection over a lattice and derives scenes from them.
#[derive(Debug)]
pub struct InteractionController {
    lattice: Lattice,
    recognizer: ChordRecognizer,
    hovered: Option<NodeId>,
    // Insertion order; keeps component enumeration deterministic.
    selection: Vec<NodeId>,
}

impl InteractionController {
    /// Create a controller over a built lattice with empty hover and
    /// selection state.
    pub fn new(lattice: Lattice) -> Self {
        InteractionController {
            lattice,
            recognizer: ChordRecognizer::new(),
            hovered: None,
            selection: Vec::new(),
        }
    }

    /// The lattice this controller drives.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The node currently under the pointer, if any.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Selected node identities, in insertion order.
    pub fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    /// Track the pointer. Returns `true` when the hover target changed and
    /// the caller should redraw.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        let hit = self.lattice.node_at(x, y);
        if hit != self.hovered {
            self.hovered = hit;
            true
        } else {
            false
        }
    }

    /// Toggle the node under `(x, y)`, if any, and return its identity.
    pub fn pointer_clicked(&mut self, x: f32, y: f32) -> Option<NodeId> {
        let id = self.lattice.node_at(x, y)?;
        self.toggle_selection(id);
        Some(id)
    }

    /// Toggle `id`'s membership in the selection set and return the new
    /// membership. Identities naming no lattice node are ignored, keeping
    /// the selection a subset of existing nodes.
    pub fn toggle_selection(&mut self, id: NodeId) -> bool {
        let Some(node) = self.lattice.node(id) else {
            return false;
        };
        if let Some(position) = self.selection.iter().position(|&s| s == id) {
            self.selection.remove(position);
            debug!("deselected {} ({} semitones)", node.note, node.semitone);
            false
        } else {
            self.selection.push(id);
            debug!("selected {} ({} semitones)", node.note, node.semitone);
            true
        }
    }

    /// Connected groups of the current selection, recomputed on every call.
    pub fn connected_groups(&self) -> Vec<Vec<NodeId>> {
        self.lattice.connected_components(&self.selection)
    }

    /// Chord label for an arbitrary group of lattice nodes: the matched
    /// chord's display form, or [`NO_CHORD_FOUND`].
    pub fn chord_label(&self, group: &[NodeId]) -> String {
        let notes: Vec<NoteName> = group
            .iter()
            .filter_map(|&id| self.lattice.node(id))
            .map(|node| node.note)
            .collect();
        match self.recognizer.recognize(&notes) {
            Some(chord) => chord.to_string(),
            None => NO_CHORD_FOUND.to_string(),
        }
    }

    /// Derive the complete render description for the current state.
    pub fn scene(&self) -> Scene {
        let nodes = self
            .lattice
            .nodes()
            .iter()
            .map(|node| {
                let selected = self.selection.contains(&node.id);
                let border = if selected {
                    BorderState::Selected
                } else if self.hovered == Some(node.id) {
                    BorderState::Hovered
                } else {
                    BorderState::Normal
                };
                SceneNode {
                    id: node.id,
                    x: node.x,
                    y: node.y,
                    note: node.note,
                    semitone: node.semitone,
                    fill: node_fill(node.note, selected),
                    border,
                }
            })
            .collect();

        let edges = self
            .lattice
            .edges()
            .iter()
            .filter_map(|edge| {
                let from = self.lattice.node(edge.from)?;
                let to = self.lattice.node(edge.to)?;
                Some(SceneEdge {
                    from: (from.x, from.y),
                    to: (to.x, to.y),
                    kind: edge.kind,
                    stroke: edge_stroke(edge.kind),
                })
            })
            .collect();

        let tooltips = self
            .connected_groups()
            .iter()
            .filter(|group| group.len() > 1)
            .filter_map(|group| self.tooltip_for(group))
            .collect();

        Scene {
            nodes,
            edges,
            tooltips,
        }
    }

    /// Tooltip anchor: the group member with the greatest x, ties broken by
    /// the smallest y.
    fn anchor_node(&self, group: &[NodeId]) -> Option<&LatticeNode> {
        let mut best: Option<&LatticeNode> = None;
        for node in group.iter().filter_map(|&id| self.lattice.node(id)) {
            let better = match best {
                None => true,
                Some(current) => {
                    node.x > current.x || (node.x == current.x && node.y < current.y)
                }
            };
            if better {
                best = Some(node);
            }
        }
        best
    }

    fn tooltip_for(&self, group: &[NodeId]) -> Option<Tooltip> {
        let anchor = self.anchor_node(group)?;
        let mut names: Vec<&'static str> = group
            .iter()
            .filter_map(|&id| self.lattice.node(id))
            .map(|node| node.note.as_str())
            .collect();
        names.sort_unstable();
        let radius = self.lattice.node_radius();
        Some(Tooltip {
            x: anchor.x + radius + TOOLTIP_MARGIN,
            y: anchor.y - radius - TOOLTIP_MARGIN,
            text: format!("{} - {}", names.join(", "), self.chord_label(group)),
        })
    }
}
