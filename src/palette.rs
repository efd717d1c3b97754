//! Render Palette
//!
//! Fixed fill and stroke tables handed to the renderer. Colors are CSS-style
//! hex strings; fills are keyed by pitch class, strokes by edge direction.

use crate::lattice::EdgeKind;
use crate::note::NoteName;

/// Muted per-pitch-class fills for unselected nodes.
const NOTE_FILLS: [&str; 12] = [
    "#CC9999", // C
    "#D4AAAA", // C#
    "#99CCCC", // D
    "#AAD4D4", // D#
    "#99BBDD", // E
    "#AACCBB", // F
    "#BBDDBB", // F#
    "#DDCC99", // G
    "#DDCC99", // G#
    "#CCAACC", // A
    "#DDBBDD", // A#
    "#DDAABB", // B
];

/// Saturated fills for selected nodes.
const SELECTED_FILLS: [&str; 12] = [
    "#FF4444", // C
    "#FF6666", // C#
    "#00DDDD", // D
    "#44EEEE", // D#
    "#0099FF", // E
    "#00CC88", // F
    "#44DD88", // F#
    "#FFCC00", // G
    "#FFDD00", // G#
    "#CC66CC", // A
    "#DD88DD", // A#
    "#FF6699", // B
];

/// Fill color for a node, keyed by pitch class and selection state.
pub fn node_fill(note: NoteName, selected: bool) -> &'static str {
    let idx = note.semitone() as usize;
    if selected {
        SELECTED_FILLS[idx]
    } else {
        NOTE_FILLS[idx]
    }
}

/// Stroke style of a rendered lattice edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    /// CSS-style hex color.
    pub color: &'static str,
    /// Line width in surface units.
    pub width: f32,
}

/// Stroke style for an edge, keyed by direction kind.
pub const fn edge_stroke(kind: EdgeKind) -> StrokeStyle {
    match kind {
        EdgeKind::Right => StrokeStyle {
            color: "#88AA88",
            width: 2.0,
        },
        EdgeKind::TopRight => StrokeStyle {
            color: "#7799BB",
            width: 1.5,
        },
        EdgeKind::BottomRight => StrokeStyle {
            color: "#CC9977",
            width: 1.5,
        },
        EdgeKind::TopLeft => StrokeStyle {
            color: "#9977AA",
            width: 1.2,
        },
        EdgeKind::BottomLeft => StrokeStyle {
            color: "#BB7799",
            width: 1.2,
        },
    }
}
