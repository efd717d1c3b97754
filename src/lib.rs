//! # tonnetz_explorer
//!
//! An interactive Tonnetz: deterministic triangular pitch lattices, exact
//! chord recognition over selected notes, and hover/selection tracking that
//! renders to a plain scene description for any 2D drawing surface.
//!
//! ## Example
//! ```rust
//! use tonnetz_explorer::{InteractionController, Lattice};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Build the lattice around the surface center
//!     let lattice = Lattice::builder()
//!         .rows(14)
//!         .cols(25)
//!         .spacing(80.0)
//!         .origin(600.0, 400.0)
//!         .build()?;
//!
//!     // 2) Wire up interaction state
//!     let mut controller = InteractionController::new(lattice);
//!
//!     // 3) In your event loop:
//!     if controller.pointer_moved(600.0, 400.0) {
//!         // hover changed, redraw
//!     }
//!     let _ = controller.pointer_clicked(600.0, 400.0);
//!     let scene = controller.scene();
//!     for tooltip in &scene.tooltips {
//!         println!("{}", tooltip.text);
//!     }
//!     Ok(())
//! }
//! # run().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Chord recognition API.
pub use chord::{Chord, ChordKind, ChordRecognizer};

/// Hover/selection state and scene derivation.
pub use interaction::{
    BorderState, InteractionController, Scene, SceneEdge, SceneNode, Tooltip, NO_CHORD_FOUND,
};

/// Lattice construction and queries.
pub use lattice::{
    EdgeKind, Lattice, LatticeBuilder, LatticeEdge, LatticeError, LatticeNode, NodeId,
};

/// Pitch classes.
pub use note::{NoteError, NoteName};

/// Renderer-facing color tables.
pub use palette::{edge_stroke, node_fill, StrokeStyle};

/// Chord recognition module.
pub mod chord;

/// Interaction controller module.
pub mod interaction;

/// Lattice generation module.
pub mod lattice;

/// Pitch-class module.
pub mod note;

/// Render palette module.
pub mod palette;
