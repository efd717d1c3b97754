//! Integration tests for lattice generation, edge invariants and
//! connectivity queries.

use std::collections::HashSet;

use lazy_static::lazy_static;
use tonnetz_explorer::{EdgeKind, Lattice, LatticeError, NodeId};

lazy_static! {
    static ref LATTICE: Lattice = Lattice::builder().build().expect("default lattice");
}

fn id(row: u32, col: u32) -> NodeId {
    NodeId { row, col }
}

#[test]
fn default_grid_has_expected_node_count() {
    // rows 0..14, row r holds 25 - r/2 columns
    let expected: u32 = (0..14u32).map(|r| 25 - r / 2).sum();
    assert_eq!(expected, 308);
    assert_eq!(LATTICE.nodes().len(), 308);
}

#[test]
fn build_is_deterministic() {
    let a = Lattice::builder().build().unwrap();
    let b = Lattice::builder().build().unwrap();
    assert_eq!(a.nodes(), b.nodes());
    assert_eq!(a.edges(), b.edges());
}

#[test]
fn pitch_rule_spot_checks() {
    // semitone = (7*col + 3*row) mod 12
    assert_eq!(LATTICE.node(id(0, 0)).unwrap().semitone, 0); // C
    assert_eq!(LATTICE.node(id(0, 1)).unwrap().semitone, 7); // G
    assert_eq!(LATTICE.node(id(1, 0)).unwrap().semitone, 3); // D#
    assert_eq!(LATTICE.node(id(2, 9)).unwrap().semitone, 9); // A
}

#[test]
fn forward_edges_honor_interval_gates() {
    let mut right_edges = 0usize;
    for edge in LATTICE.edges() {
        let from = LATTICE.node(edge.from).unwrap();
        let to = LATTICE.node(edge.to).unwrap();
        let interval = (to.semitone + 12 - from.semitone) % 12;
        assert_eq!(edge.interval, interval);
        match edge.kind {
            EdgeKind::Right => {
                assert_eq!(interval, 7);
                right_edges += 1;
            }
            EdgeKind::TopRight => assert_eq!(interval, 3),
            EdgeKind::BottomRight => assert_eq!(interval, 4),
            EdgeKind::TopLeft | EdgeKind::BottomLeft => {}
        }
    }
    assert!(right_edges > 0, "fifth edges must exist");
}

#[test]
fn corner_node_has_single_neighbor() {
    // (0,0) only reaches (0,1); every other offset leaves the grid or
    // fails its interval gate.
    let edges = LATTICE.neighbors_of(id(0, 0));
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].kind, EdgeKind::Right);
    assert_eq!(edges[0].to, id(0, 1));
    assert_eq!(edges[0].interval, 7);
}

#[test]
fn interior_node_neighbor_kinds() {
    let kinds: Vec<EdgeKind> = LATTICE
        .neighbors_of(id(5, 10))
        .iter()
        .map(|e| e.kind)
        .collect();
    // The diagonal gates (3 up-right, 4 down-right) never coincide with the
    // periodic rule's actual offsets, so an interior node keeps its fifth
    // edge plus the two unconditional back-pointers.
    assert_eq!(
        kinds,
        vec![EdgeKind::Right, EdgeKind::TopLeft, EdgeKind::BottomLeft]
    );
}

#[test]
fn neighbors_of_unknown_id_is_empty() {
    assert!(LATTICE.neighbors_of(id(99, 99)).is_empty());
}

#[test]
fn node_at_hits_center_and_misses_gaps() {
    let node = LATTICE.node(id(3, 4)).unwrap();
    assert_eq!(LATTICE.node_at(node.x, node.y), Some(node.id));
    assert_eq!(LATTICE.node_at(node.x + 24.0, node.y), Some(node.id));
    // just outside the hit circle, in the gap toward the next column
    assert_eq!(LATTICE.node_at(node.x + 26.0, node.y), None);
    assert_eq!(LATTICE.node_at(-10_000.0, -10_000.0), None);
}

#[test]
fn node_at_prefers_nearest_center_when_circles_overlap() {
    // spacing below twice the radius makes adjacent hit circles overlap
    let dense = Lattice::builder()
        .spacing(30.0)
        .node_radius(25.0)
        .build()
        .unwrap();
    let a = dense.node(id(0, 0)).unwrap();
    assert_eq!(dense.node_at(a.x + 10.0, a.y), Some(id(0, 0)));
    assert_eq!(dense.node_at(a.x + 20.0, a.y), Some(id(0, 1)));
    // exact midpoint: earliest node in build order wins
    assert_eq!(dense.node_at(a.x + 15.0, a.y), Some(id(0, 0)));
}

#[test]
fn two_disjoint_triangles_form_two_components() {
    let selection = [
        id(2, 2),
        id(2, 3),
        id(3, 2),
        id(8, 10),
        id(8, 11),
        id(9, 10),
    ];
    let groups = LATTICE.connected_components(&selection);
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.len() == 3));

    let first: HashSet<NodeId> = groups[0].iter().copied().collect();
    let second: HashSet<NodeId> = groups[1].iter().copied().collect();
    assert_eq!(first, [id(2, 2), id(2, 3), id(3, 2)].into_iter().collect());
    assert_eq!(
        second,
        [id(8, 10), id(8, 11), id(9, 10)].into_iter().collect()
    );
}

#[test]
fn isolated_selections_stay_singletons() {
    let groups = LATTICE.connected_components(&[id(0, 0), id(7, 7)]);
    assert_eq!(groups, vec![vec![id(0, 0)], vec![id(7, 7)]]);
}

#[test]
fn empty_selection_has_no_components() {
    assert!(LATTICE.connected_components(&[]).is_empty());
}

#[test]
fn builder_rejects_degenerate_configurations() {
    assert!(matches!(
        Lattice::builder().rows(0).build(),
        Err(LatticeError::Configuration(_))
    ));
    assert!(matches!(
        Lattice::builder().cols(0).build(),
        Err(LatticeError::Configuration(_))
    ));
    assert!(matches!(
        Lattice::builder().spacing(-1.0).build(),
        Err(LatticeError::Configuration(_))
    ));
    assert!(matches!(
        Lattice::builder().node_radius(0.0).build(),
        Err(LatticeError::Configuration(_))
    ));
}

#[test]
fn oversized_row_shrink_yields_empty_upper_rows() {
    // row 6 would shrink by 3 columns; with 3 columns it is empty
    let narrow = Lattice::builder().rows(10).cols(3).build().unwrap();
    let expected: u32 = (0..10u32).map(|r| 3u32.saturating_sub(r / 2)).sum();
    assert_eq!(narrow.nodes().len(), expected as usize);
    assert!(narrow.node(id(6, 0)).is_none());
}
