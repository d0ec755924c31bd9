//! Overlap repair pass.
//!
//! Placement and template instantiation can leave residual overlaps
//! (extra-room offsets, rounding at shared walls). Repair iterates over
//! all placed pairs, pushing both rooms of an overlapping pair apart
//! along the axis of smaller penetration until a full pass finds no
//! overlap or the iteration budget runs out.

use homeplan_logic::graph::FloorPlanGraph;

const OVERLAP_EPSILON: f32 = 0.01;
const SEPARATION_GAP: f32 = 0.1;

/// Separate overlapping rooms in place, then normalize to the origin.
///
/// Returns the number of iterations used. A layout still overlapping
/// after `max_iterations` is left in its best-effort state and logged.
pub fn repair_overlaps(graph: &mut FloorPlanGraph, max_iterations: u32) -> u32 {
    let mut rooms: Vec<(String, homeplan_logic::geometry::Rect)> = graph
        .nodes()
        .filter(|n| n.placed)
        .map(|n| (n.id.clone(), n.rect))
        .collect();

    let mut iterations = 0;
    for _ in 0..max_iterations {
        iterations += 1;
        let mut moved = false;
        for i in 0..rooms.len() {
            for j in (i + 1)..rooms.len() {
                let (ra, rb) = (rooms[i].1, rooms[j].1);
                if !ra.overlaps(&rb, OVERLAP_EPSILON) {
                    continue;
                }
                // Both rooms move half the overlap plus the gap, so one
                // visit fully separates the pair.
                let (overlap_x, overlap_y) = ra.overlap_extent(&rb);
                if overlap_x < overlap_y {
                    let push = overlap_x / 2.0 + SEPARATION_GAP;
                    if rb.center().0 >= ra.center().0 {
                        rooms[i].1.x -= push;
                        rooms[j].1.x += push;
                    } else {
                        rooms[i].1.x += push;
                        rooms[j].1.x -= push;
                    }
                } else {
                    let push = overlap_y / 2.0 + SEPARATION_GAP;
                    if rb.center().1 >= ra.center().1 {
                        rooms[i].1.y -= push;
                        rooms[j].1.y += push;
                    } else {
                        rooms[i].1.y += push;
                        rooms[j].1.y -= push;
                    }
                }
                moved = true;
            }
        }
        if !moved {
            break;
        }
    }

    let residual = count_overlaps(&rooms);
    if residual > 0 {
        log::warn!(
            "overlap repair hit the iteration limit with {} overlapping pair(s) left",
            residual
        );
    }

    for (id, rect) in rooms {
        if let Some(node) = graph.node_mut(&id) {
            node.rect = rect;
        }
    }

    normalize_to_origin(graph);
    iterations
}

/// Translate the whole layout so its bounding box starts at (0, 0).
pub fn normalize_to_origin(graph: &mut FloorPlanGraph) {
    if let Some(bb) = graph.bounding_box() {
        if bb.x == 0.0 && bb.y == 0.0 {
            return;
        }
        for node in graph.nodes_mut() {
            node.rect.x -= bb.x;
            node.rect.y -= bb.y;
        }
        for edge in graph.edges_mut() {
            if let Some(door) = edge.door.as_mut() {
                door.x -= bb.x;
                door.y -= bb.y;
            }
        }
    }
}

fn count_overlaps(rooms: &[(String, homeplan_logic::geometry::Rect)]) -> usize {
    let mut count = 0;
    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            if rooms[i].1.overlaps(&rooms[j].1, OVERLAP_EPSILON) {
                count += 1;
            }
        }
    }
    count
}
