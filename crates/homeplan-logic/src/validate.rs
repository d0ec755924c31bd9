//! Layout validation for generated floor plans.
//!
//! Pure functions that take a finished graph and return validation errors.
//! Warnings describe tolerated data conditions (an edge without a shared
//! wall); errors describe broken invariants (overlapping rooms).

use crate::geometry::Rect;
use crate::graph::FloorPlanGraph;

/// A layout validation finding.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Check that no room has zero or negative dimensions.
pub fn check_room_dimensions(graph: &FloorPlanGraph) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for room in graph.nodes() {
        if room.rect.width <= 0.0 || room.rect.height <= 0.0 {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Error,
                message: format!(
                    "Room {} has non-positive dimensions: {}×{}",
                    room.id, room.rect.width, room.rect.height
                ),
            });
        }
    }
    errors
}

/// Check that no pair of placed rooms overlaps beyond `epsilon`.
pub fn check_no_overlaps(graph: &FloorPlanGraph, epsilon: f32) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let rooms: Vec<_> = graph.nodes().filter(|n| n.placed).collect();
    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            if a.rect.overlaps(&b.rect, epsilon) {
                let (ox, oy) = a.rect.overlap_extent(&b.rect);
                errors.push(ValidationError {
                    category: "overlap",
                    severity: Severity::Error,
                    message: format!(
                        "Rooms {} and {} overlap by {:.2}m × {:.2}m",
                        a.id, b.id, ox, oy
                    ),
                });
            }
        }
    }
    errors
}

/// Check that every resolved door sits on a shared wall segment of positive
/// length between its two rooms, and that the door point lies on that
/// segment. Edges without a door are reported as warnings: they are a
/// tolerated data condition the exchange writer must handle.
pub fn check_doors(graph: &FloorPlanGraph, tolerance: f32) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for edge in graph.edges() {
        let (Some(a), Some(b)) = (graph.node(&edge.room_a), graph.node(&edge.room_b)) else {
            continue;
        };
        match edge.door {
            Some(door) => match a.rect.shared_wall(&b.rect, tolerance) {
                Some((wall, start, end)) => {
                    if wall != door.wall {
                        errors.push(ValidationError {
                            category: "door",
                            severity: Severity::Error,
                            message: format!(
                                "Door between {} and {} names wall {:?}, shared wall is {:?}",
                                edge.room_a, edge.room_b, door.wall, wall
                            ),
                        });
                        continue;
                    }
                    let along = match wall {
                        crate::catalog::Wall::North | crate::catalog::Wall::South => door.x,
                        crate::catalog::Wall::East | crate::catalog::Wall::West => door.y,
                    };
                    if along < start - tolerance || along > end + tolerance {
                        errors.push(ValidationError {
                            category: "door",
                            severity: Severity::Error,
                            message: format!(
                                "Door between {} and {} lies outside the shared segment",
                                edge.room_a, edge.room_b
                            ),
                        });
                    }
                }
                None => errors.push(ValidationError {
                    category: "door",
                    severity: Severity::Error,
                    message: format!(
                        "Door between {} and {} but rooms share no wall",
                        edge.room_a, edge.room_b
                    ),
                }),
            },
            None => errors.push(ValidationError {
                category: "door",
                severity: Severity::Warning,
                message: format!(
                    "Connection {} to {} has no door (rooms not adjacent after placement)",
                    edge.room_a, edge.room_b
                ),
            }),
        }
    }
    errors
}

/// Check that the layout starts at the origin: min x and min y over all
/// placed rooms are both (approximately) zero.
pub fn check_normalized(graph: &FloorPlanGraph, tolerance: f32) -> Vec<ValidationError> {
    let rects: Vec<Rect> = graph
        .nodes()
        .filter(|n| n.placed)
        .map(|n| n.rect)
        .collect();
    let Some(bb) = Rect::bounding(&rects) else {
        return Vec::new();
    };
    let mut errors = Vec::new();
    if bb.x.abs() > tolerance || bb.y.abs() > tolerance {
        errors.push(ValidationError {
            category: "normalization",
            severity: Severity::Error,
            message: format!("Layout origin is ({:.2}, {:.2}), expected (0, 0)", bb.x, bb.y),
        });
    }
    errors
}

/// Run every check and collect the findings.
pub fn validate_layout(graph: &FloorPlanGraph) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(check_room_dimensions(graph));
    errors.extend(check_no_overlaps(graph, 0.01));
    errors.extend(check_doors(graph, 0.1));
    errors.extend(check_normalized(graph, 0.01));
    errors
}
