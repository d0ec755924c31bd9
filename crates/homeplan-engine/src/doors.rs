//! Door resolver.
//!
//! After placement and repair, each connection gets a door at the
//! midpoint of the wall segment its two rooms share. Connections whose
//! rooms no longer share a wall (repair pushed them apart) keep a `None`
//! door; validation reports those as warnings rather than errors.

use crate::placement::WALL_TOLERANCE;
use homeplan_logic::catalog::Wall;
use homeplan_logic::graph::{DoorPos, FloorPlanGraph};

pub fn resolve_doors(graph: &mut FloorPlanGraph) {
    let doors: Vec<Option<DoorPos>> = graph
        .edges()
        .iter()
        .map(|edge| {
            let a = graph.node(&edge.room_a)?;
            let b = graph.node(&edge.room_b)?;
            let (wall, start, end) = a.rect.shared_wall(&b.rect, WALL_TOLERANCE)?;
            let mid = (start + end) / 2.0;
            let (x, y) = match wall {
                Wall::North => (mid, a.rect.max_y()),
                Wall::South => (mid, a.rect.y),
                Wall::East => (a.rect.max_x(), mid),
                Wall::West => (a.rect.x, mid),
            };
            Some(DoorPos { x, y, wall })
        })
        .collect();

    let unresolved = doors.iter().filter(|d| d.is_none()).count();
    if unresolved > 0 {
        log::debug!("{} connection(s) have no shared wall for a door", unresolved);
    }

    for (edge, door) in graph.edges_mut().iter_mut().zip(doors) {
        edge.door = door;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeplan_logic::catalog::{ConnectionKind, RoomKind};
    use homeplan_logic::geometry::Rect;
    use homeplan_logic::graph::RoomNode;

    fn placed(id: &str, kind: RoomKind, x: f32, y: f32, w: f32, h: f32) -> RoomNode {
        let mut node = RoomNode::new(id.to_string(), kind);
        node.rect = Rect::new(x, y, w, h);
        node.placed = true;
        node
    }

    #[test]
    fn door_sits_at_the_shared_segment_midpoint() {
        let mut graph = FloorPlanGraph::new();
        graph.add_room(placed("living_room", RoomKind::LivingRoom, 0.0, 0.0, 5.0, 4.0));
        graph.add_room(placed("kitchen", RoomKind::Kitchen, 5.0, 1.0, 4.0, 3.5));
        graph.add_connection("living_room", "kitchen", ConnectionKind::Open);
        resolve_doors(&mut graph);

        let door = graph.edges()[0].door.as_ref().expect("door resolved");
        assert_eq!(door.wall, Wall::East);
        assert!((door.x - 5.0).abs() < 1e-5);
        // Shared span is y in [1.0, 4.0].
        assert!((door.y - 2.5).abs() < 1e-5);
    }

    #[test]
    fn north_wall_door_uses_the_first_rooms_top_edge() {
        let mut graph = FloorPlanGraph::new();
        graph.add_room(placed("kitchen", RoomKind::Kitchen, 0.0, 0.0, 4.0, 3.5));
        graph.add_room(placed("dining_room", RoomKind::DiningRoom, 0.0, 3.5, 4.0, 3.5));
        graph.add_connection("kitchen", "dining_room", ConnectionKind::Open);
        resolve_doors(&mut graph);

        let door = graph.edges()[0].door.as_ref().expect("door resolved");
        assert_eq!(door.wall, Wall::North);
        assert!((door.y - 3.5).abs() < 1e-5);
        assert!((door.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn separated_rooms_get_no_door() {
        let mut graph = FloorPlanGraph::new();
        graph.add_room(placed("living_room", RoomKind::LivingRoom, 0.0, 0.0, 5.0, 4.0));
        graph.add_room(placed("garage", RoomKind::Garage, 9.0, 0.0, 6.0, 3.0));
        graph.add_connection("living_room", "garage", ConnectionKind::Door);
        resolve_doors(&mut graph);
        assert!(graph.edges()[0].door.is_none());
    }

    #[test]
    fn corner_touch_is_not_a_shared_wall() {
        let mut graph = FloorPlanGraph::new();
        graph.add_room(placed("living_room", RoomKind::LivingRoom, 0.0, 0.0, 5.0, 4.0));
        graph.add_room(placed("study", RoomKind::Study, 5.0, 4.0, 3.0, 3.0));
        graph.add_connection("living_room", "study", ConnectionKind::Door);
        resolve_doors(&mut graph);
        assert!(graph.edges()[0].door.is_none());
    }
}
