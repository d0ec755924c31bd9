//! The floor plan graph: room nodes and connection edges.
//!
//! A graph is built fresh for each generation attempt and moved by value
//! through the pipeline stages (placement → jitter → repair → door
//! resolution), so every mutation point is explicit in the signatures.

use crate::catalog::{ConnectionKind, RoomKind, Wall, Zone};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A resolved door position on a shared wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorPos {
    pub x: f32,
    pub y: f32,
    /// Wall side, named from the edge's first room.
    pub wall: Wall,
}

/// A room in the floor plan graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomNode {
    /// Stable key, unique within a layout (e.g. "bedroom_2").
    pub id: String,
    pub kind: RoomKind,
    /// Position and size; (x, y) is the lower-left corner in meters.
    pub rect: Rect,
    pub zone: Zone,
    pub placed: bool,
}

impl RoomNode {
    /// New unplaced room at the origin with catalog dimensions.
    pub fn new(id: impl Into<String>, kind: RoomKind) -> Self {
        let (width, height) = kind.standard_dimensions();
        Self {
            id: id.into(),
            kind,
            rect: Rect::new(0.0, 0.0, width, height),
            zone: kind.zone(),
            placed: false,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        self.rect.center()
    }

    pub fn area(&self) -> f32 {
        self.rect.area()
    }
}

/// A connection between two rooms.
///
/// `door` stays `None` until the door resolver runs, and remains `None`
/// for edges whose rooms ended up without a shared wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomEdge {
    pub room_a: String,
    pub room_b: String,
    pub kind: ConnectionKind,
    pub door: Option<DoorPos>,
}

impl RoomEdge {
    /// True when this edge connects the given unordered pair.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.room_a == a && self.room_b == b) || (self.room_a == b && self.room_b == a)
    }

    /// The id at the other end of the edge, if `id` is an endpoint.
    pub fn other_end(&self, id: &str) -> Option<&str> {
        if self.room_a == id {
            Some(&self.room_b)
        } else if self.room_b == id {
            Some(&self.room_a)
        } else {
            None
        }
    }
}

/// Rooms keyed by id plus an ordered edge list.
///
/// Every edge references two ids present in the node map; `add_connection`
/// enforces this by dropping edges with a missing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloorPlanGraph {
    nodes: BTreeMap<String, RoomNode>,
    edges: Vec<RoomEdge>,
}

impl FloorPlanGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room(&mut self, room: RoomNode) {
        self.nodes.insert(room.id.clone(), room);
    }

    /// Connect two rooms. No-op when either endpoint is unknown.
    pub fn add_connection(&mut self, a: &str, b: &str, kind: ConnectionKind) {
        if self.nodes.contains_key(a) && self.nodes.contains_key(b) {
            self.edges.push(RoomEdge {
                room_a: a.to_string(),
                room_b: b.to_string(),
                kind,
                door: None,
            });
        }
    }

    pub fn node(&self, id: &str) -> Option<&RoomNode> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut RoomNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &RoomNode> {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut RoomNode> {
        self.nodes.values_mut()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn edges(&self) -> &[RoomEdge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut [RoomEdge] {
        &mut self.edges
    }

    pub fn room_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of every room connected to `id`.
    pub fn neighbors(&self, id: &str) -> Vec<String> {
        self.edges
            .iter()
            .filter_map(|e| e.other_end(id))
            .map(str::to_string)
            .collect()
    }

    /// The edge between an unordered pair of rooms, if any.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&RoomEdge> {
        self.edges.iter().find(|e| e.connects(a, b))
    }

    /// Bounding box over all rooms (placed or not).
    pub fn bounding_box(&self) -> Option<Rect> {
        let rects: Vec<Rect> = self.nodes.values().map(|n| n.rect).collect();
        Rect::bounding(&rects)
    }

    /// Sum of room floor areas in square meters.
    pub fn total_area(&self) -> f32 {
        self.nodes.values().map(|n| n.area()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> FloorPlanGraph {
        let mut g = FloorPlanGraph::new();
        g.add_room(RoomNode::new("living_room", RoomKind::LivingRoom));
        g.add_room(RoomNode::new("kitchen", RoomKind::Kitchen));
        g.add_room(RoomNode::new("hallway", RoomKind::Hallway));
        g.add_connection("living_room", "kitchen", ConnectionKind::Open);
        g.add_connection("living_room", "hallway", ConnectionKind::Door);
        g
    }

    #[test]
    fn add_connection_requires_both_endpoints() {
        let mut g = sample_graph();
        g.add_connection("living_room", "garage", ConnectionKind::Door);
        assert_eq!(g.edges().len(), 2);
    }

    #[test]
    fn neighbors_are_symmetric() {
        let g = sample_graph();
        assert_eq!(g.neighbors("kitchen"), vec!["living_room".to_string()]);
        let living = g.neighbors("living_room");
        assert!(living.contains(&"kitchen".to_string()));
        assert!(living.contains(&"hallway".to_string()));
    }

    #[test]
    fn edge_between_is_unordered() {
        let g = sample_graph();
        assert!(g.edge_between("kitchen", "living_room").is_some());
        assert!(g.edge_between("living_room", "kitchen").is_some());
        assert!(g.edge_between("kitchen", "hallway").is_none());
    }

    #[test]
    fn new_rooms_use_catalog_dimensions() {
        let node = RoomNode::new("master_bedroom", RoomKind::MasterBedroom);
        assert_eq!(
            (node.rect.width, node.rect.height),
            RoomKind::MasterBedroom.standard_dimensions()
        );
        assert_eq!(node.zone, Zone::Private);
        assert!(!node.placed);
    }

    #[test]
    fn bounding_box_spans_all_rooms() {
        let mut g = FloorPlanGraph::new();
        let mut a = RoomNode::new("a", RoomKind::Bedroom);
        a.rect = Rect::new(0.0, 0.0, 3.0, 3.0);
        let mut b = RoomNode::new("b", RoomKind::Bedroom);
        b.rect = Rect::new(5.0, 4.0, 3.0, 3.0);
        g.add_room(a);
        g.add_room(b);
        let bb = g.bounding_box().expect("non-empty");
        assert_eq!((bb.width, bb.height), (8.0, 7.0));
    }
}
