//! Serializable views of a finished layout.
//!
//! The graph's internal shape is not a stable wire format; callers render
//! or persist these flat records instead.

use homeplan_logic::catalog::{ConnectionKind, RoomKind, Wall, Zone};
use homeplan_logic::graph::FloorPlanGraph;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RoomExport {
    pub id: String,
    pub room_type: RoomKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub zone: Zone,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoorExport {
    pub x: f32,
    pub y: f32,
    pub wall: Wall,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionExport {
    pub room_a: String,
    pub room_b: String,
    pub kind: ConnectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door: Option<DoorExport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutSummary {
    pub num_rooms: usize,
    pub num_connections: usize,
    pub total_area: f32,
    pub width: f32,
    pub height: f32,
}

/// Rooms in the order they were placed; rooms not in `placed_order`
/// (never placed by the engine) are skipped.
pub fn export_rooms(graph: &FloorPlanGraph, placed_order: &[String]) -> Vec<RoomExport> {
    placed_order
        .iter()
        .filter_map(|id| graph.node(id))
        .map(|node| RoomExport {
            id: node.id.clone(),
            room_type: node.kind,
            x: node.rect.x,
            y: node.rect.y,
            width: node.rect.width,
            height: node.rect.height,
            zone: node.zone,
        })
        .collect()
}

pub fn export_connections(graph: &FloorPlanGraph) -> Vec<ConnectionExport> {
    graph
        .edges()
        .iter()
        .map(|edge| ConnectionExport {
            room_a: edge.room_a.clone(),
            room_b: edge.room_b.clone(),
            kind: edge.kind,
            door: edge.door.as_ref().map(|d| DoorExport {
                x: d.x,
                y: d.y,
                wall: d.wall,
            }),
        })
        .collect()
}

/// Everything the exchange writer needs for one layout.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutExport {
    pub rooms: Vec<RoomExport>,
    pub connections: Vec<ConnectionExport>,
    pub summary: LayoutSummary,
}

pub fn export_layout(result: &crate::generator::GenerationResult) -> LayoutExport {
    LayoutExport {
        rooms: export_rooms(&result.graph, &result.placed),
        connections: export_connections(&result.graph),
        summary: summarize(&result.graph),
    }
}

pub fn summarize(graph: &FloorPlanGraph) -> LayoutSummary {
    let bb = graph.bounding_box();
    LayoutSummary {
        num_rooms: graph.room_count(),
        num_connections: graph.edges().len(),
        total_area: graph.total_area(),
        width: bb.map(|b| b.width).unwrap_or(0.0),
        height: bb.map(|b| b.height).unwrap_or(0.0),
    }
}
