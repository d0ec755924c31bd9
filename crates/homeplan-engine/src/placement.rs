//! Dynamic placement engine.
//!
//! Builds a room graph from a specification, then greedily places each room
//! flush against an already-placed connected neighbor, keeping the layout
//! compact. A spiral search and an overflow grid guarantee that every
//! requested room ends up somewhere: an unsatisfiable position degrades the
//! layout, it never fails it.

use homeplan_logic::catalog::{ConnectionKind, RoomKind, Zone};
use homeplan_logic::geometry::Rect;
use homeplan_logic::graph::{FloorPlanGraph, RoomNode};
use homeplan_logic::spec::{AreaBounds, RoomSpec};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Two rooms count as wall-sharing within this tolerance (meters).
pub const WALL_TOLERANCE: f32 = 0.1;

/// No room dimension drops below this after randomization (meters).
pub const MIN_ROOM_DIM: f32 = 2.0;

/// Build the room roster and adjacency edges for a specification.
///
/// Ids follow the fixed scheme: singleton rooms use their tag
/// (`living_room`, `master_bedroom`, …); extra bedrooms are
/// `bedroom_2..bedroom_N` and extra bathrooms `bathroom_1..bathroom_{M-1}`
/// (the first bathroom becomes the master's en-suite).
pub fn build_graph(spec: &RoomSpec) -> FloorPlanGraph {
    let mut graph = FloorPlanGraph::new();

    if spec.living_room {
        graph.add_room(RoomNode::new("living_room", RoomKind::LivingRoom));
    }
    if spec.kitchen {
        graph.add_room(RoomNode::new("kitchen", RoomKind::Kitchen));
    }
    if spec.dining_room {
        graph.add_room(RoomNode::new("dining_room", RoomKind::DiningRoom));
    }

    // Hallway connects bedrooms to the public zone.
    if spec.bedrooms > 0 {
        graph.add_room(RoomNode::new("hallway", RoomKind::Hallway));
        graph.add_room(RoomNode::new("master_bedroom", RoomKind::MasterBedroom));
    }
    for i in 1..spec.bedrooms {
        graph.add_room(RoomNode::new(format!("bedroom_{}", i + 1), RoomKind::Bedroom));
    }

    // First bathroom is the master's en-suite.
    if spec.bedrooms > 0 && spec.bathrooms > 0 {
        graph.add_room(RoomNode::new("en_suite", RoomKind::EnSuite));
    }
    for i in 1..spec.bathrooms {
        graph.add_room(RoomNode::new(format!("bathroom_{}", i), RoomKind::Bathroom));
    }

    if spec.study {
        graph.add_room(RoomNode::new("study", RoomKind::Study));
    }
    if spec.garage {
        graph.add_room(RoomNode::new("garage", RoomKind::Garage));
    }

    add_default_connections(&mut graph);
    graph
}

/// Wire the architectural adjacency rules into the graph.
pub(crate) fn add_default_connections(graph: &mut FloorPlanGraph) {
    if graph.contains("living_room") {
        if graph.contains("kitchen") {
            graph.add_connection("living_room", "kitchen", ConnectionKind::Open);
        }
        if graph.contains("dining_room") {
            graph.add_connection("living_room", "dining_room", ConnectionKind::Open);
        }
        graph.add_connection("living_room", "hallway", ConnectionKind::Door);
    }
    if graph.contains("kitchen") && graph.contains("dining_room") {
        graph.add_connection("kitchen", "dining_room", ConnectionKind::Open);
    }

    // Hallway reaches every bedroom and bathroom.
    graph.add_connection("hallway", "master_bedroom", ConnectionKind::Door);
    let numbered: Vec<String> = graph
        .node_ids()
        .filter(|id| id.starts_with("bedroom_") || id.starts_with("bathroom_"))
        .map(str::to_string)
        .collect();
    for id in &numbered {
        graph.add_connection("hallway", id, ConnectionKind::Door);
    }

    graph.add_connection("master_bedroom", "en_suite", ConnectionKind::Door);

    if graph.contains("study") {
        if graph.contains("living_room") {
            graph.add_connection("living_room", "study", ConnectionKind::Door);
        } else {
            graph.add_connection("hallway", "study", ConnectionKind::Door);
        }
    }

    if graph.contains("garage") {
        if graph.contains("kitchen") {
            graph.add_connection("garage", "kitchen", ConnectionKind::Door);
        } else {
            graph.add_connection("garage", "hallway", ConnectionKind::Door);
        }
    }
}

/// Apply a uniform scale to every room's catalog dimensions.
pub fn scale_dimensions(graph: &mut FloorPlanGraph, scale: f32) {
    if scale == 1.0 {
        return;
    }
    for node in graph.nodes_mut() {
        node.rect.width *= scale;
        node.rect.height *= scale;
    }
}

/// Randomize each dimension by ±`variation`, clamped at [`MIN_ROOM_DIM`].
pub fn randomize_dimensions(graph: &mut FloorPlanGraph, variation: f32, rng: &mut impl Rng) {
    if variation <= 0.0 {
        return;
    }
    for node in graph.nodes_mut() {
        let wf = 1.0 + rng.gen_range(-variation..variation);
        let hf = 1.0 + rng.gen_range(-variation..variation);
        node.rect.width = (node.rect.width * wf).max(MIN_ROOM_DIM);
        node.rect.height = (node.rect.height * hf).max(MIN_ROOM_DIM);
    }
}

/// Pre-shrink room dimensions so the roster has a chance of fitting the
/// plot: 85% of the plot area is treated as usable (walls, circulation),
/// rooms never shrink below 60% or 2.5 m, and no single room may span more
/// than 70% of either plot dimension.
pub fn shrink_to_bounds(graph: &mut FloorPlanGraph, bounds: &AreaBounds) {
    if graph.is_empty() {
        return;
    }

    let total_area = graph.total_area();
    let available = bounds.width * bounds.height * 0.85;
    if total_area > available && total_area > 0.0 {
        let scale = (available / total_area).sqrt().max(0.6);
        for node in graph.nodes_mut() {
            node.rect.width = (node.rect.width * scale).max(2.5);
            node.rect.height = (node.rect.height * scale).max(2.5);
        }
    }

    for node in graph.nodes_mut() {
        node.rect.width = node.rect.width.min(bounds.width * 0.7);
        node.rect.height = node.rect.height.min(bounds.height * 0.7);
    }
}

/// Place every room in the graph. Returns the graph with positions set and
/// the placement order.
pub fn place_rooms(mut graph: FloorPlanGraph, rng: &mut impl Rng) -> (FloorPlanGraph, Vec<String>) {
    let order = placement_order(&graph, rng);
    let mut placed: Vec<String> = Vec::new();

    for id in order {
        let Some((w, h)) = graph.node(&id).map(|n| (n.rect.width, n.rect.height)) else {
            continue;
        };

        let pos = if placed.is_empty() {
            // Anchor at the origin.
            (0.0, 0.0)
        } else {
            match find_best_position(&graph, &id, w, h, &placed, rng) {
                Some(pos) => pos,
                None => fallback_position(&graph, w, h, &placed),
            }
        };

        if let Some(node) = graph.node_mut(&id) {
            node.rect.x = pos.0;
            node.rect.y = pos.1;
            node.placed = true;
        }
        placed.push(id);
    }

    (graph, placed)
}

/// Placement order: living room anchor, then kitchen/dining/hallway in
/// random order, then master bedroom with its en-suite, then the rest by
/// zone (public, private, service) shuffled within each zone.
fn placement_order(graph: &FloorPlanGraph, rng: &mut impl Rng) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut remaining: BTreeSet<String> = graph.node_ids().map(str::to_string).collect();

    if remaining.remove("living_room") {
        order.push("living_room".to_string());
    }

    let mut secondary = ["kitchen", "dining_room", "hallway"];
    secondary.shuffle(rng);
    for id in secondary {
        if remaining.remove(id) {
            order.push(id.to_string());
        }
    }

    for id in ["master_bedroom", "en_suite"] {
        if remaining.remove(id) {
            order.push(id.to_string());
        }
    }

    for zone in [Zone::Public, Zone::Private, Zone::Service] {
        let mut zone_rooms: Vec<String> = remaining
            .iter()
            .filter(|id| graph.node(id).map_or(false, |n| n.zone == zone))
            .cloned()
            .collect();
        zone_rooms.shuffle(rng);
        for id in zone_rooms {
            remaining.remove(&id);
            order.push(id);
        }
    }

    order
}

/// Twelve candidate positions flush against `existing`: near-edge, centered
/// and far-edge alignment on each of the four sides, shuffled for variety.
fn candidate_positions(
    existing: Rect,
    w: f32,
    h: f32,
    rng: &mut impl Rng,
) -> Vec<(f32, f32)> {
    let mut positions = vec![
        // East side
        (existing.max_x(), existing.y),
        (existing.max_x(), existing.y + (existing.height - h) / 2.0),
        (existing.max_x(), existing.max_y() - h),
        // North side
        (existing.x, existing.max_y()),
        (existing.x + (existing.width - w) / 2.0, existing.max_y()),
        (existing.max_x() - w, existing.max_y()),
        // West side
        (existing.x - w, existing.y),
        (existing.x - w, existing.y + (existing.height - h) / 2.0),
        (existing.x - w, existing.max_y() - h),
        // South side
        (existing.x, existing.y - h),
        (existing.x + (existing.width - w) / 2.0, existing.y - h),
        (existing.max_x() - w, existing.y - h),
    ];
    positions.shuffle(rng);
    positions
}

fn position_is_free(rect: &Rect, placed_rects: &[Rect]) -> bool {
    placed_rects.iter().all(|other| !rect.overlaps(other, 0.0))
}

/// Candidate search: positions against placed connected neighbors first,
/// then against any placed room; among valid positions the one closest to
/// the centroid of the placed layout wins, chosen randomly from the best 3.
fn find_best_position(
    graph: &FloorPlanGraph,
    room_id: &str,
    w: f32,
    h: f32,
    placed: &[String],
    rng: &mut impl Rng,
) -> Option<(f32, f32)> {
    let placed_rects: Vec<Rect> = placed
        .iter()
        .filter_map(|id| graph.node(id))
        .map(|n| n.rect)
        .collect();

    let neighbors = graph.neighbors(room_id);
    let mut valid: Vec<(f32, f32)> = Vec::new();

    for nid in &neighbors {
        let Some(neighbor) = graph.node(nid).filter(|n| n.placed) else {
            continue;
        };
        collect_touching_positions(neighbor.rect, w, h, &placed_rects, &mut valid, rng);
    }

    // No placed neighbor worked: try every placed room.
    if valid.is_empty() {
        for rect in &placed_rects {
            collect_touching_positions(*rect, w, h, &placed_rects, &mut valid, rng);
        }
    }

    if valid.is_empty() {
        return None;
    }

    let n = placed_rects.len() as f32;
    let cx = placed_rects.iter().map(|r| r.center().0).sum::<f32>() / n;
    let cy = placed_rects.iter().map(|r| r.center().1).sum::<f32>() / n;

    let mut scored: Vec<((f32, f32), f32)> = valid
        .into_iter()
        .map(|pos| {
            let dx = pos.0 + w / 2.0 - cx;
            let dy = pos.1 + h / 2.0 - cy;
            (pos, (dx * dx + dy * dy).sqrt())
        })
        .collect();
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));
    scored.truncate(3);
    scored.choose(rng).map(|(pos, _)| *pos)
}

fn collect_touching_positions(
    against: Rect,
    w: f32,
    h: f32,
    placed_rects: &[Rect],
    out: &mut Vec<(f32, f32)>,
    rng: &mut impl Rng,
) {
    for pos in candidate_positions(against, w, h, rng) {
        let rect = Rect::new(pos.0, pos.1, w, h);
        if position_is_free(&rect, placed_rects) && rect.touches(&against, WALL_TOLERANCE) {
            out.push(pos);
        }
    }
}

/// Last-resort placement: spiral outward from the origin over 8 compass
/// directions; if even that fails, drop the room on an overflow grid.
fn fallback_position(graph: &FloorPlanGraph, w: f32, h: f32, placed: &[String]) -> (f32, f32) {
    let placed_rects: Vec<Rect> = placed
        .iter()
        .filter_map(|id| graph.node(id))
        .map(|n| n.rect)
        .collect();

    for distance in 1..50u32 {
        for step in 0..8u32 {
            let rad = (step as f32 * 45.0).to_radians();
            let x = distance as f32 * 2.0 * rad.cos();
            let y = distance as f32 * 2.0 * rad.sin();
            if position_is_free(&Rect::new(x, y, w, h), &placed_rects) {
                return (x, y);
            }
        }
    }

    (placed.len() as f32 * 5.0, 0.0)
}
