//! Variety pass for template instantiations.
//!
//! Archetypes are deterministic, so templated layouts get a whole-layout
//! jitter plus independent chances of a horizontal and vertical mirror.
//! All moves are rigid: relative positions inside the layout never change,
//! so a repaired archetype stays overlap-free.

use homeplan_logic::graph::FloorPlanGraph;
use rand::Rng;

pub fn apply_variety(
    graph: &mut FloorPlanGraph,
    jitter: f32,
    mirror_probability: f64,
    rng: &mut impl Rng,
) {
    if jitter > 0.0 {
        let dx = rng.gen_range(-jitter..jitter);
        let dy = rng.gen_range(-jitter..jitter);
        for node in graph.nodes_mut() {
            node.rect.x += dx;
            node.rect.y += dy;
        }
    }

    if rng.gen_bool(mirror_probability) {
        if let Some(bb) = graph.bounding_box() {
            let max_x = bb.max_x();
            for node in graph.nodes_mut() {
                node.rect.x = max_x - node.rect.x - node.rect.width;
            }
        }
    }

    if rng.gen_bool(mirror_probability) {
        if let Some(bb) = graph.bounding_box() {
            let max_y = bb.max_y();
            for node in graph.nodes_mut() {
                node.rect.y = max_y - node.rect.y - node.rect.height;
            }
        }
    }
}
