//! Floor plan generation engine.
//!
//! Turns a [`RoomSpec`] into a placed, connected, door-annotated floor
//! plan. The pipeline for one candidate is: build the room graph, place
//! rooms wall-to-wall (or instantiate a template archetype), repair any
//! residual overlaps, then resolve door positions. [`LayoutGenerator`]
//! wraps that in a bounded retry loop that shrinks room dimensions until
//! the layout fits a requested plot.
//!
//! | Module      | Purpose                                             |
//! |-------------|-----------------------------------------------------|
//! | `config`    | Tunable generation parameters                       |
//! | `placement` | Dynamic wall-sharing placement engine               |
//! | `template`  | Archetype layouts and instantiation                 |
//! | `variety`   | Jitter and mirroring for templated layouts          |
//! | `repair`    | Iterative overlap separation                        |
//! | `doors`     | Door positions on shared walls                      |
//! | `optimizer` | One-candidate pipeline                              |
//! | `generator` | Bounded retry loop and result envelope              |
//! | `export`    | Serializable room/connection/summary records        |

pub mod config;
pub mod doors;
pub mod export;
pub mod generator;
pub mod optimizer;
pub mod placement;
pub mod repair;
pub mod template;
pub mod variety;

pub use config::GeneratorConfig;
pub use export::{
    export_layout, ConnectionExport, DoorExport, LayoutExport, LayoutSummary, RoomExport,
};
pub use generator::{estimate_required_area, GenerationResult, LayoutGenerator};
pub use optimizer::{generate_layout, LayoutAttempt};

pub use homeplan_logic::{
    AreaBounds, ConnectionKind, DoorPos, FloorPlanGraph, Rect, RoomEdge, RoomKind, RoomNode,
    RoomSpec, Wall, Zone,
};

/// Parse a JSON room specification. Unknown keys are ignored and absent
/// keys default, so partial extractor output parses cleanly.
pub fn parse_room_spec(json: &str) -> Result<RoomSpec, serde_json::Error> {
    serde_json::from_str(json)
}
