//! Pure floor plan data model for HomePlan.
//!
//! This crate contains the data types and geometry shared by every layout
//! generation strategy. Functions take plain data and return results, with
//! no RNG and no I/O, so everything here is unit-testable in isolation.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Closed room-kind set with standard dimensions, zones, tags |
//! | [`geometry`] | Axis-aligned rectangle math (overlap, shared walls, bounds) |
//! | [`graph`] | Room nodes, connection edges, and the floor plan graph |
//! | [`spec`] | Input records: room specification and plot bounds |
//! | [`validate`] | Layout validation (overlaps, door placement, normalization) |

pub mod catalog;
pub mod geometry;
pub mod graph;
pub mod spec;
pub mod validate;

pub use catalog::{ConnectionKind, RoomKind, Wall, Zone};
pub use geometry::Rect;
pub use graph::{DoorPos, FloorPlanGraph, RoomEdge, RoomNode};
pub use spec::{AreaBounds, RoomSpec};
