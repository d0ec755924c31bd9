//! Input records consumed by the layout engine.
//!
//! `RoomSpec` arrives from the NLP layer as a JSON mapping; absent keys
//! default to zero/false. `AreaBounds` arrives from the plot-size parser
//! and is treated as immutable.

use serde::{Deserialize, Serialize};

/// Requested rooms for one layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSpec {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub kitchen: bool,
    pub living_room: bool,
    pub dining_room: bool,
    pub study: bool,
    pub garage: bool,
}

impl RoomSpec {
    /// Number of rooms a layout built from this spec will contain.
    ///
    /// Mirrors the roster rules: a hallway is added when any bedroom is
    /// requested, and the first bathroom becomes an en-suite only when
    /// there is a bedroom for it to serve.
    pub fn room_count(&self) -> usize {
        let mut count = 0;
        count += usize::from(self.living_room);
        count += usize::from(self.kitchen);
        count += usize::from(self.dining_room);
        count += usize::from(self.study);
        count += usize::from(self.garage);
        count += self.bedrooms as usize;
        if self.bedrooms > 0 {
            // hallway
            count += 1;
            count += self.bathrooms as usize;
        } else if self.bathrooms > 0 {
            // no en-suite without a master bedroom
            count += self.bathrooms as usize - 1;
        }
        count
    }
}

/// Target plot footprint in meters, produced by the plot-size parser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaBounds {
    pub width: f32,
    pub height: f32,
    pub area_sqm: f32,
}

impl AreaBounds {
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            area_sqm: width * height,
        }
    }
}
