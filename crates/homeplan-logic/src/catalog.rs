//! Room catalog: the closed set of room kinds the engine can generate,
//! with their standard dimensions, functional zones, and exchange tags.
//!
//! Keeping this a closed enum (rather than free-form string keys) means an
//! unknown room kind is a compile error, not a silent default-dimension
//! fallback.

use serde::{Deserialize, Serialize};

/// Functional zone of a room, used to bias placement order and adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Living room, dining, kitchen
    Public,
    /// Bedrooms, study
    Private,
    /// Bathrooms, garage, circulation
    Service,
}

/// Kind of opening between two connected rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    /// Standard hinged door (0.9 m)
    Door,
    /// Open archway, no door leaf
    Open,
    /// Double doors for wide openings (1.8 m)
    DoubleDoor,
}

/// Wall side of a room, named from that room's own frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wall {
    North,
    South,
    East,
    West,
}

/// The room types a layout can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    LivingRoom,
    Kitchen,
    DiningRoom,
    Hallway,
    MasterBedroom,
    Bedroom,
    EnSuite,
    Bathroom,
    Study,
    Garage,
}

impl RoomKind {
    /// Every kind, in catalog order.
    pub const ALL: [RoomKind; 10] = [
        RoomKind::LivingRoom,
        RoomKind::Kitchen,
        RoomKind::DiningRoom,
        RoomKind::Hallway,
        RoomKind::MasterBedroom,
        RoomKind::Bedroom,
        RoomKind::EnSuite,
        RoomKind::Bathroom,
        RoomKind::Study,
        RoomKind::Garage,
    ];

    /// Standard (width, height) in meters.
    pub fn standard_dimensions(self) -> (f32, f32) {
        match self {
            RoomKind::LivingRoom => (5.5, 4.5),
            RoomKind::Kitchen => (4.0, 3.5),
            RoomKind::DiningRoom => (4.0, 3.5),
            RoomKind::Hallway => (4.0, 1.5),
            RoomKind::MasterBedroom => (4.5, 4.0),
            RoomKind::Bedroom => (3.5, 3.5),
            RoomKind::EnSuite => (2.5, 2.5),
            RoomKind::Bathroom => (2.5, 2.5),
            RoomKind::Study => (3.0, 3.0),
            RoomKind::Garage => (6.0, 3.0),
        }
    }

    /// Standard floor area in square meters.
    pub fn standard_area(self) -> f32 {
        let (w, h) = self.standard_dimensions();
        w * h
    }

    /// Functional zone of this kind.
    pub fn zone(self) -> Zone {
        match self {
            RoomKind::LivingRoom | RoomKind::Kitchen | RoomKind::DiningRoom => Zone::Public,
            RoomKind::MasterBedroom | RoomKind::Bedroom | RoomKind::Study => Zone::Private,
            RoomKind::EnSuite | RoomKind::Bathroom | RoomKind::Hallway | RoomKind::Garage => {
                Zone::Service
            }
        }
    }

    /// Stable tag consumed by the building-exchange writer.
    pub fn as_tag(self) -> &'static str {
        match self {
            RoomKind::LivingRoom => "living_room",
            RoomKind::Kitchen => "kitchen",
            RoomKind::DiningRoom => "dining_room",
            RoomKind::Hallway => "hallway",
            RoomKind::MasterBedroom => "master_bedroom",
            RoomKind::Bedroom => "bedroom",
            RoomKind::EnSuite => "en_suite",
            RoomKind::Bathroom => "bathroom",
            RoomKind::Study => "study",
            RoomKind::Garage => "garage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_are_positive() {
        for kind in RoomKind::ALL {
            let (w, h) = kind.standard_dimensions();
            assert!(w > 0.0 && h > 0.0, "{:?} has bad dimensions", kind);
        }
    }

    #[test]
    fn hallway_is_the_narrowest_kind() {
        let (_, h) = RoomKind::Hallway.standard_dimensions();
        for kind in RoomKind::ALL {
            if kind == RoomKind::Hallway {
                continue;
            }
            let (w2, h2) = kind.standard_dimensions();
            assert!(h <= w2.min(h2), "{:?} is narrower than the hallway", kind);
        }
    }

    #[test]
    fn zone_assignment() {
        assert_eq!(RoomKind::LivingRoom.zone(), Zone::Public);
        assert_eq!(RoomKind::MasterBedroom.zone(), Zone::Private);
        assert_eq!(RoomKind::Bathroom.zone(), Zone::Service);
        assert_eq!(RoomKind::Garage.zone(), Zone::Service);
        assert_eq!(RoomKind::Study.zone(), Zone::Private);
    }

    #[test]
    fn tags_are_unique() {
        for a in RoomKind::ALL {
            for b in RoomKind::ALL {
                if a != b {
                    assert_ne!(a.as_tag(), b.as_tag());
                }
            }
        }
    }
}
