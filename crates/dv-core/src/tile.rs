//! Map cell contents

use crate::consts::{BLANK, CORRIDOR, DOOR, FLOOR, WALL};

/// What occupies a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Blank,
    Wall,
    Floor,
    Door,
    Corridor,
    /// Room type marker at a room's center
    RoomMarker(char),
    /// Monster or other occupant
    EntityMarker(char),
}

impl Tile {
    /// ASCII symbol for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Blank => BLANK,
            Tile::Wall => WALL,
            Tile::Floor => FLOOR,
            Tile::Door => DOOR,
            Tile::Corridor => CORRIDOR,
            Tile::RoomMarker(c) | Tile::EntityMarker(c) => *c,
        }
    }

    pub const fn is_blank(&self) -> bool {
        matches!(self, Tile::Blank)
    }
}
