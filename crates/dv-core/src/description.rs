//! Dungeon description (the parsed input document)
//!
//! Plain data: the loader builds it once and the painters only borrow it.
//! Field names follow the snake_case JSON written by the dungeon generator;
//! the camelCase spellings are accepted as aliases.

use serde::{Deserialize, Serialize};

/// Name used in the title line when a description does not carry one
pub const DEFAULT_DUNGEON_NAME: &str = "Dungeon";

fn default_dungeon_name() -> String {
    DEFAULT_DUNGEON_NAME.to_string()
}

/// A grid coordinate, serialized as `[x, y]`
///
/// Coordinates are signed so that negative input survives decoding and is
/// reported as out of bounds by the painters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct Point {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<[i64; 2]> for Point {
    fn from([x, y]: [i64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [i64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width/height pair, serialized as `[width, height]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct Size {
    pub width: i64,
    pub height: i64,
}

impl Size {
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

impl From<[i64; 2]> for Size {
    fn from([width, height]: [i64; 2]) -> Self {
        Self { width, height }
    }
}

impl From<Size> for [i64; 2] {
    fn from(s: Size) -> Self {
        [s.width, s.height]
    }
}

/// Root of a dungeon description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonDescription {
    /// Title shown above the map
    #[serde(
        rename = "dungeon_name",
        alias = "dungeonName",
        default = "default_dungeon_name"
    )]
    pub name: String,
    #[serde(alias = "gridSize")]
    pub grid_size: Size,
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl DungeonDescription {
    /// Create an empty description with the default name
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            name: default_dungeon_name(),
            grid_size: Size::new(width, height),
            rooms: Vec::new(),
            corridors: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Find a room by identifier (first match in description order)
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}

/// A rectangular room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Top-left corner
    pub position: Point,
    pub size: Size,
    #[serde(default)]
    pub doors: Vec<Door>,
}

impl Room {
    pub fn new(id: impl Into<String>, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            id: id.into(),
            position: Point::new(x, y),
            size: Size::new(width, height),
            doors: Vec::new(),
        }
    }

    /// Add a door linking this room to a corridor
    pub fn with_door(mut self, x: i64, y: i64, connects_to: impl Into<String>) -> Self {
        self.doors.push(Door {
            position: Point::new(x, y),
            connects_to: connects_to.into(),
        });
        self
    }

    /// Center cell, rounding toward the top-left
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.width / 2,
            self.position.y + self.size.height / 2,
        )
    }

    /// Marker painted at the center: the identifier's first character, upper-cased
    pub fn marker(&self) -> Option<char> {
        self.id.chars().next().and_then(|c| c.to_uppercase().next())
    }

    /// The first door whose `connects_to` names the given corridor
    pub fn door_to(&self, corridor_id: &str) -> Option<&Door> {
        self.doors.iter().find(|d| d.connects_to == corridor_id)
    }
}

/// A door on (or inside) a room's wall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub position: Point,
    /// Identifier of the corridor this door opens onto
    #[serde(alias = "connectsTo")]
    pub connects_to: String,
}

/// One end of a corridor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorridorEnd {
    /// Identifier of the room holding the door
    pub room: String,
}

/// A corridor joining two rooms' doors through optional waypoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub id: String,
    pub start: CorridorEnd,
    pub end: CorridorEnd,
    #[serde(default)]
    pub waypoints: Vec<Point>,
}

impl Corridor {
    pub fn new(
        id: impl Into<String>,
        start_room: impl Into<String>,
        end_room: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start: CorridorEnd {
                room: start_room.into(),
            },
            end: CorridorEnd {
                room: end_room.into(),
            },
            waypoints: Vec::new(),
        }
    }

    pub fn with_waypoint(mut self, x: i64, y: i64) -> Self {
        self.waypoints.push(Point::new(x, y));
        self
    }
}

/// A monster, item or other occupant drawn on top of the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub position: Point,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, alias = "isBoss")]
    pub is_boss: bool,
}

impl Entity {
    pub fn new(kind: impl Into<String>, x: i64, y: i64) -> Self {
        Self {
            position: Point::new(x, y),
            kind: kind.into(),
            is_boss: false,
        }
    }

    pub fn boss(kind: impl Into<String>, x: i64, y: i64) -> Self {
        Self {
            is_boss: true,
            ..Self::new(kind, x, y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_center_floors() {
        let room = Room::new("entrance", 1, 1, 3, 3);
        assert_eq!(room.center(), Point::new(2, 2));

        let room = Room::new("hall", 0, 0, 4, 5);
        assert_eq!(room.center(), Point::new(2, 2));

        let room = Room::new("x", 3, 7, 1, 1);
        assert_eq!(room.center(), Point::new(3, 7));
    }

    #[test]
    fn test_room_marker() {
        assert_eq!(Room::new("treasure", 0, 0, 3, 3).marker(), Some('T'));
        assert_eq!(Room::new("Boss", 0, 0, 3, 3).marker(), Some('B'));
        assert_eq!(Room::new("", 0, 0, 3, 3).marker(), None);
    }

    #[test]
    fn test_door_to_first_match_wins() {
        let room = Room::new("a", 0, 0, 5, 5)
            .with_door(4, 2, "c1")
            .with_door(2, 4, "c1")
            .with_door(0, 2, "c2");

        assert_eq!(room.door_to("c1").map(|d| d.position), Some(Point::new(4, 2)));
        assert_eq!(room.door_to("c2").map(|d| d.position), Some(Point::new(0, 2)));
        assert!(room.door_to("c3").is_none());
    }

    #[test]
    fn test_room_lookup() {
        let mut desc = DungeonDescription::new(20, 10);
        desc.rooms.push(Room::new("a", 0, 0, 3, 3));
        desc.rooms.push(Room::new("b", 5, 0, 3, 3));

        assert_eq!(desc.room("b").map(|r| r.position), Some(Point::new(5, 0)));
        assert!(desc.room("c").is_none());
        assert_eq!(desc.name, DEFAULT_DUNGEON_NAME);
    }

    #[test]
    fn test_boss_entity() {
        let e = Entity::boss("dragon", 1, 2);
        assert!(e.is_boss);
        assert_eq!(e.kind, "dragon");
        assert!(!Entity::new("slime", 0, 0).is_boss);
    }
}
