//! dv-core: ASCII rasterizer for dungeon descriptions
//!
//! Paints rooms, doors, corridors and entities onto a character grid and
//! frames the result with a legend. No I/O: callers hand in an already
//! decoded [`DungeonDescription`] and get text back.
//!
//! ```
//! use dv_core::{render, DungeonDescription, Room};
//!
//! let mut desc = DungeonDescription::new(5, 5);
//! desc.rooms.push(Room::new("hall", 0, 0, 5, 5));
//! let text = render(&desc).unwrap();
//! assert!(text.contains("|#.H.#|"));
//! ```

pub mod consts;
pub mod corridor;
pub mod description;
pub mod entity;
pub mod grid;
pub mod room;

mod error;
mod render;
mod tile;

pub use consts::*;
pub use corridor::{corridor_path, paint_corridors};
pub use description::{
    Corridor, CorridorEnd, DEFAULT_DUNGEON_NAME, Door, DungeonDescription, Entity, Point, Room,
    Size,
};
pub use entity::{entity_symbol, paint_entities};
pub use error::{Feature, RenderError};
pub use grid::Grid;
pub use render::{LEGEND, paint, render, serialize};
pub use room::{paint_doors, paint_rooms};
pub use tile::Tile;
