//! Room and door rasterization
//!
//! Rooms are painted in description order: border cells become walls, the
//! rest floor, then the center cell takes the room's marker. Later rooms
//! overwrite earlier ones where they overlap. Doors are stamped afterwards,
//! over whatever the rooms left behind.

use tracing::{debug, trace};

use crate::description::{Point, Room};
use crate::error::{Feature, RenderError};
use crate::grid::Grid;
use crate::tile::Tile;

/// Paint every room's walls, floor and center marker
pub fn paint_rooms(grid: &mut Grid, rooms: &[Room]) -> Result<(), RenderError> {
    debug!(rooms = rooms.len(), "painting rooms");

    for room in rooms {
        paint_room(grid, room)?;
    }
    Ok(())
}

fn paint_room(grid: &mut Grid, room: &Room) -> Result<(), RenderError> {
    let marker = room.marker().ok_or_else(|| {
        RenderError::MalformedDescription("room with an empty id".to_string())
    })?;

    let (w, h) = (room.size.width, room.size.height);
    if w < 1 || h < 1 {
        return Err(RenderError::InvalidDimensions {
            target: format!("room '{}'", room.id),
            width: w,
            height: h,
        });
    }

    let (lx, ly) = (room.position.x, room.position.y);
    let (hx, hy) = (lx.saturating_add(w - 1), ly.saturating_add(h - 1));

    // The whole rectangle must fit; rooms are never clipped.
    for corner in [Point::new(lx, ly), Point::new(hx, hy)] {
        if !grid.contains(corner) {
            return Err(out_of_bounds(grid, Feature::Room, &room.id, corner));
        }
    }

    trace!(id = %room.id, x = lx, y = ly, w, h, "room");

    for y in ly..=hy {
        for x in lx..=hx {
            let on_border = x == lx || x == hx || y == ly || y == hy;
            let tile = if on_border { Tile::Wall } else { Tile::Floor };
            grid.set(Point::new(x, y), tile);
        }
    }

    grid.set(room.center(), Tile::RoomMarker(marker));
    Ok(())
}

/// Stamp every door, rooms first then doors within a room, over any content
pub fn paint_doors(grid: &mut Grid, rooms: &[Room]) -> Result<(), RenderError> {
    let count: usize = rooms.iter().map(|r| r.doors.len()).sum();
    debug!(doors = count, "painting doors");

    for room in rooms {
        for door in &room.doors {
            if !grid.set(door.position, Tile::Door) {
                return Err(out_of_bounds(grid, Feature::Door, &room.id, door.position));
            }
        }
    }
    Ok(())
}

pub(crate) fn out_of_bounds(
    grid: &Grid,
    feature: Feature,
    id: &str,
    position: Point,
) -> RenderError {
    RenderError::OutOfBounds {
        feature,
        id: id.to_string(),
        position,
        width: grid.width(),
        height: grid.height(),
    }
}
