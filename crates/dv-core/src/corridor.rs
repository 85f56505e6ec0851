//! Corridor tracing
//!
//! A corridor runs from the door of its start room, through each waypoint in
//! order, to the door of its end room. Every leg must be horizontal or
//! vertical. Corridor tiles only fill blank cells, so walls, floors, doors
//! and markers already on the map are left as they are.

use tracing::{debug, trace};

use crate::description::{Corridor, DungeonDescription, Point, Room};
use crate::error::{Feature, RenderError};
use crate::grid::Grid;
use crate::room::out_of_bounds;
use crate::tile::Tile;

/// Paint all corridors in description order
pub fn paint_corridors(grid: &mut Grid, desc: &DungeonDescription) -> Result<(), RenderError> {
    debug!(corridors = desc.corridors.len(), "painting corridors");

    for corridor in &desc.corridors {
        let points = corridor_path(desc, corridor)?;
        trace!(id = %corridor.id, points = points.len(), "corridor");

        for leg in points.windows(2) {
            dig_segment(grid, &corridor.id, leg[0], leg[1])?;
        }
    }
    Ok(())
}

/// Resolve a corridor into its polyline: start door, waypoints, end door
///
/// Both rooms are looked up before either door, so a missing room is
/// reported ahead of a missing door.
pub fn corridor_path(
    desc: &DungeonDescription,
    corridor: &Corridor,
) -> Result<Vec<Point>, RenderError> {
    let start_room = find_room(desc, corridor, &corridor.start.room)?;
    let end_room = find_room(desc, corridor, &corridor.end.room)?;
    let start = door_position(start_room, corridor)?;
    let end = door_position(end_room, corridor)?;

    let mut points = Vec::with_capacity(corridor.waypoints.len() + 2);
    points.push(start);
    points.extend_from_slice(&corridor.waypoints);
    points.push(end);
    Ok(points)
}

fn find_room<'a>(
    desc: &'a DungeonDescription,
    corridor: &Corridor,
    room_id: &str,
) -> Result<&'a Room, RenderError> {
    desc.room(room_id).ok_or_else(|| RenderError::UnknownRoom {
        corridor: corridor.id.clone(),
        room: room_id.to_string(),
    })
}

fn door_position(room: &Room, corridor: &Corridor) -> Result<Point, RenderError> {
    room.door_to(&corridor.id)
        .map(|door| door.position)
        .ok_or_else(|| RenderError::UnresolvedDoor {
            corridor: corridor.id.clone(),
            room: room.id.clone(),
        })
}

/// Fill the blank cells of one straight leg, both ends inclusive
fn dig_segment(
    grid: &mut Grid,
    corridor_id: &str,
    from: Point,
    to: Point,
) -> Result<(), RenderError> {
    if from.y != to.y && from.x != to.x {
        return Err(RenderError::InvalidCorridorSegment {
            corridor: corridor_id.to_string(),
            from,
            to,
        });
    }
    for p in [from, to] {
        if !grid.contains(p) {
            return Err(out_of_bounds(grid, Feature::Waypoint, corridor_id, p));
        }
    }

    if from.y == to.y {
        for x in from.x.min(to.x)..=from.x.max(to.x) {
            grid.paint_if_blank(Point::new(x, from.y), Tile::Corridor);
        }
    } else {
        for y in from.y.min(to.y)..=from.y.max(to.y) {
            grid.paint_if_blank(Point::new(from.x, y), Tile::Corridor);
        }
    }
    Ok(())
}
