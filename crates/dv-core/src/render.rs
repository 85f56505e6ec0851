//! Pipeline and text output
//!
//! Stages run in a fixed order over one grid:
//! rooms, doors, corridors (blank cells only), entities.

use tracing::debug;

use crate::consts::{FRAME_HORIZONTAL, FRAME_VERTICAL};
use crate::corridor::paint_corridors;
use crate::description::DungeonDescription;
use crate::entity::paint_entities;
use crate::error::RenderError;
use crate::grid::Grid;
use crate::room::{paint_doors, paint_rooms};

/// Legend printed under every map.
///
/// `S` appears twice (safe room and slime enemy); the map itself never
/// distinguishes the two, so both lines are kept.
pub const LEGEND: [&str; 14] = [
    "Legend:",
    "# - Wall",
    ". - Floor",
    "D - Door",
    ": - Corridor",
    "E - Entrance room",
    "H - Hallway",
    "T - Treasure room",
    "M - Monster room",
    "P - Puzzle room",
    "S - Safe room",
    "C - Corridor room",
    "B - Boss room/Boss monster",
    "S - Slime enemy",
];

/// Run every painting stage and return the finished grid
pub fn paint(desc: &DungeonDescription) -> Result<Grid, RenderError> {
    let mut grid = Grid::new(desc.grid_size.width, desc.grid_size.height)?;
    debug!(name = %desc.name, width = grid.width(), height = grid.height(), "rendering dungeon");

    paint_rooms(&mut grid, &desc.rooms)?;
    paint_doors(&mut grid, &desc.rooms)?;
    paint_corridors(&mut grid, desc)?;
    paint_entities(&mut grid, &desc.entities)?;
    Ok(grid)
}

/// Frame a painted grid and append the legend
pub fn serialize(grid: &Grid, name: &str) -> String {
    let border = FRAME_HORIZONTAL.to_string().repeat(grid.width() + 2);

    let mut lines = Vec::with_capacity(grid.height() + LEGEND.len() + 4);
    lines.push(format!("ASCII Representation of {name}:"));
    lines.push(border.clone());
    for row in grid.to_lines() {
        lines.push(format!("{FRAME_VERTICAL}{row}{FRAME_VERTICAL}"));
    }
    lines.push(border);
    lines.push(String::new());
    lines.extend(LEGEND.iter().map(|l| l.to_string()));

    lines.join("\n")
}

/// Render a description to its framed ASCII map plus legend
pub fn render(desc: &DungeonDescription) -> Result<String, RenderError> {
    let grid = paint(desc)?;
    Ok(serialize(&grid, &desc.name))
}
