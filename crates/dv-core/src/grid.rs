//! The map buffer
//!
//! A height x width array of tiles stored row-major. Every painting stage
//! mutates the same buffer in place; coordinates are `(column, row)`.

use crate::description::Point;
use crate::error::RenderError;
use crate::tile::Tile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Allocate a grid with every cell blank
    pub fn new(width: i64, height: i64) -> Result<Self, RenderError> {
        let invalid = || RenderError::InvalidDimensions {
            target: "grid".to_string(),
            width,
            height,
        };
        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;
        let len = w.checked_mul(h).ok_or_else(invalid)?;

        // A size the allocator cannot hold is an invalid dimension too
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid())?;
        cells.resize(len, Tile::Blank);

        Ok(Self {
            width: w,
            height: h,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a point lies on the grid
    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    fn index(&self, p: Point) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Tile at a point, `None` when off the grid
    pub fn get(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Overwrite a cell unconditionally. Returns false when off the grid.
    pub fn set(&mut self, p: Point, tile: Tile) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Write a tile only into a blank cell. Returns true if the cell changed.
    pub fn paint_if_blank(&mut self, p: Point, tile: Tile) -> bool {
        match self.index(p) {
            Some(i) if self.cells[i].is_blank() => {
                self.cells[i] = tile;
                true
            }
            _ => false,
        }
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width)
    }

    /// Rows as text, one string per row
    pub fn to_lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(Tile::symbol).collect())
            .collect()
    }
}
