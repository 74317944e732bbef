//! The world map.
//!
//! A [`Grid`] is a rectangular array of cells, each holding either the id of a
//! [`Location`](crate::Location) or nothing (an impassable square). It never
//! changes once the world is loaded.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trek_data::SENTINEL;

use crate::{Direction, LocationId};

/// Reasons raw map rows can't be turned into a [`Grid`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("grid rows have no cells")]
    NoColumns,
    #[error("grid row {row} has {found} cells, expected {expected}")]
    Jagged { row: usize, found: usize, expected: usize },
    #[error("grid cell ({x}, {y}) holds {value}, expected a location index or -1")]
    BadCell { x: usize, y: usize, value: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Option<LocationId>>>,
    width: usize,
}

impl Grid {
    /// Build a grid from raw map rows, where `SENTINEL` marks an empty cell.
    ///
    /// # Errors
    /// - if there are no rows or no columns, the rows differ in length, or a cell is below `SENTINEL`
    pub fn from_raw(raw: &[Vec<i64>]) -> Result<Grid, GridError> {
        let first = raw.first().ok_or(GridError::Empty)?;
        let width = first.len();
        if width == 0 {
            return Err(GridError::NoColumns);
        }

        let mut rows = Vec::with_capacity(raw.len());
        for (y, raw_row) in raw.iter().enumerate() {
            if raw_row.len() != width {
                return Err(GridError::Jagged {
                    row: y,
                    found: raw_row.len(),
                    expected: width,
                });
            }
            let mut row = Vec::with_capacity(width);
            for (x, &value) in raw_row.iter().enumerate() {
                let cell = if value == SENTINEL {
                    None
                } else {
                    let index = usize::try_from(value).map_err(|_| GridError::BadCell { x, y, value })?;
                    Some(LocationId(index))
                };
                row.push(cell);
            }
            rows.push(row);
        }
        Ok(Grid { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Location id stored at (x, y), or `None` if the cell is out of bounds or impassable.
    pub fn cell(&self, x: usize, y: usize) -> Option<LocationId> {
        self.rows.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// True if (x, y) is inside the grid and holds a location.
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some()
    }

    /// Coordinates one step from (x, y) in `direction`, if they are still inside the grid.
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (nx, ny) = direction.step(x, y)?;
        (nx < self.width && ny < self.height()).then_some((nx, ny))
    }

    /// Like [`Grid::neighbor`], but only if the neighboring cell holds a location.
    pub fn open_neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        self.neighbor(x, y, direction)
            .filter(|&(nx, ny)| self.is_open(nx, ny))
    }
}
