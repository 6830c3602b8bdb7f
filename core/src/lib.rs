#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use types::*;

mod engine;
mod error;
mod types;

/// Immutable grid shape: `true` marks a clickable cell, `false` a permanently
/// empty one. Fixed for the lifetime of the widget that owns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    active_mask: Array2<bool>,
    active_count: CellCount,
}

impl GridLayout {
    pub fn from_active_mask(active_mask: Array2<bool>) -> Self {
        let active_count = active_mask
            .iter()
            .filter(|&&is_active| is_active)
            .count()
            .try_into()
            .unwrap();
        Self {
            active_mask,
            active_count,
        }
    }

    /// Builds a layout from row-major boolean rows, indexed as `rows[y][x]`.
    ///
    /// All rows must share the same length. A layout with zero rows is valid
    /// and has no cells at all.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if rows.iter().any(|row| row.len() != width) {
            return Err(GridError::InvalidRowShape);
        }
        if width > usize::from(Coord::MAX) || height > usize::from(Coord::MAX) {
            return Err(GridError::OversizedGrid);
        }

        let mut active_mask: Array2<bool> = Array2::default([width, height]);
        for (y, row) in rows.iter().enumerate() {
            for (x, &is_active) in row.iter().enumerate() {
                active_mask[[x, y]] = is_active;
            }
        }

        Ok(Self::from_active_mask(active_mask))
    }

    pub fn from_active_coords(size: Coord2, active_coords: &[Coord2]) -> Result<Self> {
        let mut active_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in active_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GridError::InvalidCoords);
            }
            active_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_active_mask(active_mask))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GridError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.active_mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.active_mask.len().try_into().unwrap()
    }

    pub fn active_count(&self) -> CellCount {
        self.active_count
    }

    pub fn is_active(&self, coords: Coord2) -> bool {
        self[coords]
    }
}

impl Index<Coord2> for GridLayout {
    type Output = bool;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.active_mask[(x as usize, y as usize)]
    }
}

/// Result of a single [`ReplayEngine::register_click`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Precondition failed: the cell is empty, already marked, or the engine
    /// is replaying. The click order is unchanged.
    Ignored,
    Marked,
    /// This click marked the last active cell and the engine switched to
    /// replay.
    ReplayStarted,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Ignored => false,
            Self::Marked => true,
            Self::ReplayStarted => true,
        }
    }
}

/// Result of a single [`ReplayEngine::replay_tick`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The engine was not replaying; nothing happened.
    Idle,
    Retracted,
    /// The oldest click was retracted, the order is now empty, and the engine
    /// accepts clicks again.
    Completed,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Idle => false,
            Self::Retracted => true,
            Self::Completed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let result = GridLayout::from_rows(&[vec![true, true], vec![true]]);
        assert_eq!(result, Err(GridError::InvalidRowShape));
    }

    #[test]
    fn from_rows_counts_active_cells() {
        let layout = GridLayout::from_rows(&[
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();

        assert_eq!(layout.size(), (3, 2));
        assert_eq!(layout.total_cells(), 6);
        assert_eq!(layout.active_count(), 3);
        assert!(layout.is_active((0, 0)));
        assert!(!layout.is_active((1, 0)));
        assert!(layout.is_active((1, 1)));
    }

    #[test]
    fn from_rows_accepts_empty_grid() {
        let layout = GridLayout::from_rows(&[]).unwrap();
        assert_eq!(layout.size(), (0, 0));
        assert_eq!(layout.active_count(), 0);
    }

    #[test]
    fn from_rows_rejects_oversized_grid() {
        let rows = vec![vec![true; 300]];
        assert_eq!(GridLayout::from_rows(&rows), Err(GridError::OversizedGrid));
    }

    #[test]
    fn from_active_coords_rejects_out_of_bounds() {
        let result = GridLayout::from_active_coords((2, 2), &[(2, 0)]);
        assert_eq!(result, Err(GridError::InvalidCoords));
    }
}
