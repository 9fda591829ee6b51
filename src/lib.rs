#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod types;

/// Board dimensions and mine count, fixed at construction.
///
/// The classic reference setup is `BoardConfig::new(5, 5, 5)`; nothing in the
/// engine assumes those literals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        saturating_area(self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_cells_is_the_grid_area() {
        assert_eq!(BoardConfig::new(5, 5, 5).total_cells(), 25);
        assert_eq!(BoardConfig::new(1, 1, 0).total_cells(), 1);
    }

    #[test]
    fn largest_grid_area_fits_the_count_type() {
        assert_eq!(BoardConfig::new(Coord::MAX, Coord::MAX, 0).total_cells(), 65025);
    }
}
