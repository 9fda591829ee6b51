use serde::{Deserialize, Serialize};

/// A single board position: mine flag, revealed flag, adjacent-mine count.
///
/// Pure value holder. `adjacent_mines` is computed once during board setup
/// and never changes afterwards; `revealed` only ever transitions false→true.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) revealed: bool,
    pub(crate) adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Number of mines among the up-to-8 grid neighbors. Computed for mine
    /// cells too, although it never reaches a renderer.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    /// Renderer-facing view; the renderer decides glyphs.
    pub const fn display(self) -> CellDisplay {
        match (self.revealed, self.is_mine) {
            (false, _) => CellDisplay::Hidden,
            (true, false) => CellDisplay::Clear(self.adjacent_mines),
            (true, true) => CellDisplay::MineHit,
        }
    }
}

/// The three display states a renderer maps to its own symbols.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellDisplay {
    /// Not revealed yet.
    Hidden,
    /// Revealed safe cell, carrying its adjacent-mine count.
    Clear(u8),
    /// Revealed mine, i.e. the losing step.
    MineHit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_blank() {
        let cell = Cell::default();
        assert!(!cell.is_mine());
        assert!(!cell.is_revealed());
        assert_eq!(cell.adjacent_mines(), 0);
    }

    #[test]
    fn display_maps_the_three_states() {
        let hidden = Cell::default();
        assert_eq!(hidden.display(), CellDisplay::Hidden);

        let clear = Cell {
            revealed: true,
            adjacent_mines: 3,
            ..Cell::default()
        };
        assert_eq!(clear.display(), CellDisplay::Clear(3));

        let hit = Cell {
            is_mine: true,
            revealed: true,
            ..Cell::default()
        };
        assert_eq!(hit.display(), CellDisplay::MineHit);
    }

    #[test]
    fn hidden_mine_renders_as_hidden() {
        let cell = Cell {
            is_mine: true,
            ..Cell::default()
        };
        assert_eq!(cell.display(), CellDisplay::Hidden);
    }
}
