use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owns the grid of [`Cell`]s for one game: mine placement, the step/cascade
/// reveal operations, and the win/hint/render queries. Constructed empty,
/// mined once via [`Board::initialize`] (or [`Board::with_mines`]), then
/// driven by an external turn loop until a mine is hit or the board is won.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    grid: Array2<Cell>,
}

impl Board {
    /// Creates an empty, unmined board for `config`.
    ///
    /// Fails with [`GameError::TooManyMines`] unless `mines < rows * cols`;
    /// a full board would make rejection-sampling placement loop forever.
    pub fn new(config: BoardConfig) -> Result<Self> {
        if config.mines >= config.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(Self {
            grid: Array2::default(nd(config.size())),
            config,
        })
    }

    /// Builds a board with mines at exactly the given positions, for
    /// deterministic layouts in tests and embedders. The mine count is
    /// derived from the distinct positions; adjacency counts are computed
    /// immediately.
    pub fn with_mines(rows: Coord, cols: Coord, mines: &[Coord2]) -> Result<Self> {
        let mut grid: Array2<Cell> = Array2::default(nd((rows, cols)));

        for &coords in mines {
            if coords.0 >= rows || coords.1 >= cols {
                return Err(GameError::InvalidCoords);
            }
            grid[nd(coords)].is_mine = true;
        }

        let placed = grid.iter().filter(|cell| cell.is_mine).count() as CellCount;
        let config = BoardConfig::new(rows, cols, placed);
        if config.mines >= config.total_cells() {
            return Err(GameError::TooManyMines);
        }

        let mut board = Self { config, grid };
        board.recount_adjacency();
        Ok(board)
    }

    /// Places the configured number of mines at distinct uniformly-random
    /// positions (rejection sampling), then computes every cell's
    /// adjacent-mine count. Re-initializing discards any previous layout.
    ///
    /// The randomness source is injected so callers can seed it for
    /// deterministic games and tests.
    pub fn initialize<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid.fill(Cell::default());

        let mut placed: CellCount = 0;
        while placed < self.config.mines {
            let row = rng.random_range(0..self.config.rows);
            let col = rng.random_range(0..self.config.cols);
            let cell = &mut self.grid[nd((row, col))];
            if !cell.is_mine {
                cell.is_mine = true;
                placed += 1;
            }
        }

        self.recount_adjacency();
        log::debug!(
            "placed {} mines on a {}x{} board",
            placed,
            self.config.rows,
            self.config.cols
        );
    }

    fn recount_adjacency(&mut self) {
        let size = self.size();
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                let count = moore_neighbors((row, col), size)
                    .filter(|&pos| self.grid[nd(pos)].is_mine)
                    .count() as u8;
                self.grid[nd((row, col))].adjacent_mines = count;
            }
        }
    }

    /// Reveals the cell at `coords`. Returns `Ok(true)` when the cell is a
    /// mine (loss), with no other cell touched. Stepping on a zero-count
    /// cell triggers the cascade reveal; a numbered cell reveals itself
    /// alone.
    pub fn step(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;

        let cell = &mut self.grid[nd(coords)];
        cell.revealed = true;
        let stepped = *cell;

        if stepped.is_mine {
            log::debug!("stepped on a mine at {:?}", coords);
            return Ok(true);
        }
        if stepped.adjacent_mines == 0 {
            self.cascade(coords);
        }
        Ok(false)
    }

    /// Breadth-first flood fill from a zero-count cell. Every dequeued
    /// position is revealed before its neighbors are enumerated, so each
    /// cell is expanded at most once and the loop terminates on the finite
    /// grid. Zero-count non-mine neighbors join the frontier; numbered
    /// neighbors are revealed in place, stopping the fill at the border of
    /// the mine region. Mines are never auto-revealed.
    fn cascade(&mut self, start: Coord2) {
        let size = self.size();
        let mut frontier = VecDeque::from([start]);

        while let Some(coords) = frontier.pop_front() {
            self.reveal(coords);

            for neighbor in moore_neighbors(coords, size) {
                let cell = self.grid[nd(neighbor)];
                if cell.revealed {
                    continue;
                }
                if cell.adjacent_mines == 0 && !cell.is_mine {
                    frontier.push_back(neighbor);
                } else {
                    self.reveal(neighbor);
                }
            }
        }
    }

    /// No-op on mines and on already-revealed cells; `coords` is in bounds
    /// by construction (validated step target or neighbor enumeration).
    fn reveal(&mut self, coords: Coord2) {
        let cell = &mut self.grid[nd(coords)];
        if cell.is_mine || cell.revealed {
            return;
        }
        cell.revealed = true;
        log::trace!("revealed {:?}, {} adjacent mines", coords, cell.adjacent_mines);
    }

    /// True iff every non-mine cell is revealed; mines need not be.
    pub fn is_won(&self) -> bool {
        self.grid.iter().all(|cell| cell.is_mine || cell.revealed)
    }

    /// Positions of all mines, in row-major order. A deliberate
    /// spoiler/debug capability the renderer may surface each turn.
    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.grid
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// Read-only render data for one cell; see [`Cell::display`].
    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.grid[nd(coords)])
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.config.rows && coords.1 < self.config.cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.grid.iter().filter(|cell| cell.revealed).count() as CellCount
    }
}
