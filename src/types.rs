/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Board position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Converts a position to the index form `ndarray` expects.
pub(crate) const fn nd(coords: Coord2) -> [usize; 2] {
    [coords.0 as usize, coords.1 as usize]
}

pub(crate) const fn saturating_area(rows: Coord, cols: Coord) -> CellCount {
    (rows as CellCount).saturating_mul(cols as CellCount)
}

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the in-bounds Moore neighborhood of `center` on a
/// `bounds.0 x bounds.1` grid. The center itself is never yielded.
pub fn moore_neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let row = center.0.checked_add_signed(dr)?;
        let col = center.1.checked_add_signed(dc)?;
        (row < bounds.0 && col < bounds.1).then_some((row, col))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn collect(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        moore_neighbors(center, bounds).collect()
    }

    #[test]
    fn center_cell_has_eight_neighbors() {
        assert_eq!(collect((1, 1), (3, 3)).len(), 8);
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let mut neighbors = collect((0, 0), (3, 3));
        neighbors.sort_unstable();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        assert_eq!(collect((0, 1), (3, 3)).len(), 5);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(collect((0, 0), (1, 1)).len(), 0);
    }
}
