//! Tests for neighbor counting, marching-squares masks and their edge conventions

#[cfg(test)]
mod tests {
    use cellgrid::algorithm::Direction;
    use cellgrid::{Grid, Result};

    fn is_true(cell: &bool) -> bool {
        *cell
    }

    // Tests the clockwise bit assignment starting at north
    // Verified by assigning West to bit 2
    #[test]
    fn test_direction_bits_are_clockwise_from_north() {
        let bits: Vec<u8> = Direction::ALL.iter().map(|d| d.bit()).collect();
        assert_eq!(bits, vec![1, 2, 4, 8, 16, 32, 64, 128]);
        assert_eq!(Direction::North.offset(), (0, 1));
        assert_eq!(Direction::East.offset(), (1, 0));
        assert_eq!(Direction::South.offset(), (0, -1));
        assert_eq!(Direction::West.offset(), (-1, 0));
        assert_eq!(Direction::West.bit(), 0b0100_0000);
        assert!(Direction::SouthEast.is_set(0b0000_1000));
        assert!(!Direction::SouthEast.is_set(0b1111_0111));
    }

    // Tests every off-grid neighbor counts as a match on a single cell
    // Verified by skipping off-grid neighbors in the count
    #[test]
    fn test_single_cell_count_is_eight() -> Result<()> {
        let grid = Grid::from_elem(1, 1, false)?;
        assert_eq!(grid.neighbor_count(0, 0, is_true), 8);
        assert_eq!(grid.neighbor_count(0, 0, |_| false), 8);
        assert_eq!(grid.neighbor_count(0, 0, |_| true), 8);
        Ok(())
    }

    // Tests off-grid neighbors never set a mask bit on a single cell
    // Verified by setting bits for off-grid neighbors
    #[test]
    fn test_single_cell_mask_is_zero() -> Result<()> {
        let grid = Grid::from_elem(1, 1, true)?;
        assert_eq!(grid.neighbor_mask(0, 0, |_| true), 0);
        Ok(())
    }

    // Tests an interior cell with no matching neighbors counts zero
    // Verified by including the center cell in the count
    #[test]
    fn test_interior_count_without_matches_is_zero() -> Result<()> {
        let mut grid = Grid::from_elem(5, 5, false)?;
        grid.set(2, 2, true)?;
        assert_eq!(grid.neighbor_count(2, 2, is_true), 0);
        Ok(())
    }

    // Tests edge and corner cells pick up off-grid matches
    // Verified by treating off-grid neighbors as non-matching
    #[test]
    fn test_edge_cells_count_off_grid_neighbors() -> Result<()> {
        let grid = Grid::from_elem(4, 4, false)?;
        assert_eq!(grid.neighbor_count(0, 0, is_true), 5);
        assert_eq!(grid.neighbor_count(3, 3, is_true), 5);
        assert_eq!(grid.neighbor_count(1, 0, is_true), 3);
        assert_eq!(grid.neighbor_count(0, 2, is_true), 3);
        assert_eq!(grid.neighbor_count(1, 1, is_true), 0);
        Ok(())
    }

    // Tests counts combine in-grid matches with off-grid neighbors
    // Verified by counting each off-grid neighbor twice
    #[test]
    fn test_count_mixes_matches_and_border() -> Result<()> {
        let mut grid = Grid::from_elem(3, 3, false)?;
        grid.set(1, 0, true)?;
        grid.set(1, 1, true)?;
        assert_eq!(grid.neighbor_count(0, 0, is_true), 7);
        assert_eq!(grid.neighbor_count(1, 1, is_true), 1);
        Ok(())
    }

    // Tests each neighbor lands on its documented bit
    // Verified by swapping the north and south offsets
    #[test]
    fn test_mask_bit_per_direction() -> Result<()> {
        for direction in Direction::ALL {
            let mut grid = Grid::from_elem(3, 3, false)?;
            if let Some((nx, ny)) = direction.neighbor_of(1, 1) {
                grid.set(nx, ny, true)?;
            }
            assert_eq!(grid.neighbor_mask(1, 1, is_true), direction.bit());
        }
        Ok(())
    }

    // Tests a corner cell only reports its in-grid neighbors
    // Verified by wrapping neighbor coordinates around the grid
    #[test]
    fn test_corner_mask() -> Result<()> {
        let grid = Grid::from_elem(3, 3, true)?;
        let expected = Direction::North.bit() | Direction::NorthEast.bit() | Direction::East.bit();
        assert_eq!(grid.neighbor_mask(0, 0, is_true), expected);

        let expected = Direction::South.bit() | Direction::SouthWest.bit() | Direction::West.bit();
        assert_eq!(grid.neighbor_mask(2, 2, is_true), expected);

        assert_eq!(grid.neighbor_mask(1, 1, is_true), 0xFF);
        Ok(())
    }

    // Tests whole-grid masks agree with single-cell masks
    // Verified by transposing coordinates in neighbor_masks
    #[test]
    fn test_neighbor_masks_matches_single_cell() -> Result<()> {
        let grid = Grid::from_fn(5, 4, |x, y| (x * 3 + y * 5) % 4 == 0)?;
        let masks = grid.neighbor_masks(is_true);
        assert_eq!(masks.dimensions(), (5, 4));
        for ((x, y), mask) in masks.indexed_iter() {
            assert_eq!(*mask, grid.neighbor_mask(x, y, is_true));
        }
        Ok(())
    }

    // Tests neighbor coordinates below zero or past usize::MAX are absent
    // Verified by casting to isize and adding the offset unchecked
    #[test]
    fn test_neighbor_of_stops_at_numeric_limits() {
        assert_eq!(Direction::North.neighbor_of(2, 3), Some((2, 4)));
        assert_eq!(Direction::West.neighbor_of(0, 3), None);
        assert_eq!(Direction::South.neighbor_of(2, 0), None);
        assert_eq!(Direction::East.neighbor_of(usize::MAX, 0), None);
        assert_eq!(Direction::NorthEast.neighbor_of(5, usize::MAX), None);
        assert_eq!(
            Direction::SouthWest.neighbor_of(isize::MAX as usize, 1),
            Some((isize::MAX as usize - 1, 0))
        );
    }

    // Tests centers far outside the grid see only off-grid neighbors
    // Verified by wrapping neighbor coordinates back onto the grid
    #[test]
    fn test_far_off_grid_center_does_not_alias() -> Result<()> {
        let grid = Grid::from_elem(3, 3, true)?;
        for center in [isize::MAX as usize, usize::MAX] {
            assert_eq!(grid.neighbor_count(center, 0, |_| false), 8);
            assert_eq!(grid.neighbor_mask(center, 0, is_true), 0);
            assert_eq!(grid.neighbor_mask(0, center, is_true), 0);
        }
        Ok(())
    }

    // Tests counts never exceed the neighborhood size
    // Verified by counting the center cell
    #[test]
    fn test_count_range() -> Result<()> {
        let grid = Grid::from_fn(6, 5, |x, y| (x + 2 * y) % 3 != 0)?;
        for ((x, y), _) in grid.indexed_iter() {
            assert!(grid.neighbor_count(x, y, is_true) <= 8);
            assert!(grid.neighbor_count(x, y, |_| true) == 8);
        }
        Ok(())
    }
}
