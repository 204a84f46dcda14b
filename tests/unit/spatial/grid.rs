//! Tests for grid construction, addressing and ownership of cells

#[cfg(test)]
mod tests {
    use cellgrid::io::configuration::MAX_GRID_DIMENSION;
    use cellgrid::{Grid, GridError, Result};
    use std::rc::Rc;

    // Tests zero-sized and oversized grids are refused
    // Verified by removing the dimension validation
    #[test]
    fn test_new_rejects_invalid_dimensions() {
        assert!(matches!(
            Grid::<u8>::new(0, 4),
            Err(GridError::InvalidDimensions { width: 0, .. })
        ));
        assert!(matches!(
            Grid::<u8>::new(4, 0),
            Err(GridError::InvalidDimensions { height: 0, .. })
        ));
        assert!(Grid::<u8>::new(MAX_GRID_DIMENSION + 1, 1).is_err());
    }

    // Tests default initialization and reported size
    // Verified by swapping width and height in the backing shape
    #[test]
    fn test_new_is_default_initialized() -> Result<()> {
        let grid = Grid::<u32>::new(7, 3)?;
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.dimensions(), (7, 3));
        assert_eq!(grid.len(), 21);
        assert!(!grid.is_empty());
        assert!(grid.iter().all(|&cell| cell == 0));
        assert_eq!(grid.as_array().dim(), (3, 7));
        Ok(())
    }

    // Tests coordinate and offset conversions are inverses over the whole grid
    // Verified by computing the offset as x * height + y
    #[test]
    fn test_index_and_coords_round_trip() -> Result<()> {
        let grid = Grid::<u8>::new(7, 5)?;
        for y in 0..5 {
            for x in 0..7 {
                let offset = grid.index_of(x, y);
                assert_eq!(offset, Some(y * 7 + x));
                assert_eq!(offset.map(|i| grid.coords_of(i)), Some((x, y)));
            }
        }
        for offset in 0..grid.len() {
            let (x, y) = grid.coords_of(offset);
            assert_eq!(grid.index_of(x, y), Some(offset));
        }
        Ok(())
    }

    // Tests the checked conversion refuses invalid coordinates
    // Verified by dropping the bounds check in index_of
    #[test]
    fn test_index_of_rejects_invalid_coordinates() -> Result<()> {
        let grid = Grid::<u8>::new(5, 4)?;
        assert_eq!(grid.index_of(5, 0), None);
        assert_eq!(grid.index_of(0, 4), None);
        assert_eq!(grid.checked_coords_of(20), None);
        assert_eq!(grid.checked_coords_of(19), Some((4, 3)));
        Ok(())
    }

    // Tests the permissive conversion still computes an offset
    // Verified by returning zero for invalid input
    #[test]
    fn test_index_of_unchecked_is_permissive() -> Result<()> {
        let grid = Grid::<u8>::new(5, 4)?;
        assert_eq!(grid.index_of_unchecked(3, 2), 13);
        assert_eq!(grid.index_of_unchecked(5, 0), 5);
        assert_eq!(grid.index_of_unchecked(1, 4), 21);
        Ok(())
    }

    // Tests signed validity accepts exactly [0,width) x [0,height)
    // Verified by using <= in the upper bound comparison
    #[test]
    fn test_is_valid_bounds() -> Result<()> {
        let grid = Grid::<u8>::new(3, 2)?;
        assert!(grid.is_valid(0, 0));
        assert!(grid.is_valid(2, 1));
        assert!(!grid.is_valid(-1, 0));
        assert!(!grid.is_valid(0, -1));
        assert!(!grid.is_valid(3, 0));
        assert!(!grid.is_valid(0, 2));
        assert!(grid.contains(2, 1));
        assert!(!grid.contains(3, 1));
        Ok(())
    }

    // Tests set writes one cell and refuses out-of-bounds writes without mutation
    // Verified by clamping the coordinate in set
    #[test]
    fn test_set_and_get() -> Result<()> {
        let mut grid = Grid::<u8>::new(4, 4)?;
        grid.set(1, 2, 9)?;
        assert_eq!(grid.get(1, 2), Some(&9));
        assert_eq!(grid.get(2, 1), Some(&0));
        assert_eq!(grid.get_at(9), Some(&9));

        let before = grid.checksum();
        assert!(matches!(
            grid.set(4, 0, 1),
            Err(GridError::CoordinateOutOfBounds { x: 4, y: 0, .. })
        ));
        assert_eq!(grid.checksum(), before);
        assert_eq!(grid.get(4, 0), None);
        Ok(())
    }

    // Tests offset access is row-major
    // Verified by reading offsets column-major
    #[test]
    fn test_from_vec_is_row_major() -> Result<()> {
        let grid = Grid::from_vec(3, 2, (0..6).collect())?;
        assert_eq!(grid.get(2, 0), Some(&2));
        assert_eq!(grid.get(0, 1), Some(&3));
        assert_eq!(grid.get(2, 1), Some(&5));
        assert_eq!(grid.get_at(4), Some(&4));
        assert_eq!(grid.into_values(), vec![0, 1, 2, 3, 4, 5]);
        Ok(())
    }

    // Tests mismatched backing data is refused
    // Verified by truncating the input instead of failing
    #[test]
    fn test_from_vec_rejects_wrong_length() {
        assert!(matches!(
            Grid::from_vec(3, 2, vec![0; 5]),
            Err(GridError::ShapeMismatch {
                expected: 6,
                actual: 5,
                ..
            })
        ));
    }

    // Tests generator construction receives (x, y) in that order
    // Verified by passing (y, x) to the generator
    #[test]
    fn test_from_fn_coordinates() -> Result<()> {
        let grid = Grid::from_fn(4, 3, |x, y| x * 10 + y)?;
        assert_eq!(grid.get(3, 2), Some(&32));
        assert_eq!(grid.get(1, 0), Some(&10));
        Ok(())
    }

    // Tests indexed iteration reports coordinates matching get
    // Verified by swapping the coordinate order in indexed_iter
    #[test]
    fn test_indexed_iter_matches_get() -> Result<()> {
        let grid = Grid::from_fn(3, 4, |x, y| (x, y))?;
        let mut visited = 0;
        for ((x, y), cell) in grid.indexed_iter() {
            assert_eq!(*cell, (x, y));
            assert_eq!(grid.get(x, y), Some(cell));
            visited += 1;
        }
        assert_eq!(visited, 12);
        Ok(())
    }

    // Tests mapping to a new grid keeps positions
    // Verified by mapping into a transposed grid
    #[test]
    fn test_map_to_grid_keeps_positions() -> Result<()> {
        let grid = Grid::from_fn(3, 2, |x, y| x + y)?;
        let doubled = grid.map_to_grid(|x, y, cell| (x, y, cell * 2));
        assert_eq!(doubled.dimensions(), (3, 2));
        assert_eq!(doubled.get(2, 1), Some(&(2, 1, 6)));
        Ok(())
    }

    // Tests checksum tracks content
    // Verified by hashing only the dimensions
    #[test]
    fn test_checksum_tracks_content() -> Result<()> {
        let mut a = Grid::<u8>::new(3, 3)?;
        let b = Grid::<u8>::new(3, 3)?;
        assert_eq!(a.checksum(), b.checksum());
        a.set(1, 1, 1)?;
        assert_ne!(a.checksum(), b.checksum());
        assert_ne!(a, b);
        Ok(())
    }

    // Tests reset and drop release every owned cell exactly once
    // Verified by leaking the replaced values in reset
    #[test]
    fn test_cells_are_released_exactly_once() -> Result<()> {
        let resource = Rc::new(());
        let mut grid = Grid::<Option<Rc<()>>>::new(4, 3)?;
        grid.fill_all(Some(Rc::clone(&resource)));
        assert_eq!(Rc::strong_count(&resource), 13);

        grid.reset();
        assert_eq!(Rc::strong_count(&resource), 1);

        grid.fill_all(Some(Rc::clone(&resource)));
        drop(grid);
        assert_eq!(Rc::strong_count(&resource), 1);
        Ok(())
    }
}
