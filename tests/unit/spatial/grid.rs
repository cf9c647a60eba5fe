//! Tests for grid construction, rigid transforms and edge access

#[cfg(test)]
mod tests {
    use tilestitch::StitchError;
    use tilestitch::spatial::grid::Grid2D;

    fn numbered(rows: usize, cols: usize) -> Grid2D<usize> {
        let cells = (0..rows)
            .map(|row| (0..cols).map(|col| row * cols + col + 1).collect())
            .collect();
        Grid2D::from_rows(cells).unwrap()
    }

    fn rows_of(grid: &Grid2D<usize>) -> Vec<Vec<usize>> {
        grid.iter_rows().map(|row| row.to_vec()).collect()
    }

    // Tests empty and ragged input are rejected
    // Verified by removing the width check in from_rows
    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert!(matches!(
            Grid2D::<bool>::from_rows(Vec::new()),
            Err(StitchError::Shape { .. })
        ));
        assert!(matches!(
            Grid2D::from_rows(vec![Vec::<bool>::new()]),
            Err(StitchError::Shape { .. })
        ));
        assert!(matches!(
            Grid2D::from_rows(vec![vec![true, false], vec![true]]),
            Err(StitchError::Shape { .. })
        ));
    }

    // Tests the square constructor accepts squares only
    #[test]
    fn test_square_rejects_rectangles() {
        assert!(Grid2D::square(vec![vec![1, 2], vec![3, 4]]).is_ok());
        assert!(matches!(
            Grid2D::square(vec![vec![1, 2, 3], vec![4, 5, 6]]),
            Err(StitchError::Shape { .. })
        ));
    }

    // Tests cell (r, c) moves to (c, rows - 1 - r)
    // Verified by reversing columns before transposing
    #[test]
    fn test_rotate_clockwise_moves_cells() {
        let mut grid = numbered(2, 2);
        grid.rotate_clockwise();
        assert_eq!(rows_of(&grid), vec![vec![3, 1], vec![4, 2]]);
    }

    // Tests rectangles swap dimensions when rotated
    #[test]
    fn test_rotate_clockwise_rectangle() {
        let mut grid = numbered(2, 3);
        grid.rotate_clockwise();
        assert_eq!((grid.rows(), grid.cols()), (3, 2));
        assert_eq!(rows_of(&grid), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);
    }

    // Tests four quarter turns restore the original
    #[test]
    fn test_four_rotations_are_identity() {
        for (rows, cols) in [(1, 1), (3, 3), (2, 5), (10, 10)] {
            let original = numbered(rows, cols);
            let mut grid = original.clone();
            for _ in 0..4 {
                grid.rotate_clockwise();
            }
            assert_eq!(grid, original);
        }
    }

    // Tests flips mirror and undo themselves
    // Verified by slicing the wrong axis in flip_vertical
    #[test]
    fn test_flips_mirror_and_are_involutions() {
        let original = numbered(2, 2);

        let mut horizontal = original.clone();
        horizontal.flip_horizontal();
        assert_eq!(rows_of(&horizontal), vec![vec![2, 1], vec![4, 3]]);
        horizontal.flip_horizontal();
        assert_eq!(horizontal, original);

        let mut vertical = original.clone();
        vertical.flip_vertical();
        assert_eq!(rows_of(&vertical), vec![vec![3, 4], vec![1, 2]]);
        vertical.flip_vertical();
        assert_eq!(vertical, original);
    }

    // Tests edges read rows left to right and columns top to bottom
    #[test]
    fn test_edges() {
        let grid = numbered(3, 3);
        assert_eq!(grid.top(), vec![1, 2, 3]);
        assert_eq!(grid.bottom(), vec![7, 8, 9]);
        assert_eq!(grid.left(), vec![1, 4, 7]);
        assert_eq!(grid.right(), vec![3, 6, 9]);
    }

    // Tests edges follow the cells through a rotation
    #[test]
    fn test_edges_after_rotation() {
        let mut grid = numbered(3, 3);
        let left = grid.left();
        grid.rotate_clockwise();
        let reversed: Vec<usize> = left.into_iter().rev().collect();
        assert_eq!(grid.top(), reversed);
    }

    // Tests bounds-checked access
    #[test]
    fn test_get_is_bounds_checked() {
        let grid = numbered(2, 3);
        assert_eq!(grid.get(1, 2), Some(&6));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.iter().count(), 6);
    }

    // Tests boolean grids count and print their active cells
    #[test]
    fn test_bool_grid_count_and_display() {
        let grid = Grid2D::from_rows(vec![vec![true, false, true], vec![false, false, true]])
            .unwrap();
        assert_eq!(grid.count_active(), 3);
        assert_eq!(grid.to_string(), "#.#\n..#\n");
    }

    // Tests the backing array is handed over unchanged
    #[test]
    fn test_from_array_round_trip() {
        let array = ndarray::Array2::from_elem((2, 4), 7_u8);
        let grid = Grid2D::from_array(array.clone()).unwrap();
        assert_eq!(grid.into_array(), array);
        assert!(Grid2D::from_array(ndarray::Array2::<u8>::from_elem((0, 3), 0)).is_err());
    }
}
