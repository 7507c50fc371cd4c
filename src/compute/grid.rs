//! Flat boolean cell grid with a bounded or toroidal boundary policy.

/// Fixed-size 2D grid of cells.
///
/// Cells are stored row-major: index `i` is coordinate `(i % width, i / width)`.
/// With `wrap` set, coordinates wrap around both edges; otherwise anything
/// outside the grid reads as dead and writes there are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
    wrap: bool,
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn new(width: usize, height: usize, wrap: bool) -> Self {
        Self {
            cells: vec![false; width * height],
            width,
            height,
            wrap,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid is toroidal.
    #[inline]
    pub fn wrap(&self) -> bool {
        self.wrap
    }

    /// Total number of cells (width * height).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Map a coordinate to a flat index, wrapping both axes with a
    /// non-negative modulo. Panics on a zero-sized grid.
    #[inline]
    pub fn coord_to_index(&self, x: isize, y: isize) -> usize {
        let x = x.rem_euclid(self.width as isize) as usize;
        let y = y.rem_euclid(self.height as isize) as usize;
        self.width * y + x
    }

    /// Map a flat index back to `(x, y)`.
    #[inline]
    pub fn index_to_coord(&self, i: usize) -> (usize, usize) {
        (i % self.width, i / self.width)
    }

    /// Whether `(x, y)` lies within `[0, width) x [0, height)`.
    #[inline]
    pub fn is_inside(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Resolve a coordinate under the boundary policy, or `None` if it falls
    /// off a bounded grid.
    #[inline]
    pub(crate) fn resolve(&self, x: isize, y: isize) -> Option<usize> {
        if self.is_inside(x, y) || (self.wrap && !self.is_empty()) {
            Some(self.coord_to_index(x, y))
        } else {
            None
        }
    }

    /// Cell state; dead outside a bounded grid.
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> bool {
        self.resolve(x, y).is_some_and(|i| self.cells[i])
    }

    /// Set a cell. Out-of-bounds writes on a bounded grid are silently dropped.
    #[inline]
    pub fn set(&mut self, x: isize, y: isize, alive: bool) {
        if let Some(i) = self.resolve(x, y) {
            self.cells[i] = alive;
        }
    }

    /// Number of live cells.
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Raw row-major cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Swap storage with a buffer of the same length. Used by the engine to
    /// install a freshly computed generation.
    pub(crate) fn swap_cells(&mut self, other: &mut Vec<bool>) {
        debug_assert_eq!(other.len(), self.cells.len());
        std::mem::swap(&mut self.cells, other);
    }

    /// Iterate `(x, y, alive)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &alive)| (i % self.width, i / self.width, alive))
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 3, false);
        assert_eq!(grid.len(), 21);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_index_coord_roundtrip() {
        let grid = Grid::new(5, 4, false);
        for i in 0..grid.len() {
            let (x, y) = grid.index_to_coord(i);
            assert_eq!(grid.coord_to_index(x as isize, y as isize), i);
        }
    }

    #[test]
    fn test_negative_coordinates_wrap() {
        let grid = Grid::new(5, 4, true);
        assert_eq!(grid.coord_to_index(-1, 0), 4);
        assert_eq!(grid.coord_to_index(0, -1), 15);
        assert_eq!(grid.coord_to_index(-6, -5), grid.coord_to_index(4, 3));
        assert_eq!(grid.coord_to_index(5, 4), 0);
    }

    #[test]
    fn test_bounded_edges_read_dead() {
        let mut grid = Grid::new(4, 3, false);
        grid.set(3, 0, true);
        grid.set(0, 0, true);
        assert!(!grid.get(-1, 0));
        assert!(!grid.get(4, 0));
        assert!(!grid.get(0, -1));
        assert!(!grid.get(0, 3));
        assert!(grid.get(3, 0));
    }

    #[test]
    fn test_wrapped_edges() {
        let mut grid = Grid::new(4, 3, true);
        grid.set(3, 0, true);
        assert_eq!(grid.get(-1, 0), grid.get(3, 0));
        assert!(grid.get(-1, 0));
        assert!(grid.get(-1, 3));
        assert!(!grid.get(4, 0));
    }

    #[test]
    fn test_bounded_out_of_range_writes_dropped() {
        let mut grid = Grid::new(4, 3, false);
        grid.set(-1, 0, true);
        grid.set(4, 2, true);
        grid.set(1, 3, true);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_wrapped_writes_land_on_opposite_edge() {
        let mut grid = Grid::new(4, 3, true);
        grid.set(-1, -1, true);
        assert!(grid.get(3, 2));
        assert_eq!(grid.count_alive(), 1);
    }

    #[test]
    fn test_iter_row_major() {
        let mut grid = Grid::new(3, 2, false);
        grid.set(2, 1, true);
        let alive: Vec<_> = grid.iter().filter(|c| c.2).collect();
        assert_eq!(alive, vec![(2, 1, true)]);
        assert_eq!(grid.rows().count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(4, 3, true);
        grid.set(0, 0, true);
        grid.set(3, 2, true);
        grid.clear();
        assert_eq!(grid.count_alive(), 0);
        assert_eq!(grid.len(), 12);
    }

    #[test]
    fn test_zero_sized_grid() {
        let mut grid = Grid::new(0, 0, true);
        grid.set(0, 0, true);
        assert!(!grid.get(0, 0));
        assert_eq!(grid.count_alive(), 0);
    }
}
