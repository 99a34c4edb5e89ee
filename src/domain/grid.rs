use super::{BoardError, CellState};
use rand::Rng;

/// Grid is the fixed-size square board.
/// Cells are stored row-major; the size never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new board with every cell inactive
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Inactive; size * size],
        }
    }

    /// Build a board from a row-major cell buffer computed elsewhere
    pub(crate) fn from_cells(size: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Side length of the board
    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn check(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row < self.size && col < self.size {
            Ok(self.index(row, col))
        } else {
            Err(BoardError::OutOfBounds { row, col, size: self.size })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        self.check(row, col).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), BoardError> {
        let idx = self.check(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Flip one cell and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellState, BoardError> {
        let idx = self.check(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    /// Read a cell by signed coordinates, treating anything off the board as inactive.
    /// The rule engine relies on this for edge clipping.
    #[inline]
    pub(crate) fn is_active_at(&self, row: isize, col: isize) -> bool {
        let n = self.size as isize;
        (0..n).contains(&row)
            && (0..n).contains(&col)
            && self.cells[self.index(row as usize, col as usize)].is_active()
    }

    /// Set every cell back to inactive
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Inactive);
    }

    /// Activate each cell independently with `probability`.
    /// Cells that are already active stay active.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        probability: f64,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(BoardError::InvalidProbability(probability));
        }
        self.cells
            .iter_mut()
            .filter(|_| rng.random_bool(probability))
            .for_each(|cell| *cell = CellState::Active);
        Ok(())
    }

    /// Number of active cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_active()).count()
    }

    /// Iterate over all cells row-major as (row, col, state)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &state)| (idx / self.size, idx % self.size, state))
    }
}
