use super::Cell;
use super::error::{GameError, Result};
use rand::Rng;
use rayon::prelude::*;

/// LifeGrid owns a rows×columns matrix of cells, each carrying its own
/// live-neighbour count.
///
/// Counts are kept exact by incremental propagation: whenever a cell flips,
/// its in-bounds Moore neighbours are adjusted by one. Generation steps are
/// double buffered. The rule is evaluated against `current` only, changes
/// are propagated into `next`, and the two buffers are swapped once the
/// whole pass is done.
#[derive(Clone, Debug)]
pub struct LifeGrid {
    rows: usize,
    columns: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

/// Flat indices of the in-bounds Moore neighbours of (row, column).
/// No wraparound: candidates outside the grid are dropped.
fn moore_neighbours(
    rows: usize,
    columns: usize,
    row: usize,
    column: usize,
) -> impl Iterator<Item = usize> {
    let (r, c) = (row as isize, column as isize);

    (-1..=1isize)
        .flat_map(|dr| (-1..=1isize).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .map(move |(dr, dc)| (r + dr, c + dc))
        .filter(move |&(nr, nc)| {
            nr >= 0 && nc >= 0 && (nr as usize) < rows && (nc as usize) < columns
        })
        .map(move |(nr, nc)| nr as usize * columns + nc as usize)
}

/// Set the status of `cells[idx]` and push the change out to its neighbours.
fn apply_status(cells: &mut [Cell], rows: usize, columns: usize, idx: usize, alive: bool) {
    let (row, column) = (idx / columns, idx % columns);
    for neighbour in moore_neighbours(rows, columns, row, column) {
        cells[neighbour].shift_neighbours(alive);
    }
    cells[idx].set_alive(alive);
}

impl LifeGrid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let invalid = GameError::InvalidDimension { rows, columns };
        if rows == 0 || columns == 0 {
            return Err(invalid);
        }

        let len = rows.checked_mul(columns).ok_or(invalid)?;
        let cells = vec![Cell::dead(); len];
        Ok(Self {
            rows,
            columns,
            next: cells.clone(),
            current: cells,
        })
    }

    /// Get grid dimensions as (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    const fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Convert raw signed coordinates to an index, `None` when off the grid
    fn checked_index(&self, row: isize, column: isize) -> Option<usize> {
        let in_bounds = row >= 0
            && column >= 0
            && (row as usize) < self.rows
            && (column as usize) < self.columns;
        in_bounds.then(|| self.index(row as usize, column as usize))
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        (row < self.rows && column < self.columns)
            .then(|| self.current[self.index(row, column)])
    }

    pub fn is_alive(&self, row: usize, column: usize) -> Option<bool> {
        self.get(row, column).map(Cell::is_alive)
    }

    pub fn live_neighbours(&self, row: usize, column: usize) -> Option<u8> {
        self.get(row, column).map(Cell::live_neighbours)
    }

    /// Flip the cell at (row, column) and update its neighbours' counts.
    ///
    /// Coordinates are raw caller input; anything off the grid is ignored.
    pub fn toggle_cell(&mut self, row: isize, column: isize) {
        if let Some(idx) = self.checked_index(row, column) {
            let alive = !self.current[idx].is_alive();
            apply_status(&mut self.current, self.rows, self.columns, idx, alive);
        }
    }

    /// Force the cell to a status, toggling only if it differs
    pub fn set_alive(&mut self, row: usize, column: usize, alive: bool) {
        if self.is_alive(row, column) == Some(!alive) {
            self.toggle_cell(row as isize, column as isize);
        }
    }

    /// Advance one generation; returns how many cells changed status
    pub fn advance_generation(&mut self) -> usize {
        let changed: Vec<usize> = self
            .current
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.changes())
            .map(|(idx, _)| idx)
            .collect();

        self.commit(&changed)
    }

    /// Same as `advance_generation`, but the rule is evaluated with rayon.
    /// Propagation into the next buffer stays serial, so the result is
    /// identical to the serial step.
    pub fn advance_generation_parallel(&mut self) -> usize {
        let changed: Vec<usize> = self
            .current
            .par_iter()
            .enumerate()
            .filter(|(_, cell)| cell.changes())
            .map(|(idx, _)| idx)
            .collect();

        self.commit(&changed)
    }

    /// Apply the changed cells into the next buffer, then swap.
    fn commit(&mut self, changed: &[usize]) -> usize {
        self.next.copy_from_slice(&self.current);

        for &idx in changed {
            let alive = !self.current[idx].is_alive();
            apply_status(&mut self.next, self.rows, self.columns, idx, alive);
        }

        std::mem::swap(&mut self.current, &mut self.next);
        changed.len()
    }

    /// Recount live neighbours of (row, column) from scratch.
    /// Independent of the stored counts; used to audit them.
    pub fn count_live_neighbours(&self, row: usize, column: usize) -> u8 {
        if row >= self.rows || column >= self.columns {
            return 0;
        }
        moore_neighbours(self.rows, self.columns, row, column)
            .filter(|&idx| self.current[idx].is_alive())
            .count() as u8
    }

    /// Whether every stored neighbour count matches a full rescan
    pub fn neighbour_counts_consistent(&self) -> bool {
        self.iter_cells()
            .all(|(row, column, cell)| cell.live_neighbours() == self.count_live_neighbours(row, column))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.current.fill(Cell::dead());
    }

    /// Seed the grid from `rng`, each cell alive with probability `density`.
    /// NaN counts as 0.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.clear();
        for idx in 0..self.current.len() {
            if rng.random_bool(density) {
                apply_status(&mut self.current, self.rows, self.columns, idx, true);
            }
        }
    }

    /// Randomize grid from the thread-local generator
    pub fn randomize(&mut self, density: f64) {
        self.randomize_with(&mut rand::rng(), density);
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.current
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.columns, idx % self.columns, cell))
    }

    /// Positions of live cells in row-major order
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, column, _)| (row, column))
            .collect()
    }
}

/// Grids are equal when their visible state is; the scratch buffer is ignored.
impl PartialEq for LifeGrid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.current == other.current
    }
}

impl Eq for LifeGrid {}
