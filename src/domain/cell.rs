/// Cell is one position of a Life grid: its status plus the number of
/// live cells in its Moore neighbourhood.
///
/// The neighbour count is owned by the grid; only `LifeGrid` moves it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    alive: bool,
    live_neighbours: u8,
}

impl Cell {
    /// A dead cell with no live neighbours
    pub const fn dead() -> Self {
        Self { alive: false, live_neighbours: 0 }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Number of live cells around this one
    pub const fn live_neighbours(self) -> u8 {
        self.live_neighbours
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Adjust the neighbour count by one in the given direction
    pub(crate) fn shift_neighbours(&mut self, neighbour_alive: bool) {
        if neighbour_alive {
            self.live_neighbours += 1;
        } else {
            debug_assert!(self.live_neighbours > 0);
            self.live_neighbours -= 1;
        }
    }

    /// Pure function to compute the next status based on Conway's rules:
    /// 1. Live cell with 2-3 neighbours survives
    /// 2. Dead cell with exactly 3 neighbours becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self) -> bool {
        matches!(
            (self.alive, self.live_neighbours),
            (true, 2 | 3) | (false, 3)
        )
    }

    /// Whether the next generation flips this cell
    pub const fn changes(self) -> bool {
        self.evolve() != self.alive
    }
}
