/// CellState is the binary state of a single board tile.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    #[default]
    Inactive,
    Active,
}

impl CellState {
    /// Check if the cell is currently active
    pub const fn is_active(self) -> bool {
        matches!(self, CellState::Active)
    }

    /// Flip the state, used when a tile is clicked
    pub const fn toggle(self) -> Self {
        match self {
            CellState::Active => CellState::Inactive,
            CellState::Inactive => CellState::Active,
        }
    }

    /// Next state given the number of active in-bounds neighbours:
    /// 1. Active cell with 2-3 neighbours stays active
    /// 2. Inactive cell with exactly 3 neighbours becomes active
    /// 3. Everything else ends up inactive
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Active, 2 | 3) => CellState::Active,
            (CellState::Inactive, 3) => CellState::Active,
            _ => CellState::Inactive,
        }
    }
}

impl From<bool> for CellState {
    fn from(active: bool) -> Self {
        if active { CellState::Active } else { CellState::Inactive }
    }
}
