/// Cell represents the fundamental unit in Conway's Game of Life.
/// A cell is Dead, Alive, or Dying (alive this frame, cleared on the next tick).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
    Dying,
}

/// How a live cell that fails the survival rule leaves the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DeathPolicy {
    /// Alive -> Dead in the same generation
    #[default]
    Instant,
    /// Alive -> Dying, then purged to Dead at the start of the next tick
    Fading,
}

impl DeathPolicy {
    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            DeathPolicy::Instant => "Instant",
            DeathPolicy::Fading => "Fading",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DeathPolicy::Instant => DeathPolicy::Fading,
            DeathPolicy::Fading => DeathPolicy::Instant,
        }
    }
}

impl Cell {
    /// Check if the cell is currently alive (Dying cells are not)
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Whether this cell contributes to its neighbors' live count.
    /// Dying cells are still on screen for this frame, so they count.
    pub const fn counts_as_neighbor(self) -> bool {
        matches!(self, Cell::Alive | Cell::Dying)
    }

    /// Raw numeric state shown in x-ray mode
    pub const fn value(self) -> i8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
            Cell::Dying => -1,
        }
    }

    /// Toggle for user edits: anything on screen is cleared, empty cells come alive
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive | Cell::Dying => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Clear a Dying cell left over from the previous tick
    pub const fn purge(self) -> Self {
        match self {
            Cell::Dying => Cell::Dead,
            other => other,
        }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. Live cells otherwise die, according to the death policy
    ///
    /// The cell is purged before the rule sees it under either policy, so a
    /// Dying cell is treated as Dead (and can be reborn with exactly 3 neighbors).
    pub const fn evolve(self, neighbors: u8, policy: DeathPolicy) -> Self {
        match (self.purge(), neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Alive, _) => match policy {
                DeathPolicy::Instant => Cell::Dead,
                DeathPolicy::Fading => Cell::Dying,
            },
            (Cell::Dead, 3) => Cell::Alive,
            (other, _) => other,
        }
    }
}
