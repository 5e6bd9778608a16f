/// Cell represents the fundamental unit of the lattice.
/// The discriminants double as the cell's numeric value (0 or 1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric value of the cell, 0 or 1
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Brightness in [0, 1] used by the render projection
    pub const fn brightness(self) -> f32 {
        match self {
            Cell::Alive => 1.0,
            Cell::Dead => 0.0,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
