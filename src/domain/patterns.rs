use super::{BoardError, CellState, Grid};
use std::fmt;
use std::str::FromStr;

/// Offsets are `(dx, dy)` relative to the anchor tile:
/// dx moves along columns, dy along rows.
pub type Offset = (isize, isize);

/// The named patterns that can be stamped onto the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Glider,
    SmallExploder,
    Exploder,
    TenCellRow,
    LightweightSpaceship,
    Tumbler,
    GosperGliderGun,
}

impl Preset {
    /// All presets in menu order
    pub const ALL: [Preset; 7] = [
        Preset::Glider,
        Preset::SmallExploder,
        Preset::Exploder,
        Preset::TenCellRow,
        Preset::LightweightSpaceship,
        Preset::Tumbler,
        Preset::GosperGliderGun,
    ];

    /// Display name for the UI
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Glider => "Glider",
            Preset::SmallExploder => "Small Exploder",
            Preset::Exploder => "Exploder",
            Preset::TenCellRow => "10 Cell Row",
            Preset::LightweightSpaceship => "Lightweight Spaceship",
            Preset::Tumbler => "Tumbler",
            Preset::GosperGliderGun => "Gosper Glider Gun",
        }
    }

    pub const fn offsets(self) -> &'static [Offset] {
        match self {
            Preset::Glider => GLIDER,
            Preset::SmallExploder => SMALL_EXPLODER,
            Preset::Exploder => EXPLODER,
            Preset::TenCellRow => TEN_CELL_ROW,
            Preset::LightweightSpaceship => LIGHTWEIGHT_SPACESHIP,
            Preset::Tumbler => TUMBLER,
            Preset::GosperGliderGun => GOSPER_GLIDER_GUN,
        }
    }

    /// Bounding box of the offsets as `(min_dx, min_dy, max_dx, max_dy)`
    pub fn bounds(self) -> (isize, isize, isize, isize) {
        self.offsets().iter().fold(
            (isize::MAX, isize::MAX, isize::MIN, isize::MIN),
            |(x0, y0, x1, y1), &(dx, dy)| (x0.min(dx), y0.min(dy), x1.max(dx), y1.max(dy)),
        )
    }

    /// Board cells `(row, col)` this preset covers at the anchor, or `None`
    /// if any of them would fall off an `size`x`size` board.
    pub fn cells_at(self, row: usize, col: usize, size: usize) -> Option<Vec<(usize, usize)>> {
        let n = size as isize;
        self.offsets()
            .iter()
            .map(|&(dx, dy)| {
                let r = row as isize + dy;
                let c = col as isize + dx;
                ((0..n).contains(&r) && (0..n).contains(&c)).then_some((r as usize, c as usize))
            })
            .collect()
    }

    /// Activate every cell of the preset around the anchor.
    /// All-or-nothing: if any cell is off the board, the grid is left untouched.
    pub fn stamp(self, grid: &mut Grid, row: usize, col: usize) -> Result<(), BoardError> {
        let cells = self
            .cells_at(row, col, grid.size())
            .ok_or(BoardError::PatternOutOfBounds { pattern: self.name(), row, col })?;
        for (r, c) in cells {
            grid.set(r, c, CellState::Active)?;
        }
        Ok(())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = BoardError;

    /// Case-insensitive; spaces, dashes and underscores are ignored,
    /// so "gosper-glider-gun" and "Gosper Glider Gun" both resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Preset::ALL
            .into_iter()
            .find(|p| normalize(p.name()) == key)
            .or(match key.as_str() {
                "lwss" => Some(Preset::LightweightSpaceship),
                "tencellrow" => Some(Preset::TenCellRow),
                _ => None,
            })
            .ok_or_else(|| BoardError::InvalidPatternName(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve a preset by name and stamp it
pub fn stamp_by_name(name: &str, grid: &mut Grid, row: usize, col: usize) -> Result<(), BoardError> {
    name.parse::<Preset>()?.stamp(grid, row, col)
}

const GLIDER: &[Offset] = &[
    (0, -1),
    (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

const SMALL_EXPLODER: &[Offset] = &[
    (0, -1),
    (-1, 0), (0, 0), (1, 0),
    (-1, 1), (1, 1),
    (0, 2),
];

const EXPLODER: &[Offset] = &[
    (-2, -2), (0, -2), (2, -2),
    (-2, -1), (2, -1),
    (-2, 0), (2, 0),
    (-2, 1), (2, 1),
    (-2, 2), (0, 2), (2, 2),
];

const TEN_CELL_ROW: &[Offset] = &[
    (-4, 0), (-3, 0), (-2, 0), (-1, 0), (0, 0),
    (1, 0), (2, 0), (3, 0), (4, 0), (5, 0),
];

const LIGHTWEIGHT_SPACESHIP: &[Offset] = &[
    (-1, -1), (0, -1), (1, -1), (2, -1),
    (-2, 0), (2, 0),
    (2, 1),
    (-2, 2), (1, 2),
];

const TUMBLER: &[Offset] = &[
    (-2, -2), (-1, -2), (1, -2), (2, -2),
    (-2, -1), (-1, -1), (1, -1), (2, -1),
    (-1, 0), (1, 0),
    (-3, 1), (-1, 1), (1, 1), (3, 1),
    (-3, 2), (-1, 2), (1, 2), (3, 2),
    (-3, 3), (-2, 3), (2, 3), (3, 3),
];

const GOSPER_GLIDER_GUN: &[Offset] = &[
    // Right block and shuttle end
    (5, -4), (6, -4), (16, -4), (17, -4),
    (4, -3), (6, -3), (16, -3), (17, -3),
    (4, -2), (5, -2),
    // Left block and shuttle end
    (-18, -2), (-17, -2), (-9, -2), (-8, -2),
    (-18, -1), (-17, -1), (-10, -1), (-8, -1),
    (-10, 0), (-9, 0),
    // Gliders
    (-2, 0), (-1, 0),
    (-2, 1), (0, 1),
    (-2, 2),
    (17, 3), (18, 3),
    (17, 4), (19, 4),
    (17, 5),
    (6, 8), (7, 8), (8, 8),
    (6, 9),
    (7, 10),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_counts() {
        let counts: Vec<_> = Preset::ALL.iter().map(|p| p.offsets().len()).collect();
        assert_eq!(counts, vec![5, 7, 12, 10, 9, 22, 35]);
    }

    #[test]
    fn test_offsets_are_unique() {
        for preset in Preset::ALL {
            let mut offsets = preset.offsets().to_vec();
            offsets.sort();
            offsets.dedup();
            assert_eq!(offsets.len(), preset.offsets().len(), "{preset}");
        }
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Preset::Glider.bounds(), (-1, -1, 1, 1));
        assert_eq!(Preset::TenCellRow.bounds(), (-4, 0, 5, 0));
        assert_eq!(Preset::GosperGliderGun.bounds(), (-18, -4, 19, 10));
    }

    #[test]
    fn test_stamp_activates_exact_cells() {
        let mut grid = Grid::new(10);
        grid.set(9, 9, CellState::Active).unwrap();
        Preset::Glider.stamp(&mut grid, 4, 4).unwrap();

        let mut active: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, s)| s.is_active())
            .map(|(r, c, _)| (r, c))
            .collect();
        active.sort();
        assert_eq!(active, vec![(3, 4), (4, 5), (5, 3), (5, 4), (5, 5), (9, 9)]);
    }

    #[test]
    fn test_lwss_cells_are_not_transposed() {
        let mut grid = Grid::new(10);
        Preset::LightweightSpaceship.stamp(&mut grid, 5, 5).unwrap();

        let active: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, s)| s.is_active())
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(
            active,
            vec![(4, 4), (4, 5), (4, 6), (4, 7), (5, 3), (5, 7), (6, 7), (7, 3), (7, 6)]
        );
    }

    #[test]
    fn test_gosper_gun_extremes() {
        let mut grid = Grid::new(38);
        Preset::GosperGliderGun.stamp(&mut grid, 4, 18).unwrap();

        // (dx, dy) = (19, 4) lands on the right edge, row 8
        assert_eq!(grid.get(8, 37), Ok(CellState::Active));
        assert_eq!(grid.get(37, 8), Ok(CellState::Inactive));
        // left block and the lowest glider cell
        assert_eq!(grid.get(2, 0), Ok(CellState::Active));
        assert_eq!(grid.get(14, 25), Ok(CellState::Active));
        assert_eq!(grid.get(0, 23), Ok(CellState::Active));
    }

    #[test]
    fn test_stamp_out_of_bounds_is_noop() {
        let mut grid = Grid::new(10);
        let before = grid.clone();
        let err = Preset::Glider.stamp(&mut grid, 0, 5).unwrap_err();
        assert_eq!(
            err,
            BoardError::PatternOutOfBounds { pattern: "Glider", row: 0, col: 5 }
        );
        assert_eq!(grid, before);

        assert!(Preset::Glider.stamp(&mut grid, 9, 5).is_err());
        assert!(Preset::TenCellRow.stamp(&mut grid, 5, 3).is_err());
        assert!(Preset::TenCellRow.stamp(&mut grid, 5, 5).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_stamp_fits_exactly_at_edges() {
        let mut grid = Grid::new(10);
        Preset::TenCellRow.stamp(&mut grid, 0, 4).unwrap();
        assert_eq!(grid.population(), 10);

        let mut grid = Grid::new(38);
        assert!(Preset::GosperGliderGun.stamp(&mut grid, 4, 18).is_ok());
        assert_eq!(grid.population(), 35);
    }

    #[test]
    fn test_stamp_does_not_clear_other_cells() {
        let mut grid = Grid::new(12);
        Preset::Exploder.stamp(&mut grid, 5, 5).unwrap();
        Preset::Exploder.stamp(&mut grid, 5, 5).unwrap();
        assert_eq!(grid.population(), 12);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Glider".parse::<Preset>(), Ok(Preset::Glider));
        assert_eq!("gosper-glider-gun".parse::<Preset>(), Ok(Preset::GosperGliderGun));
        assert_eq!("small_exploder".parse::<Preset>(), Ok(Preset::SmallExploder));
        assert_eq!("LWSS".parse::<Preset>(), Ok(Preset::LightweightSpaceship));
        assert_eq!("10 cell row".parse::<Preset>(), Ok(Preset::TenCellRow));
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
        }
    }

    #[test]
    fn test_unknown_name_is_noop() {
        let mut grid = Grid::new(20);
        let err = stamp_by_name("pulsar", &mut grid, 10, 10).unwrap_err();
        assert_eq!(err, BoardError::InvalidPatternName("pulsar".to_string()));
        assert_eq!(grid.population(), 0);
    }
}
