//! Geometry of the winning-line overlay.
//!
//! Board space spans `[0, 3] x [0, 3]` with `y` growing downward; cell `i`
//! covers `[i % 3, i % 3 + 1] x [i / 3, i / 3 + 1]`. Frontends scale the
//! segment to their own resolution.

/// The 8 possible winning lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WinLine {
    TopRow,
    MiddleRow,
    BottomRow,
    LeftColumn,
    CenterColumn,
    RightColumn,
    Diagonal,
    AntiDiagonal,
}

impl WinLine {
    /// Orientation for a winning triple. `None` if it is not one of the 8.
    #[must_use]
    pub fn from_triple(line: [usize; 3]) -> Option<Self> {
        match line {
            [0, 1, 2] => Some(Self::TopRow),
            [3, 4, 5] => Some(Self::MiddleRow),
            [6, 7, 8] => Some(Self::BottomRow),
            [0, 3, 6] => Some(Self::LeftColumn),
            [1, 4, 7] => Some(Self::CenterColumn),
            [2, 5, 8] => Some(Self::RightColumn),
            [0, 4, 8] => Some(Self::Diagonal),
            [2, 4, 6] => Some(Self::AntiDiagonal),
            _ => None,
        }
    }

    /// Overlay endpoints in board space.
    ///
    /// Rows and columns run edge to edge through the cell centers; the
    /// diagonals run corner to corner.
    #[must_use]
    pub fn segment(self) -> ((f64, f64), (f64, f64)) {
        match self {
            Self::TopRow => ((0.0, 0.5), (3.0, 0.5)),
            Self::MiddleRow => ((0.0, 1.5), (3.0, 1.5)),
            Self::BottomRow => ((0.0, 2.5), (3.0, 2.5)),
            Self::LeftColumn => ((0.5, 0.0), (0.5, 3.0)),
            Self::CenterColumn => ((1.5, 0.0), (1.5, 3.0)),
            Self::RightColumn => ((2.5, 0.0), (2.5, 3.0)),
            Self::Diagonal => ((0.0, 0.0), (3.0, 3.0)),
            Self::AntiDiagonal => ((3.0, 0.0), (0.0, 3.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::WINNING_LINES;

    fn cell_of(x: f64, y: f64) -> usize {
        (y.floor().min(2.0) as usize) * 3 + x.floor().min(2.0) as usize
    }

    #[test]
    fn test_every_triple_has_a_line() {
        let lines: Vec<_> = WINNING_LINES.iter().filter_map(|&t| WinLine::from_triple(t)).collect();
        assert_eq!(lines.len(), 8);

        for (i, a) in lines.iter().enumerate() {
            for b in &lines[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unknown_triple() {
        assert_eq!(WinLine::from_triple([0, 1, 3]), None);
        assert_eq!(WinLine::from_triple([2, 1, 0]), None);
    }

    #[test]
    fn test_segment_crosses_its_cells() {
        for triple in WINNING_LINES {
            let line = WinLine::from_triple(triple).unwrap();
            let ((x0, y0), (x1, y1)) = line.segment();

            // Sample the midpoint of each third of the segment
            let crossed: Vec<usize> = [1.0 / 6.0, 0.5, 5.0 / 6.0]
                .iter()
                .map(|t| cell_of(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t))
                .collect();

            let mut expected = triple.to_vec();
            let mut actual = crossed.clone();
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(actual, expected, "{line:?} crosses {crossed:?}");
        }
    }
}
