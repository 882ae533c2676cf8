//
// This file is part of tic_tac_tally.
//
// tic_tac_tally is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tic_tac_tally is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tic_tac_tally. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2016-2017 Chris Foster
//

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, FormatError};
use crate::impls::tic_tac_toe::{Board, Mark, Resolution};

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Resolution::Win(mark) => write!(f, "{} wins", mark),
            Resolution::CatsGame => write!(f, "Cat's game"),
        }
    }
}

/// Writes the board in its text form: three lines of `X`, `O`, or ` `, each
/// ending in a line break.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match self.0[col + 3 * row] {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => write!(f, " ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    /// Returns the 12-character text form of the board.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Parses the text form written by `to_text`.
    ///
    /// # Errors
    /// Returns `FormatError` if any line is not exactly three of `X`, `O`, or
    /// ` ` followed by `\n`, if there are not exactly three such lines, or if
    /// anything follows the third.
    pub fn from_text(text: &str) -> Result<Board, FormatError> {
        let mut board = Board::new();
        let (mut col, mut row) = (0, 0);

        for c in text.chars() {
            if row == 3 {
                return Err(FormatError::LineCount);
            }

            if col == 3 {
                if c != '\n' {
                    return Err(FormatError::LineLength { line: row });
                }
                col = 0;
                row += 1;
                continue;
            }

            board.0[col + 3 * row] = match c {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                ' ' => None,
                '\n' => return Err(FormatError::LineLength { line: row }),
                _ => return Err(FormatError::IllegalCharacter(c)),
            };
            col += 1;
        }

        match (col, row) {
            (0, 3) => Ok(board),
            (0, _) => Err(FormatError::LineCount),
            (3, _) => Err(FormatError::MissingTerminator),
            _ => Err(FormatError::LineLength { line: row }),
        }
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Board, Error> {
        Ok(Board::from_text(s)?)
    }
}

#[cfg(test)]
mod test {
    use fnv::FnvHashSet;

    use crate::error::FormatError;
    use crate::impls::tic_tac_toe::{Board, Mark};

    #[test]
    fn test_from_text_valid() {
        for text in &["XXO\n XO\n X \n", "   \n   \n   \n", "XXX\nXXX\nXXX\n", "OOO\nOOO\nOOO\n"] {
            let board = Board::from_text(text).unwrap();
            assert_eq!(board.to_text(), *text);
        }
    }

    #[test]
    fn test_from_text_cells() {
        let board = Board::from_text("XXO\n OX\n X \n").unwrap();
        assert_eq!(board.get(0, 0), Some(Mark::X));
        assert_eq!(board.get(2, 0), Some(Mark::O));
        assert_eq!(board.get(0, 1), None);
        assert_eq!(board.get(1, 2), Some(Mark::X));
        assert_eq!(board.is_win(), None);
    }

    #[test]
    fn test_from_text_invalid() {
        assert_eq!(Board::from_text(""), Err(FormatError::LineCount));
        assert_eq!(Board::from_text("\n"), Err(FormatError::LineLength { line: 0 }));
        assert_eq!(Board::from_text("X\n"), Err(FormatError::LineLength { line: 0 }));
        assert_eq!(Board::from_text("XXXX"), Err(FormatError::LineLength { line: 0 }));
        assert_eq!(Board::from_text("XXX\n"), Err(FormatError::LineCount));
        assert_eq!(Board::from_text("XOX\nOXO\nXOX\nX"), Err(FormatError::LineCount));
        assert_eq!(Board::from_text("XOX\nOXO\nXOX"), Err(FormatError::MissingTerminator));
        assert_eq!(Board::from_text("XOX\nOXO\nXO"), Err(FormatError::LineLength { line: 2 }));
        assert_eq!(Board::from_text("XOX\nOAO\nXOX\n"), Err(FormatError::IllegalCharacter('A')));
        assert_eq!(Board::from_text("XOX\r\nOXO\r\nXOX\r\n"), Err(FormatError::LineLength { line: 0 }));
    }

    #[test]
    fn test_round_trip_reachable() {
        let mut seen = FnvHashSet::default();
        let mut stack = vec![Board::new()];
        while let Some(board) = stack.pop() {
            assert_eq!(Board::from_text(&board.to_text()), Ok(board));
            stack.extend(board.legal_moves().into_iter().filter(|next| seen.insert(*next)));
        }
        assert_eq!(seen.len(), 5477);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("XXX\n   \n   \n".parse::<Board>().unwrap().is_win(), Some(Mark::X));
        assert!("X\n".parse::<Board>().is_err());
    }
}
