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

//! The game of tic-tac-toe.
//!
//! A board is a plain 3x3 value; whose turn it is follows from the marks on
//! it, X always moving first.  Cells are addressed by `(col, row)`, both in
//! `0..3`, and stored row-major.

/// Either X or O.  X moves first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn flip(&self) -> Mark {
        match *self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Either a win or a cat's game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {
    Win(Mark),
    CatsGame,
}

/// The 3x3 game board.  `None` is an empty cell.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Board(pub [Option<Mark>; 9]);

// Columns first, then rows, then the diagonals
const LINES: [[usize; 3]; 8] = [
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 4, 8],
    [2, 4, 6],
];

impl Board {
    /// Creates an empty board.
    pub fn new() -> Board {
        Board([None; 9])
    }

    /// Returns the contents of a cell, or `None` if the coordinates are off the board.
    pub fn get(&self, col: usize, row: usize) -> Option<Mark> {
        if col >= 3 || row >= 3 {
            return None;
        }
        self.0[col + 3 * row]
    }

    /// Sets the contents of a cell.  Does nothing if the coordinates are off the board.
    pub fn set(&mut self, col: usize, row: usize, cell: Option<Mark>) {
        if col >= 3 || row >= 3 {
            return;
        }
        self.0[col + 3 * row] = cell;
    }

    pub fn clear(&mut self) {
        self.0 = [None; 9];
    }

    /// Iterates over `(col, row, cell)` in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (usize, usize, Option<Mark>)> {
        let cells = self.0;
        (0..9).map(move |index| (index % 3, index / 3, cells[index]))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    /// Returns the mark that will make the next move.
    pub fn turn(&self) -> Mark {
        if self.count(Mark::X) <= self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Returns the owner of the first complete line found, if any.
    pub fn is_win(&self) -> Option<Mark> {
        LINES.iter()
            .filter_map(|line| match self.0[line[0]] {
                Some(mark) if self.0[line[1]] == Some(mark) && self.0[line[2]] == Some(mark) => Some(mark),
                _ => None,
            })
            .next()
    }

    /// Returns every board the player to move can reach, in row-major order
    /// of the cell played.  Empty once someone has won.
    pub fn legal_moves(&self) -> Vec<Board> {
        let mut moves = Vec::with_capacity(9);
        self.legal_moves_into(&mut moves);
        moves
    }

    fn legal_moves_into(&self, moves: &mut Vec<Board>) {
        if self.is_win().is_some() {
            return;
        }

        let mark = self.turn();
        for index in 0..9 {
            if self.0[index].is_none() {
                let mut next = *self;
                next.0[index] = Some(mark);
                moves.push(next);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

pub use self::evaluation::EvaluationStore;
pub use self::game::Game;
pub use self::stream::{read_boards, write_boards, RECORD_SIZE};
pub use self::symmetry::Symmetry;

mod display;
mod evaluation;
mod game;
mod serialization;
mod stream;
mod symmetry;
mod zero_sum;
