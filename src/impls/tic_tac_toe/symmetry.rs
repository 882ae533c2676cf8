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
// Copyright 2017 Chris Foster
//

use crate::impls::tic_tac_toe::Board;

/// The transformations of a board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Symmetry {
    Identity,
    /// Mirrors the columns: `(col, row)` takes the cell at `(2 - col, row)`.
    FlipHorizontal,
    /// Mirrors the rows: `(col, row)` takes the cell at `(col, 2 - row)`.
    FlipVertical,
    /// `(col, row)` takes the cell at `(row, 2 - col)`.
    Rotate90,
    Rotate180,
    Rotate270,
    /// Exchanges X and O.
    SwapPlayers,
}

impl Symmetry {
    /// The transformations under which two boards are considered the same.
    ///
    /// `SwapPlayers` is not among them.  It changes which player owns a line
    /// and whose turn it is, so treating its images as equal would merge the
    /// first player's positions with the second player's.
    pub const GROUP: [Symmetry; 6] = [
        Symmetry::Identity,
        Symmetry::FlipHorizontal,
        Symmetry::FlipVertical,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
    ];

    pub fn apply(&self, board: &Board) -> Board {
        match *self {
            Symmetry::SwapPlayers => board.swap_players(),
            geometric => board.permute(&PERMUTATIONS[geometric as usize]),
        }
    }

    /// The cell that `(col, row)` is filled from.
    fn source(&self, col: usize, row: usize) -> (usize, usize) {
        match *self {
            Symmetry::Identity | Symmetry::SwapPlayers => (col, row),
            Symmetry::FlipHorizontal => (2 - col, row),
            Symmetry::FlipVertical => (col, 2 - row),
            Symmetry::Rotate90 => (row, 2 - col),
            Symmetry::Rotate180 => (2 - col, 2 - row),
            Symmetry::Rotate270 => (2 - row, col),
        }
    }
}

lazy_static! {
    // Source index of each destination index, one table per member of Symmetry::GROUP
    static ref PERMUTATIONS: [[usize; 9]; 6] = generate_permutations();
}

fn generate_permutations() -> [[usize; 9]; 6] {
    let mut permutations = [[0; 9]; 6];
    for (symmetry, permutation) in Symmetry::GROUP.iter().zip(permutations.iter_mut()) {
        for (index, source) in permutation.iter_mut().enumerate() {
            let (col, row) = symmetry.source(index % 3, index / 3);
            *source = col + 3 * row;
        }
    }
    permutations
}

impl Board {
    fn permute(&self, permutation: &[usize; 9]) -> Board {
        let mut board = Board::new();
        for (cell, &source) in board.0.iter_mut().zip(permutation.iter()) {
            *cell = self.0[source];
        }
        board
    }

    pub fn transform(&self, symmetry: Symmetry) -> Board {
        symmetry.apply(self)
    }

    pub fn flip_horizontal(&self) -> Board {
        self.transform(Symmetry::FlipHorizontal)
    }

    pub fn flip_vertical(&self) -> Board {
        self.transform(Symmetry::FlipVertical)
    }

    /// Rotates the board by `steps` quarter turns.  Any integer is accepted;
    /// `steps` is taken modulo 4, so `rotate(-1)` is `rotate(3)`.
    pub fn rotate(&self, steps: i32) -> Board {
        match steps.rem_euclid(4) {
            0 => *self,
            1 => self.transform(Symmetry::Rotate90),
            2 => self.transform(Symmetry::Rotate180),
            _ => self.transform(Symmetry::Rotate270),
        }
    }

    pub fn swap_players(&self) -> Board {
        let mut board = *self;
        for cell in board.0.iter_mut() {
            *cell = cell.map(|mark| mark.flip());
        }
        board
    }
}
