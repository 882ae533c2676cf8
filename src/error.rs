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

use std::io;

use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, Error>;

/// Everything that can go wrong in this crate.
///
/// There is no bounds error: `Board::get` reads off-board cells as empty and
/// `Board::set` ignores them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid board format: {0}")]
    Format(#[from] FormatError),

    #[error("no valid next moves")]
    NoLegalMoves,

    #[error("illegal move at ({col}, {row})")]
    IllegalMove { col: usize, row: usize },

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// The ways board text can be malformed.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum FormatError {
    /// A line was shorter or longer than three cells.
    #[error("line {line} is not three cells long")]
    LineLength { line: usize },

    /// Fewer than three lines, or content after the third.
    #[error("expected exactly three lines")]
    LineCount,

    #[error("illegal character {0:?}")]
    IllegalCharacter(char),

    /// The last line was complete but not terminated.
    #[error("missing final line break")]
    MissingTerminator,
}
