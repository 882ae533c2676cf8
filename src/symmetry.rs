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

/// A state whose equivalent forms can be listed.
///
/// Two states are considered equivalent when one is an image of the other
/// under a transformation that preserves the rules of the game, e.g. a
/// rotation of a square board.  The transformations must map the legal moves
/// of a state onto the legal moves of its image, and the set of them must
/// contain the inverse of each of its members.
pub trait Symmetric: Sized {
    /// Returns the images of `self` under every transformation, including
    /// the identity, with duplicates removed.
    fn orbit(&self) -> Vec<Self>;
}
