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

use crate::error::Result;
use crate::state::State;

/// Picks moves and learns from the games they led to.
///
/// Both methods take `&self` so that a single selector can be shared between
/// threads playing games at the same time; implementors are expected to guard
/// their own state.
pub trait Selector<S> where
    S: State {
    /// Returns the state the player to move in `state` should move to.
    ///
    /// # Errors
    /// Returns `Error::NoLegalMoves` if `state` is terminal.
    fn choose_next(&self, state: &S) -> Result<S>;

    /// Reports the states a finished game passed through and how it ended.
    /// `resolution` is `None` if the final state was terminal without resolving.
    fn record_outcome(&self, history: &[S], resolution: Option<&S::Resolution>);
}
