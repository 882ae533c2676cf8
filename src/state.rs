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
// Copyright 2016 Chris Foster
//

use std::fmt::Display;
use std::hash::Hash;

use crate::resolution::Resolution;

/// The state of the game.
///
/// This should represent everything that makes up a single moment of the game.
/// States are values: the moves out of a state are the states they lead to,
/// so a game is simply the sequence of states it passed through.
///
/// # Example
///
/// For a game where players alternately take one or two stones from a pile,
/// and whoever takes the last stone wins, we might have:
///
/// ```rust
/// # use std::fmt;
/// # use tic_tac_tally::{Resolution, State};
/// #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
/// struct Pile { stones: u8, taken: u8 }
///
/// struct Taken(u8);
///
/// impl Resolution for Taken {
///     fn get_winner(&self) -> Option<u8> { Some((self.0 + 1) % 2) }
///     fn is_draw(&self) -> bool { false }
/// }
///
/// impl State for Pile {
///     type Resolution = Taken;
///
///     fn check_resolution(&self) -> Option<Taken> {
///         if self.stones == 0 { Some(Taken(self.taken % 2)) } else { None }
///     }
///
///     fn extrapolate_into(&self, states: &mut Vec<Pile>) {
///         for take in 1..3 {
///             if take <= self.stones {
///                 states.push(Pile { stones: self.stones - take, taken: self.taken + 1 });
///             }
///         }
///     }
/// }
/// # impl fmt::Display for Pile { fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.stones) } }
///
/// assert_eq!(Pile { stones: 3, taken: 0 }.extrapolate().len(), 2);
/// assert!(Pile { stones: 0, taken: 3 }.is_terminal());
/// ```
pub trait State: Clone + Display + Eq + Hash {
    type Resolution: Resolution;

    /// Returns `None` if the game has not reached a conclusion.
    fn check_resolution(&self) -> Option<Self::Resolution>;

    /// Pushes every state reachable by a single legal move onto `states`.
    /// The order is significant: selectors break ties in favor of earlier states.
    fn extrapolate_into(&self, states: &mut Vec<Self>);

    /// Collects the states reachable by a single legal move.
    fn extrapolate(&self) -> Vec<Self> {
        let mut states = Vec::new();
        self.extrapolate_into(&mut states);
        states
    }

    /// Returns `true` if no legal move leads out of this state.
    fn is_terminal(&self) -> bool {
        self.extrapolate().is_empty()
    }
}
