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

//! Generic tools for exploring and playing games.

pub use self::enumeration::equivalence_classes;
pub use self::self_play::{self_play, GameRecord};
pub use self::selector::Selector;

mod enumeration;
mod self_play;
mod selector;
