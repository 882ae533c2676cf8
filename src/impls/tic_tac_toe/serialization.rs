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

//! Boards serialize as their text form, so they can be used directly as JSON
//! strings and JSON object keys.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::impls::tic_tac_toe::Board;

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
        S: Serializer {
        serializer.collect_str(self)
    }
}

struct BoardVisitor;

impl<'de> Visitor<'de> for BoardVisitor {
    type Value = Board;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a board as three lines of 'X', 'O', or ' '")
    }

    fn visit_str<E>(self, value: &str) -> Result<Board, E> where
        E: de::Error {
        Board::from_text(value).map_err(|error| E::custom(format!("invalid board {:?}: {}", value, error)))
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Board, D::Error> where
        D: Deserializer<'de> {
        deserializer.deserialize_str(BoardVisitor)
    }
}
