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

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::impls::tic_tac_toe::{Board, EvaluationStore, Resolution};
use crate::state::State;

/// A game between a person and an `EvaluationStore`.
///
/// The history is kept newest first and always holds the starting board.
/// Once the game is over the store is told the outcome, once.
#[derive(Clone, Debug)]
pub struct Game {
    history: Vec<Board>,
    recorded: bool,
}

impl Game {
    pub fn new() -> Game {
        Game::from_board(Board::new())
    }

    /// Starts a game from `board`.  A board that is already finished is
    /// never reported to a store.
    pub fn from_board(board: Board) -> Game {
        Game {
            history: vec![board],
            recorded: board.is_terminal(),
        }
    }

    /// Resumes a game from a newest-first JSON array of boards, as produced
    /// by `history_json`.  An empty array starts a new game.
    pub fn from_history_json(json: &str) -> Result<Game> {
        let history: Vec<Board> = serde_json::from_str(json)?;
        if history.is_empty() {
            return Ok(Game::new());
        }

        let recorded = history[0].is_terminal();
        Ok(Game {
            history: history,
            recorded: recorded,
        })
    }

    /// The board as it stands.
    pub fn current(&self) -> &Board {
        &self.history[0]
    }

    /// Every board of the game, newest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.current().check_resolution()
    }

    pub fn is_finished(&self) -> bool {
        self.current().is_terminal()
    }

    /// Marks `(col, row)` for the player whose turn it is.
    ///
    /// A move that ends the game is not reported to any store; follow it with
    /// `finish` or `respond`.
    ///
    /// # Errors
    /// Returns `Error::IllegalMove` if the cell is off the board or taken, or
    /// if the game is already over.  The game is unchanged in that case.
    pub fn place(&mut self, col: usize, row: usize) -> Result<()> {
        let current = *self.current();
        if col > 2 || row > 2 || current.get(col, row).is_some() || self.is_finished() {
            return Err(Error::IllegalMove { col: col, row: row });
        }

        let mut next = current;
        next.set(col, row, Some(current.turn()));
        debug!(col, row, mark = %current.turn(), "placed");

        self.history.insert(0, next);
        Ok(())
    }

    /// Lets `store` make the next move, returning the board it chose, or
    /// `None` if the game was already over.
    ///
    /// Either way, a game that is now over is reported to `store` if it
    /// hasn't been yet.
    pub fn respond(&mut self, store: &EvaluationStore) -> Result<Option<Board>> {
        let choice = if self.is_finished() {
            None
        } else {
            let next = store.choose_next(self.current())?;
            self.history.insert(0, next);
            Some(next)
        };

        self.finish(store);
        Ok(choice)
    }

    /// Reports the game to `store` if it is over and hasn't been reported yet.
    /// Returns `true` if this call reported it.
    pub fn finish(&mut self, store: &EvaluationStore) -> bool {
        if !self.is_finished() || self.recorded {
            return false;
        }

        let winner = self.current().is_win();
        store.record_outcome(&self.history, winner);
        self.recorded = true;
        info!(plies = self.history.len(), ?winner, "game over");
        true
    }

    /// Renders the history as a JSON array of board texts, newest first.
    pub fn history_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.history)?)
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
