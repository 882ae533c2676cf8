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

use std::fmt;

use tracing::trace;

use crate::analysis::Selector;
use crate::error::Result;
use crate::state::State;

/// A finished game.
pub struct GameRecord<S> where
    S: State {
    /// Every state of the game in the order it was played, starting state first.
    pub history: Vec<S>,
    pub resolution: Option<S::Resolution>,
}

impl<S> GameRecord<S> where
    S: State {
    /// The state the game ended in.
    pub fn last(&self) -> &S {
        &self.history[self.history.len() - 1]
    }
}

impl<S> fmt::Display for GameRecord<S> where
    S: State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (ply, state) in self.history.iter().enumerate() {
            write!(f, "Ply {}:\n{}\n", ply, state)?;
        }
        Ok(())
    }
}

/// Plays `selector` against itself from `start` until no move is left, then
/// reports the game back to it with `Selector::record_outcome`.
pub fn self_play<S, P>(selector: &P, start: S) -> Result<GameRecord<S>> where
    S: State,
    P: Selector<S> {
    let mut history = vec![start.clone()];
    let mut current = start;

    while !current.is_terminal() {
        current = selector.choose_next(&current)?;
        trace!(ply = history.len(), "selected:\n{}", current);
        history.push(current.clone());
    }

    let resolution = current.check_resolution();
    selector.record_outcome(&history, resolution.as_ref());

    Ok(GameRecord {
        history: history,
        resolution: resolution,
    })
}

#[cfg(all(test, feature = "with_tic_tac_toe"))]
mod test {
    use crate::impls::tic_tac_toe::*;
    use crate::state::State;
    use super::*;

    #[test]
    fn test_self_play_first_game() {
        let store = EvaluationStore::with_seed(0.0, 1);
        let record = self_play(&store, Board::new()).unwrap();

        // An empty store scores every move 0, so each player takes the first empty cell
        assert_eq!(record.history[0], Board::new());
        assert_eq!(record.last(), &"XOX\nOXO\nX  \n".parse::<Board>().unwrap());
        assert_eq!(record.history.len(), 8);
        match record.resolution {
            Some(Resolution::Win(Mark::X)) => (),
            _ => panic!("expected a win for X"),
        }

        // Every ply has a different mark count, so each board is its own class
        assert_eq!(store.len(), 8);
        for board in &record.history {
            assert_eq!(store.tally(board), Some(1));
        }
    }

    #[test]
    fn test_self_play_terminates() {
        let store = EvaluationStore::with_seed(0.5, 99);
        for _ in 0..50 {
            let record = self_play(&store, Board::new()).unwrap();
            assert!(record.last().is_terminal());
            assert!(record.history.len() >= 6 && record.history.len() <= 10);
        }
        assert!(!store.is_empty());
    }

    #[test]
    fn test_game_record_display() {
        let store = EvaluationStore::new();
        let board = "XXX\nOO \n   \n".parse::<Board>().unwrap();
        let record = self_play(&store, board).unwrap();
        assert_eq!(record.to_string(), "Ply 0:\nXXX\nOO \n   \n\n");
    }

    #[test]
    fn test_self_play_from_terminal() {
        let store = EvaluationStore::new();
        let board = "XXX\nOO \n   \n".parse::<Board>().unwrap();
        let record = self_play(&store, board).unwrap();
        assert_eq!(record.history, vec![board]);
        assert_eq!(store.tally(&board), Some(5));
    }
}
