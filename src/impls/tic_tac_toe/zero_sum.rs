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

use crate::analysis::Selector;
use crate::error::Result;
use crate::impls::tic_tac_toe::{Board, EvaluationStore, Mark, Resolution, Symmetry};
use crate::resolution;
use crate::state::State;
use crate::symmetry::Symmetric;

impl resolution::Resolution for Resolution {
    fn get_winner(&self) -> Option<u8> {
        match *self {
            Resolution::Win(Mark::X) => Some(0),
            Resolution::Win(Mark::O) => Some(1),
            _ => None,
        }
    }

    fn is_draw(&self) -> bool {
        if let Resolution::CatsGame = *self { true } else { false }
    }
}

impl State for Board {
    type Resolution = Resolution;

    fn check_resolution(&self) -> Option<Resolution> {
        if let Some(mark) = self.is_win() {
            Some(Resolution::Win(mark))
        } else if self.0.iter().all(Option::is_some) {
            Some(Resolution::CatsGame)
        } else {
            None
        }
    }

    fn extrapolate_into(&self, states: &mut Vec<Board>) {
        self.legal_moves_into(states);
    }
}

impl Symmetric for Board {
    fn orbit(&self) -> Vec<Board> {
        let mut images: Vec<Board> = Vec::with_capacity(Symmetry::GROUP.len());
        for symmetry in Symmetry::GROUP.iter() {
            let image = symmetry.apply(self);
            if !images.contains(&image) {
                images.push(image);
            }
        }
        images
    }
}

impl Selector<Board> for EvaluationStore {
    fn choose_next(&self, state: &Board) -> Result<Board> {
        EvaluationStore::choose_next(self, state)
    }

    fn record_outcome(&self, history: &[Board], resolution: Option<&Resolution>) {
        let winner = match resolution {
            Some(&Resolution::Win(mark)) => Some(mark),
            _ => None,
        };
        EvaluationStore::record_outcome(self, history, winner);
    }
}

#[cfg(test)]
mod test {
    use crate::analysis::Selector;
    use crate::impls::tic_tac_toe::*;
    use crate::resolution::Resolution as ResolutionTrait;

    #[test]
    fn test_resolution_winner() {
        assert_eq!(Resolution::Win(Mark::X).get_winner(), Some(0));
        assert_eq!(Resolution::Win(Mark::O).get_winner(), Some(1));
        assert_eq!(Resolution::CatsGame.get_winner(), None);
        assert!(Resolution::CatsGame.is_draw());
        assert!(!Resolution::Win(Mark::O).is_draw());
    }

    #[test]
    fn test_selector_records_draws() {
        let store = EvaluationStore::with_seed(0.0, 0);
        let history = vec![Board::new(), "X  \n   \n   \n".parse().unwrap()];

        Selector::record_outcome(&store, &history, Some(&Resolution::CatsGame));
        assert_eq!(store.tally(&history[1]), Some(-1));

        Selector::record_outcome(&store, &history, Some(&Resolution::Win(Mark::O)));
        assert_eq!(store.tally(&history[1]), Some(-5));
    }
}
