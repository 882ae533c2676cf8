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

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use fnv::FnvHashMap;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::error::{Error, Result};
use crate::impls::tic_tac_toe::{Board, Mark};
use crate::symmetry::Symmetric;
use crate::util::JKiss32Rng;

/// The persisted form of a store.
#[derive(Deserialize, Serialize)]
struct Snapshot {
    positions: BTreeMap<Board, i64>,
    curiosity: f64,
}

struct Tallies {
    positions: FnvHashMap<Board, i64>,
    curiosity: f64,
    rng: JKiss32Rng,
}

impl Tallies {
    /// Finds the stored board equivalent to `board`, trying `board` itself first.
    fn canonical(&self, board: &Board) -> Option<Board> {
        board.orbit().into_iter().find(|image| self.positions.contains_key(image))
    }

    fn tally(&self, board: &Board) -> Option<i64> {
        self.canonical(board).and_then(|key| self.positions.get(&key).cloned())
    }

    fn adjust(&mut self, board: &Board, change: i64) {
        let key = self.canonical(board).unwrap_or(*board);
        let tally = self.positions.entry(key).or_insert(0);
        *tally = tally.saturating_add(change);
    }

    fn score(&mut self, board: &Board, turn: Mark) -> f64 {
        let tally = self.tally(board).unwrap_or(0) as f64;
        let unadjusted = match turn {
            Mark::X => tally,
            Mark::O => -tally,
        };
        unadjusted + self.curiosity * self.rng.gen::<f64>()
    }
}

fn clamp_curiosity(curiosity: f64) -> f64 {
    if curiosity.is_nan() {
        0.0
    } else {
        curiosity.max(0.0).min(1.0)
    }
}

/// Learns which positions lead to wins by tallying finished games.
///
/// Each equivalence class of boards under `Symmetry::GROUP` has at most one
/// entry, keyed by whichever member was recorded first.  A tally is positive
/// when the class has tended to favor X.
///
/// Every method takes the store's lock for its whole duration, so a store can
/// be shared between threads behind a plain reference or an `Arc`.
pub struct EvaluationStore {
    tallies: Mutex<Tallies>,
}

impl EvaluationStore {
    /// Creates an empty store with no curiosity.
    pub fn new() -> EvaluationStore {
        EvaluationStore::with_rng(0.0, JKiss32Rng::new())
    }

    /// Creates an empty store.  `curiosity` is clamped to `[0, 1]`.
    pub fn with_curiosity(curiosity: f64) -> EvaluationStore {
        EvaluationStore::with_rng(curiosity, JKiss32Rng::new())
    }

    /// Creates an empty store whose exploration noise is reproducible.
    pub fn with_seed(curiosity: f64, seed: u64) -> EvaluationStore {
        EvaluationStore::with_rng(curiosity, JKiss32Rng::seed_from_u64(seed))
    }

    fn with_rng(curiosity: f64, rng: JKiss32Rng) -> EvaluationStore {
        EvaluationStore {
            tallies: Mutex::new(Tallies {
                positions: FnvHashMap::default(),
                curiosity: clamp_curiosity(curiosity),
                rng: rng,
            }),
        }
    }

    // Every update is a single map write, so a poisoned guard is still consistent
    fn lock(&self) -> MutexGuard<'_, Tallies> {
        self.tallies.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn curiosity(&self) -> f64 {
        self.lock().curiosity
    }

    /// Sets the weight of the random term added by `score`, clamped to `[0, 1]`.
    pub fn set_curiosity(&self, curiosity: f64) {
        self.lock().curiosity = clamp_curiosity(curiosity);
    }

    /// The number of stored equivalence classes.
    pub fn len(&self) -> usize {
        self.lock().positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().positions.is_empty()
    }

    /// Returns the tally of the class `board` belongs to, if it has one.
    pub fn tally(&self, board: &Board) -> Option<i64> {
        self.lock().tally(board)
    }

    /// Forgets every tally.  Curiosity is kept.
    pub fn reset(&self) {
        let mut tallies = self.lock();
        info!(positions = tallies.positions.len(), "resetting evaluation store");
        tallies.positions.clear();
    }

    /// Updates the tally of every board in `history` with the result of the game.
    ///
    /// A cat's game costs each class a point.  A win is worth `5 - len / 2`
    /// points, `len` being the length of `history`, so that quick wins count
    /// for more; the points are added for an X win and subtracted for an O win.
    pub fn record_outcome(&self, history: &[Board], winner: Option<Mark>) {
        let weight = 5 - history.len() as i64 / 2;
        let change = match winner {
            None => -1,
            Some(Mark::X) => weight,
            Some(Mark::O) => -weight,
        };

        let mut tallies = self.lock();
        for board in history {
            tallies.adjust(board, change);
        }
        debug!(plies = history.len(), ?winner, change, positions = tallies.positions.len(), "recorded outcome");
    }

    /// Scores `board` from the point of view of `turn`: the tally of its class,
    /// negated for O, plus `curiosity` times a uniform sample from `[0, 1)`.
    ///
    /// With no curiosity, `score(b, Mark::X) == -score(b, Mark::O)`.
    pub fn score(&self, board: &Board, turn: Mark) -> f64 {
        self.lock().score(board, turn)
    }

    /// Returns the legal move from `board` with the highest score for the
    /// player to move.  Ties go to the earliest move in row-major order.
    ///
    /// # Errors
    /// Returns `Error::NoLegalMoves` if `board` is terminal.
    pub fn choose_next(&self, board: &Board) -> Result<Board> {
        let candidates = board.legal_moves();
        let turn = board.turn();

        let mut tallies = self.lock();
        let mut best: Option<(Board, f64)> = None;
        for candidate in candidates {
            let score = tallies.score(&candidate, turn);
            match best {
                Some((_, best_score)) if score <= best_score => (),
                _ => best = Some((candidate, score)),
            }
        }

        match best {
            Some((choice, score)) => {
                trace!(%turn, score, "chose:\n{}", choice);
                Ok(choice)
            },
            None => Err(Error::NoLegalMoves),
        }
    }

    /// Replaces the contents of the store with a JSON snapshot written by `save`.
    ///
    /// # Errors
    /// Returns `Error::Serialization` if `bytes` is not a valid snapshot.  The
    /// store is unchanged in that case.
    pub fn load(&self, bytes: &[u8]) -> Result<()> {
        let mut tallies = self.lock();
        let snapshot: Snapshot = serde_json::from_slice(bytes)?;

        tallies.positions = snapshot.positions.into_iter().collect();
        tallies.curiosity = clamp_curiosity(snapshot.curiosity);
        info!(positions = tallies.positions.len(), curiosity = tallies.curiosity, "loaded evaluation store");
        Ok(())
    }

    /// Reads `reader` to the end and loads the snapshot it contains.
    pub fn load_from<R: Read>(&self, mut reader: R) -> Result<()> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.load(&bytes)
    }

    /// Serializes the store as `{"positions": {<board>: <tally>, ...}, "curiosity": <float>}`.
    pub fn save(&self) -> Result<Vec<u8>> {
        let tallies = self.lock();
        let snapshot = Snapshot {
            positions: tallies.positions.iter().map(|(board, tally)| (*board, *tally)).collect(),
            curiosity: tallies.curiosity,
        };
        Ok(serde_json::to_vec(&snapshot)?)
    }

    pub fn save_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.save()?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for EvaluationStore {
    fn default() -> EvaluationStore {
        EvaluationStore::new()
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;
    use std::thread;

    use crate::error::Error;
    use crate::impls::tic_tac_toe::{Board, Mark};
    use super::EvaluationStore;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_terminal_win_scores_for_x() {
        let store = EvaluationStore::with_seed(0.0, 0);
        let win = board("XXX\nOO \n   \n");
        store.record_outcome(&[win], Some(Mark::X));

        assert!(store.score(&win, Mark::X) > store.score(&win, Mark::O));
        assert_eq!(store.tally(&win), Some(5));
    }

    #[test]
    fn test_length_weighting() {
        let store = EvaluationStore::with_seed(0.0, 0);
        let a = board("X  \n   \n   \n");
        let b = board(" X \n   \n   \n");
        let c = board("   \n X \n   \n");

        store.record_outcome(&[a; 6], Some(Mark::X));
        assert_eq!(store.tally(&a), Some(12));

        store.record_outcome(&[b; 10], Some(Mark::X));
        assert_eq!(store.tally(&b), Some(0));

        store.record_outcome(&[c, c, c, c], Some(Mark::O));
        assert_eq!(store.tally(&c), Some(-12));

        store.record_outcome(&[c], None);
        assert_eq!(store.tally(&c), Some(-13));
    }

    #[test]
    fn test_equivalent_boards_share_a_tally() {
        let store = EvaluationStore::with_seed(0.0, 0);
        let p = board("XO \n   \n   \n");
        store.record_outcome(&[p], Some(Mark::X));

        for steps in 1..4 {
            store.record_outcome(&[p.rotate(steps)], Some(Mark::X));
        }
        store.record_outcome(&[p.flip_horizontal(), p.flip_vertical()], Some(Mark::X));

        assert_eq!(store.len(), 1);
        assert_eq!(store.tally(&p), Some(5 * 4 + 4 * 2));
        assert_eq!(store.tally(&p.rotate(2)), store.tally(&p));

        // Swapping players is not an equivalence
        assert_eq!(store.tally(&p.swap_players()), None);
    }

    #[test]
    fn test_score_is_antisymmetric_without_curiosity() {
        let store = EvaluationStore::with_seed(0.0, 0);
        let history = vec![Board::new(), board("X  \n   \n   \n"), board("XO \n   \n   \n")];
        store.record_outcome(&history, Some(Mark::O));

        for b in history.iter().chain([board("XOX\n   \n   \n"), board("   \n O \nX  \n")].iter()) {
            assert_eq!(store.score(b, Mark::X), -store.score(b, Mark::O));
        }
    }

    #[test]
    fn test_curiosity_bounds() {
        let store = EvaluationStore::with_seed(1.0, 11);
        let b = board("X  \n   \n   \n");
        store.record_outcome(&[b], Some(Mark::O));

        for _ in 0..100 {
            let score = store.score(&b, Mark::O);
            assert!(score >= 5.0 && score < 6.0);
        }

        store.set_curiosity(7.0);
        assert_eq!(store.curiosity(), 1.0);
        store.set_curiosity(-1.0);
        assert_eq!(store.curiosity(), 0.0);
        assert_eq!(EvaluationStore::with_curiosity(0.25).curiosity(), 0.25);
    }

    #[test]
    fn test_choose_next_terminal() {
        let store = EvaluationStore::new();
        match store.choose_next(&board("XXX\nOO \n   \n")) {
            Err(Error::NoLegalMoves) => (),
            _ => panic!("expected no legal moves"),
        }
        match store.choose_next(&board("XOX\nXOO\nOXX\n")) {
            Err(Error::NoLegalMoves) => (),
            _ => panic!("expected no legal moves"),
        }
    }

    #[test]
    fn test_choose_next_ties_go_first() {
        let store = EvaluationStore::with_seed(0.0, 0);
        assert_eq!(store.choose_next(&Board::new()).unwrap(), board("X  \n   \n   \n"));
        assert_eq!(store.choose_next(&board("X  \n   \n   \n")).unwrap(), board("XO \n   \n   \n"));
    }

    #[test]
    fn test_choose_next_prefers_winning_classes() {
        let store = EvaluationStore::with_seed(0.0, 0);
        store.record_outcome(&[board("   \n X \n   \n")], Some(Mark::X));
        assert_eq!(store.choose_next(&Board::new()).unwrap(), board("   \n X \n   \n"));

        // O wants the most negative tally
        let after = board("X  \n   \n   \n");
        store.record_outcome(&[board("X  \n O \n   \n")], Some(Mark::O));
        assert_eq!(store.choose_next(&after).unwrap(), board("X  \n O \n   \n"));

        // A corner recorded in one orientation is scored in all of them
        store.record_outcome(&[board("  X\n   \n   \n")], Some(Mark::O));
        assert_eq!(store.score(&board("X  \n   \n   \n"), Mark::X), -5.0);
        store.reset();
        store.record_outcome(&[board("  X\n   \n   \n")], Some(Mark::X));
        assert_eq!(store.choose_next(&Board::new()).unwrap(), board("X  \n   \n   \n"));
    }

    #[test]
    fn test_reset_keeps_curiosity() {
        let store = EvaluationStore::with_seed(0.3, 0);
        store.record_outcome(&[Board::new()], None);
        assert!(!store.is_empty());

        store.reset();
        assert!(store.is_empty());
        assert_eq!(store.curiosity(), 0.3);
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = EvaluationStore::with_seed(0.75, 0);
        store.record_outcome(&[Board::new(), board("X  \n   \n   \n"), board("XO \n   \n   \n")], Some(Mark::X));
        store.record_outcome(&[board("XO \n   \n   \n")], None);
        assert_eq!(store.len(), 3);

        let bytes = store.save().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["curiosity"], 0.75);
        assert_eq!(value["positions"]["XO \n   \n   \n"], 3);

        let loaded = EvaluationStore::new();
        loaded.load(&bytes).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.curiosity(), 0.75);
        for b in &[Board::new(), board("X  \n   \n   \n"), board("XO \n   \n   \n")] {
            assert_eq!(loaded.tally(b), store.tally(b));
        }
        assert_eq!(loaded.save().unwrap(), bytes);
    }

    #[test]
    fn test_save_to_load_from() {
        let store = EvaluationStore::with_seed(0.5, 0);
        store.record_outcome(&[board("   \n X \n   \n")], Some(Mark::X));

        let mut bytes = Vec::new();
        store.save_to(&mut bytes).unwrap();

        let loaded = EvaluationStore::new();
        loaded.load_from(&bytes[..]).unwrap();
        assert_eq!(loaded.tally(&board("   \n X \n   \n")), Some(5));
    }

    #[test]
    fn test_load_invalid() {
        let store = EvaluationStore::with_seed(0.5, 0);
        store.record_outcome(&[Board::new()], None);

        for bytes in &[
            &b"{\"positions\": {"[..],
            &b"not json"[..],
            &b"{\"positions\": {\"X\\n\": 1}, \"curiosity\": 0.5}"[..],
            &b"{\"positions\": {\"   \\n   \\n   \\n\": \"one\"}, \"curiosity\": 0.5}"[..],
        ] {
            match store.load(bytes) {
                Err(Error::Serialization(_)) => (),
                _ => panic!("expected a serialization error"),
            }
        }

        // Failed loads leave the store as it was
        assert_eq!(store.tally(&Board::new()), Some(-1));
        assert_eq!(store.curiosity(), 0.5);
    }

    #[test]
    fn test_extreme_tallies_saturate() {
        let store = EvaluationStore::with_seed(0.0, 0);
        let win = board("XXX\nOO \n   \n");
        store.load(b"{\"positions\": {\"XXX\\nOO \\n   \\n\": 9223372036854775807, \"XX \\nOO \\n   \\n\": -9223372036854775808}, \"curiosity\": 0.0}").unwrap();

        store.record_outcome(&[win], Some(Mark::X));
        assert_eq!(store.tally(&win), Some(i64::MAX));

        let before = board("XX \nOO \n   \n");
        store.record_outcome(&[before], None);
        assert_eq!(store.tally(&before), Some(i64::MIN));

        store.record_outcome(&[win], Some(Mark::O));
        assert_eq!(store.tally(&win), Some(i64::MAX - 5));
    }

    #[test]
    fn test_concurrent_outcomes() {
        let store = Arc::new(EvaluationStore::with_seed(0.5, 0));
        let win = board("XXX\nOO \n   \n");

        let threads = (0..8).map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    store.record_outcome(&[win], Some(Mark::X));
                    store.choose_next(&Board::new()).unwrap();
                }
            })
        }).collect::<Vec<_>>();

        for thread in threads {
            thread.join().unwrap();
        }

        assert_eq!(store.tally(&win), Some(8 * 100 * 5));
    }
}
