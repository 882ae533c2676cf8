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

//! Trains an evaluation store by having it play against itself on several
//! threads at once.  See `tic_tac_tally::config` for the settings.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use tic_tac_tally::analysis::self_play;
use tic_tac_tally::config::load_config;
use tic_tac_tally::impls::tic_tac_toe::{Board, EvaluationStore};
use tic_tac_tally::Resolution;

#[derive(Default)]
struct Outcomes {
    x_wins: usize,
    o_wins: usize,
    cats_games: usize,
}

fn main() -> tic_tac_tally::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = load_config();
    info!(?config, "starting self-play");

    let store = Arc::new(match config.seed {
        Some(seed) => EvaluationStore::with_seed(config.curiosity, seed),
        None => EvaluationStore::with_curiosity(config.curiosity),
    });

    if let Some(ref path) = config.snapshot_path {
        if path.exists() {
            store.load_from(BufReader::new(File::open(path)?))?;
            store.set_curiosity(config.curiosity);
        }
    }

    let games = config.games;
    let threads = config.threads.max(1);
    let remaining = Arc::new(Mutex::new(games));
    let (finished_sender, finished_receiver) = mpsc::channel();

    for thread in 0..threads {
        let store = store.clone();
        let remaining = remaining.clone();
        let finished_sender = finished_sender.clone();

        thread::spawn(move || {
            let mut outcomes = Outcomes::default();

            loop {
                let game = {
                    let mut remaining = remaining.lock().unwrap_or_else(PoisonError::into_inner);
                    if *remaining == 0 {
                        break;
                    }
                    *remaining -= 1;
                    games - *remaining
                };

                match self_play(&*store, Board::new()) {
                    Ok(record) => {
                        debug!(thread, game, "finished:\n{}", record);
                        match record.resolution {
                            Some(ref resolution) if resolution.is_draw() => outcomes.cats_games += 1,
                            Some(ref resolution) => match resolution.get_winner() {
                                Some(0) => outcomes.x_wins += 1,
                                _ => outcomes.o_wins += 1,
                            },
                            None => outcomes.cats_games += 1,
                        }
                    },
                    Err(err) => {
                        error!(thread, game, "self-play failed: {}", err);
                        break;
                    },
                }
            }

            finished_sender.send(outcomes).ok();
        });
    }
    drop(finished_sender);

    let mut totals = Outcomes::default();
    for outcomes in finished_receiver.iter() {
        totals.x_wins += outcomes.x_wins;
        totals.o_wins += outcomes.o_wins;
        totals.cats_games += outcomes.cats_games;
    }

    let played = (totals.x_wins + totals.o_wins + totals.cats_games).max(1) as f32;
    info!(
        positions = store.len(),
        "X wins {:6.2}%, O wins {:6.2}%, cat's games {:6.2}%",
        totals.x_wins as f32 / played * 100.0,
        totals.o_wins as f32 / played * 100.0,
        totals.cats_games as f32 / played * 100.0
    );

    if let Some(ref path) = config.snapshot_path {
        store.save_to(BufWriter::new(File::create(path)?))?;
        info!("saved store to {}", path.display());
    }

    Ok(())
}
