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

//! Writes one board from every equivalence class of reachable positions to
//! stdout, as back-to-back 12-byte records.

use std::io::{self, BufWriter};

use tracing::info;
use tracing_subscriber::EnvFilter;

use tic_tac_tally::analysis::equivalence_classes;
use tic_tac_tally::impls::tic_tac_toe::{write_boards, Board};

fn main() -> tic_tac_tally::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let classes = equivalence_classes(Board::new());

    let stdout = io::stdout();
    write_boards(BufWriter::new(stdout.lock()), &classes)?;

    info!(count = classes.len(), "wrote equivalence classes");
    Ok(())
}
