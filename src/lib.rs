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

//! Symmetry-aware analysis and self-play learning for small zero-sum games.
//!
//! The crate is built around three traits: `State`, `Resolution`, and
//! `Symmetric`.  Together they are enough for the generic tools in
//! `analysis` to enumerate every reachable position up to symmetry and to
//! drive a game of self-play against a `Selector`.
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! tic_tac_tally = "0.3"
//! ```
//!
//! # Tic-tac-toe
//!
//! With the `with_tic_tac_toe` feature (on by default), `impls::tic_tac_toe`
//! provides the 3x3 board, its symmetries, and an `EvaluationStore` that
//! learns which positions win by tallying the results of finished games.
//!
//! ```rust
//! use tic_tac_tally::analysis::self_play;
//! use tic_tac_tally::impls::tic_tac_toe::{Board, EvaluationStore};
//!
//! let store = EvaluationStore::with_seed(0.1, 7);
//! let record = self_play(&store, Board::new()).unwrap();
//! assert!(record.history.len() >= 6);
//! assert!(!store.is_empty());
//! ```

#[cfg(feature = "with_tic_tac_toe")]
#[macro_use]
extern crate lazy_static;

pub mod analysis;
pub mod config;

pub use self::error::{Error, FormatError, Result};
pub use self::resolution::Resolution;
pub use self::state::State;
pub use self::symmetry::Symmetric;

#[cfg(feature = "with_tic_tac_toe")]
pub mod impls;

mod error;
mod resolution;
mod state;
mod symmetry;
#[cfg(feature = "with_tic_tac_toe")]
mod util;
