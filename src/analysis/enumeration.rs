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

use fnv::FnvHashSet;
use tracing::debug;

use crate::state::State;
use crate::symmetry::Symmetric;

/// Returns one representative of every equivalence class reachable from
/// `root` by legal moves.
///
/// The search is depth-first.  A successor is kept, and later expanded, only
/// if no image in its orbit has been kept already; because the orbit of a
/// kept state contains the kept state's own images, no two representatives
/// are equivalent.
///
/// `root` itself is expanded but never kept, so it is absent from the result
/// unless some other path leads back to its class.
///
/// The order of the result is unspecified.
pub fn equivalence_classes<S>(root: S) -> Vec<S> where
    S: State + Symmetric {
    let mut visited = FnvHashSet::default();
    let mut stack = vec![root];
    let mut successors = Vec::new();

    while let Some(state) = stack.pop() {
        successors.clear();
        state.extrapolate_into(&mut successors);

        for next in successors.drain(..) {
            if next.orbit().iter().all(|image| !visited.contains(image)) {
                visited.insert(next.clone());
                stack.push(next);
            }
        }
    }

    debug!(classes = visited.len(), "enumerated equivalence classes");
    visited.into_iter().collect()
}
