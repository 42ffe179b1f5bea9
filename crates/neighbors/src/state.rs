// Copyright (C) 2026-present The lgview Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Classification of BGP session states into display groups.
//!
//! Routing daemons report session states as free text ("Established",
//! "up", "Active", "Idle", "Connect", ...), which is mapped onto the three
//! groups a neighbors page shows. States that fit none of them are reported and
//! shown as up so that no neighbor disappears from the page.

use crate::neighbor::{as_neighbor, Neighbor, NeighborId};
use std::borrow::Borrow;
use strum_macros::Display;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SessionState {
    Up,
    Down,
    Idle,
    Unclassified,
}

impl SessionState {
    /// Classify a raw session state string.
    ///
    /// Matching is case-insensitive on substrings, checked in order: `up` or
    /// `established`, then `down`, then `start`, `active` or `idle`.
    pub fn classify(state: &str) -> Self {
        let state = state.to_lowercase();
        if state.contains("up") || state.contains("established") {
            Self::Up
        } else if state.contains("down") {
            Self::Down
        } else if state.contains("start") || state.contains("active") || state.contains("idle") {
            Self::Idle
        } else {
            Self::Unclassified
        }
    }
}

/// True when the session state reads as up or established.
///
/// An empty state is never up.
pub fn is_up_state(state: &str) -> bool {
    SessionState::classify(state) == SessionState::Up
}

pub fn classify(neighbor: &Neighbor) -> SessionState {
    SessionState::classify(&neighbor.state)
}

/// Neighbors partitioned by session state.
///
/// Every neighbor appears in exactly one of `up`, `down` and `idle`.
/// Neighbors with an unclassified state are in `up`, and their ids are
/// listed in `unclassified` as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborGroups<N> {
    pub up: Vec<N>,
    pub down: Vec<N>,
    pub idle: Vec<N>,
    pub unclassified: Vec<NeighborId>,
}

impl<N> Default for NeighborGroups<N> {
    fn default() -> Self {
        Self {
            up: Vec::new(),
            down: Vec::new(),
            idle: Vec::new(),
            unclassified: Vec::new(),
        }
    }
}

impl<N> NeighborGroups<N> {
    /// Total number of grouped neighbors
    pub fn len(&self) -> usize {
        self.up.len() + self.down.len() + self.idle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition neighbors into the `up`, `down` and `idle` groups.
///
/// Each group keeps the relative order of the input.
pub fn group_neighbors<N: Borrow<Neighbor> + Clone>(neighbors: &[N]) -> NeighborGroups<N> {
    let mut groups = NeighborGroups::default();
    for item in neighbors {
        let neighbor = as_neighbor(item);
        match classify(neighbor) {
            SessionState::Up => groups.up.push(item.clone()),
            SessionState::Down => groups.down.push(item.clone()),
            SessionState::Idle => groups.idle.push(item.clone()),
            SessionState::Unclassified => {
                warn!(
                    neighbor_id = %neighbor.id,
                    asn = neighbor.asn,
                    state = %neighbor.state,
                    "couldn't classify neighbor by state"
                );
                groups.unclassified.push(neighbor.id.clone());
                groups.up.push(item.clone());
            }
        }
    }
    groups
}
