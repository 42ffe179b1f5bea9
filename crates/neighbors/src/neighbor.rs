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

//! Neighbor (BGP session) records as served by the looking glass API.

use crate::state::is_up_state;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Opaque identifier of a neighbor, stable across refreshes of a route server.
pub type NeighborId = String;

/// A BGP session configured on a route server.
///
/// Only `id`, `asn`, `address`, `description` and `state` take part in
/// filtering and grouping, the counters are carried for display and sorting.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    pub id: NeighborId,
    pub asn: u32,
    /// IPv4 or IPv6 literal of the peer
    pub address: String,
    #[serde(default)]
    pub description: String,
    /// Free-text session state as reported by the routing daemon
    #[serde(default)]
    pub state: String,
    /// Session uptime in seconds
    #[serde(default)]
    pub uptime: u64,
    #[serde(default, skip_serializing_if = "::std::option::Option::is_none")]
    pub last_error: Option<String>,
    #[serde(default)]
    pub routes_received: u64,
    #[serde(default)]
    pub routes_filtered: u64,
    #[serde(default)]
    pub routes_exported: u64,
    #[serde(default)]
    pub routes_preferred: u64,
    #[serde(default)]
    pub routes_accepted: u64,
}

impl Neighbor {
    pub fn new(
        id: impl Into<NeighborId>,
        asn: u32,
        address: impl Into<String>,
        description: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            asn,
            address: address.into(),
            description: description.into(),
            state: state.into(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// True when the session state reads as up or established.
    pub fn is_up(&self) -> bool {
        is_up_state(&self.state)
    }
}

/// Access the [`Neighbor`] behind owned records and references alike.
#[inline]
pub(crate) fn as_neighbor<N: Borrow<Neighbor>>(neighbor: &N) -> &Neighbor {
    Borrow::<Neighbor>::borrow(neighbor)
}

/// Look up a neighbor by its id.
pub fn find_neighbor<'a>(neighbors: &'a [Neighbor], id: &str) -> Option<&'a Neighbor> {
    neighbors.iter().find(|n| n.id == id)
}

/// All neighbors sharing the ASN of `neighbor` whose session is currently up.
///
/// The neighbor itself is part of the result when its own session is up.
pub fn related_peers<'a>(neighbors: &'a [Neighbor], neighbor: &Neighbor) -> Vec<&'a Neighbor> {
    neighbors
        .iter()
        .filter(|n| n.asn == neighbor.asn && n.is_up())
        .collect()
}
