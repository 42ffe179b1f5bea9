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

//! Presentation-side processing of BGP neighbors of a route server.
//!
//! The functions in this crate take the neighbor records a looking glass
//! fetched from its backend and prepare them for display: a user supplied
//! filter selects the neighbors of interest, an optional sort orders them,
//! and finally the neighbors are partitioned by session state into the
//! `up`, `down` and `idle` groups.
//!
//! ```
//! use lgview_neighbors::{prepare_neighbors, Neighbor, NeighborsQuery};
//!
//! let neighbors = vec![
//!     Neighbor::new("peer-a", 100, "10.0.0.1", "peerA", "Established"),
//!     Neighbor::new("peer-b", 200, "fe80::1", "peerB", "Idle"),
//! ];
//! let groups = prepare_neighbors(&neighbors, &NeighborsQuery::new("AS100"));
//! assert_eq!(groups.up.len(), 1);
//! assert!(groups.idle.is_empty());
//! ```
//!
//! All operations are pure; the only side channel is `tracing`, most
//! notably a warning for neighbors whose state can't be classified.

#![deny(missing_debug_implementations)]
#![deny(rust_2018_idioms)]
#![deny(unreachable_pub)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![forbid(unsafe_code)]

pub mod address;
pub mod filter;
pub mod lookup;
pub mod neighbor;
pub mod sort;
pub mod state;
pub mod view;

pub use address::{address_value, compare_addresses};
pub use filter::{filter_neighbors, parse_asn_filter, NeighborFilter};
pub use lookup::{lookup_neighbors, validate_neighbors_query, QueryValidationError};
pub use neighbor::{find_neighbor, related_peers, Neighbor, NeighborId};
pub use sort::{sort_neighbors, sort_neighbors_by_name, SortField, SortOrder};
pub use state::{classify, group_neighbors, is_up_state, NeighborGroups, SessionState};
pub use view::{prepare_neighbors, NeighborsQuery};
