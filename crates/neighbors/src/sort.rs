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

//! Ordering of neighbors by a selectable field.

use crate::{
    address::compare_addresses,
    neighbor::{as_neighbor, Neighbor},
};
use std::{borrow::Borrow, cmp::Ordering};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Neighbor fields a neighbors table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    Id,
    Asn,
    Address,
    Description,
    State,
    Uptime,
    RoutesReceived,
    RoutesFiltered,
    RoutesExported,
    RoutesPreferred,
    RoutesAccepted,
}

impl SortField {
    /// Three-way comparison of two neighbors on this field.
    ///
    /// Addresses compare by numeric value, text fields by code point and
    /// counters numerically.
    pub fn compare(self, a: &Neighbor, b: &Neighbor) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Asn => a.asn.cmp(&b.asn),
            Self::Address => compare_addresses(&a.address, &b.address),
            Self::Description => a.description.cmp(&b.description),
            Self::State => a.state.cmp(&b.state),
            Self::Uptime => a.uptime.cmp(&b.uptime),
            Self::RoutesReceived => a.routes_received.cmp(&b.routes_received),
            Self::RoutesFiltered => a.routes_filtered.cmp(&b.routes_filtered),
            Self::RoutesExported => a.routes_exported.cmp(&b.routes_exported),
            Self::RoutesPreferred => a.routes_preferred.cmp(&b.routes_preferred),
            Self::RoutesAccepted => a.routes_accepted.cmp(&b.routes_accepted),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// `"desc"` selects descending order, any other text ascending.
impl From<&str> for SortOrder {
    fn from(order: &str) -> Self {
        if order == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Return the neighbors ordered by `field`.
///
/// The sort is stable: neighbors comparing equal on `field` keep their
/// relative input order, in both directions.
pub fn sort_neighbors<N: Borrow<Neighbor> + Clone>(
    neighbors: &[N],
    field: SortField,
    order: SortOrder,
) -> Vec<N> {
    let mut sorted = neighbors.to_vec();
    sorted.sort_by(|a, b| order.apply(field.compare(as_neighbor(a), as_neighbor(b))));
    sorted
}

/// Like [`sort_neighbors`] but with the field and order given as text.
///
/// An unknown field compares every pair of neighbors as equal, so the input
/// order is kept.
pub fn sort_neighbors_by_name<N: Borrow<Neighbor> + Clone>(
    neighbors: &[N],
    field: &str,
    order: &str,
) -> Vec<N> {
    match field.parse::<SortField>() {
        Ok(field) => sort_neighbors(neighbors, field, SortOrder::from(order)),
        Err(_) => {
            debug!(field, "unknown neighbor sort field, keeping input order");
            neighbors.to_vec()
        }
    }
}

#[cfg(test)]
mod tests;
