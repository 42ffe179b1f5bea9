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

//! Filter, sort and group neighbors for a neighbors page in one pass.

use crate::{
    filter::filter_neighbors,
    neighbor::Neighbor,
    sort::{sort_neighbors, SortField, SortOrder},
    state::{group_neighbors, NeighborGroups},
};

/// What a neighbors page asks for.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NeighborsQuery {
    pub filter: String,
    pub sort: Option<(SortField, SortOrder)>,
}

impl NeighborsQuery {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            sort: None,
        }
    }

    pub fn with_sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort = Some((field, order));
        self
    }
}

/// Apply the filter of `query`, then its sort if any, and group the result
/// by session state.
pub fn prepare_neighbors<'a>(
    neighbors: &'a [Neighbor],
    query: &NeighborsQuery,
) -> NeighborGroups<&'a Neighbor> {
    let all: Vec<&'a Neighbor> = neighbors.iter().collect();
    let mut selected = filter_neighbors(&all, &query.filter);
    if let Some((field, order)) = query.sort {
        selected = sort_neighbors(&selected, field, order);
    }
    group_neighbors(&selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peers() -> Vec<Neighbor> {
        vec![
            Neighbor::new("peer-a", 100, "10.0.0.1", "peerA", "Established"),
            Neighbor::new("peer-b", 200, "fe80::1", "peerB", "Idle"),
        ]
    }

    #[test]
    fn test_asn_filter_excludes_before_grouping() {
        let neighbors = peers();
        let groups = prepare_neighbors(&neighbors, &NeighborsQuery::new("AS100"));
        assert_eq!(groups.up, vec![&neighbors[0]]);
        assert!(groups.idle.is_empty());
        assert!(groups.down.is_empty());
        assert!(groups.unclassified.is_empty());
    }

    #[test]
    fn test_no_filter_groups_everything() {
        let neighbors = peers();
        let groups = prepare_neighbors(&neighbors, &NeighborsQuery::default());
        assert_eq!(groups.up, vec![&neighbors[0]]);
        assert_eq!(groups.idle, vec![&neighbors[1]]);
        assert!(groups.down.is_empty());
    }

    #[test]
    fn test_sorted_groups() {
        let neighbors = vec![
            Neighbor::new("c", 3, "10.0.0.30", "", "Established"),
            Neighbor::new("a", 1, "10.0.0.4", "", "Established"),
            Neighbor::new("b", 2, "10.0.0.200", "", "Down"),
            Neighbor::new("d", 4, "10.0.0.5", "", "up"),
        ];
        let query = NeighborsQuery::new("10.0.0").with_sort(SortField::Address, SortOrder::Desc);
        let groups = prepare_neighbors(&neighbors, &query);
        let up: Vec<&str> = groups.up.iter().map(|n| n.id()).collect();
        assert_eq!(up, vec!["c", "d", "a"]);
        assert_eq!(groups.down, vec![&neighbors[2]]);
    }

    #[test]
    fn test_empty_input() {
        let groups = prepare_neighbors(&[], &NeighborsQuery::new("AS100"));
        assert!(groups.is_empty());
    }
}
