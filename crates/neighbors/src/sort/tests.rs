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

use super::*;
use rstest::rstest;
use strum::IntoEnumIterator;
use tracing_test::traced_test;

fn table() -> Vec<Neighbor> {
    let mut a = Neighbor::new("a", 300, "fe80::1", "Charlie", "Established");
    a.routes_received = 10;
    let mut b = Neighbor::new("b", 100, "10.0.0.10", "alpha", "Down");
    b.routes_received = 200;
    let mut c = Neighbor::new("c", 200, "10.0.0.9", "Bravo", "Active");
    c.routes_received = 10;
    let mut d = Neighbor::new("d", 100, "2001:db8::1", "Delta", "Established");
    d.routes_received = 3;
    vec![a, b, c, d]
}

fn ids<N: Borrow<Neighbor>>(neighbors: &[N]) -> Vec<&str> {
    neighbors.iter().map(|n| as_neighbor(n).id()).collect()
}

#[rstest]
#[case(SortField::Asn, SortOrder::Asc, vec!["b", "d", "c", "a"])]
#[case(SortField::Asn, SortOrder::Desc, vec!["a", "c", "b", "d"])]
#[case(SortField::Address, SortOrder::Asc, vec!["c", "b", "d", "a"])]
#[case(SortField::Address, SortOrder::Desc, vec!["a", "d", "b", "c"])]
#[case(SortField::Description, SortOrder::Asc, vec!["c", "a", "d", "b"])]
#[case(SortField::RoutesReceived, SortOrder::Asc, vec!["d", "a", "c", "b"])]
#[case(SortField::RoutesReceived, SortOrder::Desc, vec!["b", "a", "c", "d"])]
#[case(SortField::Id, SortOrder::Desc, vec!["d", "c", "b", "a"])]
fn test_sort_neighbors(
    #[case] field: SortField,
    #[case] order: SortOrder,
    #[case] expected: Vec<&str>,
) {
    let neighbors = table();
    let sorted = sort_neighbors(&neighbors, field, order);
    assert_eq!(ids(&sorted), expected);
}

#[test]
fn test_sort_by_address_is_numeric() {
    let neighbors = vec![
        Neighbor::new("v6", 200, "fe80::1", "peerB", "Idle"),
        Neighbor::new("v4", 100, "10.0.0.1", "peerA", "Established"),
    ];
    let sorted = sort_neighbors(&neighbors, SortField::Address, SortOrder::Asc);
    assert_eq!(ids(&sorted), vec!["v4", "v6"]);
}

#[test]
fn test_sort_does_not_touch_input() {
    let neighbors = table();
    let refs: Vec<&Neighbor> = neighbors.iter().collect();
    let sorted = sort_neighbors(&refs, SortField::Asn, SortOrder::Asc);
    assert_eq!(ids(&refs), vec!["a", "b", "c", "d"]);
    assert!(std::ptr::eq(sorted[0], &neighbors[1]));
}

#[test]
fn test_sort_by_name() {
    let neighbors = table();
    assert_eq!(
        ids(&sort_neighbors_by_name(&neighbors, "asn", "desc")),
        vec!["a", "c", "b", "d"]
    );
    assert_eq!(
        ids(&sort_neighbors_by_name(&neighbors, "routes_received", "up")),
        vec!["d", "a", "c", "b"]
    );
}

#[test]
#[traced_test]
fn test_sort_by_unknown_field_keeps_order() {
    let neighbors = table();
    let sorted = sort_neighbors_by_name(&neighbors, "color", "asc");
    assert_eq!(ids(&sorted), vec!["a", "b", "c", "d"]);
    assert!(logs_contain("unknown neighbor sort field"));
}

#[rstest]
#[case("desc", SortOrder::Desc)]
#[case("asc", SortOrder::Asc)]
#[case("DESC", SortOrder::Asc)]
#[case("", SortOrder::Asc)]
fn test_sort_order_from_str(#[case] order: &str, #[case] expected: SortOrder) {
    assert_eq!(SortOrder::from(order), expected);
}

#[test]
fn test_sort_fields_parse_from_their_names() {
    for field in SortField::iter() {
        assert_eq!(field.to_string().parse::<SortField>(), Ok(field));
    }
    assert_eq!("routes_accepted".parse::<SortField>(), Ok(SortField::RoutesAccepted));
}
