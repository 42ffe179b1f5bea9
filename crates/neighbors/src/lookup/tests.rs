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

fn neighbors() -> Vec<Neighbor> {
    vec![
        Neighbor::new("n1", 680, "192.0.2.1", "DFN Verein", "Established"),
        Neighbor::new("n2", 64500, "192.0.2.2", "Example AS64500 Transit", "Established"),
        Neighbor::new("n3", 0, "192.0.2.3", "as0 test peer", "Down"),
    ]
}

#[rstest]
#[case("", Err(QueryValidationError::EmptyQuery))]
#[case("DE", Err(QueryValidationError::QueryTooShort))]
#[case("DFN", Ok("DFN"))]
#[case("AS680", Ok("AS680"))]
fn test_validate_neighbors_query(
    #[case] query: &str,
    #[case] expected: Result<&str, QueryValidationError>,
) {
    assert_eq!(validate_neighbors_query(query), expected);
}

#[test]
fn test_validation_error_message() {
    assert_eq!(
        QueryValidationError::QueryTooShort.to_string(),
        "the query is too short"
    );
}

#[rstest]
#[case("AS680", Some(680))]
#[case("as680", Some(680))]
#[case("As0", Some(0))]
#[case("AS680 DFN", Some(680))]
#[case("DFN AS680", None)]
#[case("AS", None)]
#[case("AS99999999999", None)]
fn test_lookup_asn(#[case] query: &str, #[case] expected: Option<u32>) {
    assert_eq!(lookup_asn(query), expected);
}

#[rstest]
#[case("AS680", vec!["n1"])]
#[case("dfn", vec!["n1"])]
#[case("AS64500", vec!["n2"])]
#[case("as0", vec!["n3"])]
#[case("transit", vec!["n2"])]
#[case("192.0.2", vec![])]
fn test_lookup_neighbors(#[case] query: &str, #[case] expected: Vec<&str>) {
    let neighbors = neighbors();
    let found: Vec<&str> = lookup_neighbors(&neighbors, query)
        .iter()
        .map(|n| n.id())
        .collect();
    assert_eq!(found, expected);
}
