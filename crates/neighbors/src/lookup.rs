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

//! Neighbor lookup as performed by the looking glass search endpoint.
//!
//! Unlike the interactive [`crate::filter`], a lookup query must be at least
//! [`MIN_NEIGHBORS_QUERY_LEN`] characters long, the ASN shorthand is only
//! recognized as a case-insensitive `AS` prefix, and free text is matched
//! against the description only.

use crate::neighbor::Neighbor;
use regex::Regex;
use std::sync::OnceLock;
use strum_macros::Display;

/// Shortest accepted lookup query, enough for shorthands like "DFN".
pub const MIN_NEIGHBORS_QUERY_LEN: usize = 3;

static AS_LOOKUP: OnceLock<Regex> = OnceLock::new();

fn as_lookup() -> &'static Regex {
    AS_LOOKUP.get_or_init(|| Regex::new(r"(?i)^AS(\d+)").expect("invalid AS lookup pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum QueryValidationError {
    #[strum(to_string = "the query is empty")]
    EmptyQuery,

    #[strum(to_string = "the query is too short")]
    QueryTooShort,
}

impl std::error::Error for QueryValidationError {}

/// Check that a lookup query is long enough to be useful.
pub fn validate_neighbors_query(query: &str) -> Result<&str, QueryValidationError> {
    if query.is_empty() {
        return Err(QueryValidationError::EmptyQuery);
    }
    if query.chars().count() < MIN_NEIGHBORS_QUERY_LEN {
        return Err(QueryValidationError::QueryTooShort);
    }
    Ok(query)
}

/// ASN of a lookup query starting with `AS<number>`, in any letter case.
pub fn lookup_asn(query: &str) -> Option<u32> {
    as_lookup()
        .captures(query)
        .and_then(|captures| captures.get(1))
        .and_then(|asn| asn.as_str().parse().ok())
}

/// Neighbors matching a lookup query, in input order.
///
/// A neighbor matches when the query names its ASN (`AS<number>`) or when
/// its description contains the query, ignoring case.
pub fn lookup_neighbors<'a>(neighbors: &'a [Neighbor], query: &str) -> Vec<&'a Neighbor> {
    let asn = lookup_asn(query);
    let query = query.to_lowercase();
    neighbors
        .iter()
        .filter(|n| asn == Some(n.asn) || n.description.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests;
