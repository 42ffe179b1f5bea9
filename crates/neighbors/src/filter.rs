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

//! Free-text neighbor filter with an `AS<number>` shorthand.
//!
//! A filter string is interpreted in one of three ways:
//!
//! - empty: every neighbor matches
//! - contains `AS` followed by a number (e.g. `AS64500`): only neighbors with
//!   exactly that ASN match
//! - anything else: case-insensitive substring match on the address and the
//!   description, or an exact match on the ASN's decimal text

use crate::neighbor::{as_neighbor, Neighbor};
use std::borrow::Borrow;

const ASN_FILTER_MARKER: &str = "AS";

/// Extract the ASN of an `AS<number>` filter.
///
/// Only the text between the first `AS` and a possible second one is
/// considered. It is read like a permissive integer parse: leading
/// whitespace and a sign are accepted and parsing stops at the first
/// non-digit, so `AS123foo` yields `123`. Negative numbers, missing digits
/// and values beyond the 32-bit ASN space are not ASN filters.
///
/// `AS0` yields `Some(0)`, which is distinct from `None`.
pub fn parse_asn_filter(filter: &str) -> Option<u32> {
    let token = filter.split(ASN_FILTER_MARKER).nth(1)?;
    parse_leading_integer(token)
}

fn parse_leading_integer(token: &str) -> Option<u32> {
    let token = token.trim_start();
    let (negative, unsigned) = if let Some(rest) = token.strip_prefix('-') {
        (true, rest)
    } else {
        (false, token.strip_prefix('+').unwrap_or(token))
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }
    if negative {
        // -0 is still zero, everything else below it is rejected
        return digits.bytes().all(|b| b == b'0').then_some(0);
    }
    digits.parse().ok()
}

/// A parsed neighbor filter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum NeighborFilter {
    /// No filtering
    #[default]
    All,
    /// Exact ASN match
    Asn(u32),
    /// Lower-cased free-text query
    Text(String),
}

impl NeighborFilter {
    pub fn parse(filter: &str) -> Self {
        if filter.is_empty() {
            return Self::All;
        }
        match parse_asn_filter(filter) {
            Some(asn) => Self::Asn(asn),
            None => Self::Text(filter.to_lowercase()),
        }
    }

    pub fn matches(&self, neighbor: &Neighbor) -> bool {
        match self {
            Self::All => true,
            Self::Asn(asn) => neighbor.asn == *asn,
            Self::Text(query) => {
                neighbor.asn.to_string() == *query
                    || neighbor.address.to_lowercase().contains(query.as_str())
                    || neighbor.description.to_lowercase().contains(query.as_str())
            }
        }
    }
}

impl From<&str> for NeighborFilter {
    fn from(filter: &str) -> Self {
        Self::parse(filter)
    }
}

/// Select the neighbors matching `filter`, keeping their relative order.
///
/// An empty filter returns the input as is. The input is never modified.
pub fn filter_neighbors<N: Borrow<Neighbor> + Clone>(neighbors: &[N], filter: &str) -> Vec<N> {
    let filter = NeighborFilter::parse(filter);
    if filter == NeighborFilter::All {
        return neighbors.to_vec();
    }
    neighbors
        .iter()
        .filter(|n| filter.matches(as_neighbor(*n)))
        .cloned()
        .collect()
}
