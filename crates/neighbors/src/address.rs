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

//! Ordering of neighbor addresses by their numeric value.
//!
//! IPv4 addresses take their 32-bit value and IPv6 addresses their 128-bit
//! value, so both families share a single number line: every IPv4 address
//! orders before any IPv6 address outside of `::/96`.

use std::{cmp::Ordering, net::IpAddr};
use tracing::debug;

/// Numeric value of an IP address literal, `None` when the text isn't one.
pub fn address_value(address: &str) -> Option<u128> {
    match address.parse::<IpAddr>().ok()? {
        IpAddr::V4(addr) => Some(u128::from(u32::from(addr))),
        IpAddr::V6(addr) => Some(u128::from(addr)),
    }
}

/// Three-way comparison of two address literals by numeric value.
///
/// Different spellings of the same address compare equal. Text that doesn't
/// parse as an address orders after all valid addresses and is compared
/// lexicographically with other invalid text.
pub fn compare_addresses(a: &str, b: &str) -> Ordering {
    match (address_value(a), address_value(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => {
            debug!(address = b, "unparsable neighbor address");
            Ordering::Less
        }
        (None, Some(_)) => {
            debug!(address = a, "unparsable neighbor address");
            Ordering::Greater
        }
        (None, None) => {
            debug!(a, b, "unparsable neighbor addresses");
            a.cmp(b)
        }
    }
}
