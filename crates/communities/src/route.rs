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

//! The parts of a route the community resolver looks at.

use crate::community::Community;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BgpInfo {
    #[serde(default)]
    pub communities: Vec<Community>,
    #[serde(default)]
    pub large_communities: Vec<Community>,
}

/// A route as received from a neighbor on a route server.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    /// Prefix in CIDR notation
    pub network: String,
    #[serde(default)]
    pub neighbor_id: String,
    #[serde(default)]
    pub bgp: BgpInfo,
}

impl Route {
    pub fn new(id: impl Into<String>, network: impl Into<String>, bgp: BgpInfo) -> Self {
        Self {
            id: id.into(),
            network: network.into(),
            neighbor_id: String::new(),
            bgp,
        }
    }
}
