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

//! Community values as a sequence of integer parts.
//!
//! Standard communities have two parts (`ASN:value`) and large communities
//! three (`global:local1:local2`, see
//! [RFC8092](https://www.rfc-editor.org/rfc/rfc8092)). Part order is
//! significant and always preserved.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum_macros::Display;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Community(Vec<u32>);

impl Community {
    pub const fn new(parts: Vec<u32>) -> Self {
        Self(parts)
    }

    pub fn parts(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u32>> for Community {
    fn from(parts: Vec<u32>) -> Self {
        Self(parts)
    }
}

impl<const N: usize> From<[u32; N]> for Community {
    fn from(parts: [u32; N]) -> Self {
        Self(parts.to_vec())
    }
}

/// Canonical `a:b:c` form of a community.
pub fn community_repr(community: &Community) -> String {
    community
        .parts()
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(":")
}

impl fmt::Display for Community {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&community_repr(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommunityParseError {
    #[strum(to_string = "empty community")]
    Empty,

    #[strum(to_string = "invalid community part `{0}`")]
    InvalidPart(String),
}

impl std::error::Error for CommunityParseError {}

impl FromStr for Community {
    type Err = CommunityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CommunityParseError::Empty);
        }
        s.split(':')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| CommunityParseError::InvalidPart(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
