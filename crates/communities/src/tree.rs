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

//! Tree of community descriptions.
//!
//! Inner nodes map a community part (as decimal text) or the wildcard `*`
//! to a subtree, leaves hold a label template. YAML configuration may use
//! plain integers as keys, they are normalized to their decimal text.

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::{collections::BTreeMap, fmt};

/// Key matching any community part at its level.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommunityTree {
    /// Label template, e.g. `"Do not announce to AS$2"`
    Leaf(String),
    Node(#[serde(deserialize_with = "deserialize_node")] BTreeMap<String, CommunityTree>),
}

impl Default for CommunityTree {
    fn default() -> Self {
        Self::Node(BTreeMap::new())
    }
}

impl CommunityTree {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Leaf(label) => Some(label),
            Self::Node(_) => None,
        }
    }

    /// Number of direct children, zero for a leaf
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Node(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Child for `key`, falling back to the wildcard child.
    ///
    /// Empty labels count as missing. A leaf has no children.
    pub fn child(&self, key: &str) -> Option<&CommunityTree> {
        let Self::Node(children) = self else {
            return None;
        };
        children
            .get(key)
            .filter(|child| !child.is_blank())
            .or_else(|| children.get(WILDCARD).filter(|child| !child.is_blank()))
    }

    fn is_blank(&self) -> bool {
        matches!(self, Self::Leaf(label) if label.is_empty())
    }
}

impl From<&str> for CommunityTree {
    fn from(label: &str) -> Self {
        Self::Leaf(label.to_string())
    }
}

impl<K: Into<String>> FromIterator<(K, CommunityTree)> for CommunityTree {
    fn from_iter<I: IntoIterator<Item = (K, CommunityTree)>>(iter: I) -> Self {
        Self::Node(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct NodeKey(String);

impl<'de> Deserialize<'de> for NodeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NodeKeyVisitor;

        impl Visitor<'_> for NodeKeyVisitor {
            type Value = NodeKey;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a community part or \"*\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<NodeKey, E> {
                Ok(NodeKey(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<NodeKey, E> {
                Ok(NodeKey(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<NodeKey, E> {
                Ok(NodeKey(value.to_string()))
            }
        }

        deserializer.deserialize_any(NodeKeyVisitor)
    }
}

fn deserialize_node<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, CommunityTree>, D::Error> {
    let children = BTreeMap::<NodeKey, CommunityTree>::deserialize(deserializer)?;
    Ok(children.into_iter().map(|(k, v)| (k.0, v)).collect())
}
