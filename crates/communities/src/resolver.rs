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

//! Resolution of communities against a [`CommunityTree`].

use crate::{community::Community, route::Route, tree::CommunityTree};
use tracing::trace;

/// Walk `tree` along the parts of `community`.
///
/// At every level the part is looked up directly and then through the
/// wildcard key. Resolution fails when neither exists or when a leaf is
/// reached before all parts are consumed. The node reached after the last
/// part is returned as is; it is a label template when it's a leaf.
pub fn resolve_community<'a>(
    tree: &'a CommunityTree,
    community: &Community,
) -> Option<&'a CommunityTree> {
    community.parts().iter().try_fold(tree, |node, part| {
        let child = node.child(&part.to_string());
        if child.is_none() {
            trace!(%community, part, "no description for community");
        }
        child
    })
}

/// Resolve every community, leaving out the ones without a description.
pub fn resolve_communities<'a, 'c>(
    tree: &'a CommunityTree,
    communities: &'c [Community],
) -> Vec<(&'c Community, &'a CommunityTree)> {
    communities
        .iter()
        .filter_map(|community| resolve_community(tree, community).map(|node| (community, node)))
        .collect()
}

/// Replace `$0`, `$1`, ... in `template` with the parts of `community`.
///
/// Only the first occurrence of each placeholder is replaced, in increasing
/// index order. Placeholders without a matching part are left as they are.
pub fn expand_vars(template: &str, community: &Community) -> String {
    community
        .parts()
        .iter()
        .enumerate()
        .fold(template.to_string(), |label, (index, part)| {
            label.replacen(&format!("${index}"), &part.to_string(), 1)
        })
}

/// Resolve a community and expand its label.
///
/// `None` when the community doesn't resolve or resolves to an inner node
/// of the tree rather than a label.
pub fn make_readable_community(tree: &CommunityTree, community: &Community) -> Option<String> {
    resolve_community(tree, community)?
        .label()
        .map(|template| expand_vars(template, community))
}

/// Readable labels of all communities that resolve to a label.
pub fn resolve_readable_communities<'c>(
    tree: &CommunityTree,
    communities: &'c [Community],
) -> Vec<(&'c Community, String)> {
    communities
        .iter()
        .filter_map(|community| {
            make_readable_community(tree, community).map(|label| (community, label))
        })
        .collect()
}

/// True when any large community of `route` matches the reject tree.
pub fn is_reject_candidate(reject_tree: &CommunityTree, route: &Route) -> bool {
    !resolve_communities(reject_tree, &route.bgp.large_communities).is_empty()
}

/// Readable reject reasons of a route, taken from its large communities.
pub fn reject_reasons<'r>(
    reject_tree: &CommunityTree,
    route: &'r Route,
) -> Vec<(&'r Community, String)> {
    resolve_readable_communities(reject_tree, &route.bgp.large_communities)
}
