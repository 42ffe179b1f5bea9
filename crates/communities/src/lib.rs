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

//! Human-readable descriptions for BGP communities.
//!
//! A looking glass is configured with a tree of community descriptions,
//! keyed by the parts of a community and allowing a `*` wildcard at any
//! level:
//!
//! ```yaml
//! communities:
//!   65000:
//!     23: "Announced to peers"
//!     "*": "Internal marker $1"
//! reject_reasons:
//!   65000:
//!     666:
//!       "*": "Rejected: reason $2"
//! ```
//!
//! Resolving a community walks the tree part by part and yields the label
//! found at the end; the label's `$0`, `$1`, ... placeholders are expanded
//! with the parts of the community.
//!
//! ```
//! use lgview_communities::{make_readable_community, CommunitiesConfig, Community};
//!
//! let config = CommunitiesConfig::from_json_str(
//!     r#"{"communities": {"65000": {"*": "Internal marker $1"}}}"#,
//! )
//! .unwrap();
//! let community = Community::new(vec![65000, 42]);
//! assert_eq!(
//!     make_readable_community(&config.communities, &community).as_deref(),
//!     Some("Internal marker 42")
//! );
//! ```

#![deny(missing_debug_implementations)]
#![deny(rust_2018_idioms)]
#![deny(unreachable_pub)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![forbid(unsafe_code)]

pub mod community;
pub mod config;
pub mod resolver;
pub mod route;
pub mod tree;

pub use community::{community_repr, Community, CommunityParseError};
pub use config::{CommunitiesConfig, ConfigError};
pub use resolver::{
    expand_vars, is_reject_candidate, make_readable_community, reject_reasons,
    resolve_communities, resolve_community, resolve_readable_communities,
};
pub use route::{BgpInfo, Route};
pub use tree::{CommunityTree, WILDCARD};
