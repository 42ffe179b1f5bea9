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

//! Loading of the community description trees.
//!
//! Both trees are static configuration, loaded once and shared read-only
//! afterwards. The JSON shape is the one the looking glass API serves, the
//! YAML shape is the same structure in YAML syntax.

use crate::tree::CommunityTree;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use strum_macros::Display;
use tracing::debug;

#[derive(Debug, Display)]
pub enum ConfigError {
    #[strum(to_string = "failed to read communities config: {0}")]
    Io(std::io::Error),

    #[strum(to_string = "failed to parse communities JSON: {0}")]
    Json(serde_json::Error),

    #[strum(to_string = "failed to parse communities YAML: {0}")]
    Yaml(serde_yaml::Error),

    #[strum(to_string = "unsupported communities config format: {0}")]
    UnsupportedFormat(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Yaml(value)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Yaml(err) => Some(err),
            Self::UnsupportedFormat(_) => None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunitiesConfig {
    /// Descriptions shown next to the communities of a route
    #[serde(default)]
    pub communities: CommunityTree,

    /// Large communities flagging a route as rejected, with the reason
    #[serde(default)]
    pub reject_reasons: CommunityTree,
}

impl CommunitiesConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.log_loaded();
        Ok(config)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(input)?;
        config.log_loaded();
        Ok(config)
    }

    /// Load from a `.json`, `.yml` or `.yaml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            Some("yml") | Some("yaml") => Self::from_yaml_str(&fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn log_loaded(&self) {
        debug!(
            communities = self.communities.len(),
            reject_reasons = self.reject_reasons.len(),
            "loaded community descriptions"
        );
    }
}
