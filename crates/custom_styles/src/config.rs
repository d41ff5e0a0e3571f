// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeMap;

use rich_document::CssProperties;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::factory::{create_styles, CustomStyles};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid style configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// The inputs of [`create_styles`] in serializable form:
///
/// ```json
/// {
///   "properties": ["color", "font-size"],
///   "prefix": "CUSTOM_",
///   "staticStyles": { "MARK": { "backgroundColor": "Yellow" } }
/// }
/// ```
///
/// Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    pub properties: Vec<String>,
    pub prefix: Option<String>,
    pub static_styles: BTreeMap<String, CssProperties>,
}

impl StyleConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(&self) -> CustomStyles {
        create_styles(
            &self.properties,
            self.prefix.as_deref(),
            self.static_styles.clone(),
        )
    }
}
