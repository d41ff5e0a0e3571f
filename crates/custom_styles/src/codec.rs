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

//! Style tag encoding.
//!
//! A custom style tag is `<PREFIX><PROPERTY_IN_UPPER_SNAKE>_<value>`, for
//! example `CUSTOM_FONT_SIZE_36px`. The value is stored verbatim and may
//! itself contain underscores, so tags are always decoded against a known
//! namespace (`CUSTOM_FONT_SIZE_`) rather than split at an underscore.

use regex::Regex;

use crate::case::{to_react_css_case, upper_snake_case};

pub const DEFAULT_PREFIX: &str = "CUSTOM_";

/// Normalize a tag prefix.
///
/// A missing or empty prefix becomes [`DEFAULT_PREFIX`]. A prefix that has
/// at least one character before a trailing underscore is kept; anything
/// else gets an underscore appended.
pub fn validate_prefix(prefix: Option<&str>) -> String {
    match prefix {
        None | Some("") => DEFAULT_PREFIX.to_owned(),
        Some(p) if p.chars().count() > 1 && p.ends_with('_') => p.to_owned(),
        Some(p) => format!("{p}_"),
    }
}

/// The tag namespace of one configured CSS property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
    namespace: String,
    property: String,
    /// Namespaces of other families that extend this one, e.g.
    /// `CUSTOM_FONT_SIZE_` for `CUSTOM_FONT_`. Tags in those belong to the
    /// longer namespace.
    shadowed_by: Vec<String>,
}

impl Namespace {
    /// `prefix` must already be normalized with [`validate_prefix`].
    pub fn new(prefix: &str, property: &str) -> Self {
        Self {
            namespace: format!("{prefix}{}_", upper_snake_case(property)),
            property: property.to_owned(),
            shadowed_by: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.namespace
    }

    /// The CSS property as configured, e.g. `font-size`.
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn encode(&self, value: &str) -> String {
        format!("{}{value}", self.namespace)
    }

    /// Whether `tag` belongs to this namespace, whatever its value.
    pub fn owns(&self, tag: &str) -> bool {
        tag.starts_with(&self.namespace)
            && !self.shadowed_by.iter().any(|n| tag.starts_with(n))
    }

    /// The value encoded in `tag`, if it is a non-empty value of this
    /// namespace.
    pub fn decode<'t>(&self, tag: &'t str) -> Option<&'t str> {
        if !self.owns(tag) {
            return None;
        }
        tag.strip_prefix(&self.namespace).filter(|v| !v.is_empty())
    }

    /// Record that `other` extends this namespace.
    pub(crate) fn shadow_with(&mut self, other: &Namespace) {
        if other.namespace.len() > self.namespace.len()
            && other.namespace.starts_with(&self.namespace)
            && !self.shadowed_by.contains(&other.namespace)
        {
            self.shadowed_by.push(other.namespace.clone());
        }
    }
}

/// Decodes tags that carry the prefix but no configured namespace, e.g.
/// tags written under an earlier configuration.
///
/// The pattern is `^<prefix>(.+)_(.+)$`. The first group is greedy, so the
/// value is the segment after the last underscore and the rest is taken as
/// the property.
#[derive(Clone, Debug)]
pub(crate) struct PrefixDecoder {
    pattern: Option<Regex>,
}

impl PrefixDecoder {
    pub(crate) fn new(prefix: &str) -> Self {
        let pattern =
            Regex::new(&format!("^{}(.+)_(.+)$", regex::escape(prefix)));
        if let Err(e) = &pattern {
            log::warn!("cannot decode tags with prefix {prefix:?}: {e}");
        }
        Self {
            pattern: pattern.ok(),
        }
    }

    /// The React style key and the value encoded in `tag`.
    pub(crate) fn decode<'t>(&self, tag: &'t str) -> Option<(String, &'t str)> {
        let captures = self.pattern.as_ref()?.captures(tag)?;
        let property = captures.get(1)?.as_str().to_lowercase();
        let value = captures.get(2)?.as_str();
        Some((to_react_css_case(&property), value))
    }
}

impl PartialEq for PrefixDecoder {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_ref().map(Regex::as_str)
            == other.pattern.as_ref().map(Regex::as_str)
    }
}
