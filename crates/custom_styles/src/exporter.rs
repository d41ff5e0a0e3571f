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

//! Export of every inline style used in a document as CSS, in the shape
//! HTML exporters take as their inline style map:
//!
//! ```json
//! { "CUSTOM_COLOR_red": { "style": { "color": "red" } } }
//! ```

use std::collections::HashSet;

use rich_document::{convert_to_raw, CssProperties, EditorState};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::factory::CustomStyles;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExportedStyle {
    pub style: CssProperties,
}

/// Tags mapped to their CSS, in the order the tags were first met.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyleExport(Vec<(String, ExportedStyle)>);

impl InlineStyleExport {
    pub fn get(&self, tag: &str) -> Option<&ExportedStyle> {
        self.0.iter().find(|(t, _)| t == tag).map(|(_, s)| s)
    }

    pub fn contains_key(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|(t, _)| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExportedStyle)> + '_ {
        self.0.iter().map(|(t, s)| (t.as_str(), s))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn push(&mut self, tag: &str, style: CssProperties) {
        self.0.push((tag.to_owned(), ExportedStyle { style }));
    }
}

impl Serialize for InlineStyleExport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (tag, style) in self.iter() {
            map.serialize_entry(tag, style)?;
        }
        map.end()
    }
}

impl CustomStyles {
    /// The CSS of every distinct inline style tag in the current content of
    /// `state`.
    ///
    /// Tags are collected from the raw form of each block in turn. Tags
    /// that resolve to nothing (see [`CustomStyles::resolve`]) are left
    /// out.
    pub fn exporter(&self, state: &EditorState) -> InlineStyleExport {
        let raw = convert_to_raw(state.current_content());
        let mut export = InlineStyleExport::default();
        let mut seen = HashSet::new();

        let tags = raw
            .blocks
            .iter()
            .flat_map(|b| b.inline_style_ranges.iter())
            .map(|r| r.style.as_str());
        for tag in tags {
            if !seen.insert(tag) {
                continue;
            }
            match self.css_for_tag(tag) {
                Some(css) => export.push(tag, css),
                None => log::trace!("not exporting inline style {tag}"),
            }
        }
        export
    }
}
