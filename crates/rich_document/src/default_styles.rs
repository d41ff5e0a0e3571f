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

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::CssProperties;

/// The inline styles every document understands without configuration.
///
/// | Tag             | CSS                                          |
/// |-----------------|----------------------------------------------|
/// | `BOLD`          | `fontWeight: bold`                           |
/// | `CODE`          | `fontFamily: monospace; wordWrap: break-word`|
/// | `ITALIC`        | `fontStyle: italic`                          |
/// | `STRIKETHROUGH` | `textDecoration: line-through`               |
/// | `UNDERLINE`     | `textDecoration: underline`                  |
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum DefaultInlineStyle {
    Bold,
    Code,
    Italic,
    Strikethrough,
    Underline,
}

impl DefaultInlineStyle {
    /// The default style named exactly `tag`, if any.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }

    pub fn css(self) -> CssProperties {
        match self {
            Self::Bold => CssProperties::new().with("fontWeight", "bold"),
            Self::Code => CssProperties::new()
                .with("fontFamily", "monospace")
                .with("wordWrap", "break-word"),
            Self::Italic => CssProperties::new().with("fontStyle", "italic"),
            Self::Strikethrough => {
                CssProperties::new().with("textDecoration", "line-through")
            }
            Self::Underline => {
                CssProperties::new().with("textDecoration", "underline")
            }
        }
    }
}
