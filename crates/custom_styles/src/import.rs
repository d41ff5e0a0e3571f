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

//! The import direction: turning tags and `style` attributes met while
//! importing markup back into custom style tags.

use rich_document::CssProperties;

use crate::case::to_react_css_case;
use crate::factory::CustomStyles;

impl CustomStyles {
    /// The CSS of `tag` if it belongs to a configured property.
    ///
    /// Unlike [`CustomStyles::css_for_tag`] this ignores default, static
    /// and unconfigured tags: it answers whether an importer should keep
    /// `tag` as a custom style.
    pub fn custom_inline_fn(&self, tag: &str) -> Option<CssProperties> {
        let style = self.style_for_tag(tag)?;
        let value = style.namespace().decode(tag)?;
        Some(CssProperties::new().with(style.name(), value))
    }

    /// The tags that restore the configured properties found in a `style`
    /// attribute such as `"color: red; font-size: 12px"`.
    ///
    /// Declarations of properties that are not configured, or that have no
    /// value, are skipped. When a property is declared twice the later
    /// value wins.
    pub fn tags_for_declarations(&self, declarations: &str) -> Vec<String> {
        let mut tags: Vec<(usize, String)> = Vec::new();
        for declaration in declarations.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let key = to_react_css_case(property.trim());
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let Some(i) = self.styles().iter().position(|s| s.name() == key)
            else {
                log::trace!("no custom style for declaration {declaration:?}");
                continue;
            };
            let tag = self.styles()[i].tag(value);
            match tags.iter_mut().find(|(j, _)| *j == i) {
                Some(existing) => existing.1 = tag,
                None => tags.push((i, tag)),
            }
        }
        tags.into_iter().map(|(_, tag)| tag).collect()
    }
}
