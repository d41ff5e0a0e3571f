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

//! Resolution of inline style tags to CSS.
//!
//! A tag resolves, in order of precedence, as:
//!
//! 1. a default inline style (`BOLD`, `CODE`, `ITALIC`, `STRIKETHROUGH`,
//!    `UNDERLINE`),
//! 2. an entry of the static style map,
//! 3. a tag of a configured property,
//! 4. any other tag carrying the prefix, split at its last underscore.
//!
//! Anything else is not ours to render and resolves to nothing.

use rich_document::{CssProperties, DefaultInlineStyle, StyleSet};

use crate::factory::CustomStyles;

/// Where the CSS of a tag comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Default(DefaultInlineStyle),
    Static(&'a CssProperties),
    /// A React style key and a value.
    Custom(String, &'a str),
}

impl Resolution<'_> {
    pub fn css(&self) -> CssProperties {
        match self {
            Self::Default(style) => style.css(),
            Self::Static(css) => (*css).clone(),
            Self::Custom(key, value) => {
                CssProperties::new().with(key.as_str(), *value)
            }
        }
    }
}

impl CustomStyles {
    pub fn resolve<'a>(&'a self, tag: &'a str) -> Option<Resolution<'a>> {
        if let Some(style) = DefaultInlineStyle::from_tag(tag) {
            return Some(Resolution::Default(style));
        }
        if let Some(css) = self.static_styles().get(tag) {
            return Some(Resolution::Static(css));
        }
        if let Some(style) = self.style_for_tag(tag) {
            if let Some(value) = style.namespace().decode(tag) {
                let key = style.name().to_owned();
                return Some(Resolution::Custom(key, value));
            }
        }
        self.decoder()
            .decode(tag)
            .map(|(key, value)| Resolution::Custom(key, value))
    }

    /// The CSS `tag` renders as, if any.
    pub fn css_for_tag(&self, tag: &str) -> Option<CssProperties> {
        self.resolve(tag).map(|r| r.css())
    }

    /// The CSS of every resolvable tag in `style`, merged in set order.
    pub fn css_for_style(&self, style: &StyleSet) -> CssProperties {
        let mut css = CssProperties::new();
        for tag in style {
            if let Some(fragment) = self.css_for_tag(tag) {
                css.extend(&fragment);
            }
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rich_document::{CssProperties, DefaultInlineStyle, StyleSet};

    use super::Resolution;
    use crate::factory::{create_styles, CustomStyles};

    fn styles() -> CustomStyles {
        let mark = CssProperties::new()
            .with("backgroundColor", "Yellow")
            .with("fontStyle", "italic");
        create_styles(
            ["color", "font-family"],
            None,
            BTreeMap::from([("MARK".to_owned(), mark)]),
        )
    }

    #[test]
    fn defaults_come_first() {
        let styles = create_styles(
            ["color"],
            None,
            BTreeMap::from([(
                "BOLD".to_owned(),
                CssProperties::new().with("fontWeight", "900"),
            )]),
        );
        assert_eq!(
            styles.resolve("BOLD"),
            Some(Resolution::Default(DefaultInlineStyle::Bold))
        );
    }

    #[test]
    fn static_styles_are_used_verbatim() {
        let styles = styles();
        let css = styles.css_for_tag("MARK").unwrap();
        assert_eq!(css.get("backgroundColor"), Some("Yellow"));
        assert_eq!(css.get("fontStyle"), Some("italic"));
    }

    #[test]
    fn configured_families_keep_underscores_in_values() {
        assert_eq!(
            styles().resolve("CUSTOM_FONT_FAMILY_KaiTi_GB2312"),
            Some(Resolution::Custom("fontFamily".into(), "KaiTi_GB2312"))
        );
    }

    #[test]
    fn unconfigured_prefixed_tags_split_at_the_last_underscore() {
        assert_eq!(
            styles().resolve("CUSTOM_LINE_HEIGHT_2"),
            Some(Resolution::Custom("lineHeight".into(), "2"))
        );
    }

    #[test]
    fn foreign_tags_resolve_to_nothing() {
        assert_eq!(styles().resolve("NON_CUSTOM"), None);
        assert_eq!(styles().resolve("CUSTOM_"), None);
    }

    #[test]
    fn css_for_style_merges_in_set_order() {
        let style: StyleSet = ["ITALIC", "CUSTOM_COLOR_red", "MARK"]
            .into_iter()
            .collect();
        let css = styles().css_for_style(&style);
        assert_eq!(
            css.iter().collect::<Vec<_>>(),
            vec![
                ("fontStyle", "italic"),
                ("color", "red"),
                ("backgroundColor", "Yellow"),
            ]
        );
    }
}
