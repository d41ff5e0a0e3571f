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

use rich_document::{CssProperties, StyleSet};

use crate::codec::{validate_prefix, Namespace, PrefixDecoder};
use crate::custom_style::CustomStyle;

/// The custom styles built from one configuration.
///
/// Independent configurations never share state: each call to
/// [`create_styles`] returns a fresh value.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomStyles {
    prefix: String,
    styles: Vec<CustomStyle>,
    static_styles: BTreeMap<String, CssProperties>,
    decoder: PrefixDecoder,
}

/// Build one [`CustomStyle`] per CSS property in `properties`.
///
/// `prefix` is normalized with [`validate_prefix`]. `static_styles` maps
/// fixed tags (e.g. `MARK`) to the CSS they export as.
///
/// An empty property list is a configuration error: it is logged and the
/// result has no styles, although it still exports the default and static
/// styles. Blank and repeated properties are skipped the same way.
pub fn create_styles<I, S>(
    properties: I,
    prefix: Option<&str>,
    static_styles: BTreeMap<String, CssProperties>,
) -> CustomStyles
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = validate_prefix(prefix);
    let mut namespaces: Vec<Namespace> = Vec::new();

    for property in properties {
        let property = property.as_ref().trim();
        if property.is_empty() {
            log::warn!("ignoring an empty CSS property name");
            continue;
        }
        let namespace = Namespace::new(&prefix, property);
        if namespaces.iter().any(|n| n.as_str() == namespace.as_str()) {
            log::warn!(
                "ignoring {property:?}: its tags would clash with an earlier \
                 property ({})",
                namespace.as_str()
            );
            continue;
        }
        namespaces.push(namespace);
    }

    if namespaces.is_empty() {
        log::warn!("create_styles expects at least one CSS property");
    }

    // FONT_ must not claim FONT_SIZE_ tags when both are configured.
    let all = namespaces.clone();
    for namespace in &mut namespaces {
        for other in &all {
            namespace.shadow_with(other);
        }
    }

    let styles: Vec<CustomStyle> =
        namespaces.into_iter().map(CustomStyle::new).collect();
    log::debug!(
        "created {} custom styles with prefix {prefix}: {:?}",
        styles.len(),
        styles.iter().map(CustomStyle::name).collect::<Vec<_>>()
    );

    CustomStyles {
        decoder: PrefixDecoder::new(&prefix),
        prefix,
        styles,
        static_styles,
    }
}

impl CustomStyles {
    /// The normalized tag prefix, e.g. `CUSTOM_`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The style for a React style key such as `backgroundColor`.
    pub fn style(&self, name: &str) -> Option<&CustomStyle> {
        self.styles.iter().find(|s| s.name() == name)
    }

    /// Every style, in configuration order.
    pub fn styles(&self) -> &[CustomStyle] {
        &self.styles
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn static_styles(&self) -> &BTreeMap<String, CssProperties> {
        &self.static_styles
    }

    /// The style whose family `tag` belongs to.
    pub fn style_for_tag(&self, tag: &str) -> Option<&CustomStyle> {
        self.styles.iter().find(|s| s.owns(tag))
    }

    /// The inline CSS of every configured property in `style`. Where two
    /// styles produce the same key, the later one wins.
    pub fn custom_style_fn(&self, style: &StyleSet) -> CssProperties {
        let mut css = CssProperties::new();
        for custom in &self.styles {
            css.extend(&custom.style_fn(style));
        }
        css
    }

    pub(crate) fn decoder(&self) -> &PrefixDecoder {
        &self.decoder
    }
}
