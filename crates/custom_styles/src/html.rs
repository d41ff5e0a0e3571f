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

//! HTML rendering of a document with every resolvable inline style as a
//! `style` attribute.
//!
//! Each block becomes a `<p>`. Within a block, each run of characters
//! sharing a style set becomes a `<span style="…">`, or bare text when
//! none of its tags resolve to CSS.

use rich_document::{ContentBlock, ContentState, CssProperties, StyleSet};

use crate::case::to_css_property;
use crate::factory::CustomStyles;

impl CustomStyles {
    pub fn to_html(&self, content: &ContentState) -> String {
        let mut html = String::new();
        for block in content.block_map().iter() {
            html.push_str("<p>");
            self.push_block(&mut html, block);
            html.push_str("</p>");
        }
        html
    }

    fn push_block(&self, html: &mut String, block: &ContentBlock) {
        let mut run = String::new();
        let mut run_style: Option<&StyleSet> = None;

        for (c, meta) in block.text().chars().zip(block.characters()) {
            if run_style.is_some_and(|s| s != meta.style()) {
                self.push_run(html, &run, run_style);
                run.clear();
            }
            run_style = Some(meta.style());
            run.push(c);
        }
        if !run.is_empty() {
            self.push_run(html, &run, run_style);
        }
    }

    fn push_run(
        &self,
        html: &mut String,
        text: &str,
        style: Option<&StyleSet>,
    ) {
        let css = style
            .map(|s| self.css_for_style(s))
            .unwrap_or_default();
        if css.is_empty() {
            html.push_str(&html_escape::encode_text(text));
            return;
        }
        html.push_str(&format!(
            "<span style=\"{}\">",
            html_escape::encode_double_quoted_attribute(&style_attribute(&css))
        ));
        html.push_str(&html_escape::encode_text(text));
        html.push_str("</span>");
    }
}

/// `{ fontSize: "12px", color: "red" }` → `font-size: 12px; color: red`.
pub fn style_attribute(css: &CssProperties) -> String {
    css.iter()
        .map(|(key, value)| format!("{}: {value}", to_css_property(key)))
        .collect::<Vec<_>>()
        .join("; ")
}
