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

//! Operations on one family of custom styles.
//!
//! A family is one configured CSS property, e.g. `color`. Its tags all
//! share the family's [`Namespace`] and differ only in their value:
//! `CUSTOM_COLOR_red`, `CUSTOM_COLOR_#ff0000`.
//!
//! Every mutating operation branches on the selection first:
//!
//! - **Collapsed cursor**: characters are left alone and the editor's
//!   inline style override is updated instead, so that the next inserted
//!   text carries (or doesn't carry) the tag. No history entry is made.
//! - **Range selection**: the characters in the range are restyled and the
//!   result is pushed as a single [`ChangeType::ChangeInlineStyle`] change.

use rich_document::{
    ChangeType, CharacterMetadata, ContentState, CssProperties,
    DocumentError, EditorState, StyleSet,
};

use crate::case::to_react_css_case;
use crate::codec::Namespace;
use crate::transformer::map_selected_characters;

/// The operations of one configured property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomStyle {
    name: String,
    namespace: Namespace,
}

impl CustomStyle {
    pub(crate) fn new(namespace: Namespace) -> Self {
        Self {
            name: to_react_css_case(namespace.property()),
            namespace,
        }
    }

    /// The React style key of the property, e.g. `backgroundColor`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The property as configured, e.g. `background-color`.
    pub fn property(&self) -> &str {
        self.namespace.property()
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The tag that sets this property to `value`.
    pub fn tag(&self, value: &str) -> String {
        self.namespace.encode(value)
    }

    /// Whether `tag` belongs to this family.
    pub fn owns(&self, tag: &str) -> bool {
        self.namespace.owns(tag)
    }

    /// Set the property to `value`, replacing any other value of it.
    pub fn add(
        &self,
        state: &EditorState,
        value: &str,
    ) -> Result<EditorState, DocumentError> {
        let tag = self.tag(value);
        if state.selection().is_collapsed() {
            return Ok(self.override_with(state, Some(&tag)));
        }

        let content = map_selected_characters(state, |c| {
            c.with_style(self.without_family(c.style()).add(&tag))
        })?;
        self.assert_one_per_character(&content);
        Ok(state.push(content, ChangeType::ChangeInlineStyle))
    }

    /// Clear the property, whatever its value.
    pub fn remove(
        &self,
        state: &EditorState,
    ) -> Result<EditorState, DocumentError> {
        if state.selection().is_collapsed() {
            return Ok(self.override_with(state, None));
        }

        let content = self.content_without_family(state)?;
        Ok(state.push(content, ChangeType::ChangeInlineStyle))
    }

    /// Clear the property if `value` is the current one, otherwise set it.
    ///
    /// "Current" is [`EditorState::current_inline_style`]: the override or
    /// the character before the caret, or the first selected character of
    /// a range. Clearing a range keeps the selection where it was.
    pub fn toggle(
        &self,
        state: &EditorState,
        value: &str,
    ) -> Result<EditorState, DocumentError> {
        let tag = self.tag(value);
        let active = state.current_inline_style().contains(&tag);

        if state.selection().is_collapsed() {
            let tag = (!active).then_some(tag.as_str());
            return Ok(self.override_with(state, tag));
        }

        if !active {
            return self.add(state, value);
        }

        let content = self.content_without_family(state)?;
        Ok(state
            .push(content, ChangeType::ChangeInlineStyle)
            .force_selection(state.selection().clone()))
    }

    /// The value of the property at the selection, or `""` when it is not
    /// set.
    pub fn current(&self, state: &EditorState) -> String {
        self.value_in(&state.current_inline_style())
            .unwrap_or_default()
            .to_owned()
    }

    /// The inline CSS for this property in `style`: `{ name: value }`, or
    /// nothing when no tag of this family is present.
    pub fn style_fn(&self, style: &StyleSet) -> CssProperties {
        match self.value_in(style) {
            Some(value) => CssProperties::new().with(&self.name, value),
            None => CssProperties::new(),
        }
    }

    /// The value of the first tag of this family in `style`, in insertion
    /// order. Tags with an empty value are skipped.
    pub(crate) fn value_in<'s>(&self, style: &'s StyleSet) -> Option<&'s str> {
        style
            .first_matching(|s| self.namespace.decode(s).is_some())
            .and_then(|tag| self.namespace.decode(tag))
    }

    fn without_family(&self, style: &StyleSet) -> StyleSet {
        style.retain(|s| !self.namespace.owns(s))
    }

    fn content_without_family(
        &self,
        state: &EditorState,
    ) -> Result<ContentState, DocumentError> {
        map_selected_characters(state, |c: &CharacterMetadata| {
            c.with_style(self.without_family(c.style()))
        })
    }

    /// Replace this family's tags in the caret's pending style with `tag`.
    fn override_with(
        &self,
        state: &EditorState,
        tag: Option<&str>,
    ) -> EditorState {
        let style = self.without_family(&state.current_inline_style());
        let style = match tag {
            Some(tag) => style.add(tag),
            None => style,
        };
        state.set_inline_style_override(style)
    }

    #[cfg(feature = "assert-invariants")]
    fn assert_one_per_character(&self, content: &ContentState) {
        for block in content.block_map().iter() {
            for (i, c) in block.characters().iter().enumerate() {
                let tags = c.style().iter().filter(|s| self.owns(s)).count();
                assert!(
                    tags <= 1,
                    "character {i} of block {} has {tags} {} tags",
                    block.key(),
                    self.name
                );
            }
        }
    }

    #[cfg(not(feature = "assert-invariants"))]
    fn assert_one_per_character(&self, _content: &ContentState) {}
}
