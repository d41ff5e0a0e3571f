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

use strum_macros::{AsRefStr, Display, EnumString};

use crate::modifier;
use crate::{
    BlockKey, ContentState, DocumentError, HistoryStack, SelectionState,
    StyleSet,
};

/// The kind of change recorded when content is pushed onto an
/// [`EditorState`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ChangeType {
    ChangeInlineStyle,
    InsertCharacters,
    RemoveRange,
    Undo,
    Redo,
}

/// The full state of an editing session: the current content, the
/// selection, the pending inline style override and the undo/redo history.
///
/// Every method returns a new state; the receiver is left untouched.
#[derive(Clone, Debug)]
pub struct EditorState {
    current_content: ContentState,
    selection: SelectionState,
    inline_style_override: Option<StyleSet>,
    undo_stack: HistoryStack<ContentState>,
    redo_stack: HistoryStack<ContentState>,
    last_change_type: Option<ChangeType>,
    force_selection: bool,
}

impl EditorState {
    /// A fresh session on `content` with a caret at its first block.
    pub fn create_with_content(content: ContentState) -> Self {
        let selection = content
            .first_block()
            .map(|b| SelectionState::collapsed(b.key().clone(), 0))
            .unwrap_or_default();
        Self {
            current_content: content,
            selection,
            inline_style_override: None,
            undo_stack: HistoryStack::new(),
            redo_stack: HistoryStack::new(),
            last_change_type: None,
            force_selection: false,
        }
    }

    pub fn current_content(&self) -> &ContentState {
        &self.current_content
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn inline_style_override(&self) -> Option<&StyleSet> {
        self.inline_style_override.as_ref()
    }

    pub fn last_change_type(&self) -> Option<ChangeType> {
        self.last_change_type
    }

    pub fn must_force_selection(&self) -> bool {
        self.force_selection
    }

    pub fn undo_stack(&self) -> &HistoryStack<ContentState> {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &HistoryStack<ContentState> {
        &self.redo_stack
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Make `content` current, recording the previous content for undo.
    ///
    /// Consecutive [`ChangeType::InsertCharacters`] pushes with an
    /// unchanged selection share a single undo entry. Every other push
    /// records one, even when `content` equals the current content.
    pub fn push(&self, content: ContentState, change_type: ChangeType) -> Self {
        if content == self.current_content {
            log::trace!("{change_type} push leaves the content unchanged");
        }

        let mut undo_stack = self.undo_stack.clone();
        let content = if &self.selection
            != self.current_content.selection_after()
            || must_become_boundary(self.last_change_type, change_type)
        {
            undo_stack = undo_stack.push(self.current_content.clone());
            content.with_selection_before(self.selection.clone())
        } else {
            content.with_selection_before(
                self.current_content.selection_before().clone(),
            )
        };

        Self {
            selection: content.selection_after().clone(),
            current_content: content,
            inline_style_override: None,
            undo_stack,
            redo_stack: HistoryStack::new(),
            last_change_type: Some(change_type),
            force_selection: true,
        }
    }

    /// Return to the content before the most recent push.
    pub fn undo(&self) -> Self {
        let Some(previous) = self.undo_stack.peek() else {
            log::trace!("nothing to undo");
            return self.clone();
        };
        Self {
            current_content: previous.clone(),
            selection: self.current_content.selection_before().clone(),
            inline_style_override: None,
            undo_stack: self.undo_stack.shift(),
            redo_stack: self.redo_stack.push(self.current_content.clone()),
            last_change_type: Some(ChangeType::Undo),
            force_selection: true,
        }
    }

    /// Re-apply the most recently undone content.
    pub fn redo(&self) -> Self {
        let Some(next) = self.redo_stack.peek() else {
            log::trace!("nothing to redo");
            return self.clone();
        };
        Self {
            selection: next.selection_after().clone(),
            current_content: next.clone(),
            inline_style_override: None,
            undo_stack: self.undo_stack.push(self.current_content.clone()),
            redo_stack: self.redo_stack.shift(),
            last_change_type: Some(ChangeType::Redo),
            force_selection: true,
        }
    }

    /// Set the styles the next inserted characters will carry.
    pub fn set_inline_style_override(&self, style: StyleSet) -> Self {
        Self {
            inline_style_override: Some(style),
            ..self.clone()
        }
    }

    /// Move the selection as the result of user input. Clears the inline
    /// style override.
    pub fn accept_selection(&self, selection: SelectionState) -> Self {
        Self {
            selection,
            inline_style_override: None,
            force_selection: false,
            ..self.clone()
        }
    }

    /// Move the selection and ask the view to render it even if it thinks
    /// the selection is unchanged. Clears the inline style override.
    pub fn force_selection(&self, selection: SelectionState) -> Self {
        Self {
            selection,
            inline_style_override: None,
            force_selection: true,
            ..self.clone()
        }
    }

    /// The styles in effect at the selection.
    ///
    /// The override wins when set. Otherwise, for a caret, this is the style
    /// of the character before it (or the first character of the block when
    /// the caret is at its start); for a range, the style of the first
    /// selected character. Empty blocks look upward for the nearest
    /// preceding character.
    pub fn current_inline_style(&self) -> StyleSet {
        if let Some(style) = &self.inline_style_override {
            return style.clone();
        }

        let content = &self.current_content;
        let key = self.selection.start_key();
        let offset = self.selection.start_offset();
        let Some(block) = content.block_map().get(key) else {
            return StyleSet::new();
        };

        if self.selection.is_collapsed() {
            if offset > 0 {
                return block.inline_style_at(offset - 1);
            }
            if !block.is_empty() {
                return block.inline_style_at(0);
            }
        } else {
            if offset < block.len() {
                return block.inline_style_at(offset);
            }
            if offset > 0 {
                return block.inline_style_at(offset - 1);
            }
        }

        look_upward_for_inline_style(content, key)
    }

    /// Replace the selection with `text`, styled with the current inline
    /// style.
    pub fn insert_text(&self, text: &str) -> Result<Self, DocumentError> {
        let style = self.current_inline_style();
        let content = modifier::replace_text(
            &self.current_content,
            &self.selection,
            text,
            &style,
        )?;
        Ok(self.push(content, ChangeType::InsertCharacters))
    }
}

fn must_become_boundary(
    last: Option<ChangeType>,
    change_type: ChangeType,
) -> bool {
    last != Some(change_type) || change_type != ChangeType::InsertCharacters
}

fn look_upward_for_inline_style(
    content: &ContentState,
    from: &BlockKey,
) -> StyleSet {
    let mut key = content.key_before(from);
    while let Some(k) = key {
        if let Some(block) = content.block_map().get(k) {
            if !block.is_empty() {
                return block.inline_style_at(block.len() - 1);
            }
        }
        key = content.key_before(k);
    }
    StyleSet::new()
}

#[cfg(test)]
mod tests {
    use super::{ChangeType, EditorState};
    use crate::modifier::apply_inline_style;
    use crate::{ContentBlock, ContentState, SelectionState, StyleSet};

    fn state(text: &str) -> EditorState {
        EditorState::create_with_content(ContentState::from_text(text))
    }

    fn select(state: &EditorState, start: usize, end: usize) -> EditorState {
        state.accept_selection(SelectionState::new("0", start, "0", end))
    }

    fn bold(state: &EditorState) -> EditorState {
        let content = apply_inline_style(
            state.current_content(),
            state.selection(),
            "BOLD",
        )
        .unwrap();
        state.push(content, ChangeType::ChangeInlineStyle)
    }

    #[test]
    fn change_type_uses_kebab_case_names() {
        assert_eq!(
            ChangeType::ChangeInlineStyle.to_string(),
            "change-inline-style"
        );
        assert_eq!(
            "insert-characters".parse::<ChangeType>(),
            Ok(ChangeType::InsertCharacters)
        );
    }

    #[test]
    fn push_records_one_undo_entry() {
        let s = select(&state("hello"), 0, 2);
        let s = bold(&s);
        assert_eq!(s.undo_depth(), 1);
        assert_eq!(s.redo_depth(), 0);
        assert_eq!(s.last_change_type(), Some(ChangeType::ChangeInlineStyle));
    }

    #[test]
    fn pushing_identical_content_still_records_an_entry() {
        let s = state("hello");
        let pushed =
            s.push(s.current_content().clone(), ChangeType::RemoveRange);
        assert_eq!(pushed.undo_depth(), 1);
        assert_eq!(pushed.last_change_type(), Some(ChangeType::RemoveRange));
        assert!(pushed.must_force_selection());
        assert_eq!(pushed.undo().current_content(), s.current_content());
    }

    #[test]
    fn undo_and_redo_walk_the_history() {
        let s = select(&state("hello"), 0, 2);
        let styled = bold(&s);

        let undone = styled.undo();
        assert_eq!(undone.current_content(), s.current_content());
        assert_eq!(undone.selection(), s.selection());
        assert_eq!(undone.redo_depth(), 1);

        let redone = undone.redo();
        assert_eq!(redone.current_content(), styled.current_content());
        assert_eq!(redone.undo_depth(), 1);
        assert_eq!(redone.redo_depth(), 0);
    }

    #[test]
    fn undo_with_empty_history_returns_the_same_state() {
        let s = state("hello");
        assert_eq!(s.undo().current_content(), s.current_content());
        assert_eq!(s.redo().current_content(), s.current_content());
    }

    #[test]
    fn consecutive_typing_merges_into_one_undo_entry() {
        let s = select(&state(""), 0, 0);
        let s = s.insert_text("a").unwrap();
        let s = s.insert_text("b").unwrap();
        assert_eq!(s.current_content().plain_text(), "ab");
        assert_eq!(s.undo_depth(), 1);
        assert_eq!(s.undo().current_content().plain_text(), "");
    }

    #[test]
    fn override_wins_over_character_styles() {
        let s = select(&state("hello"), 0, 5);
        let s = bold(&s).accept_selection(SelectionState::collapsed("0", 3));
        assert!(s.current_inline_style().contains("BOLD"));

        let s = s.set_inline_style_override(StyleSet::new().add("ITALIC"));
        let style = s.current_inline_style();
        assert!(style.contains("ITALIC"));
        assert!(!style.contains("BOLD"));
    }

    #[test]
    fn accepting_a_selection_clears_the_override() {
        let s = state("hello")
            .set_inline_style_override(StyleSet::new().add("BOLD"));
        assert!(s.inline_style_override().is_some());
        let s = s.accept_selection(SelectionState::collapsed("0", 1));
        assert!(s.inline_style_override().is_none());
    }

    #[test]
    fn caret_at_block_start_uses_the_first_character() {
        let s = select(&state("hello"), 0, 1);
        let s = bold(&s).accept_selection(SelectionState::collapsed("0", 0));
        assert!(s.current_inline_style().contains("BOLD"));
    }

    #[test]
    fn range_uses_the_first_selected_character() {
        let s = select(&state("hello"), 1, 2);
        let s = bold(&s);
        assert!(select(&s, 1, 5).current_inline_style().contains("BOLD"));
        assert!(select(&s, 0, 5).current_inline_style().is_empty());
    }

    #[test]
    fn empty_block_looks_upward() {
        let bold = StyleSet::new().add("BOLD");
        let content = ContentState::from_blocks([
            ContentBlock::with_style("a", "xy", &bold),
            ContentBlock::new("b", ""),
            ContentBlock::new("c", ""),
        ])
        .unwrap();
        let s = EditorState::create_with_content(content)
            .accept_selection(SelectionState::collapsed("c", 0));
        assert_eq!(s.current_inline_style(), bold);
    }

    #[test]
    fn typed_text_carries_the_override() {
        let s = select(&state("ab"), 1, 1)
            .set_inline_style_override(StyleSet::new().add("ITALIC"));
        let s = s.insert_text("X").unwrap();
        let block = s.current_content().first_block().unwrap();
        assert_eq!(block.text(), "aXb");
        assert!(block.inline_style_at(1).contains("ITALIC"));
        assert!(block.inline_style_at(0).is_empty());
        assert!(s.inline_style_override().is_none());
    }
}
