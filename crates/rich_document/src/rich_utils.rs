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

//! Editor-level helpers for the fixed inline styles.

use crate::modifier::{apply_inline_style, remove_inline_style};
use crate::{ChangeType, DocumentError, EditorState};

/// Toggle a single inline style tag, e.g. `BOLD`.
///
/// - **Collapsed selection**: toggles the tag in the inline style override,
///   so the next typed characters will (or won't) carry it.
/// - **Range selection**: removes the tag from the range when the current
///   inline style has it, otherwise applies it, as one undo step.
pub fn toggle_inline_style(
    state: &EditorState,
    style: &str,
) -> Result<EditorState, DocumentError> {
    let selection = state.selection();
    let current = state.current_inline_style();

    if selection.is_collapsed() {
        let next = if current.contains(style) {
            current.remove(style)
        } else {
            current.add(style)
        };
        return Ok(state.set_inline_style_override(next));
    }

    let content = state.current_content();
    let content = if current.contains(style) {
        remove_inline_style(content, selection, style)?
    } else {
        apply_inline_style(content, selection, style)?
    };
    Ok(state.push(content, ChangeType::ChangeInlineStyle))
}

#[cfg(test)]
mod tests {
    use super::toggle_inline_style;
    use crate::{ContentState, EditorState, SelectionState};

    fn state(start: usize, end: usize) -> EditorState {
        EditorState::create_with_content(ContentState::from_text("block 1"))
            .accept_selection(SelectionState::new("0", start, "0", end))
    }

    #[test]
    fn toggling_twice_on_a_range_removes_the_style() {
        let on = toggle_inline_style(&state(0, 5), "BOLD").unwrap();
        let block = on.current_content().first_block().unwrap();
        assert!(block.characters()[..5].iter().all(|c| c.has_style("BOLD")));
        assert!(!block.characters()[5].has_style("BOLD"));

        let off = toggle_inline_style(&on, "BOLD").unwrap();
        let block = off.current_content().first_block().unwrap();
        assert!(block.characters().iter().all(|c| !c.has_style("BOLD")));
        assert_eq!(off.undo_depth(), 2);
    }

    #[test]
    fn toggling_at_a_caret_only_touches_the_override() {
        let on = toggle_inline_style(&state(2, 2), "BOLD").unwrap();
        assert!(on.inline_style_override().unwrap().contains("BOLD"));
        assert_eq!(on.undo_depth(), 0);

        let off = toggle_inline_style(&on, "BOLD").unwrap();
        assert!(off.inline_style_override().unwrap().is_empty());
    }
}
