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

use crate::BlockKey;

/// A selection between two endpoints, each a block key and an offset.
///
/// `anchor` is where the selection started and `focus` where it ends. When
/// `is_backward` is set the focus precedes the anchor in document order;
/// the `start_*`/`end_*` accessors always report the endpoint that comes
/// first/last in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionState {
    anchor_key: BlockKey,
    anchor_offset: usize,
    focus_key: BlockKey,
    focus_offset: usize,
    is_backward: bool,
    has_focus: bool,
}

impl SelectionState {
    /// A forward selection from `anchor` to `focus`.
    pub fn new(
        anchor_key: impl Into<BlockKey>,
        anchor_offset: usize,
        focus_key: impl Into<BlockKey>,
        focus_offset: usize,
    ) -> Self {
        Self {
            anchor_key: anchor_key.into(),
            anchor_offset,
            focus_key: focus_key.into(),
            focus_offset,
            is_backward: false,
            has_focus: true,
        }
    }

    /// A caret at `offset` in block `key`.
    pub fn collapsed(key: impl Into<BlockKey>, offset: usize) -> Self {
        let key = key.into();
        Self::new(key.clone(), offset, key, offset)
    }

    pub fn with_backward(&self, is_backward: bool) -> Self {
        Self {
            is_backward,
            ..self.clone()
        }
    }

    pub fn with_focus(&self, has_focus: bool) -> Self {
        Self {
            has_focus,
            ..self.clone()
        }
    }

    pub fn anchor_key(&self) -> &BlockKey {
        &self.anchor_key
    }

    pub fn anchor_offset(&self) -> usize {
        self.anchor_offset
    }

    pub fn focus_key(&self) -> &BlockKey {
        &self.focus_key
    }

    pub fn focus_offset(&self) -> usize {
        self.focus_offset
    }

    pub fn is_backward(&self) -> bool {
        self.is_backward
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor_key == self.focus_key
            && self.anchor_offset == self.focus_offset
    }

    pub fn start_key(&self) -> &BlockKey {
        if self.is_backward {
            &self.focus_key
        } else {
            &self.anchor_key
        }
    }

    pub fn start_offset(&self) -> usize {
        if self.is_backward {
            self.focus_offset
        } else {
            self.anchor_offset
        }
    }

    pub fn end_key(&self) -> &BlockKey {
        if self.is_backward {
            &self.anchor_key
        } else {
            &self.focus_key
        }
    }

    pub fn end_offset(&self) -> usize {
        if self.is_backward {
            self.anchor_offset
        } else {
            self.focus_offset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionState;

    #[test]
    fn default_selection_is_a_caret_at_the_empty_key() {
        let selection = SelectionState::default();
        assert_eq!(
            selection,
            SelectionState::collapsed("", 0).with_focus(false)
        );
        assert_eq!(selection.start_key().as_str(), "");
        assert!(selection.is_collapsed());
    }

    #[test]
    fn caret_is_collapsed() {
        assert!(SelectionState::collapsed("a", 3).is_collapsed());
        assert!(!SelectionState::new("a", 0, "a", 1).is_collapsed());
        assert!(!SelectionState::new("a", 2, "b", 2).is_collapsed());
    }

    #[test]
    fn backward_selection_swaps_start_and_end() {
        let selection =
            SelectionState::new("b", 2, "a", 4).with_backward(true);
        assert_eq!(selection.start_key().as_str(), "a");
        assert_eq!(selection.start_offset(), 4);
        assert_eq!(selection.end_key().as_str(), "b");
        assert_eq!(selection.end_offset(), 2);
    }
}
