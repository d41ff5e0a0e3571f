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

//! Per-character style rewriting over a set of block ranges.

use rich_document::{
    CharacterMetadata, ContentState, DocumentError, EditorState,
    SelectionState,
};

use crate::walker::{compute_ranges, BlockRange};

/// Apply `transform` to every character covered by `ranges`, in block and
/// index order.
///
/// Blocks with an empty range are left shared with `content`. The result
/// records `selection` as both its `selection_before` and
/// `selection_after`: restyling never moves the selection.
pub fn map_characters<F>(
    content: &ContentState,
    ranges: &[BlockRange],
    selection: &SelectionState,
    transform: F,
) -> Result<ContentState, DocumentError>
where
    F: Fn(&CharacterMetadata) -> CharacterMetadata,
{
    let mut updated = Vec::with_capacity(ranges.len());
    for range in ranges.iter().filter(|r| !r.is_empty()) {
        let block = content.block_for_key(&range.key)?;
        let mut characters = block.characters().to_vec();
        let covered = characters.get_mut(range.start..range.end).ok_or_else(
            || DocumentError::OffsetOutOfRange {
                key: range.key.clone(),
                offset: range.end,
                len: block.len(),
            },
        )?;
        for c in covered {
            *c = transform(c);
        }
        updated.push(block.with_characters(characters));
    }

    let block_map = content.block_map().merge(updated)?;
    Ok(content
        .with_block_map(block_map)
        .with_selections(selection.clone(), selection.clone()))
}

/// [`map_characters`] over the current selection of `state`.
pub fn map_selected_characters<F>(
    state: &EditorState,
    transform: F,
) -> Result<ContentState, DocumentError>
where
    F: Fn(&CharacterMetadata) -> CharacterMetadata,
{
    let content = state.current_content();
    let selection = state.selection();
    let ranges = compute_ranges(content, selection)?;
    map_characters(content, &ranges, selection, transform)
}
