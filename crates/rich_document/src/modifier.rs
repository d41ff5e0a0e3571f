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

//! Content-level edits: applying inline styles and inserting or removing
//! text. Each function takes a content snapshot and a selection and returns
//! a new snapshot whose `selection_before`/`selection_after` describe the
//! edit.

use crate::{
    CharacterMetadata, ContentBlock, ContentState, DocumentError,
    SelectionState, StyleSet,
};

/// Add `style` to every character in the selection.
pub fn apply_inline_style(
    content: &ContentState,
    selection: &SelectionState,
    style: &str,
) -> Result<ContentState, DocumentError> {
    modify_inline_style(content, selection, |c| c.apply_style(style))
}

/// Remove `style` from every character in the selection.
pub fn remove_inline_style(
    content: &ContentState,
    selection: &SelectionState,
    style: &str,
) -> Result<ContentState, DocumentError> {
    modify_inline_style(content, selection, |c| c.remove_style(style))
}

fn modify_inline_style<F>(
    content: &ContentState,
    selection: &SelectionState,
    f: F,
) -> Result<ContentState, DocumentError>
where
    F: Fn(&CharacterMetadata) -> CharacterMetadata,
{
    let start_key = selection.start_key();
    let end_key = selection.end_key();
    let mut updated = Vec::new();

    for block in content.block_map().range(start_key, end_key)? {
        let from = if block.key() == start_key {
            selection.start_offset()
        } else {
            0
        };
        let to = if block.key() == end_key {
            selection.end_offset()
        } else {
            block.len()
        };
        check_offset(block, to)?;
        if from >= to {
            continue;
        }
        let mut characters = block.characters().to_vec();
        for c in &mut characters[from..to] {
            *c = f(c);
        }
        updated.push(block.with_characters(characters));
    }

    let block_map = content.block_map().merge(updated)?;
    Ok(content
        .with_block_map(block_map)
        .with_selections(selection.clone(), selection.clone()))
}

/// Insert `text` at a collapsed selection, every new character carrying
/// `style`.
pub fn insert_text(
    content: &ContentState,
    selection: &SelectionState,
    text: &str,
    style: &StyleSet,
) -> Result<ContentState, DocumentError> {
    if !selection.is_collapsed() {
        return Err(DocumentError::SelectionNotCollapsed);
    }
    let key = selection.start_key();
    let offset = selection.start_offset();
    let block = content.block_for_key(key)?;
    check_offset(block, offset)?;

    let inserted = text.chars().count();
    let at = block.byte_index(offset);
    let mut new_text = String::with_capacity(block.text().len() + text.len());
    new_text.push_str(&block.text()[..at]);
    new_text.push_str(text);
    new_text.push_str(&block.text()[at..]);

    let mut characters = Vec::with_capacity(block.len() + inserted);
    characters.extend_from_slice(&block.characters()[..offset]);
    characters.extend(
        std::iter::repeat(CharacterMetadata::new(style.clone()))
            .take(inserted),
    );
    characters.extend_from_slice(&block.characters()[offset..]);

    let block_map = content
        .block_map()
        .merge([block.with_text_and_characters(new_text, characters)])?;
    Ok(content.with_block_map(block_map).with_selections(
        selection.clone(),
        SelectionState::collapsed(key.clone(), offset + inserted),
    ))
}

/// Delete the selected text. A selection spanning several blocks merges
/// the head of its first block with the tail of its last block.
pub fn remove_range(
    content: &ContentState,
    selection: &SelectionState,
) -> Result<ContentState, DocumentError> {
    if selection.is_collapsed() {
        return Ok(content.clone());
    }
    let start_key = selection.start_key();
    let end_key = selection.end_key();
    let start_offset = selection.start_offset();
    let end_offset = selection.end_offset();
    let start_block = content.block_for_key(start_key)?;
    let end_block = content.block_for_key(end_key)?;
    check_offset(start_block, start_offset)?;
    check_offset(end_block, end_offset)?;

    let head = start_block.byte_index(start_offset);
    let tail = end_block.byte_index(end_offset);
    let mut text = String::from(&start_block.text()[..head]);
    text.push_str(&end_block.text()[tail..]);

    let mut characters =
        start_block.characters()[..start_offset].to_vec();
    characters.extend_from_slice(&end_block.characters()[end_offset..]);

    let merged = start_block.with_text_and_characters(text, characters);
    let block_map = if start_key == end_key {
        content.block_map().merge([merged])?
    } else {
        content.block_map().splice(start_key, end_key, [merged])?
    };
    Ok(content.with_block_map(block_map).with_selections(
        selection.clone(),
        SelectionState::collapsed(start_key.clone(), start_offset),
    ))
}

/// Replace the selected text with `text` carrying `style`.
pub fn replace_text(
    content: &ContentState,
    selection: &SelectionState,
    text: &str,
    style: &StyleSet,
) -> Result<ContentState, DocumentError> {
    let removed = remove_range(content, selection)?;
    let caret = SelectionState::collapsed(
        selection.start_key().clone(),
        selection.start_offset(),
    );
    let inserted = insert_text(&removed, &caret, text, style)?;
    Ok(inserted.with_selections(
        selection.clone(),
        inserted.selection_after().clone(),
    ))
}

fn check_offset(
    block: &ContentBlock,
    offset: usize,
) -> Result<(), DocumentError> {
    if offset > block.len() {
        return Err(DocumentError::OffsetOutOfRange {
            key: block.key().clone(),
            offset,
            len: block.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        apply_inline_style, insert_text, remove_inline_style, remove_range,
        replace_text,
    };
    use crate::{ContentState, DocumentError, SelectionState, StyleSet};

    fn styled_offsets(
        content: &ContentState,
        key: &str,
        style: &str,
    ) -> Vec<usize> {
        content
            .block_for_key(&key.into())
            .unwrap()
            .characters()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.has_style(style))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn applying_a_style_across_blocks() {
        let content = ContentState::from_text("abc\ndef\nghi");
        let selection = SelectionState::new("0", 1, "2", 2);
        let styled = apply_inline_style(&content, &selection, "BOLD").unwrap();
        assert_eq!(styled_offsets(&styled, "0", "BOLD"), vec![1, 2]);
        assert_eq!(styled_offsets(&styled, "1", "BOLD"), vec![0, 1, 2]);
        assert_eq!(styled_offsets(&styled, "2", "BOLD"), vec![0, 1]);
        assert_eq!(styled.selection_before(), &selection);
        assert_eq!(styled.selection_after(), &selection);
    }

    #[test]
    fn removing_a_style_leaves_others() {
        let content = ContentState::from_text("abc");
        let all = SelectionState::new("0", 0, "0", 3);
        let content = apply_inline_style(&content, &all, "BOLD").unwrap();
        let content = apply_inline_style(&content, &all, "ITALIC").unwrap();
        let middle = SelectionState::new("0", 1, "0", 2);
        let content = remove_inline_style(&content, &middle, "BOLD").unwrap();
        assert_eq!(styled_offsets(&content, "0", "BOLD"), vec![0, 2]);
        assert_eq!(styled_offsets(&content, "0", "ITALIC"), vec![0, 1, 2]);
    }

    #[test]
    fn offsets_past_the_block_end_are_rejected() {
        let content = ContentState::from_text("abc");
        let selection = SelectionState::new("0", 0, "0", 9);
        assert_eq!(
            apply_inline_style(&content, &selection, "BOLD"),
            Err(DocumentError::OffsetOutOfRange {
                key: "0".into(),
                offset: 9,
                len: 3
            })
        );
    }

    #[test]
    fn insert_requires_a_caret() {
        let content = ContentState::from_text("abc");
        let selection = SelectionState::new("0", 0, "0", 1);
        assert_eq!(
            insert_text(&content, &selection, "x", &StyleSet::new()),
            Err(DocumentError::SelectionNotCollapsed)
        );
    }

    #[test]
    fn remove_range_merges_blocks() {
        let content = ContentState::from_text("abc\ndef\nghi");
        let selection = SelectionState::new("0", 1, "2", 1);
        let removed = remove_range(&content, &selection).unwrap();
        assert_eq!(removed.plain_text(), "ahi");
        assert_eq!(removed.block_map().len(), 1);
        assert_eq!(
            removed.selection_after(),
            &SelectionState::collapsed("0", 1)
        );
    }

    #[test]
    fn replace_text_keeps_surrounding_styles() {
        let content = ContentState::from_text("abcd");
        let all = SelectionState::new("0", 0, "0", 4);
        let content = apply_inline_style(&content, &all, "BOLD").unwrap();
        let selection = SelectionState::new("0", 1, "0", 3);
        let replaced =
            replace_text(&content, &selection, "XYZ", &StyleSet::new())
                .unwrap();
        assert_eq!(replaced.plain_text(), "aXYZd");
        assert_eq!(styled_offsets(&replaced, "0", "BOLD"), vec![0, 4]);
        assert_eq!(
            replaced.selection_after(),
            &SelectionState::collapsed("0", 4)
        );
    }
}
