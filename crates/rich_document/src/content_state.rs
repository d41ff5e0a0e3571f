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

use crate::{
    BlockKey, BlockMap, ContentBlock, DocumentError, SelectionState,
};

/// An immutable snapshot of the document's blocks.
///
/// Besides the blocks, a snapshot remembers the selection just before and
/// just after the change that produced it; undo and redo restore those.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentState {
    block_map: BlockMap,
    selection_before: SelectionState,
    selection_after: SelectionState,
}

impl ContentState {
    /// One unstyled block per line of `text`. Keys are `"0"`, `"1"`, ...
    pub fn from_text(text: &str) -> Self {
        let blocks = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate()
            .map(|(i, line)| ContentBlock::new(i.to_string(), line));
        // Keys generated from line numbers are always unique.
        Self::from_blocks(blocks).unwrap_or_else(|_| Self::empty())
    }

    /// A document holding `blocks` in order. An empty iterator gives a
    /// document with a single empty block.
    pub fn from_blocks<I>(blocks: I) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        let block_map = BlockMap::from_blocks(blocks)?;
        if block_map.is_empty() {
            return Ok(Self::empty());
        }
        let selection = block_map
            .first()
            .map(|b| SelectionState::collapsed(b.key().clone(), 0))
            .unwrap_or_default();
        Ok(Self {
            block_map,
            selection_before: selection.clone(),
            selection_after: selection,
        })
    }

    fn empty() -> Self {
        let block = ContentBlock::new("0", "");
        let selection = SelectionState::collapsed(block.key().clone(), 0);
        Self {
            block_map: BlockMap::from_blocks([block]).unwrap_or_default(),
            selection_before: selection.clone(),
            selection_after: selection,
        }
    }

    pub fn block_map(&self) -> &BlockMap {
        &self.block_map
    }

    pub fn block_for_key(
        &self,
        key: &BlockKey,
    ) -> Result<&ContentBlock, DocumentError> {
        self.block_map
            .get(key)
            .ok_or_else(|| DocumentError::UnknownBlock(key.clone()))
    }

    pub fn first_block(&self) -> Option<&ContentBlock> {
        self.block_map.first()
    }

    pub fn last_block(&self) -> Option<&ContentBlock> {
        self.block_map.last()
    }

    pub fn key_before(&self, key: &BlockKey) -> Option<&BlockKey> {
        self.block_map.key_before(key)
    }

    pub fn key_after(&self, key: &BlockKey) -> Option<&BlockKey> {
        self.block_map.key_after(key)
    }

    pub fn selection_before(&self) -> &SelectionState {
        &self.selection_before
    }

    pub fn selection_after(&self) -> &SelectionState {
        &self.selection_after
    }

    /// Block texts joined with `\n`.
    pub fn plain_text(&self) -> String {
        self.block_map
            .iter()
            .map(ContentBlock::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn with_block_map(&self, block_map: BlockMap) -> Self {
        Self {
            block_map,
            ..self.clone()
        }
    }

    pub fn with_selection_before(&self, selection: SelectionState) -> Self {
        Self {
            selection_before: selection,
            ..self.clone()
        }
    }

    pub fn with_selections(
        &self,
        before: SelectionState,
        after: SelectionState,
    ) -> Self {
        Self {
            block_map: self.block_map.clone(),
            selection_before: before,
            selection_after: after,
        }
    }
}

impl Default for ContentState {
    fn default() -> Self {
        Self::empty()
    }
}
