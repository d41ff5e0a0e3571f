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

//! Per-block character ranges covered by a selection.

use rich_document::{BlockKey, ContentState, DocumentError, SelectionState};

/// The characters `[start, end)` of one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockRange {
    pub key: BlockKey,
    pub start: usize,
    pub end: usize,
}

impl BlockRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The range of every block from the selection's start block through its
/// end block, in document order.
///
/// With a single block the range is `(start_offset, end_offset)`. With
/// several, the first block runs from `start_offset` to its end, interior
/// blocks are covered entirely and the last block runs from 0 to
/// `end_offset`. A collapsed selection yields one empty range.
pub fn compute_ranges(
    content: &ContentState,
    selection: &SelectionState,
) -> Result<Vec<BlockRange>, DocumentError> {
    let start_key = selection.start_key();
    let end_key = selection.end_key();
    let single = start_key == end_key;

    let mut ranges = Vec::new();
    for block in content.block_map().range(start_key, end_key)? {
        let (start, end) = if single {
            (selection.start_offset(), selection.end_offset())
        } else if block.key() == start_key {
            (selection.start_offset(), block.len())
        } else if block.key() == end_key {
            (0, selection.end_offset())
        } else {
            (0, block.len())
        };
        let furthest = start.max(end);
        if furthest > block.len() {
            return Err(DocumentError::OffsetOutOfRange {
                key: block.key().clone(),
                offset: furthest,
                len: block.len(),
            });
        }
        ranges.push(BlockRange {
            key: block.key().clone(),
            start,
            end,
        });
    }
    Ok(ranges)
}
