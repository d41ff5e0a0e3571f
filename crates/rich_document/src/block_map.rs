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

use std::collections::HashMap;
use std::sync::Arc;

use crate::{BlockKey, ContentBlock, DocumentError};

/// Ordered, persistent map of blocks keyed by [`BlockKey`].
///
/// Blocks are stored behind [`Arc`]. [`BlockMap::merge`] copies the block
/// pointers and swaps in the rebuilt blocks, so every block that was not
/// rebuilt is shared with the map it was derived from. The key index is
/// shared too as long as the key order is unchanged.
#[derive(Clone, Debug, Default)]
pub struct BlockMap {
    blocks: Arc<Vec<Arc<ContentBlock>>>,
    index: Arc<HashMap<BlockKey, usize>>,
}

impl BlockMap {
    pub fn from_blocks<I>(blocks: I) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        let blocks: Vec<Arc<ContentBlock>> =
            blocks.into_iter().map(Arc::new).collect();
        let index = build_index(&blocks)?;
        Ok(Self {
            blocks: Arc::new(blocks),
            index: Arc::new(index),
        })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, key: &BlockKey) -> Option<&ContentBlock> {
        self.position(key).map(|i| self.blocks[i].as_ref())
    }

    pub fn position(&self, key: &BlockKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn first(&self) -> Option<&ContentBlock> {
        self.blocks.first().map(Arc::as_ref)
    }

    pub fn last(&self) -> Option<&ContentBlock> {
        self.blocks.last().map(Arc::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentBlock> + '_ {
        self.blocks.iter().map(Arc::as_ref)
    }

    pub fn keys(&self) -> impl Iterator<Item = &BlockKey> + '_ {
        self.iter().map(ContentBlock::key)
    }

    pub fn key_before(&self, key: &BlockKey) -> Option<&BlockKey> {
        let i = self.position(key)?;
        i.checked_sub(1).map(|j| self.blocks[j].key())
    }

    pub fn key_after(&self, key: &BlockKey) -> Option<&BlockKey> {
        let i = self.position(key)?;
        self.blocks.get(i + 1).map(|b| b.key())
    }

    /// The blocks from `start` through `end`, inclusive, in document order.
    pub fn range(
        &self,
        start: &BlockKey,
        end: &BlockKey,
    ) -> Result<impl Iterator<Item = &ContentBlock> + '_, DocumentError> {
        let (from, to) = self.positions(start, end)?;
        Ok(self.blocks[from..=to].iter().map(Arc::as_ref))
    }

    /// Replace blocks by key. Every block in `updated` must already exist.
    pub fn merge<I>(&self, updated: I) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        let mut blocks: Option<Vec<Arc<ContentBlock>>> = None;
        for block in updated {
            let i = self
                .position(block.key())
                .ok_or_else(|| {
                    DocumentError::UnknownBlock(block.key().clone())
                })?;
            blocks.get_or_insert_with(|| self.blocks.as_ref().clone())[i] =
                Arc::new(block);
        }
        Ok(match blocks {
            Some(blocks) => Self {
                blocks: Arc::new(blocks),
                index: Arc::clone(&self.index),
            },
            None => self.clone(),
        })
    }

    /// Replace the blocks from `start` through `end`, inclusive, with
    /// `replacement`.
    pub fn splice<I>(
        &self,
        start: &BlockKey,
        end: &BlockKey,
        replacement: I,
    ) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        let (from, to) = self.positions(start, end)?;
        let mut blocks = self.blocks.as_ref().clone();
        blocks.splice(from..=to, replacement.into_iter().map(Arc::new));
        let index = build_index(&blocks)?;
        Ok(Self {
            blocks: Arc::new(blocks),
            index: Arc::new(index),
        })
    }

    /// Whether `self` and `other` hold the very same block at `key`.
    pub fn shares_block(&self, other: &Self, key: &BlockKey) -> bool {
        match (self.position(key), other.position(key)) {
            (Some(i), Some(j)) => {
                Arc::ptr_eq(&self.blocks[i], &other.blocks[j])
            }
            _ => false,
        }
    }

    fn positions(
        &self,
        start: &BlockKey,
        end: &BlockKey,
    ) -> Result<(usize, usize), DocumentError> {
        let from = self
            .position(start)
            .ok_or_else(|| DocumentError::UnknownBlock(start.clone()))?;
        let to = self
            .position(end)
            .ok_or_else(|| DocumentError::UnknownBlock(end.clone()))?;
        if to < from {
            return Err(DocumentError::InvertedSelection {
                start: start.clone(),
                end: end.clone(),
            });
        }
        Ok((from, to))
    }
}

impl PartialEq for BlockMap {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.blocks, &other.blocks)
            || (self.len() == other.len()
                && self
                    .blocks
                    .iter()
                    .zip(other.blocks.iter())
                    .all(|(a, b)| Arc::ptr_eq(a, b) || a == b))
    }
}

fn build_index(
    blocks: &[Arc<ContentBlock>],
) -> Result<HashMap<BlockKey, usize>, DocumentError> {
    let mut index = HashMap::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        if index.insert(block.key().clone(), i).is_some() {
            return Err(DocumentError::DuplicateBlock(block.key().clone()));
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::BlockMap;
    use crate::{BlockKey, ContentBlock, DocumentError};

    fn map() -> BlockMap {
        BlockMap::from_blocks([
            ContentBlock::new("a", "one"),
            ContentBlock::new("b", "two"),
            ContentBlock::new("c", "three"),
        ])
        .unwrap()
    }

    #[test]
    fn merge_shares_untouched_blocks() {
        let before = map();
        let after = before
            .merge([ContentBlock::new("b", "TWO")])
            .unwrap();
        assert!(after.shares_block(&before, &BlockKey::from("a")));
        assert!(!after.shares_block(&before, &BlockKey::from("b")));
        assert_eq!(before.get(&"b".into()).unwrap().text(), "two");
        assert_eq!(after.get(&"b".into()).unwrap().text(), "TWO");
    }

    #[test]
    fn merging_an_unknown_block_fails() {
        let result = map().merge([ContentBlock::new("z", "")]);
        assert_eq!(result, Err(DocumentError::UnknownBlock("z".into())));
    }

    #[test]
    fn range_is_inclusive_and_ordered() {
        let map = map();
        let keys: Vec<&str> = map
            .range(&"a".into(), &"b".into())
            .unwrap()
            .map(|b| b.key().as_str())
            .collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn range_rejects_inverted_keys() {
        let map = map();
        assert!(matches!(
            map.range(&"c".into(), &"a".into()),
            Err(DocumentError::InvertedSelection { .. })
        ));
    }

    #[test]
    fn splice_replaces_a_run_of_blocks() {
        let map = map()
            .splice(&"a".into(), &"b".into(), [ContentBlock::new("a", "x")])
            .unwrap();
        let keys: Vec<&str> = map.keys().map(BlockKey::as_str).collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert_eq!(map.key_after(&"a".into()), Some(&"c".into()));
        assert_eq!(map.key_before(&"a".into()), None);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let result = BlockMap::from_blocks([
            ContentBlock::new("a", ""),
            ContentBlock::new("a", ""),
        ]);
        assert_eq!(result, Err(DocumentError::DuplicateBlock("a".into())));
    }
}
