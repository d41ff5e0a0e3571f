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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CharacterMetadata, StyleSet};

/// Block type of every block created by this crate.
pub const UNSTYLED: &str = "unstyled";

/// Stable identifier of a block within a document.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct BlockKey(String);

impl BlockKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for BlockKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A contiguous run of text with one [`CharacterMetadata`] per character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentBlock {
    key: BlockKey,
    block_type: String,
    text: String,
    characters: Vec<CharacterMetadata>,
}

impl ContentBlock {
    /// A block whose characters carry no style.
    pub fn new(key: impl Into<BlockKey>, text: impl Into<String>) -> Self {
        Self::with_style(key, text, &StyleSet::new())
    }

    /// A block whose characters all carry `style`.
    pub fn with_style(
        key: impl Into<BlockKey>,
        text: impl Into<String>,
        style: &StyleSet,
    ) -> Self {
        let text = text.into();
        let characters = text
            .chars()
            .map(|_| CharacterMetadata::new(style.clone()))
            .collect();
        Self {
            key: key.into(),
            block_type: UNSTYLED.to_owned(),
            text,
            characters,
        }
    }

    pub fn key(&self) -> &BlockKey {
        &self.key
    }

    pub fn block_type(&self) -> &str {
        &self.block_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn characters(&self) -> &[CharacterMetadata] {
        &self.characters
    }

    /// The style of the character at `offset`, empty past the end.
    pub fn inline_style_at(&self, offset: usize) -> StyleSet {
        self.characters
            .get(offset)
            .map(|c| c.style().clone())
            .unwrap_or_default()
    }

    pub fn with_block_type(&self, block_type: impl Into<String>) -> Self {
        Self {
            block_type: block_type.into(),
            ..self.clone()
        }
    }

    /// Replace the character list, keeping the text.
    pub fn with_characters(&self, characters: Vec<CharacterMetadata>) -> Self {
        self.with_text_and_characters(self.text.clone(), characters)
    }

    pub fn with_text_and_characters(
        &self,
        text: String,
        characters: Vec<CharacterMetadata>,
    ) -> Self {
        let block = Self {
            key: self.key.clone(),
            block_type: self.block_type.clone(),
            text,
            characters,
        };
        #[cfg(feature = "assert-invariants")]
        block.assert_invariants();
        block
    }

    #[cfg(feature = "assert-invariants")]
    pub fn assert_invariants(&self) {
        assert_eq!(
            self.text.chars().count(),
            self.characters.len(),
            "block `{}` has a character list that does not match its text",
            self.key
        );
    }

    /// Byte index of the character at `offset` (or the text length when
    /// `offset == len()`).
    pub(crate) fn byte_index(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
