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

//! Raw (serializable) form of a document.
//!
//! Per-character style sets are encoded as inline style ranges: for every
//! distinct style of a block, in order of first appearance, one
//! `{ style, offset, length }` entry per maximal run of characters carrying
//! it. Offsets and lengths count characters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    BlockKey, CharacterMetadata, ContentBlock, ContentState, DocumentError,
    StyleSet, UNSTYLED,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContentState {
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub entity_map: BTreeMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    pub key: BlockKey,
    pub text: String,
    #[serde(rename = "type", default = "unstyled")]
    pub block_type: String,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub inline_style_ranges: Vec<RawInlineStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawInlineStyleRange {
    pub style: String,
    pub offset: usize,
    pub length: usize,
}

fn unstyled() -> String {
    UNSTYLED.to_owned()
}

impl RawContentState {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

pub fn convert_to_raw(content: &ContentState) -> RawContentState {
    RawContentState {
        blocks: content
            .block_map()
            .iter()
            .map(|block| RawBlock {
                key: block.key().clone(),
                text: block.text().to_owned(),
                block_type: block.block_type().to_owned(),
                depth: 0,
                inline_style_ranges: encode_inline_style_ranges(block),
                entity_ranges: Vec::new(),
            })
            .collect(),
        entity_map: BTreeMap::new(),
    }
}

pub fn convert_from_raw(
    raw: &RawContentState,
) -> Result<ContentState, DocumentError> {
    let blocks = raw
        .blocks
        .iter()
        .map(decode_block)
        .collect::<Result<Vec<_>, _>>()?;
    ContentState::from_blocks(blocks)
}

fn encode_inline_style_ranges(
    block: &ContentBlock,
) -> Vec<RawInlineStyleRange> {
    let characters = block.characters();
    let mut styles: Vec<&str> = Vec::new();
    for style in characters.iter().flat_map(|c| c.style().iter()) {
        if !styles.contains(&style) {
            styles.push(style);
        }
    }

    let mut ranges = Vec::new();
    for style in styles {
        let mut run_start: Option<usize> = None;
        for (i, c) in characters.iter().enumerate() {
            match (c.has_style(style), run_start) {
                (true, None) => run_start = Some(i),
                (false, Some(start)) => {
                    ranges.push(range(style, start, i));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            ranges.push(range(style, start, characters.len()));
        }
    }
    ranges
}

fn range(style: &str, start: usize, end: usize) -> RawInlineStyleRange {
    RawInlineStyleRange {
        style: style.to_owned(),
        offset: start,
        length: end - start,
    }
}

fn decode_block(raw: &RawBlock) -> Result<ContentBlock, DocumentError> {
    let len = raw.text.chars().count();
    let mut styles = vec![StyleSet::new(); len];
    for r in &raw.inline_style_ranges {
        let end = match r.offset.checked_add(r.length) {
            Some(end) if end <= len => end,
            end => {
                return Err(DocumentError::OffsetOutOfRange {
                    key: raw.key.clone(),
                    offset: end.unwrap_or(usize::MAX),
                    len,
                });
            }
        };
        for style in &mut styles[r.offset..end] {
            *style = style.add(&r.style);
        }
    }
    let characters = styles.into_iter().map(CharacterMetadata::new).collect();
    let block = ContentBlock::new(raw.key.clone(), raw.text.clone());
    Ok(block
        .with_block_type(raw.block_type.clone())
        .with_characters(characters))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::{
        convert_from_raw, convert_to_raw, RawContentState,
        RawInlineStyleRange,
    };
    use crate::modifier::apply_inline_style;
    use crate::{ContentState, DocumentError, SelectionState};

    fn styled() -> ContentState {
        let content = ContentState::from_text("block 1");
        let content = apply_inline_style(
            &content,
            &SelectionState::new("0", 0, "0", 5),
            "CUSTOM_COLOR_red",
        )
        .unwrap();
        apply_inline_style(
            &content,
            &SelectionState::new("0", 2, "0", 7),
            "BOLD",
        )
        .unwrap()
    }

    #[test]
    fn ranges_are_grouped_by_style_in_first_appearance_order() {
        let raw = convert_to_raw(&styled());
        assert_eq!(
            raw.blocks[0].inline_style_ranges,
            vec![
                RawInlineStyleRange {
                    style: "CUSTOM_COLOR_red".into(),
                    offset: 0,
                    length: 5,
                },
                RawInlineStyleRange {
                    style: "BOLD".into(),
                    offset: 2,
                    length: 5,
                },
            ]
        );
    }

    #[test]
    fn split_runs_produce_separate_ranges() {
        let content = ContentState::from_text("abcdef");
        let content = apply_inline_style(
            &content,
            &SelectionState::new("0", 0, "0", 2),
            "BOLD",
        )
        .unwrap();
        let content = apply_inline_style(
            &content,
            &SelectionState::new("0", 4, "0", 6),
            "BOLD",
        )
        .unwrap();
        let ranges = &convert_to_raw(&content).blocks[0].inline_style_ranges;
        assert_eq!(ranges.len(), 2);
        assert_eq!((ranges[1].offset, ranges[1].length), (4, 2));
    }

    #[test]
    fn raw_round_trips_through_json() {
        let content = styled();
        let json = convert_to_raw(&content).to_json().unwrap();
        let raw = RawContentState::from_json(&json).unwrap();
        let restored = convert_from_raw(&raw).unwrap();
        assert_eq!(
            restored.block_map().first().unwrap().characters(),
            content.block_map().first().unwrap().characters()
        );
    }

    #[test]
    fn json_uses_camel_case_field_names() {
        let raw = RawContentState::from_json(indoc! {r#"
            {
              "blocks": [
                {
                  "key": "abc",
                  "text": "hi",
                  "type": "unstyled",
                  "depth": 0,
                  "inlineStyleRanges": [
                    { "style": "ITALIC", "offset": 0, "length": 1 }
                  ],
                  "entityRanges": []
                }
              ],
              "entityMap": {}
            }
        "#})
        .unwrap();
        let content = convert_from_raw(&raw).unwrap();
        let block = content.block_for_key(&"abc".into()).unwrap();
        assert!(block.inline_style_at(0).contains("ITALIC"));
        assert!(block.inline_style_at(1).is_empty());
    }

    #[test]
    fn ranges_past_the_text_are_rejected() {
        let raw = RawContentState::from_json(
            r#"{"blocks":[{"key":"a","text":"hi","inlineStyleRanges":
                [{"style":"BOLD","offset":1,"length":5}]}]}"#,
        )
        .unwrap();
        assert!(matches!(
            convert_from_raw(&raw),
            Err(DocumentError::OffsetOutOfRange { offset: 6, len: 2, .. })
        ));
    }

    #[test]
    fn overflowing_ranges_are_rejected() {
        let raw = RawContentState::from_json(
            r#"{"blocks":[{"key":"a","text":"hi","inlineStyleRanges":
                [{"style":"BOLD","offset":18446744073709551615,"length":2}]}]}"#,
        )
        .unwrap();
        assert!(matches!(
            convert_from_raw(&raw),
            Err(DocumentError::OffsetOutOfRange { len: 2, .. })
        ));
    }
}
