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

use thiserror::Error;

use crate::BlockKey;

/// Violations of the document model's own contracts.
///
/// These are raised when a caller hands the model a selection or a raw
/// document that does not fit the content it is applied to.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("no block with key `{0}`")]
    UnknownBlock(BlockKey),

    #[error(
        "offset {offset} is past the end of block `{key}` (length {len})"
    )]
    OffsetOutOfRange {
        key: BlockKey,
        offset: usize,
        len: usize,
    },

    #[error("selection ends in block `{end}`, which precedes `{start}`")]
    InvertedSelection { start: BlockKey, end: BlockKey },

    #[error("expected a collapsed selection")]
    SelectionNotCollapsed,

    #[error("duplicate block key `{0}`")]
    DuplicateBlock(BlockKey),
}
