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

//! Immutable, block-structured rich text document model.
//!
//! A [`ContentState`] is an ordered map of [`ContentBlock`]s. Each block
//! carries one [`CharacterMetadata`] per character, and each character
//! carries a [`StyleSet`] of inline style tags. An [`EditorState`] wraps the
//! current content together with the selection, a pending inline style
//! override for the caret and the undo/redo history.
//!
//! Every operation returns a new value. Blocks are shared between snapshots
//! behind [`std::sync::Arc`], so keeping an old [`EditorState`] around (for
//! undo, or for a concurrent reader) is cheap and never observes later
//! edits.
//!
//! Offsets are counted in Unicode scalar values (`char`s).

mod block;
mod block_map;
mod character;
mod content_state;
mod css;
mod default_styles;
mod editor_state;
mod error;
mod history;
pub mod modifier;
pub mod raw;
pub mod rich_utils;
mod selection;
mod style_set;

pub use block::{BlockKey, ContentBlock, UNSTYLED};
pub use block_map::BlockMap;
pub use character::CharacterMetadata;
pub use content_state::ContentState;
pub use css::CssProperties;
pub use default_styles::DefaultInlineStyle;
pub use editor_state::{ChangeType, EditorState};
pub use error::DocumentError;
pub use history::HistoryStack;
pub use raw::{convert_from_raw, convert_to_raw, RawContentState};
pub use selection::SelectionState;
pub use style_set::StyleSet;
