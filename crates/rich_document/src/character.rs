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

use crate::StyleSet;

/// Metadata attached to a single character of a block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CharacterMetadata {
    style: StyleSet,
}

impl CharacterMetadata {
    pub fn new(style: StyleSet) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &StyleSet {
        &self.style
    }

    pub fn has_style(&self, style: &str) -> bool {
        self.style.contains(style)
    }

    pub fn apply_style(&self, style: &str) -> Self {
        self.with_style(self.style.add(style))
    }

    pub fn remove_style(&self, style: &str) -> Self {
        self.with_style(self.style.remove(style))
    }

    pub fn with_style(&self, style: StyleSet) -> Self {
        Self { style }
    }
}
