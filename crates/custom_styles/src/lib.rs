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

//! Dynamically parameterized inline styles for [`rich_document`].
//!
//! Only the CSS property names are configured up front. Values are chosen
//! at runtime and stored in the document as ordinary inline style tags of
//! the form `<PREFIX><PROPERTY>_<value>`:
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use custom_styles::create_styles;
//! use rich_document::{ContentState, EditorState, SelectionState};
//!
//! let styles = create_styles(["color", "font-size"], None, BTreeMap::new());
//! let content = ContentState::from_text("hello");
//! let state = EditorState::create_with_content(content)
//!     .accept_selection(SelectionState::new("0", 0, "0", 5));
//!
//! let color = styles.style("color").unwrap();
//! let state = color.add(&state, "red").unwrap();
//! assert_eq!(color.current(&state), "red");
//!
//! let export = styles.exporter(&state);
//! assert_eq!(
//!     export.get("CUSTOM_COLOR_red").unwrap().style.get("color"),
//!     Some("red")
//! );
//! ```

mod case;
mod codec;
mod config;
mod custom_style;
mod exporter;
mod factory;
mod html;
mod import;
mod resolve;
mod transformer;
mod walker;

pub use case::{camel_case, snake_case, to_css_property, to_react_css_case};
pub use codec::{validate_prefix, Namespace, DEFAULT_PREFIX};
pub use config::{ConfigError, StyleConfig};
pub use custom_style::CustomStyle;
pub use exporter::{ExportedStyle, InlineStyleExport};
pub use factory::{create_styles, CustomStyles};
pub use html::style_attribute;
pub use resolve::Resolution;
pub use transformer::{map_characters, map_selected_characters};
pub use walker::{compute_ranges, BlockRange};
