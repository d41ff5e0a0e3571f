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

//! Case conversion for CSS property names.
//!
//! Words are split at non-alphanumeric characters, at lower-to-upper case
//! transitions, before the last capital of an acronym (`XMLHttp` →
//! `XML`, `Http`) and around runs of digits.

use once_cell::sync::Lazy;
use regex::Regex;

static VENDOR_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-(webkit|moz|ms|o)-|(webkit|moz|ms|o)_)")
        .expect("vendor prefix pattern is valid")
});

const VENDORS: [&str; 4] = ["webkit", "moz", "ms", "o"];

#[derive(Clone, Copy, PartialEq)]
enum Class {
    Lower,
    Upper,
    Digit,
}

fn class(c: char) -> Option<Class> {
    if c.is_ascii_digit() || c.is_numeric() {
        Some(Class::Digit)
    } else if c.is_uppercase() {
        Some(Class::Upper)
    } else if c.is_alphanumeric() {
        Some(Class::Lower)
    } else {
        None
    }
}

pub(crate) fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let Some(this) = class(c) else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        };
        if let Some(prev) = i.checked_sub(1).and_then(|j| class(chars[j])) {
            let next = chars.get(i + 1).and_then(|&n| class(n));
            let boundary = match (prev, this) {
                (Class::Lower, Class::Upper) => true,
                (Class::Digit, Class::Lower | Class::Upper) => true,
                (Class::Lower | Class::Upper, Class::Digit) => true,
                (Class::Upper, Class::Upper) => next == Some(Class::Lower),
                _ => false,
            };
            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `font-size` → `font_size`.
pub fn snake_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// `font-size` → `FONT_SIZE`.
pub fn upper_snake_case(input: &str) -> String {
    snake_case(input).to_uppercase()
}

/// `font-size` → `fontSize`.
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, word) in words(input).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// The key React uses for a CSS property in a style object.
///
/// This is [`camel_case`], except that vendor-prefixed properties
/// (`-webkit-…`, `moz_…`) start with a capital: `-webkit-text-stroke` →
/// `WebkitTextStroke`.
pub fn to_react_css_case(property: &str) -> String {
    let camel = camel_case(property);
    if !VENDOR_PREFIX.is_match(&property.to_lowercase()) {
        return camel;
    }
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => camel,
    }
}

/// The CSS declaration name for a React style key: `backgroundColor` →
/// `background-color`, `WebkitTextStroke` → `-webkit-text-stroke`.
pub fn to_css_property(key: &str) -> String {
    let words = words(key);
    let kebab = words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-");
    let vendor = key.chars().next().is_some_and(char::is_uppercase)
        && words.len() > 1
        && VENDORS.contains(&words[0].to_lowercase().as_str());
    if vendor {
        format!("-{kebab}")
    } else {
        kebab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_cases_css_properties() {
        assert_eq!(upper_snake_case("color"), "COLOR");
        assert_eq!(upper_snake_case("font-size"), "FONT_SIZE");
        assert_eq!(upper_snake_case("backgroundColor"), "BACKGROUND_COLOR");
        assert_eq!(
            upper_snake_case("-webkit-text-stroke"),
            "WEBKIT_TEXT_STROKE"
        );
        assert_eq!(snake_case("XMLHttpRequest"), "xml_http_request");
        assert_eq!(snake_case("h1Size"), "h_1_size");
    }

    #[test]
    fn camel_cases_css_properties() {
        assert_eq!(camel_case("background-color"), "backgroundColor");
        assert_eq!(camel_case("FONT_SIZE"), "fontSize");
        assert_eq!(camel_case("fontFamily"), "fontFamily");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn vendor_properties_get_a_leading_capital() {
        assert_eq!(
            to_react_css_case("-webkit-text-stroke"),
            "WebkitTextStroke"
        );
        assert_eq!(to_react_css_case("moz_user_select"), "MozUserSelect");
        assert_eq!(to_react_css_case("-MS-transform"), "MsTransform");
        assert_eq!(to_react_css_case("outline-color"), "outlineColor");
        assert_eq!(to_react_css_case("color"), "color");
    }

    #[test]
    fn react_keys_map_back_to_css_properties() {
        assert_eq!(to_css_property("backgroundColor"), "background-color");
        assert_eq!(to_css_property("color"), "color");
        assert_eq!(to_css_property("WebkitTextStroke"), "-webkit-text-stroke");
        assert_eq!(to_css_property("OTransition"), "-o-transition");
    }
}
