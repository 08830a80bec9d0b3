//! Hex colour validation and the picker/text pair synchroniser.
//!
//! A colour text field accepts `#RGB` or `#RRGGBB` in any case. Typed text
//! that does not match is flagged and never rewritten; only the picker side
//! is normalised, because a colour input only holds `#rrggbb`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// A colour that passed hex validation. Stored as the six uppercase digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    digits: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color: {0:?}")]
pub struct InvalidHexColor(pub String);

impl HexColor {
    /// Match `^#([0-9A-F]{3}|[0-9A-F]{6})$`, case-insensitive.
    pub fn parse(text: &str) -> Result<Self, InvalidHexColor> {
        let Some(body) = text.strip_prefix('#') else {
            return Err(InvalidHexColor(text.to_owned()));
        };
        if !matches!(body.len(), 3 | 6) || !body.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidHexColor(text.to_owned()));
        }

        let upper = body.to_ascii_uppercase();
        let digits = if upper.len() == 3 {
            upper.chars().flat_map(|c| [c, c]).collect()
        } else {
            upper
        };
        Ok(Self { digits })
    }

    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    /// Six uppercase digits, no `#`.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// `#RRGGBB`
    pub fn to_hex_upper(&self) -> String {
        format!("#{}", self.digits)
    }

    /// The `#rrggbb` shape a colour input accepts.
    pub fn to_picker_value(&self) -> String {
        format!("#{}", self.digits.to_ascii_lowercase())
    }
}

impl FromStr for HexColor {
    type Err = InvalidHexColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidHexColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_hex_upper()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.digits)
    }
}

/// Outcome of a keystroke in the text half of a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSync {
    Accepted(HexColor),
    Rejected,
}

/// Model of a colour picker and its hex text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPair {
    pub picker: String,
    pub text: String,
    pub invalid: bool,
}

impl ColorPair {
    pub fn new(picker: &str, text: &str) -> Self {
        Self {
            picker: picker.to_owned(),
            text: text.to_owned(),
            invalid: !HexColor::is_valid(text),
        }
    }

    /// The picker always emits a valid colour, so the text is overwritten.
    pub fn on_picker_change(&mut self, new_color: &str) {
        self.picker = new_color.to_owned();
        self.text = new_color.to_uppercase();
        self.invalid = false;
    }

    pub fn on_text_change(&mut self, new_text: &str) -> TextSync {
        self.text = new_text.to_owned();
        match HexColor::parse(new_text) {
            Ok(color) => {
                self.picker = color.to_picker_value();
                self.invalid = false;
                TextSync::Accepted(color)
            }
            Err(err) => {
                debug!(%err, "colour text rejected");
                self.invalid = true;
                TextSync::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_short_and_long_forms() {
        assert_eq!(HexColor::parse("#ab12ff").unwrap().digits(), "AB12FF");
        assert_eq!(HexColor::parse("#FfF").unwrap().digits(), "FFFFFF");
        assert_eq!(HexColor::parse("#a1b").unwrap().to_picker_value(), "#aa11bb");
        assert_eq!(HexColor::parse("#B7C9EE").unwrap().to_hex_upper(), "#B7C9EE");
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "#", "ab12ff", "#ab12f", "#ab12ffa", "#ggg", "#ab 12f", " #abc", "#ＡＢＣ"] {
            assert!(HexColor::parse(text).is_err(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn rejection_message_quotes_the_text() {
        let err = HexColor::parse("#12").unwrap_err();
        assert_eq!(err.to_string(), "invalid hex color: \"#12\"");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn picker_change_overwrites_text_uppercased() {
        let mut pair = ColorPair::new("#000000", "nonsense");
        assert!(pair.invalid);
        pair.on_picker_change("#b7c9ee");
        assert_eq!(pair.text, "#B7C9EE");
        assert_eq!(pair.picker, "#b7c9ee");
        assert!(!pair.invalid);
    }

    #[test]
    fn invalid_text_leaves_picker_alone() {
        let mut pair = ColorPair::new("#b7c9ee", "#B7C9EE");
        assert_eq!(pair.on_text_change("#B7C9E"), TextSync::Rejected);
        assert_eq!(pair.picker, "#b7c9ee");
        assert_eq!(pair.text, "#B7C9E");
        assert!(pair.invalid);

        assert!(matches!(pair.on_text_change("#B7C9EF"), TextSync::Accepted(_)));
        assert_eq!(pair.picker, "#b7c9ef");
        assert!(!pair.invalid);
    }

    #[test]
    fn serde_uses_hex_string() {
        let color: HexColor = serde_json::from_str("\"#abc\"").unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#AABBCC\"");
        assert!(serde_json::from_str::<HexColor>("\"abc\"").is_err());
    }

    proptest! {
        #[test]
        fn valid_hex_updates_picker_and_clears_marker(text in "#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})") {
            let mut pair = ColorPair::new("#000000", "bad");
            let outcome = pair.on_text_change(&text);
            prop_assert!(matches!(outcome, TextSync::Accepted(_)));
            prop_assert!(!pair.invalid);
            prop_assert_eq!(pair.picker.len(), 7);
            prop_assert_eq!(pair.picker.to_ascii_uppercase(), HexColor::parse(&text).unwrap().to_hex_upper());
        }

        #[test]
        fn non_matching_text_sets_marker(text in "\\PC*") {
            let body = text.strip_prefix('#');
            let matches = body.is_some_and(|b| {
                matches!(b.len(), 3 | 6) && b.chars().all(|c| c.is_ascii_hexdigit())
            });
            prop_assume!(!matches);

            let mut pair = ColorPair::new("#123456", "#123456");
            prop_assert_eq!(pair.on_text_change(&text), TextSync::Rejected);
            prop_assert_eq!(pair.picker.as_str(), "#123456");
            prop_assert!(pair.invalid);
        }
    }
}
