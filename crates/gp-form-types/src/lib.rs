use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaperSizeMode {
    Predefined,
    Custom,
}

impl PaperSizeMode {
    /// Parse the mode selector's value. Anything but the two known values is unrecognised.
    pub fn from_field(raw: &str) -> Option<Self> {
        match raw.trim() {
            "predefined" => Some(Self::Predefined),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Raw text of a numeric input. Parsing is deferred so the original text can
/// be reproduced verbatim; surrounding whitespace only matters to `value()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NumericField(pub String);

impl NumericField {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The text exactly as entered.
    pub fn raw(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> Option<f64> {
        self.0.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl From<&str> for NumericField {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

/// Snapshot of the grid form, rebuilt from the page on every event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub paper_size_mode: Option<PaperSizeMode>,
    pub predefined_size: String,
    pub custom_width_cm: NumericField,
    pub custom_height_cm: NumericField,
    pub grid_size_mm: NumericField,
    pub grid_color: String,
    pub background_color: String,
    pub line_thickness_pt: NumericField,
}

impl FormState {
    pub fn predefined(name: &str) -> Self {
        Self {
            paper_size_mode: Some(PaperSizeMode::Predefined),
            predefined_size: name.to_owned(),
            ..Self::default()
        }
    }

    pub fn custom(width_cm: impl Into<NumericField>, height_cm: impl Into<NumericField>) -> Self {
        Self {
            paper_size_mode: Some(PaperSizeMode::Custom),
            custom_width_cm: width_cm.into(),
            custom_height_cm: height_cm.into(),
            ..Self::default()
        }
    }

    pub fn with_grid(
        mut self,
        grid_size_mm: impl Into<NumericField>,
        grid_color: &str,
        background_color: &str,
        line_thickness_pt: impl Into<NumericField>,
    ) -> Self {
        self.grid_size_mm = grid_size_mm.into();
        self.grid_color = grid_color.to_owned();
        self.background_color = background_color.to_owned();
        self.line_thickness_pt = line_thickness_pt.into();
        self
    }
}

/// One of the two mutually exclusive size sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Predefined,
    Custom,
}

impl Section {
    pub fn dom_id(&self) -> &'static str {
        match self {
            Self::Predefined => "predefined_size_div",
            Self::Custom => "custom_size_div",
        }
    }
}

/// Element ids shared with the page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    PaperSizeOption,
    PredefinedSize,
    CustomWidthCm,
    CustomHeightCm,
    GridSizeMm,
    GridColorPicker,
    GridColorText,
    BackgroundColorPicker,
    BackgroundColorText,
    LineThickness,
    OutputFilename,
    GenerateFilename,
    GridForm,
    FormErrors,
}

impl FieldId {
    pub const ALL: [FieldId; 14] = [
        FieldId::PaperSizeOption,
        FieldId::PredefinedSize,
        FieldId::CustomWidthCm,
        FieldId::CustomHeightCm,
        FieldId::GridSizeMm,
        FieldId::GridColorPicker,
        FieldId::GridColorText,
        FieldId::BackgroundColorPicker,
        FieldId::BackgroundColorText,
        FieldId::LineThickness,
        FieldId::OutputFilename,
        FieldId::GenerateFilename,
        FieldId::GridForm,
        FieldId::FormErrors,
    ];

    pub fn dom_id(&self) -> &'static str {
        match self {
            Self::PaperSizeOption => "paper_size_option",
            Self::PredefinedSize => "predefined_size",
            Self::CustomWidthCm => "custom_width_cm",
            Self::CustomHeightCm => "custom_height_cm",
            Self::GridSizeMm => "grid_size_mm",
            Self::GridColorPicker => "grid_color_picker",
            Self::GridColorText => "grid_color_text",
            Self::BackgroundColorPicker => "background_color_picker",
            Self::BackgroundColorText => "background_color_text",
            Self::LineThickness => "line_thickness",
            Self::OutputFilename => "output_filename",
            Self::GenerateFilename => "generate_filename",
            Self::GridForm => "grid_form",
            Self::FormErrors => "form_errors",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mode_parses_known_values_only() {
        assert_eq!(PaperSizeMode::from_field("predefined"), Some(PaperSizeMode::Predefined));
        assert_eq!(PaperSizeMode::from_field(" custom "), Some(PaperSizeMode::Custom));
        assert_eq!(PaperSizeMode::from_field("Custom"), None);
        assert_eq!(PaperSizeMode::from_field(""), None);
    }

    #[test]
    fn numeric_field_keeps_raw_text() {
        let field = NumericField::new(" 0.50 ");
        assert_eq!(field.raw(), " 0.50 ");
        assert_eq!(field.value(), Some(0.5));
        assert_eq!(field.to_string(), " 0.50 ");
        assert_eq!(NumericField::new("abc").value(), None);
        assert_eq!(NumericField::new("inf").value(), None);
        assert_eq!(NumericField::new("  ").value(), None);
    }

    #[test]
    fn form_state_deserializes_with_missing_fields() {
        let state: FormState =
            serde_json::from_str(r#"{"paperSizeMode":"custom","customWidthCm":"21"}"#).unwrap();
        assert_eq!(state.paper_size_mode, Some(PaperSizeMode::Custom));
        assert_eq!(state.custom_width_cm.raw(), "21");
        assert!(state.grid_color.is_empty());
    }

    #[test]
    fn field_ids_are_unique() {
        let ids: HashSet<_> = FieldId::ALL.iter().map(FieldId::dom_id).collect();
        assert_eq!(ids.len(), FieldId::ALL.len());
    }
}
