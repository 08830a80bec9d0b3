//! Predefined/custom section toggle.
//!
//! Two states, switched only by an explicit mode change. The predefined
//! section is shown for `"predefined"`; every other selector value falls
//! through to the custom section, so exactly one section is ever visible.

use gp_form_types::{PaperSizeMode, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    pub predefined: bool,
    pub custom: bool,
}

impl SectionVisibility {
    pub fn for_mode(raw_mode: &str) -> Self {
        Self::showing(Self::section_for(raw_mode))
    }

    pub fn section_for(raw_mode: &str) -> Section {
        match PaperSizeMode::from_field(raw_mode) {
            Some(PaperSizeMode::Predefined) => Section::Predefined,
            _ => Section::Custom,
        }
    }

    pub fn showing(section: Section) -> Self {
        Self {
            predefined: section == Section::Predefined,
            custom: section == Section::Custom,
        }
    }

    pub fn visible(&self) -> Section {
        if self.predefined { Section::Predefined } else { Section::Custom }
    }
}
