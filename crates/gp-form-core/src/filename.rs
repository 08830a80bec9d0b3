//! Output filename synthesis.
//!
//! The filename summarises the grid parameters, e.g.
//! `21x29.7cm_grid_5mm_AB12FF_bgFFFFFF_0.5pt.pdf`. Generation never fails:
//! blank or malformed inputs produce empty or partial segments, and the
//! final [`sanitize`] pass guarantees the `[A-Za-z0-9_.-]` charset.

use gp_form_types::{FormState, NumericField, PaperSizeMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const UNKNOWN_SIZE: &str = "UnknownSize";
const SEPARATOR: &str = "_";
const EXTENSION: &str = ".pdf";

/// Which revision of the naming scheme to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilenameConfig {
    pub include_background_color: bool,
    pub round_grid_size: bool,
    pub round_custom_dimensions: bool,
}

impl Default for FilenameConfig {
    fn default() -> Self {
        Self {
            include_background_color: true,
            round_grid_size: true,
            round_custom_dimensions: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratedFilename(String);

impl GeneratedFilename {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratedFilename {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FilenameSynthesizer {
    config: FilenameConfig,
}

impl FilenameSynthesizer {
    pub fn new(config: FilenameConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self, state: &FormState) -> GeneratedFilename {
        let mut segments = vec![
            self.size_segment(state),
            "grid".to_owned(),
            format!("{}mm", self.number(&state.grid_size_mm, self.config.round_grid_size)),
            color_segment(&state.grid_color),
        ];
        if self.config.include_background_color {
            segments.push(format!("bg{}", color_segment(&state.background_color)));
        }
        segments.push(format!("{}pt", state.line_thickness_pt.raw()));

        let candidate = format!("{}{EXTENSION}", segments.join(SEPARATOR));
        let filename = sanitize(&candidate);
        debug!(%candidate, %filename, "generated output filename");
        GeneratedFilename(filename)
    }

    fn size_segment(&self, state: &FormState) -> String {
        match state.paper_size_mode {
            Some(PaperSizeMode::Predefined) => state.predefined_size.clone(),
            Some(PaperSizeMode::Custom) => {
                let round = self.config.round_custom_dimensions;
                format!(
                    "{}x{}cm",
                    self.number(&state.custom_width_cm, round),
                    self.number(&state.custom_height_cm, round)
                )
            }
            None => UNKNOWN_SIZE.to_owned(),
        }
    }

    fn number(&self, field: &NumericField, round: bool) -> String {
        match field.value() {
            Some(value) if round => {
                let rounded = js_round(value);
                // -0.0 would print as "-0"
                format!("{}", if rounded == 0.0 { 0.0 } else { rounded })
            }
            _ => field.raw().to_owned(),
        }
    }
}

/// Round half up (towards positive infinity), as `Math.round` does.
pub fn js_round(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

fn color_segment(raw: &str) -> String {
    raw.strip_prefix('#').unwrap_or(raw).to_uppercase()
}

/// Collapse whitespace runs to `_`, then drop anything outside `[A-Za-z0-9_.-]`.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_whitespace = false;
    for c in input.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if is_filename_safe(c) {
            out.push(c);
        }
    }
    out
}

fn is_filename_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn custom_example() -> FormState {
        FormState::custom("21", "29.7").with_grid("5.4", "#ab12ff", "#FFFFFF", "0.5")
    }

    fn matches_contract(name: &str) -> bool {
        name.len() > EXTENSION.len() && name.ends_with(EXTENSION) && name.chars().all(is_filename_safe)
    }

    #[test]
    fn custom_size_example() {
        init_tracing();
        let name = FilenameSynthesizer::default().generate(&custom_example());
        assert_eq!(name.as_str(), "21x29.7cm_grid_5mm_AB12FF_bgFFFFFF_0.5pt.pdf");
    }

    #[test]
    fn predefined_size_prefix() {
        let state = FormState::predefined("A4").with_grid(10.0, "#B7C9EE", "#FFFFFF", 0.3);
        let name = FilenameSynthesizer::default().generate(&state);
        assert!(name.as_str().starts_with("A4_grid_10mm_"), "{name}");
        assert_eq!(name.as_str(), "A4_grid_10mm_B7C9EE_bgFFFFFF_0.3pt.pdf");
    }

    #[test]
    fn without_background_segment() {
        let config = FilenameConfig {
            include_background_color: false,
            ..FilenameConfig::default()
        };
        let name = FilenameSynthesizer::new(config).generate(&custom_example());
        assert_eq!(name.as_str(), "21x29.7cm_grid_5mm_AB12FF_0.5pt.pdf");
    }

    #[test]
    fn rounding_is_configurable() {
        let config = FilenameConfig {
            round_grid_size: false,
            round_custom_dimensions: true,
            ..FilenameConfig::default()
        };
        let name = FilenameSynthesizer::new(config).generate(&custom_example());
        assert_eq!(name.as_str(), "21x30cm_grid_5.4mm_AB12FF_bgFFFFFF_0.5pt.pdf");
    }

    #[test]
    fn unknown_mode_uses_fallback_literal() {
        let mut state = custom_example();
        state.paper_size_mode = None;
        let name = FilenameSynthesizer::default().generate(&state);
        assert!(name.as_str().starts_with("UnknownSize_grid_"), "{name}");
    }

    #[test]
    fn blank_inputs_degrade_to_empty_segments() {
        let name = FilenameSynthesizer::default().generate(&FormState::predefined(""));
        assert_eq!(name.as_str(), "_grid_mm__bg_pt.pdf");
        assert!(matches_contract(name.as_str()));
    }

    #[test]
    fn unparsable_grid_size_keeps_raw_text() {
        let state = FormState::predefined("A5").with_grid("ten", "#000", "#fff", "1");
        let name = FilenameSynthesizer::default().generate(&state);
        assert_eq!(name.as_str(), "A5_grid_tenmm_000_bgFFF_1pt.pdf");
    }

    #[test]
    fn unsafe_characters_are_removed() {
        let state = FormState::predefined("My  Size/2").with_grid("4", "#a b", "#FFF", "0.5");
        let name = FilenameSynthesizer::default().generate(&state);
        assert_eq!(name.as_str(), "My_Size2_grid_4mm_A_B_bgFFF_0.5pt.pdf");
    }

    #[test]
    fn large_grid_size_is_not_clamped() {
        let state = FormState::predefined("A4").with_grid("1e20", "#000", "#fff", "1");
        let name = FilenameSynthesizer::default().generate(&state);
        assert_eq!(name.as_str(), "A4_grid_100000000000000000000mm_000_bgFFF_1pt.pdf");
    }

    #[test]
    fn negative_zero_grid_size_prints_plain_zero() {
        let state = FormState::predefined("A4").with_grid("-0", "#000", "#fff", "1");
        let name = FilenameSynthesizer::default().generate(&state);
        assert!(name.as_str().starts_with("A4_grid_0mm_"), "{name}");
    }

    #[test]
    fn field_text_is_used_verbatim() {
        let state = FormState::predefined("A4").with_grid("5", " #abc", "#fff", " 0.5");
        let name = FilenameSynthesizer::default().generate(&state);
        assert_eq!(name.as_str(), "A4_grid_5mm__ABC_bgFFF__0.5pt.pdf");
    }

    #[test]
    fn js_round_matches_math_round() {
        assert_eq!(js_round(5.4), 5.0);
        assert_eq!(js_round(5.5), 6.0);
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(-2.6), -3.0);
        assert_eq!(js_round(0.49999999999999994), 0.0);
    }

    #[test]
    fn sanitize_collapses_whitespace_runs() {
        assert_eq!(sanitize("a \t\n b"), "a_b");
        assert_eq!(sanitize(" lead"), "_lead");
        assert_eq!(sanitize("a#b$c.pdf"), "abc.pdf");
        assert_eq!(sanitize("déjà vu"), "dj_vu");
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: FilenameConfig =
            serde_json::from_str(r#"{"include_background_color":false}"#).unwrap();
        assert!(!config.include_background_color);
        assert!(config.round_grid_size);
        assert!(!config.round_custom_dimensions);
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(input in "\\PC*") {
            let once = sanitize(&input);
            prop_assert_eq!(sanitize(&once), once.clone());
            prop_assert!(once.chars().all(is_filename_safe));
        }

        #[test]
        fn generated_names_match_contract(
            size in ".*",
            width in ".*",
            grid in ".*",
            color in ".*",
            thickness in ".*",
            custom in any::<bool>(),
            background in any::<bool>(),
        ) {
            let mut state = if custom {
                FormState::custom(width.as_str(), "10")
            } else {
                FormState::predefined(&size)
            };
            state = state.with_grid(grid.as_str(), &color, &color, thickness.as_str());
            let config = FilenameConfig { include_background_color: background, ..FilenameConfig::default() };
            let name = FilenameSynthesizer::new(config).generate(&state);
            prop_assert!(matches_contract(name.as_str()), "{}", name);
        }
    }
}
