//! Whole-form validation before the form is handed to the generator.
//!
//! Every rule is checked so the user sees all problems at once.

use crate::color::HexColor;
use crate::error::FormError;
use crate::paper;
use gp_form_types::{FormState, NumericField, PaperSizeMode};
use serde::Serialize;
use tracing::warn;

/// A validated generation request, dimensions in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRequest {
    pub width_mm: f64,
    pub height_mm: f64,
    pub grid_size_mm: f64,
    pub grid_color: HexColor,
    pub background_color: HexColor,
    pub line_thickness_pt: f64,
    pub output_filename: String,
}

pub fn validate(state: &FormState, output_filename: &str) -> Result<GridRequest, Vec<FormError>> {
    let mut errors = Vec::new();

    let dimensions = match state.paper_size_mode {
        Some(PaperSizeMode::Predefined) => match paper::lookup(&state.predefined_size) {
            Some(size) => Some((size.width_mm, size.height_mm)),
            None => {
                errors.push(FormError::UnsupportedPaperSize(state.predefined_size.clone()));
                None
            }
        },
        Some(PaperSizeMode::Custom) => {
            match (state.custom_width_cm.value(), state.custom_height_cm.value()) {
                (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Some((w * 10.0, h * 10.0)),
                (Some(_), Some(_)) => {
                    errors.push(FormError::CustomSizeNotPositive);
                    None
                }
                _ => {
                    errors.push(FormError::CustomSizeNotANumber);
                    None
                }
            }
        }
        None => {
            errors.push(FormError::InvalidPaperSizeOption);
            None
        }
    };

    let grid_size_mm = positive(
        &state.grid_size_mm,
        FormError::GridSizeNotANumber,
        FormError::GridSizeNotPositive,
        &mut errors,
    );

    let grid_color = HexColor::parse(&state.grid_color)
        .map_err(|err| errors.push(FormError::InvalidGridColor(err.0)))
        .ok();
    let background_color = HexColor::parse(&state.background_color)
        .map_err(|err| errors.push(FormError::InvalidBackgroundColor(err.0)))
        .ok();

    let line_thickness_pt = positive(
        &state.line_thickness_pt,
        FormError::LineThicknessNotANumber,
        FormError::LineThicknessNotPositive,
        &mut errors,
    );

    let output_filename = normalize_output_filename(output_filename);
    if output_filename.is_none() {
        errors.push(FormError::EmptyOutputFilename);
    }

    match (dimensions, grid_size_mm, grid_color, background_color, line_thickness_pt, output_filename) {
        (
            Some((width_mm, height_mm)),
            Some(grid_size_mm),
            Some(grid_color),
            Some(background_color),
            Some(line_thickness_pt),
            Some(output_filename),
        ) if errors.is_empty() => Ok(GridRequest {
            width_mm,
            height_mm,
            grid_size_mm,
            grid_color,
            background_color,
            line_thickness_pt,
            output_filename,
        }),
        _ => {
            warn!(count = errors.len(), "grid form rejected");
            Err(errors)
        }
    }
}

/// Trim, reject blank, and make sure the name ends in `.pdf`.
pub fn normalize_output_filename(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.to_ascii_lowercase().ends_with(".pdf") {
        Some(trimmed.to_owned())
    } else {
        Some(format!("{trimmed}.pdf"))
    }
}

fn positive(
    field: &NumericField,
    not_a_number: FormError,
    not_positive: FormError,
    errors: &mut Vec<FormError>,
) -> Option<f64> {
    match field.value() {
        Some(value) if value > 0.0 => Some(value),
        Some(_) => {
            errors.push(not_positive);
            None
        }
        None => {
            errors.push(not_a_number);
            None
        }
    }
}
