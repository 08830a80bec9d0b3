use thiserror::Error;

/// A single rejected form value. Validation collects all of them at once.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("Selected predefined paper size is not supported.")]
    UnsupportedPaperSize(String),

    #[error("Custom paper dimensions must be valid numbers.")]
    CustomSizeNotANumber,

    #[error("Custom paper dimensions must be positive numbers.")]
    CustomSizeNotPositive,

    #[error("Invalid paper size option selected.")]
    InvalidPaperSizeOption,

    #[error("Grid size must be a valid number.")]
    GridSizeNotANumber,

    #[error("Grid size must be a positive number.")]
    GridSizeNotPositive,

    #[error("Invalid hex color code for Grid Color.")]
    InvalidGridColor(String),

    #[error("Invalid hex color code for Background Color.")]
    InvalidBackgroundColor(String),

    #[error("Line thickness must be a valid number.")]
    LineThicknessNotANumber,

    #[error("Line thickness must be a positive number.")]
    LineThicknessNotPositive,

    #[error("Output filename cannot be empty.")]
    EmptyOutputFilename,
}
