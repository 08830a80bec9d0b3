//! Pure form logic for the grid paper generator.
//!
//! Nothing here touches the DOM: the wasm frontend reads a [`FormState`]
//! out of the page, calls into these modules and writes the results back.

pub mod color;
pub mod error;
pub mod filename;
pub mod paper;
pub mod submit;
pub mod visibility;

pub use color::{ColorPair, HexColor, TextSync};
pub use error::FormError;
pub use filename::{FilenameConfig, FilenameSynthesizer, GeneratedFilename, sanitize};
pub use gp_form_types::{FieldId, FormState, NumericField, PaperSizeMode, Section};
pub use submit::{GridRequest, validate};
pub use visibility::SectionVisibility;
