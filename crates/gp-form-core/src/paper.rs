//! Named paper sizes offered in the predefined-size selector.

use serde::Serialize;

const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaperSize {
    pub name: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PaperSize {
    const fn mm(name: &'static str, width_mm: f64, height_mm: f64) -> Self {
        Self { name, width_mm, height_mm }
    }

    const fn inches(name: &'static str, width_in: f64, height_in: f64) -> Self {
        Self::mm(name, width_in * MM_PER_INCH, height_in * MM_PER_INCH)
    }
}

pub const PAPER_SIZES: &[PaperSize] = &[
    PaperSize::mm("A0", 841.0, 1189.0),
    PaperSize::mm("A1", 594.0, 841.0),
    PaperSize::mm("A2", 420.0, 594.0),
    PaperSize::mm("A3", 297.0, 420.0),
    PaperSize::mm("A4", 210.0, 297.0),
    PaperSize::mm("A5", 148.0, 210.0),
    PaperSize::mm("A6", 105.0, 148.0),
    PaperSize::mm("A7", 74.0, 105.0),
    PaperSize::mm("A8", 52.0, 74.0),
    PaperSize::mm("A9", 37.0, 52.0),
    PaperSize::mm("A10", 26.0, 37.0),
    PaperSize::mm("B0", 1000.0, 1414.0),
    PaperSize::mm("B1", 707.0, 1000.0),
    PaperSize::mm("B2", 500.0, 707.0),
    PaperSize::mm("B3", 353.0, 500.0),
    PaperSize::mm("B4", 250.0, 353.0),
    PaperSize::mm("B5", 176.0, 250.0),
    PaperSize::mm("B6", 125.0, 176.0),
    PaperSize::mm("B7", 88.0, 125.0),
    PaperSize::mm("B8", 62.0, 88.0),
    PaperSize::mm("B9", 44.0, 62.0),
    PaperSize::mm("B10", 31.0, 44.0),
    PaperSize::mm("C0", 917.0, 1297.0),
    PaperSize::mm("C1", 648.0, 917.0),
    PaperSize::mm("C2", 458.0, 648.0),
    PaperSize::mm("C3", 324.0, 458.0),
    PaperSize::mm("C4", 229.0, 324.0),
    PaperSize::mm("C5", 162.0, 229.0),
    PaperSize::mm("C6", 114.0, 162.0),
    PaperSize::mm("C7", 81.0, 114.0),
    PaperSize::mm("C8", 57.0, 81.0),
    PaperSize::mm("C9", 40.0, 57.0),
    PaperSize::mm("C10", 28.0, 40.0),
    PaperSize::inches("LETTER", 8.5, 11.0),
    PaperSize::inches("LEGAL", 8.5, 14.0),
    PaperSize::inches("ELEVENSEVENTEEN", 11.0, 17.0),
    PaperSize::inches("JUNIOR_LEGAL", 5.0, 8.0),
    PaperSize::inches("HALF_LETTER", 5.5, 8.0),
    PaperSize::inches("GOV_LETTER", 8.0, 10.5),
    PaperSize::inches("GOV_LEGAL", 8.5, 13.0),
    PaperSize::inches("TABLOID", 11.0, 17.0),
    PaperSize::inches("LEDGER", 17.0, 11.0),
];

pub fn lookup(name: &str) -> Option<&'static PaperSize> {
    PAPER_SIZES.iter().find(|size| size.name == name)
}

/// Names in the order the selector lists them.
pub fn sorted_names() -> Vec<&'static str> {
    let mut names: Vec<_> = PAPER_SIZES.iter().map(|size| size.name).collect();
    names.sort_unstable();
    names
}
