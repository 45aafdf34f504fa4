//! Delimited-text import for the collection editor.
//!
//! The first row is treated as a header when its cells include both `front`
//! and `back` (case and surrounding whitespace ignored). Otherwise every row is
//! data and the first two columns are taken as front and back.

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use flash_core::model::Card;

use crate::error::ImportError;

/// Cards recovered from an import plus how many rows were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub cards: Vec<Card>,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    front: usize,
    back: usize,
}

impl Columns {
    const POSITIONAL: Self = Self { front: 0, back: 1 };

    fn from_header(header: &StringRecord) -> Option<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|cell| cell.trim().eq_ignore_ascii_case(name))
        };
        Some(Self {
            front: find("front")?,
            back: find("back")?,
        })
    }

    fn card(self, record: &StringRecord) -> Option<Card> {
        let cell = |index: usize| record.get(index).unwrap_or("");
        Card::from_fields(cell(self.front), cell(self.back))
    }
}

/// Parse comma-separated text into cards.
///
/// Blank lines are skipped, rows may have any number of cells, and rows whose
/// front or back is blank after trimming are dropped and counted.
///
/// # Errors
///
/// Returns `ImportError::Malformed` when the text is not valid delimited data
/// (for example invalid UTF-8 inside a quoted field).
pub fn parse_cards(text: &str) -> Result<ImportReport, ImportError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header = reader.headers()?.clone();
    let columns = match Columns::from_header(&header) {
        Some(columns) => columns,
        None => {
            reader = ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(text.as_bytes());
            Columns::POSITIONAL
        }
    };

    let mut report = ImportReport::default();
    for record in reader.records() {
        let record = record?;
        match columns.card(&record) {
            Some(card) => report.cards.push(card),
            None => report.skipped += 1,
        }
    }
    debug!(
        cards = report.cards.len(),
        skipped = report.skipped,
        "parsed import"
    );
    Ok(report)
}
