//! Dimensional-ratings parser (CSV with a header row).
//!
//! Each row carries a word plus valence/arousal/dominance means on the
//! source's native 1-9 scale; the three dimensions sit in columns 2, 5, and
//! 8 of the published file. Values are normalized onto [0,1] as they are
//! read.

use std::fs::File;
use std::path::Path;

use tension_core::{AffectRating, TensionError, TensionResult};

use super::parse_number;
use crate::normalize::ScaleRange;
use crate::table::LexiconTable;

const WORD_COLUMN: usize = 1;
const VALENCE_COLUMN: usize = 2;
const AROUSAL_COLUMN: usize = 5;
const DOMINANCE_COLUMN: usize = 8;
const MIN_COLUMNS: usize = 9;

/// Parse a dimensional-ratings CSV into a normalized affect table.
///
/// # Errors
///
/// Returns [`TensionError::MalformedRecord`] for any row with fewer than the
/// required column count or a non-numeric rating; the whole load aborts on
/// the first such row.
pub fn parse_affect_ratings(path: &Path) -> TensionResult<LexiconTable<AffectRating>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut table = LexiconTable::new("affect_ratings");
    let scale = ScaleRange::AFFECT_RATINGS;

    for (idx, record) in reader.records().enumerate() {
        // Header occupies line 1; data rows start at line 2.
        let line = idx + 2;
        let record = record.map_err(|e| TensionError::MalformedRecord {
            file: path.to_path_buf(),
            line,
            reason: e.to_string(),
        })?;

        if record.len() < MIN_COLUMNS {
            return Err(TensionError::MalformedRecord {
                file: path.to_path_buf(),
                line,
                reason: format!(
                    "expected at least {MIN_COLUMNS} columns, got {}",
                    record.len()
                ),
            });
        }

        let word = record[WORD_COLUMN].to_string();
        let rating = AffectRating {
            valence: scale.normalize(parse_number(&record[VALENCE_COLUMN], path, line, VALENCE_COLUMN)?),
            arousal: scale.normalize(parse_number(&record[AROUSAL_COLUMN], path, line, AROUSAL_COLUMN)?),
            dominance: scale.normalize(parse_number(
                &record[DOMINANCE_COLUMN],
                path,
                line,
                DOMINANCE_COLUMN,
            )?),
        };
        table.insert_first_wins(word, rating);
    }

    Ok(table)
}
