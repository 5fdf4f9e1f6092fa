//! Multi-emotion tab parser (header row skipped).
//!
//! The published word-level files carry ten tab-separated columns per row;
//! the six labels this pipeline consumes sit at the non-contiguous columns
//! 1, 3, 4, 5, 8, 9 (anger, disgust, fear, joy, sadness, surprise). That
//! exact selection is load-bearing: the skipped columns are labels the
//! downstream feature extractor does not use.

use std::fs;
use std::path::Path;

use tension_core::{EmotionVector, TensionError, TensionResult};

use super::parse_number;
use crate::table::LexiconTable;

const ANGER_COLUMN: usize = 1;
const DISGUST_COLUMN: usize = 3;
const FEAR_COLUMN: usize = 4;
const JOY_COLUMN: usize = 5;
const SADNESS_COLUMN: usize = 8;
const SURPRISE_COLUMN: usize = 9;
const MIN_COLUMNS: usize = 10;

/// Parse a tab-separated multi-emotion lexicon.
///
/// With `strip_hash`, one leading `#` is removed from each key before
/// insertion, so hashtag-authored entries are queried by their bare word.
/// Duplicate keys keep their first occurrence.
///
/// # Errors
///
/// Returns [`TensionError::MalformedRecord`] on the first row with too few
/// columns or a non-numeric intensity; the whole load aborts.
pub fn parse_emotion_lexicon(
    path: &Path,
    name: &'static str,
    strip_hash: bool,
) -> TensionResult<LexiconTable<EmotionVector>> {
    let content = fs::read_to_string(path)?;
    let mut table = LexiconTable::new(name);

    for (idx, raw_line) in content.lines().enumerate() {
        if idx == 0 {
            // Header row.
            continue;
        }
        let line = idx + 1;
        let columns: Vec<&str> = raw_line.trim().split('\t').collect();

        if columns.len() < MIN_COLUMNS {
            return Err(TensionError::MalformedRecord {
                file: path.to_path_buf(),
                line,
                reason: format!(
                    "expected at least {MIN_COLUMNS} tab-separated columns, got {}",
                    columns.len()
                ),
            });
        }

        let word = if strip_hash {
            columns[0].strip_prefix('#').unwrap_or(columns[0])
        } else {
            columns[0]
        };

        let vector = EmotionVector {
            anger: parse_number(columns[ANGER_COLUMN], path, line, ANGER_COLUMN)?,
            disgust: parse_number(columns[DISGUST_COLUMN], path, line, DISGUST_COLUMN)?,
            fear: parse_number(columns[FEAR_COLUMN], path, line, FEAR_COLUMN)?,
            joy: parse_number(columns[JOY_COLUMN], path, line, JOY_COLUMN)?,
            sadness: parse_number(columns[SADNESS_COLUMN], path, line, SADNESS_COLUMN)?,
            surprise: parse_number(columns[SURPRISE_COLUMN], path, line, SURPRISE_COLUMN)?,
        };
        table.insert_first_wins(word.to_string(), vector);
    }

    Ok(table)
}
