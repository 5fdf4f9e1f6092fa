//! Key-value parsers for headerless two-column lexicons.
//!
//! Two separators exist in the wild here: tab (polarity and intensity
//! sources) and comma (slang and negation expansions). The comma variant
//! splits only at the FIRST comma because expansion targets may themselves
//! contain commas.

use std::fs;
use std::path::Path;

use tension_core::{TensionError, TensionResult};

use super::parse_number;
use crate::normalize::ScaleRange;
use crate::table::LexiconTable;

/// Parse a tab-separated word -> value-string lexicon.
pub fn parse_tab_lexicon(path: &Path, name: &'static str) -> TensionResult<LexiconTable<String>> {
    let content = fs::read_to_string(path)?;
    let mut table = LexiconTable::new(name);

    for (idx, raw_line) in content.lines().enumerate() {
        let line = idx + 1;
        let (word, value) = split_tab(raw_line.trim(), path, line)?;
        table.insert_first_wins(word.to_string(), value.to_string());
    }

    Ok(table)
}

/// Parse a tab-separated word -> score lexicon, rescaling each score from
/// its native range onto [0,1].
pub fn parse_tab_scores(
    path: &Path,
    name: &'static str,
    scale: ScaleRange,
) -> TensionResult<LexiconTable<f32>> {
    let content = fs::read_to_string(path)?;
    let mut table = LexiconTable::new(name);

    for (idx, raw_line) in content.lines().enumerate() {
        let line = idx + 1;
        let (word, value) = split_tab(raw_line.trim(), path, line)?;
        let score = parse_number(value, path, line, 1)?;
        table.insert_first_wins(word.to_string(), scale.normalize(score));
    }

    Ok(table)
}

/// Parse a comma-separated word -> expansion lexicon, splitting only at the
/// first comma so the expansion keeps any embedded commas.
pub fn parse_comma_lexicon(path: &Path, name: &'static str) -> TensionResult<LexiconTable<String>> {
    let content = fs::read_to_string(path)?;
    let mut table = LexiconTable::new(name);

    for (idx, raw_line) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw_line.trim();
        let (word, value) = trimmed.split_once(',').ok_or_else(|| {
            TensionError::MalformedRecord {
                file: path.to_path_buf(),
                line,
                reason: "missing ',' separator".to_string(),
            }
        })?;
        table.insert_first_wins(word.to_string(), value.to_string());
    }

    Ok(table)
}

fn split_tab<'a>(line: &'a str, path: &Path, line_no: usize) -> TensionResult<(&'a str, &'a str)> {
    line.split_once('\t').ok_or_else(|| TensionError::MalformedRecord {
        file: path.to_path_buf(),
        line: line_no,
        reason: "missing tab separator".to_string(),
    })
}
