//! One parsing strategy per raw lexicon file format.
//!
//! Every parser treats its file as the unit of atomicity: a read failure or
//! a malformed line aborts the load of that lexicon with an error, never a
//! skip-and-continue. Each parser is idempotent; re-running it on the same
//! file produces an identical table.

mod emotions;
mod keyvalue;
mod ratings;
mod wordlist;

pub use emotions::parse_emotion_lexicon;
pub use keyvalue::{parse_comma_lexicon, parse_tab_lexicon, parse_tab_scores};
pub use ratings::parse_affect_ratings;
pub use wordlist::{parse_word_list, WordListFormat};

use std::path::Path;

use tension_core::{TensionError, TensionResult};

/// Parse one numeric column, converting failure into a fatal record error.
pub(crate) fn parse_number(
    raw: &str,
    file: &Path,
    line: usize,
    column: usize,
) -> TensionResult<f32> {
    raw.parse::<f32>().map_err(|_| TensionError::MalformedRecord {
        file: file.to_path_buf(),
        line,
        reason: format!("column {column} is not a number: {raw:?}"),
    })
}
