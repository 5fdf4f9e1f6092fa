//! Flat word-list parser (one term per line).
//!
//! Comment and blank-line handling is a property of each specific source
//! file, not a general rule, and the per-source asymmetry is preserved
//! exactly:
//!
//! - stopwords, emoticons: no comment convention, blank lines kept
//! - booster words, cues: `#` lines excluded, blank lines kept
//! - hedge words, discourse markers: `#` lines excluded, blank lines skipped

use std::fs;
use std::path::Path;

use tension_core::TensionResult;

use crate::table::WordList;

/// Per-source flat-list format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordListFormat {
    /// Exclude any line containing a `#` character anywhere.
    pub filter_comment_lines: bool,
    /// Drop lines that are empty after trimming.
    pub skip_blank_lines: bool,
}

impl WordListFormat {
    /// Stopword and emoticon lists: every line is a term.
    pub const PLAIN: WordListFormat = WordListFormat {
        filter_comment_lines: false,
        skip_blank_lines: false,
    };

    /// Booster and cue lists: comment lines excluded, blanks kept.
    pub const COMMENTED: WordListFormat = WordListFormat {
        filter_comment_lines: true,
        skip_blank_lines: false,
    };

    /// Hedge and discourse-marker lists: comment lines excluded, blanks
    /// skipped.
    pub const COMMENTED_COMPACT: WordListFormat = WordListFormat {
        filter_comment_lines: true,
        skip_blank_lines: true,
    };
}

/// Parse a flat word list under the given per-source format.
pub fn parse_word_list(
    path: &Path,
    name: &'static str,
    format: WordListFormat,
) -> TensionResult<WordList> {
    let content = fs::read_to_string(path)?;
    let mut terms = Vec::new();

    for raw_line in content.lines() {
        if format.filter_comment_lines && raw_line.contains('#') {
            continue;
        }
        let term = raw_line.trim();
        if format.skip_blank_lines && term.is_empty() {
            continue;
        }
        terms.push(term.to_string());
    }

    Ok(WordList::from_terms(name, terms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_list(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_commented_format_excludes_hash_lines() {
        let file = write_list("# intensity boosters\nabsolutely\nvery # inline note\ntotally\n");
        let list = parse_word_list(file.path(), "boosters", WordListFormat::COMMENTED).unwrap();
        assert_eq!(list.terms(), ["absolutely", "totally"]);
    }

    #[test]
    fn test_plain_format_keeps_hash_lines() {
        // Emoticon sources legitimately contain '#'; nothing is filtered.
        let file = write_list(":)\n#)\n:-(\n");
        let list = parse_word_list(file.path(), "emoticons", WordListFormat::PLAIN).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("#)"));
    }

    #[test]
    fn test_blank_lines_kept_unless_compact() {
        let content = "first\n\nsecond\n";

        let file = write_list(content);
        let kept = parse_word_list(file.path(), "cues", WordListFormat::COMMENTED).unwrap();
        assert_eq!(kept.terms(), ["first", "", "second"]);

        let file = write_list(content);
        let compact =
            parse_word_list(file.path(), "hedge_words", WordListFormat::COMMENTED_COMPACT)
                .unwrap();
        assert_eq!(compact.terms(), ["first", "second"]);
    }

    #[test]
    fn test_terms_are_trimmed() {
        let file = write_list("  maybe  \nperhaps\n");
        let list =
            parse_word_list(file.path(), "hedge_words", WordListFormat::COMMENTED_COMPACT)
                .unwrap();
        assert_eq!(list.terms(), ["maybe", "perhaps"]);
    }
}
