//! Merge policy for multiple sources feeding one logical lexicon.

use crate::table::LexiconTable;

/// Fold several source tables into one under first-source-wins precedence.
///
/// Sources are processed in their declared order; a key is inserted only if
/// no earlier source already claimed it, so the earlier source is
/// authoritative for any shared word. The policy lives here, as a dedicated
/// step, so precedence is verifiable independently of parsing.
#[must_use]
pub fn first_wins<V>(name: &'static str, sources: Vec<LexiconTable<V>>) -> LexiconTable<V> {
    let mut merged = LexiconTable::new(name);
    for source in sources {
        let source_name = source.name();
        let mut kept = 0usize;
        let mut shadowed = 0usize;
        for (word, value) in source {
            if merged.insert_first_wins(word, value) {
                kept += 1;
            } else {
                shadowed += 1;
            }
        }
        tracing::debug!(
            source = source_name,
            merged = name,
            kept,
            shadowed,
            "folded lexicon source"
        );
    }
    merged
}
