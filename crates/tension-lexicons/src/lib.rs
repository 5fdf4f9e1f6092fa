//! Lexicon normalization and feature resources for tension analysis.
//!
//! This crate turns a directory of heterogeneous human-curated
//! emotion/sentiment lexicons into one consistent in-memory representation:
//!
//! - **ResourcePaths**: resolves the data root into verified file paths
//! - **Parsers**: one strategy per raw shape (CSV ratings, tab-separated
//!   multi-emotion, tab/comma key-value, flat word lists)
//! - **ScaleRange**: affine rescaling of native numeric ranges onto [0,1]
//! - **first_wins**: the explicit merge policy for overlapping sources
//! - **LexiconSet**: the finished, immutable collection of all tables
//!
//! Loading is eager, synchronous, and fail-fast: any missing file or
//! malformed row aborts the whole pass before a consumer can observe a
//! partially built set.

pub mod merge;
pub mod normalize;
pub mod parse;
pub mod paths;
pub mod set;
pub mod table;

pub use normalize::ScaleRange;
pub use paths::ResourcePaths;
pub use set::LexiconSet;
pub use table::{LexiconTable, WordList};
