// Error types for the Sajk'a core.
//
// `FormatError` covers malformed phoneme and word text and is always surfaced
// to the caller with the offending token. `GenerateError` is only produced
// when a caller opts into an attempt cap on the syllable or word generator;
// with the default uncapped generators, generation cannot fail.
//
// A failed adjoin is not an error: "no valid placement" is an expected
// outcome, reported as `false` / `None` by `Word::adjoin` / `Word::adjoined`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("phoneme '{0}' must have a single slash")]
    Separator(String),

    #[error("phoneme '{0}' is invalid")]
    InvalidPhoneme(String),

    /// A bad token inside a word grid. `line` and `column` are 1-based.
    #[error("line {line}, column {column}: {source}")]
    Cell {
        line: usize,
        column: usize,
        #[source]
        source: Box<FormatError>,
    },

    #[error("word contains no phonemes")]
    EmptyWord,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("no syllable with a connected consonant after {0} attempts")]
    SyllableAttempts(u32),

    #[error("could not place syllable {syllables} after {attempts} attempts")]
    AdjoinAttempts { syllables: usize, attempts: u32 },
}
