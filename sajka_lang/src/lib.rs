// Sajk'a word generation core.
//
// Builds words of the Sajk'a constructed language as sparse 2D grids of
// phonemes. No I/O; the `saj` binary in `sajka_cli` and any audio/image
// renderer sit on top of this crate.
//
// Architecture (leaf-first):
// - `geometry.rs`: `Point` and `BoundingRange` with its row-major point walk
// - `phoneme.rs`: `Phoneme`, the alphabets, compatibility and rotation tables
// - `word.rs`: `Word` grid, text (de)serialization, rotation, renderer walk
// - `syllable.rs`: phonotactic template and `SyllableGenerator`
// - `adjoin.rs`: placement search merging one word into another
// - `generator.rs`: `WordGenerator`, the syllable-count loop
// - `config.rs`: `GenerationConfig`, loaded from JSON
// - `error.rs`: `FormatError`, `GenerateError`
//
// Determinism constraint: all randomness comes from the `RandomSource` passed
// by the caller (`sajka_prng::GameRng` by default) and grids are `BTreeMap`s,
// so a seed fully determines the output.

pub mod adjoin;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod phoneme;
pub mod syllable;
pub mod word;

#[cfg(test)]
mod testing;

// Re-export key types at crate root for convenience.
pub use config::GenerationConfig;
pub use error::{FormatError, GenerateError};
pub use generator::{GeneratedWord, WordGenerator};
pub use geometry::{BoundingRange, Point};
pub use phoneme::{Phoneme, PhonemeKind};
pub use sajka_prng::{GameRng, RandomSource};
pub use syllable::SyllableGenerator;
pub use word::Word;
