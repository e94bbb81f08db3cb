// Multi-syllable word generation.
//
// Starts from one syllable and keeps generating fresh syllables and adjoining
// them until the requested count is reached. A syllable that finds no valid
// placement is thrown away and another is tried; only successful adjoins
// count toward the total.
//
// A word can run out of placeholders, after which nothing can ever be
// adjoined. `max_adjoin_attempts` bounds the number of consecutive failed
// placements so such a run ends with `GenerateError::AdjoinAttempts` instead
// of spinning forever.

use crate::error::GenerateError;
use crate::syllable::SyllableGenerator;
use crate::word::Word;
use sajka_prng::RandomSource;
use tracing::{debug, trace};

/// Builds words of a fixed syllable count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordGenerator {
    /// Requested syllable count; 0 is treated as 1.
    pub syllables: usize,
    pub syllable: SyllableGenerator,
    /// Give up after this many consecutive failed placements.
    pub max_adjoin_attempts: Option<u32>,
}

impl Default for WordGenerator {
    fn default() -> Self {
        Self {
            syllables: 2,
            syllable: SyllableGenerator::default(),
            max_adjoin_attempts: None,
        }
    }
}

/// A generated word and how it was assembled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedWord {
    pub word: Word,
    /// Syllables in the word; one more than the number of successful adjoins.
    pub syllables: usize,
    /// Syllables discarded because they had no valid placement.
    pub rejected_placements: usize,
}

impl WordGenerator {
    pub fn with_syllables(syllables: usize) -> Self {
        Self {
            syllables,
            ..Self::default()
        }
    }

    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Result<GeneratedWord, GenerateError> {
        self.assemble(rng, |rng| self.syllable.generate(rng))
    }

    /// The adjoin loop, drawing each syllable from `next_syllable`.
    fn assemble<R, F>(
        &self,
        rng: &mut R,
        mut next_syllable: F,
    ) -> Result<GeneratedWord, GenerateError>
    where
        R: RandomSource,
        F: FnMut(&mut R) -> Result<Word, GenerateError>,
    {
        let target = self.syllables.max(1);
        let mut word = next_syllable(rng)?;
        let mut syllables = 1;
        let mut rejected_placements = 0;
        let mut consecutive_failures: u32 = 0;

        while syllables < target {
            if self.max_adjoin_attempts.is_some_and(|max| consecutive_failures >= max) {
                return Err(GenerateError::AdjoinAttempts {
                    syllables: syllables + 1,
                    attempts: consecutive_failures,
                });
            }
            let addition = next_syllable(rng)?;
            if word.adjoin(&addition, rng) {
                syllables += 1;
                consecutive_failures = 0;
                debug!(syllables, cells = word.len(), "adjoined syllable");
            } else {
                rejected_placements += 1;
                consecutive_failures = consecutive_failures.saturating_add(1);
                trace!(rejected_placements, "syllable did not fit, retrying");
            }
        }

        Ok(GeneratedWord {
            word,
            syllables,
            rejected_placements,
        })
    }
}
