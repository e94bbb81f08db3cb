// Data-driven generation settings.
//
// `GenerationConfig` gathers the knobs of a generation run: how many
// syllables, how likely each optional consonant slot is, the attempt caps,
// and an optional seed. It is loaded from JSON with `from_json` (every field
// optional, falling back to `Default`) and turned into a `WordGenerator` with
// `word_generator()`.
//
// `consonant_chance` must lie in (0, 1]; at 0 no syllable can ever keep a
// consonant. The config default caps both syllable and adjoin retries so a
// command-line run always terminates; the bare `WordGenerator` default stays
// uncapped.

use crate::generator::WordGenerator;
use crate::syllable::{DEFAULT_CONSONANT_CHANCE, SyllableGenerator};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_MAX_SYLLABLE_ATTEMPTS: u32 = 10_000;
pub const DEFAULT_MAX_ADJOIN_ATTEMPTS: u32 = 10_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Syllables per generated word.
    pub syllables: usize,
    /// Probability of filling each optional consonant slot, in (0, 1].
    #[serde(deserialize_with = "deserialize_chance")]
    pub consonant_chance: f64,
    /// Cap on rejected syllable attempts; `None` retries forever.
    pub max_syllable_attempts: Option<u32>,
    /// Cap on consecutive failed placements; `None` retries forever.
    pub max_adjoin_attempts: Option<u32>,
    /// Seed for the generator. `None` lets the caller pick one.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            syllables: 2,
            consonant_chance: DEFAULT_CONSONANT_CHANCE,
            max_syllable_attempts: Some(DEFAULT_MAX_SYLLABLE_ATTEMPTS),
            max_adjoin_attempts: Some(DEFAULT_MAX_ADJOIN_ATTEMPTS),
            seed: None,
        }
    }
}

impl GenerationConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn word_generator(&self) -> WordGenerator {
        WordGenerator {
            syllables: self.syllables,
            syllable: SyllableGenerator {
                consonant_chance: self.consonant_chance,
                max_attempts: self.max_syllable_attempts,
            },
            max_adjoin_attempts: self.max_adjoin_attempts,
        }
    }
}

fn deserialize_chance<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let chance = f64::deserialize(deserializer)?;
    if chance > 0.0 && chance <= 1.0 {
        Ok(chance)
    } else {
        Err(D::Error::custom(format!(
            "consonant_chance must be in (0, 1], got {chance}"
        )))
    }
}
