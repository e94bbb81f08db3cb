// Syllable generation from the fixed phonotactic template.
//
// A syllable is a vowel at the origin with optional consonants at eleven
// fixed offsets around it. One attempt:
// 1. Always place a random vowel at (0,0); place a random consonant at each
//    consonant offset with probability `consonant_chance`.
// 2. Keep only the cells 4-connected to (0,0).
// 3. If the vowel is alone, the attempt is rejected.
// 4. Placeholder repair: for each surviving consonant at p, if the cell below
//    (p + (0,1), "before") holds no vowel and the cell above ("after") is
//    empty, reserve "after" with a placeholder; likewise if the cell to the
//    left ("katopin") holds no vowel and the cell to the right ("prin") is
//    empty, reserve "prin". Checks see placeholders added earlier in the same
//    pass, since a placeholder is itself vowel-kind, so consonants are
//    repaired in the order the step 2 flood fill reached them (depth-first
//    from the origin, neighbors west, east, north, south).
//
// Rejected attempts restart from scratch. `Word::syllable` retries forever;
// `SyllableGenerator::max_attempts` bounds the loop for callers that need a
// guaranteed exit.

use crate::error::GenerateError;
use crate::geometry::Point;
use crate::phoneme::{Phoneme, PhonemeKind};
use crate::word::Word;
use sajka_prng::RandomSource;
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Syllable template: grid offset and the kind of phoneme it may hold.
/// Only the origin is mandatory.
pub const PHONOTACTICS: &[(Point, PhonemeKind)] = &[
    (Point::new(1, -2), PhonemeKind::Consonant),
    (Point::new(0, -1), PhonemeKind::Consonant),
    (Point::new(1, -1), PhonemeKind::Consonant),
    (Point::new(2, -1), PhonemeKind::Consonant),
    (Point::new(-1, 0), PhonemeKind::Consonant),
    (Point::new(0, 0), PhonemeKind::Vowel),
    (Point::new(1, 0), PhonemeKind::Consonant),
    (Point::new(-2, 1), PhonemeKind::Consonant),
    (Point::new(-1, 1), PhonemeKind::Consonant),
    (Point::new(0, 1), PhonemeKind::Consonant),
    (Point::new(-2, 2), PhonemeKind::Consonant),
    (Point::new(-1, 2), PhonemeKind::Consonant),
];

/// Default probability that an optional consonant slot is filled.
pub const DEFAULT_CONSONANT_CHANCE: f64 = 0.5;

/// Tunable syllable generator. The default matches `Word::syllable`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyllableGenerator {
    /// Probability of filling each optional consonant slot.
    pub consonant_chance: f64,
    /// Give up after this many rejected attempts. `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for SyllableGenerator {
    fn default() -> Self {
        Self {
            consonant_chance: DEFAULT_CONSONANT_CHANCE,
            max_attempts: None,
        }
    }
}

impl SyllableGenerator {
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Result<Word, GenerateError> {
        let mut attempts: u32 = 0;
        loop {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(GenerateError::SyllableAttempts(attempts));
            }
            attempts = attempts.saturating_add(1);
            if let Some(word) = attempt(self.consonant_chance, rng) {
                return Ok(word);
            }
            trace!(attempts, "syllable had no connected consonant, retrying");
        }
    }
}

impl Word {
    /// Generate one syllable with the default template odds, retrying until
    /// at least one consonant is connected to the vowel.
    pub fn syllable<R: RandomSource>(rng: &mut R) -> Word {
        SyllableGenerator::default()
            .generate(rng)
            .expect("an uncapped syllable generator never gives up")
    }
}

/// A single generation attempt; `None` if no consonant survived pruning.
fn attempt<R: RandomSource>(consonant_chance: f64, rng: &mut R) -> Option<Word> {
    let mut grid = BTreeMap::new();
    for &(offset, kind) in PHONOTACTICS {
        match kind {
            PhonemeKind::Vowel => {
                grid.insert(offset, Phoneme::random_vowel(rng));
            }
            PhonemeKind::Consonant => {
                if rng.random_bool(consonant_chance) {
                    grid.insert(offset, Phoneme::random_consonant(rng));
                }
            }
        }
    }

    let order = connected_to_origin(&grid);
    if order.len() == 1 {
        return None;
    }
    let mut culled: BTreeMap<Point, Phoneme> = order
        .iter()
        .filter_map(|p| grid.get(p).map(|&ph| (*p, ph)))
        .collect();
    add_placeholders(&mut culled, &order);
    Some(Word::from_grid(culled))
}

/// Cells 4-connected to the origin, in depth-first preorder with neighbors
/// taken west, east, north, south.
fn connected_to_origin(grid: &BTreeMap<Point, Phoneme>) -> Vec<Point> {
    let mut visited = BTreeSet::new();
    let mut order = Vec::new();
    let mut stack = vec![Point::ORIGIN];
    while let Some(p) = stack.pop() {
        if !grid.contains_key(&p) || !visited.insert(p) {
            continue;
        }
        order.push(p);
        stack.extend(p.neighbors().into_iter().rev());
    }
    order
}

fn vowel_at(grid: &BTreeMap<Point, Phoneme>, p: Point) -> bool {
    grid.get(&p).is_some_and(Phoneme::is_vowel)
}

fn add_placeholders(grid: &mut BTreeMap<Point, Phoneme>, order: &[Point]) {
    for &p in order {
        if grid.get(&p).is_none_or(Phoneme::is_vowel) {
            continue;
        }
        let before = p + Point::new(0, 1);
        let katopin = p + Point::new(-1, 0);
        let after = p + Point::new(0, -1);
        let prin = p + Point::new(1, 0);
        if !vowel_at(grid, before) && !grid.contains_key(&after) {
            grid.insert(after, Phoneme::PLACEHOLDER);
        }
        if !vowel_at(grid, katopin) && !grid.contains_key(&prin) {
            grid.insert(prin, Phoneme::PLACEHOLDER);
        }
    }
}
