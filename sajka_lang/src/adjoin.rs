// Adjoin: merge one word into another at a random valid offset.
//
// Candidate offsets pair every placeholder of the target with every cell of
// the addition (`placeholder - cell`), so the addition always lands at least
// one cell on a reserved slot. An offset is valid when every translated cell
// of the addition falls on an empty cell or a placeholder of the target;
// real phonemes are never overwritten.
//
// Offsets reached through several placeholder/cell pairs are counted once,
// and the choice is uniform over the distinct valid offsets.

use crate::geometry::Point;
use crate::phoneme::Phoneme;
use crate::word::Word;
use sajka_prng::RandomSource;
use std::collections::BTreeSet;
use tracing::trace;

impl Word {
    /// All distinct valid offsets for `addition`, in ascending order.
    pub fn placements(&self, addition: &Word) -> Vec<Point> {
        let mut tried = BTreeSet::new();
        let mut valid = Vec::new();
        for anchor in self.placeholders() {
            for &cell in addition.phonemes.keys() {
                let offset = anchor - cell;
                if tried.insert(offset) && self.fits(addition, offset) {
                    valid.push(offset);
                }
            }
        }
        valid.sort();
        valid
    }

    /// Whether `addition` shifted by `offset` only touches empty cells and
    /// placeholders.
    fn fits(&self, addition: &Word, offset: Point) -> bool {
        addition
            .phonemes
            .keys()
            .all(|&p| self.phonemes.get(&(p + offset)).is_none_or(Phoneme::is_placeholder))
    }

    /// A copy of `self` with `addition` merged in at a uniformly chosen valid
    /// offset, or `None` if there is nowhere to put it.
    pub fn adjoined<R: RandomSource>(&self, addition: &Word, rng: &mut R) -> Option<Word> {
        let placements = self.placements(addition);
        if placements.is_empty() {
            trace!(cells = addition.len(), "no valid placement for addition");
            return None;
        }
        let offset = *rng.choose(&placements);
        trace!(%offset, candidates = placements.len(), "adjoining");

        let mut merged = self.clone();
        for (&p, &ph) in &addition.phonemes {
            merged.phonemes.insert(p + offset, ph);
        }
        Some(merged)
    }

    /// In-place form of `adjoined`. Returns false and leaves `self` untouched
    /// when no placement exists.
    pub fn adjoin<R: RandomSource>(&mut self, addition: &Word, rng: &mut R) -> bool {
        match self.adjoined(addition, rng) {
            Some(merged) => {
                *self = merged;
                true
            }
            None => false,
        }
    }
}
