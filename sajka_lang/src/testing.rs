// Test doubles shared by the unit tests in this crate.

use sajka_prng::RandomSource;

/// Replays a fixed script: `bools` answers coin flips, `ints` answers index
/// picks (reduced modulo the requested span). Both scripts loop.
pub(crate) struct ScriptedRng {
    bools: Vec<bool>,
    ints: Vec<usize>,
    bool_pos: usize,
    int_pos: usize,
}

impl ScriptedRng {
    pub(crate) fn new(bools: Vec<bool>, ints: Vec<usize>) -> Self {
        Self {
            bools,
            ints,
            bool_pos: 0,
            int_pos: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn range_usize(&mut self, low: usize, high: usize) -> usize {
        let v = self.ints[self.int_pos % self.ints.len()];
        self.int_pos += 1;
        low + v % (high - low)
    }

    fn random_bool(&mut self, _p: f64) -> bool {
        let v = self.bools[self.bool_pos % self.bools.len()];
        self.bool_pos += 1;
        v
    }
}
