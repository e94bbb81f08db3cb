// Sajk'a phonemes: the fixed alphabets, the compatibility table, and the
// rotation mutation on a single sound.
//
// A phoneme is an ordered pair of symbols, written `lateral/vertical`. A pair
// is either two vowels (always legal) or two consonants, where the vertical
// must appear in the lateral's compatibility list. `Phoneme::is_valid` is the
// single authority on legality; parsing and validated construction go
// through it.
//
// Symbols are interned as `&'static str` from the alphabets below, so a
// `Phoneme` is `Copy` and compares by value.
//
// Rotation swaps the two symbols and then applies a fixed override table
// keyed by the swapped pair. The overrides repair most swaps that land on an
// illegal pair, but not all (`ʂ/l` rotates to `l/ʂ`, and `s/l` rotates to
// `f/s`), so a rotated phoneme may fail `is_valid`. Such phonemes are still
// representable; they just don't survive a text round-trip.

use crate::error::FormatError;
use sajka_prng::RandomSource;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Consonant symbols, in draw order.
pub const CONSONANTS: &[&str] = &[
    "p", "p'", "t", "t'", "k", "k'", "m", "f", "s", "ʂ", "h", "j", "l",
];

/// Vowel symbols. `ə` doubles as the placeholder marker.
pub const VOWELS: &[&str] = &["i", "a", "u", "ə"];

/// Which consonants (vertical) may follow each consonant (lateral).
/// One row per entry in `CONSONANTS`, same order.
const COMPATIBILITY: &[(&str, &[&str])] = &[
    ("p", &["p", "t", "k", "m", "f", "l"]),
    ("p'", &["p'", "t'", "k'", "m", "l"]),
    ("t", &["p", "t", "k", "m", "f", "l"]),
    ("t'", &["p'", "t'", "k'", "m", "l"]),
    ("k", &["p", "t", "k", "m", "f", "l"]),
    ("k'", &["p'", "t'", "k'", "m", "l"]),
    ("m", &["p", "p'", "t", "t'", "k", "k'", "m", "f", "l"]),
    ("f", &["p", "t", "k", "m", "f", "l"]),
    ("s", &["p", "p'", "t", "t'", "k", "k'", "m", "f", "s", "l"]),
    ("ʂ", &["p", "p'", "t", "t'", "k", "k'", "m", "ʂ", "l"]),
    ("h", &["h"]),
    ("j", &["j"]),
    ("l", &["l"]),
];

/// Rotation mutation: swapped pair -> replacement.
const ROTATION_OVERRIDES: &[(Phoneme, Phoneme)] = &[
    (Phoneme::pair("p", "s"), Phoneme::pair("p", "f")),
    (Phoneme::pair("p'", "s"), Phoneme::pair("p'", "p'")),
    (Phoneme::pair("t", "s"), Phoneme::pair("t", "f")),
    (Phoneme::pair("t'", "s"), Phoneme::pair("t'", "t'")),
    (Phoneme::pair("k", "s"), Phoneme::pair("k", "f")),
    (Phoneme::pair("k'", "s"), Phoneme::pair("k'", "k'")),
    (Phoneme::pair("m", "s"), Phoneme::pair("m", "f")),
    (Phoneme::pair("f", "s"), Phoneme::pair("f", "f")),
    (Phoneme::pair("p", "ʂ"), Phoneme::pair("p", "l")),
    (Phoneme::pair("p'", "ʂ"), Phoneme::pair("p'", "l")),
    (Phoneme::pair("t", "ʂ"), Phoneme::pair("t", "l")),
    (Phoneme::pair("t'", "ʂ"), Phoneme::pair("t'", "l")),
    (Phoneme::pair("k", "ʂ"), Phoneme::pair("k", "l")),
    (Phoneme::pair("k'", "ʂ"), Phoneme::pair("k'", "l")),
    (Phoneme::pair("m", "ʂ"), Phoneme::pair("m", "l")),
    (Phoneme::pair("f", "ʂ"), Phoneme::pair("f", "l")),
    (Phoneme::pair("l", "p"), Phoneme::pair("f", "p")),
    (Phoneme::pair("l", "p'"), Phoneme::pair("p'", "p'")),
    (Phoneme::pair("l", "t"), Phoneme::pair("f", "t")),
    (Phoneme::pair("l", "t'"), Phoneme::pair("t'", "t'")),
    (Phoneme::pair("l", "k"), Phoneme::pair("f", "k")),
    (Phoneme::pair("l", "k'"), Phoneme::pair("k'", "k'")),
    (Phoneme::pair("l", "m"), Phoneme::pair("f", "m")),
    (Phoneme::pair("l", "f"), Phoneme::pair("f", "f")),
    (Phoneme::pair("l", "s"), Phoneme::pair("f", "s")),
];

/// Whether a phoneme is a vowel or a consonant, decided by its lateral symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeKind {
    Vowel,
    Consonant,
}

/// A sound unit: an ordered `(lateral, vertical)` pair of alphabet symbols.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phoneme {
    lateral: &'static str,
    vertical: &'static str,
}

impl Phoneme {
    /// `ə/ə`: a grid cell reserved for a later adjoin but silent for now.
    pub const PLACEHOLDER: Phoneme = Phoneme::pair("ə", "ə");

    const fn pair(lateral: &'static str, vertical: &'static str) -> Self {
        Self { lateral, vertical }
    }

    /// Build a phoneme, rejecting pairs that `is_valid` refuses.
    pub fn new(lateral: &str, vertical: &str) -> Result<Self, FormatError> {
        match (intern(lateral), intern(vertical)) {
            (Some(l), Some(v)) if Self::is_valid(l, v) => Ok(Self::pair(l, v)),
            _ => Err(FormatError::InvalidPhoneme(format!("{lateral}/{vertical}"))),
        }
    }

    pub fn lateral(&self) -> &'static str {
        self.lateral
    }

    pub fn vertical(&self) -> &'static str {
        self.vertical
    }

    pub fn kind(&self) -> PhonemeKind {
        if is_vowel_symbol(self.lateral) {
            PhonemeKind::Vowel
        } else {
            PhonemeKind::Consonant
        }
    }

    pub fn is_vowel(&self) -> bool {
        self.kind() == PhonemeKind::Vowel
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::PLACEHOLDER
    }

    /// Two vowels are always legal. Two consonants are legal when the
    /// vertical is in the lateral's compatibility list. Anything else,
    /// including unknown symbols, is not.
    pub fn is_valid(lateral: &str, vertical: &str) -> bool {
        if is_vowel_symbol(lateral) && is_vowel_symbol(vertical) {
            return true;
        }
        compatible_verticals(lateral).is_some_and(|verticals| verticals.iter().any(|&v| v == vertical))
    }

    /// Both symbols drawn independently from the vowels (16 outcomes).
    pub fn random_vowel<R: RandomSource>(rng: &mut R) -> Self {
        let lateral = *rng.choose(VOWELS);
        let vertical = *rng.choose(VOWELS);
        Self::pair(lateral, vertical)
    }

    /// Uniform lateral, then a uniform vertical from that lateral's
    /// compatibility list. Not uniform over all legal consonant pairs.
    pub fn random_consonant<R: RandomSource>(rng: &mut R) -> Self {
        let (lateral, verticals) = *rng.choose(COMPATIBILITY);
        let vertical = *rng.choose(verticals);
        Self::pair(lateral, vertical)
    }

    /// Swap the symbols, then apply the rotation override for the swapped
    /// pair if there is one.
    pub fn rotate(&self) -> Self {
        let swapped = Self::pair(self.vertical, self.lateral);
        ROTATION_OVERRIDES
            .iter()
            .find(|(from, _)| *from == swapped)
            .map_or(swapped, |&(_, to)| to)
    }

    /// Parse standard notation. The typographic apostrophe `’` is accepted
    /// as `'`.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let normalized = text.replace('’', "'");
        let parts: Vec<&str> = normalized.split('/').collect();
        let [lateral, vertical] = parts.as_slice() else {
            return Err(FormatError::Separator(text.to_string()));
        };
        Self::new(lateral, vertical).map_err(|_| FormatError::InvalidPhoneme(text.to_string()))
    }

    /// File stem of this phoneme's sample image, `lateral_vertical`.
    pub fn image_stem(&self) -> String {
        format!("{}_{}", self.lateral, self.vertical)
    }
}

fn is_vowel_symbol(symbol: &str) -> bool {
    VOWELS.iter().any(|&v| v == symbol)
}

fn intern(symbol: &str) -> Option<&'static str> {
    CONSONANTS
        .iter()
        .chain(VOWELS)
        .find(|&&s| s == symbol)
        .copied()
}

fn compatible_verticals(lateral: &str) -> Option<&'static [&'static str]> {
    COMPATIBILITY
        .iter()
        .find(|(l, _)| *l == lateral)
        .map(|&(_, verticals)| verticals)
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.lateral, self.vertical)
    }
}

impl fmt::Debug for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phoneme({self})")
    }
}

impl FromStr for Phoneme {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, FormatError> {
        Self::parse(s)
    }
}

// Serialized as standard notation so phonemes read naturally in JSON.
impl Serialize for Phoneme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Phoneme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Phoneme::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sajka_prng::GameRng;

    fn ph(text: &str) -> Phoneme {
        Phoneme::parse(text).unwrap()
    }

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CONSONANTS.len(), 13);
        assert_eq!(VOWELS.len(), 4);
        let laterals: Vec<&str> = COMPATIBILITY.iter().map(|(l, _)| *l).collect();
        assert_eq!(laterals, CONSONANTS);
    }

    #[test]
    fn consonant_validity_matches_table() {
        for &(lateral, verticals) in COMPATIBILITY {
            for &vertical in CONSONANTS {
                assert_eq!(
                    Phoneme::is_valid(lateral, vertical),
                    verticals.contains(&vertical),
                    "{lateral}/{vertical}"
                );
            }
        }
    }

    #[test]
    fn vowel_pairs_always_valid() {
        for &a in VOWELS {
            for &b in VOWELS {
                assert!(Phoneme::is_valid(a, b), "{a}/{b}");
            }
        }
    }

    #[test]
    fn mixed_and_unknown_pairs_invalid() {
        for &v in VOWELS {
            for &c in CONSONANTS {
                assert!(!Phoneme::is_valid(v, c), "{v}/{c}");
                assert!(!Phoneme::is_valid(c, v), "{c}/{v}");
            }
        }
        assert!(!Phoneme::is_valid("x", "x"));
        assert!(!Phoneme::is_valid("", "a"));
    }

    #[test]
    fn parse_roundtrips_every_valid_phoneme() {
        for &l in CONSONANTS.iter().chain(VOWELS) {
            for &v in CONSONANTS.iter().chain(VOWELS) {
                if !Phoneme::is_valid(l, v) {
                    continue;
                }
                let p = Phoneme::new(l, v).unwrap();
                assert_eq!(Phoneme::parse(&p.to_string()).unwrap(), p);
            }
        }
    }

    #[test]
    fn parse_accepts_typographic_apostrophe() {
        assert_eq!(ph("p’/t’"), ph("p'/t'"));
        assert_eq!(ph("k’/m").lateral(), "k'");
    }

    #[test]
    fn parse_rejects_wrong_separator_count() {
        assert_eq!(
            Phoneme::parse("pp"),
            Err(FormatError::Separator("pp".to_string()))
        );
        assert_eq!(
            Phoneme::parse("p/t/k"),
            Err(FormatError::Separator("p/t/k".to_string()))
        );
    }

    #[test]
    fn parse_rejects_invalid_pair() {
        assert_eq!(
            Phoneme::parse("a/p"),
            Err(FormatError::InvalidPhoneme("a/p".to_string()))
        );
        assert_eq!(
            Phoneme::parse("h/j"),
            Err(FormatError::InvalidPhoneme("h/j".to_string()))
        );
        let err = Phoneme::parse("q/q").unwrap_err();
        assert!(err.to_string().contains("q/q"));
    }

    #[test]
    fn kind_follows_lateral() {
        assert_eq!(ph("a/u").kind(), PhonemeKind::Vowel);
        assert_eq!(ph("s/s").kind(), PhonemeKind::Consonant);
        assert!(Phoneme::PLACEHOLDER.is_vowel());
        assert!(Phoneme::PLACEHOLDER.is_placeholder());
        assert!(!ph("ə/a").is_placeholder());
    }

    #[test]
    fn rotate_applies_override_for_swapped_pair() {
        // s/p swaps to p/s, which the table rewrites.
        assert_eq!(ph("s/p").rotate(), ph("p/f"));
        assert_eq!(ph("s/p'").rotate(), ph("p'/p'"));
        assert_eq!(ph("p/l").rotate(), ph("f/p"));
        assert_eq!(ph("ʂ/k").rotate(), ph("k/l"));
    }

    #[test]
    fn rotate_plain_swap_without_override() {
        assert_eq!(ph("p/f").rotate(), ph("f/p"));
        assert_eq!(ph("a/i").rotate(), ph("i/a"));
        assert_eq!(ph("h/h").rotate(), ph("h/h"));
        assert_eq!(Phoneme::PLACEHOLDER.rotate(), Phoneme::PLACEHOLDER);
    }

    #[test]
    fn rotate_is_not_an_involution() {
        let p = ph("s/p");
        assert_eq!(p.rotate().rotate(), ph("f/p"));
        assert_ne!(p.rotate().rotate(), p);
    }

    #[test]
    fn rotate_can_leave_the_valid_set() {
        let r = ph("ʂ/l").rotate();
        assert_eq!(r.to_string(), "l/ʂ");
        assert!(!Phoneme::is_valid(r.lateral(), r.vertical()));
        assert!(Phoneme::parse(&r.to_string()).is_err());
    }

    #[test]
    fn override_keys_are_all_illegal_swaps() {
        assert_eq!(ROTATION_OVERRIDES.len(), 25);
        for (from, _) in ROTATION_OVERRIDES {
            assert!(!Phoneme::is_valid(from.lateral, from.vertical), "{from}");
        }
    }

    #[test]
    fn random_vowels_are_vowels() {
        let mut rng = GameRng::new(1);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..2_000 {
            let p = Phoneme::random_vowel(&mut rng);
            assert!(p.is_vowel());
            assert!(Phoneme::is_valid(p.lateral(), p.vertical()));
            seen.insert(p);
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn random_consonants_are_valid() {
        let mut rng = GameRng::new(2);
        for _ in 0..2_000 {
            let p = Phoneme::random_consonant(&mut rng);
            assert_eq!(p.kind(), PhonemeKind::Consonant);
            assert!(Phoneme::is_valid(p.lateral(), p.vertical()), "{p}");
        }
    }

    #[test]
    fn image_stem_uses_underscore() {
        assert_eq!(ph("p'/t'").image_stem(), "p'_t'");
        assert_eq!(Phoneme::PLACEHOLDER.image_stem(), "ə_ə");
    }

    #[test]
    fn serde_as_notation() {
        let json = serde_json::to_string(&ph("k/m")).unwrap();
        assert_eq!(json, "\"k/m\"");
        let parsed: Phoneme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ph("k/m"));
        assert!(serde_json::from_str::<Phoneme>("\"a/k\"").is_err());
    }
}
