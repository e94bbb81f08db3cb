// Sajk'a words: sparse grids of phonemes.
//
// A `Word` maps grid positions to phonemes. An absent position is silence
// with nothing reserved; a present `Phoneme::PLACEHOLDER` is a reserved,
// silent slot that a later adjoin may fill. A word always holds at least one
// phoneme, so `range()` is total.
//
// Text form: one line per row from `min_y` to `max_y`, one tab-separated
// field per column from `min_x` to `max_x`, empty fields for absent cells,
// every row terminated by `\n`. Parsing assigns `(column, line)` starting at
// `(0, 0)`. The text form is therefore origin-normalized:
// `Word::parse(&w.to_text()) == w.normalized()`, which is exact for words
// whose minimum corner is already the origin.
//
// Syllable generation lives in `syllable.rs` and placement search in
// `adjoin.rs`; both extend `Word` with further `impl` blocks.

use crate::error::FormatError;
use crate::geometry::{BoundingRange, Point};
use crate::phoneme::Phoneme;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A word or syllable: a non-empty sparse grid of phonemes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub(crate) phonemes: BTreeMap<Point, Phoneme>,
}

impl Word {
    /// Wrap a phoneme grid. Fails with `EmptyWord` if the grid is empty.
    pub fn new(phonemes: BTreeMap<Point, Phoneme>) -> Result<Self, FormatError> {
        if phonemes.is_empty() {
            return Err(FormatError::EmptyWord);
        }
        Ok(Self { phonemes })
    }

    /// Callers guarantee `phonemes` is non-empty.
    pub(crate) fn from_grid(phonemes: BTreeMap<Point, Phoneme>) -> Self {
        debug_assert!(!phonemes.is_empty());
        Self { phonemes }
    }

    pub fn phonemes(&self) -> &BTreeMap<Point, Phoneme> {
        &self.phonemes
    }

    pub fn get(&self, p: Point) -> Option<&Phoneme> {
        self.phonemes.get(&p)
    }

    /// Number of occupied cells, placeholders included.
    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    /// Positions currently holding the placeholder.
    pub fn placeholders(&self) -> impl Iterator<Item = Point> + '_ {
        self.phonemes
            .iter()
            .filter(|(_, ph)| ph.is_placeholder())
            .map(|(&p, _)| p)
    }

    pub fn range(&self) -> BoundingRange {
        BoundingRange::enclosing(self.phonemes.keys().copied())
            .expect("a word always holds at least one phoneme")
    }

    /// Every cell of `range()` in row-major order, with its phoneme if any.
    /// This is the walk a renderer uses to stamp one sample image per cell.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Option<&Phoneme>)> + '_ {
        self.range()
            .points()
            .map(move |p| (p, self.phonemes.get(&p)))
    }

    /// The same word shifted by `offset`.
    pub fn translated(&self, offset: Point) -> Word {
        Word::from_grid(
            self.phonemes
                .iter()
                .map(|(&p, &ph)| (p + offset, ph))
                .collect(),
        )
    }

    /// The same word shifted so its minimum corner sits at the origin.
    pub fn normalized(&self) -> Word {
        self.translated(-self.range().min())
    }

    /// Reflect the grid across the anti-diagonal through the bottom-left
    /// corner `(min_x, max_y)` and rotate every phoneme.
    pub fn rotate(&self) -> Word {
        let range = self.range();
        let pivot = Point::new(range.min_x, range.max_y);
        Word::from_grid(
            self.phonemes
                .iter()
                .map(|(k, ph)| (Point::new(pivot.y - k.y, pivot.x - k.x), ph.rotate()))
                .collect(),
        )
    }

    pub fn to_text(&self) -> String {
        let range = self.range();
        let mut out = String::new();
        for y in range.min_y..=range.max_y {
            for x in range.min_x..=range.max_x {
                if let Some(ph) = self.phonemes.get(&Point::new(x, y)) {
                    out.push_str(&ph.to_string());
                }
                if x != range.max_x {
                    out.push('\t');
                }
            }
            out.push('\n');
        }
        out
    }

    /// Parse the tab/newline grid form. Fields are trimmed of spaces and
    /// empty fields are skipped.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let mut phonemes = BTreeMap::new();
        for (row, line) in text.lines().enumerate() {
            for (column, field) in line.split('\t').enumerate() {
                let field = field.trim_matches(' ');
                if field.is_empty() {
                    continue;
                }
                let ph = Phoneme::parse(field).map_err(|e| FormatError::Cell {
                    line: row + 1,
                    column: column + 1,
                    source: Box::new(e),
                })?;
                phonemes.insert(Point::new(column as i32, row as i32), ph);
            }
        }
        Word::new(phonemes)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for Word {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, FormatError> {
        Word::parse(s)
    }
}

// Serialized as the text grid. Deserializing normalizes to the origin, like
// any other parse.
impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for Word {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Word::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ph(text: &str) -> Phoneme {
        Phoneme::parse(text).unwrap()
    }

    fn word(cells: &[((i32, i32), &str)]) -> Word {
        Word::new(
            cells
                .iter()
                .map(|&((x, y), t)| (Point::new(x, y), ph(t)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(Word::new(BTreeMap::new()), Err(FormatError::EmptyWord));
        assert_eq!(Word::parse(""), Err(FormatError::EmptyWord));
        assert_eq!(Word::parse("\t \n  \t\n"), Err(FormatError::EmptyWord));
    }

    #[test]
    fn to_text_simple_row() {
        let w = word(&[((0, 0), "a/a"), ((1, 0), "p/p")]);
        assert_eq!(w.to_text(), "a/a\tp/p\n");
    }

    #[test]
    fn parse_simple_row() {
        let w = Word::parse("a/a\tp/p\n").unwrap();
        assert_eq!(w, word(&[((0, 0), "a/a"), ((1, 0), "p/p")]));
    }

    #[test]
    fn zero_origin_roundtrip_with_gaps() {
        let w = word(&[
            ((0, 0), "a/a"),
            ((2, 0), "ə/ə"),
            ((1, 1), "s/k'"),
            ((0, 2), "i/u"),
        ]);
        let text = w.to_text();
        assert_eq!(text, "a/a\t\tə/ə\n\ts/k'\t\ni/u\t\t\n");
        assert_eq!(Word::parse(&text).unwrap(), w);
    }

    #[test]
    fn text_is_origin_normalized() {
        let w = word(&[((-1, -2), "m/l"), ((0, -1), "u/a")]);
        assert_eq!(w.to_text(), "m/l\t\n\tu/a\n");
        let parsed = Word::parse(&w.to_text()).unwrap();
        assert_eq!(parsed, w.normalized());
        assert_eq!(parsed, word(&[((0, 0), "m/l"), ((1, 1), "u/a")]));
    }

    #[test]
    fn parse_trims_spaces_and_accepts_typographic_apostrophe() {
        let w = Word::parse(" k’/m \t  a/i\n").unwrap();
        assert_eq!(w.get(Point::new(0, 0)), Some(&ph("k'/m")));
        assert_eq!(w.get(Point::new(1, 0)), Some(&ph("a/i")));
    }

    #[test]
    fn parse_error_names_cell_and_token() {
        let err = Word::parse("a/a\tp/p\n\tp/a\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::Cell {
                line: 2,
                column: 2,
                source: Box::new(FormatError::InvalidPhoneme("p/a".to_string())),
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("p/a"), "{msg}");
    }

    #[test]
    fn range_and_cells() {
        let w = word(&[((1, -1), "h/h"), ((0, 0), "a/a")]);
        let r = w.range();
        assert_eq!((r.min_x, r.max_x, r.min_y, r.max_y), (0, 1, -1, 0));
        let cells: Vec<_> = w.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Point::new(0, -1), None),
                (Point::new(1, -1), Some(&ph("h/h"))),
                (Point::new(0, 0), Some(&ph("a/a"))),
                (Point::new(1, 0), None),
            ]
        );
    }

    #[test]
    fn rotate_reflects_about_bottom_left() {
        let w = word(&[((0, 0), "a/a"), ((1, 0), "p/p")]);
        let r = w.rotate();
        assert_eq!(r, word(&[((0, 0), "a/a"), ((0, -1), "p/p")]));
        assert_eq!(r.to_text(), "p/p\na/a\n");
    }

    #[test]
    fn rotate_rotates_each_phoneme() {
        let w = word(&[((0, 0), "s/p"), ((0, 1), "a/i"), ((1, 1), "p/l")]);
        // pivot = (min_x, max_y) = (0, 1); k -> (1 - k.y, 0 - k.x)
        let r = w.rotate();
        assert_eq!(
            r,
            word(&[((1, 0), "p/f"), ((0, 0), "i/a"), ((0, -1), "f/p")])
        );
        assert_eq!(r.len(), w.len());
    }

    #[test]
    fn placeholders_lists_only_placeholders() {
        let w = word(&[((0, 0), "a/a"), ((1, 0), "ə/ə"), ((2, 0), "ə/a")]);
        assert_eq!(w.placeholders().collect::<Vec<_>>(), vec![Point::new(1, 0)]);
    }

    #[test]
    fn serde_as_text_grid() {
        let w = word(&[((0, 0), "a/a"), ((1, 0), "p/p")]);
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, "\"a/a\\tp/p\\n\"");
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
