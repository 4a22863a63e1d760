pub mod data;
pub mod selection;

use std::collections::HashMap;

pub use selection::{resolve_targets, selection_tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Script {
    #[strum(serialize = "hiragana")]
    Hiragana,
    #[strum(serialize = "katakana")]
    Katakana,
}

/// One row of the gojuon table. Hiragana and katakana at the same index are
/// phonetic counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GojuonRow {
    pub romaji: &'static str,
    pub hiragana: &'static [&'static str],
    pub katakana: &'static [&'static str],
}

impl GojuonRow {
    pub fn glyphs(&self, script: Script) -> &'static [&'static str] {
        match script {
            Script::Hiragana => self.hiragana,
            Script::Katakana => self.katakana,
        }
    }
}

/// A single quiz item from the kana table. Two entries are the same item
/// when their glyphs match.
#[derive(Debug, Clone, Copy)]
pub struct KanaEntry {
    pub romaji_row: &'static str,
    pub script: Script,
    pub glyph: &'static str,
    pub accepted_romaji: &'static [&'static str],
}

impl KanaEntry {
    /// The spelling shown to the user.
    pub fn canonical_romaji(&self) -> &'static str {
        self.accepted_romaji.first().copied().unwrap_or_default()
    }
}

impl PartialEq for KanaEntry {
    fn eq(&self, other: &Self) -> bool {
        self.glyph == other.glyph
    }
}

impl Eq for KanaEntry {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    row: usize,
    column: usize,
    script: Script,
}

/// Immutable kana data, built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct KanaTable {
    rows: Vec<GojuonRow>,
    romaji: HashMap<&'static str, &'static [&'static str]>,
    positions: HashMap<&'static str, Position>,
}

impl KanaTable {
    /// The full table: basic, voiced and contracted rows.
    pub fn standard() -> Self {
        Self::new(data::GOJUON, data::ROMAJI)
    }

    pub fn new(rows: &[GojuonRow], romaji: &[(&'static str, &'static [&'static str])]) -> Self {
        let mut positions = HashMap::new();
        for (row_idx, row) in rows.iter().enumerate() {
            for script in [Script::Hiragana, Script::Katakana] {
                for (column, glyph) in row.glyphs(script).iter().enumerate() {
                    positions.insert(
                        *glyph,
                        Position {
                            row: row_idx,
                            column,
                            script,
                        },
                    );
                }
            }
        }

        Self {
            rows: rows.to_vec(),
            romaji: romaji.iter().copied().collect(),
            positions,
        }
    }

    pub fn rows(&self) -> &[GojuonRow] {
        &self.rows
    }

    pub fn row(&self, romaji: &str) -> Option<&GojuonRow> {
        self.rows.iter().find(|row| row.romaji == romaji)
    }

    /// Accepted spellings for a glyph, canonical first.
    pub fn romaji(&self, glyph: &str) -> Option<&'static [&'static str]> {
        self.romaji.get(glyph).copied()
    }

    pub fn script_of(&self, glyph: &str) -> Option<Script> {
        self.positions.get(glyph).map(|p| p.script)
    }

    /// Row and column of a hiragana glyph.
    pub fn hiragana_position(&self, glyph: &str) -> Option<(usize, usize)> {
        self.positions
            .get(glyph)
            .filter(|p| p.script == Script::Hiragana)
            .map(|p| (p.row, p.column))
    }

    /// The entry for any glyph of the table. Glyphs without a romaji spelling
    /// are not quiz items.
    pub fn entry(&self, glyph: &str) -> Option<KanaEntry> {
        let pos = self.positions.get(glyph)?;
        self.entry_at(pos.row, pos.column, pos.script)
    }

    pub fn entry_at(&self, row: usize, column: usize, script: Script) -> Option<KanaEntry> {
        let gojuon_row = self.rows.get(row)?;
        let glyph = *gojuon_row.glyphs(script).get(column)?;
        let accepted_romaji = self.romaji(glyph).filter(|r| !r.is_empty())?;
        Some(KanaEntry {
            romaji_row: gojuon_row.romaji,
            script,
            glyph,
            accepted_romaji,
        })
    }

    pub fn all_hiragana(&self) -> Vec<&'static str> {
        self.rows
            .iter()
            .flat_map(|row| row.hiragana.iter().copied())
            .collect()
    }
}

impl Default for KanaTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_pair_hiragana_with_katakana() {
        let table = KanaTable::standard();
        for row in table.rows() {
            assert_eq!(row.hiragana.len(), row.katakana.len(), "row {}", row.romaji);
        }
    }

    #[test]
    fn every_glyph_has_romaji() {
        let table = KanaTable::standard();
        for row in table.rows() {
            for glyph in row.hiragana.iter().chain(row.katakana.iter()) {
                let romaji = table.romaji(glyph);
                assert!(
                    romaji.is_some_and(|r| !r.is_empty()),
                    "{glyph} has no romaji"
                );
            }
        }
    }

    #[test]
    fn entry_carries_row_script_and_spellings() {
        let table = KanaTable::standard();
        let shi = table.entry("し").unwrap();
        assert_eq!(shi.romaji_row, "sa");
        assert_eq!(shi.script, Script::Hiragana);
        assert_eq!(shi.accepted_romaji, &["shi", "si"]);
        assert_eq!(shi.canonical_romaji(), "shi");

        let kyo = table.entry("キョ").unwrap();
        assert_eq!(kyo.romaji_row, "kya");
        assert_eq!(kyo.script, Script::Katakana);
    }

    #[test]
    fn counterparts_share_a_position() {
        let table = KanaTable::standard();
        let (row, column) = table.hiragana_position("ぬ").unwrap();
        let katakana = table.entry_at(row, column, Script::Katakana).unwrap();
        assert_eq!(katakana.glyph, "ヌ");
        assert_eq!(table.hiragana_position("ヌ"), None);
    }

    #[test]
    fn small_kana_have_romaji_but_no_table_position() {
        let table = KanaTable::standard();
        assert_eq!(table.romaji("ゃ"), Some(&["ya"][..]));
        assert!(table.entry("ゃ").is_none());
        assert!(table.script_of("ゃ").is_none());
    }

    #[test]
    fn script_display_is_lowercase() {
        assert_eq!(Script::Hiragana.to_string(), "hiragana");
        assert_eq!(Script::Katakana.to_string(), "katakana");
    }
}
