use super::{KanaEntry, KanaTable, Script};
use crate::error::Result;
use crate::selection::SelectionTree;

/// Builds the row/character checklist: one group per gojuon row, keyed by the
/// row's romaji, holding one leaf per hiragana glyph, keyed by the glyph.
pub fn selection_tree(table: &KanaTable) -> Result<SelectionTree> {
    let mut tree = SelectionTree::new();
    for row in table.rows() {
        tree.add_group(row.romaji, &format!("{}-row", row.romaji), None)?;
        for glyph in row.hiragana {
            tree.add_leaf(glyph, glyph, Some(row.romaji))?;
        }
    }
    Ok(tree)
}

/// Turns selected hiragana glyphs into quiz targets.
///
/// Each glyph is located in the table and the counterparts at its position are
/// emitted for every enabled script: all hiragana first, then all katakana,
/// each in selection order. Glyphs without a table entry are skipped.
pub fn resolve_targets<S: AsRef<str>>(
    table: &KanaTable,
    selected: &[S],
    include_hiragana: bool,
    include_katakana: bool,
) -> Vec<KanaEntry> {
    let positions: Vec<(usize, usize)> = selected
        .iter()
        .filter_map(|glyph| table.hiragana_position(glyph.as_ref()))
        .collect();

    let scripts = [
        (Script::Hiragana, include_hiragana),
        (Script::Katakana, include_katakana),
    ];

    scripts
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .flat_map(|(script, _)| {
            positions
                .iter()
                .filter_map(move |&(row, column)| table.entry_at(row, column, script))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;

    fn glyphs(entries: &[KanaEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.glyph).collect()
    }

    #[test]
    fn hiragana_only() {
        let table = KanaTable::standard();
        let targets = resolve_targets(&table, &["あ", "か"], true, false);
        assert_eq!(glyphs(&targets), vec!["あ", "か"]);
    }

    #[test]
    fn both_scripts_hiragana_pass_first() {
        let table = KanaTable::standard();
        let targets = resolve_targets(&table, &["あ", "か"], true, true);
        assert_eq!(glyphs(&targets), vec!["あ", "か", "ア", "カ"]);
        assert_eq!(targets[2].script, Script::Katakana);
    }

    #[test]
    fn katakana_only_keeps_counterparts_symmetric() {
        let table = KanaTable::standard();
        let targets = resolve_targets(&table, &["しゃ", "ん"], false, true);
        assert_eq!(glyphs(&targets), vec!["シャ", "ン"]);
    }

    #[test]
    fn unknown_and_katakana_glyphs_are_skipped() {
        let table = KanaTable::standard();
        let targets = resolve_targets(&table, &["x", "ア", "ゃ", "い"], true, true);
        assert_eq!(glyphs(&targets), vec!["い", "イ"]);
    }

    #[test]
    fn nothing_selected_or_no_script_yields_nothing() {
        let table = KanaTable::standard();
        let none: [&str; 0] = [];
        assert!(resolve_targets(&table, &none, true, true).is_empty());
        assert!(resolve_targets(&table, &["あ"], false, false).is_empty());
    }

    #[test]
    fn tree_has_a_group_per_row() {
        let table = KanaTable::standard();
        let tree = selection_tree(&table).unwrap();
        assert_eq!(tree.roots().len(), table.rows().len());
        assert_eq!(tree.leaves_under("ya"), vec!["や", "ゆ", "よ"]);
        assert_eq!(tree.node("ka").unwrap().label, "ka-row");
    }

    #[test]
    fn row_toggle_feeds_resolution() {
        let table = KanaTable::standard();
        let tree = selection_tree(&table).unwrap();
        let mut sel = Selection::new();
        sel.toggle_group(&tree, "wa", true).unwrap();

        let targets = resolve_targets(&table, &sel.checked_leaves(&tree), true, true);
        assert_eq!(glyphs(&targets), vec!["わ", "を", "ん", "ワ", "ヲ", "ン"]);
    }
}
