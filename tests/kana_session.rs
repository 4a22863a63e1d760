use std::collections::HashSet;

use assert_matches::assert_matches;
use fiftysound::judge::check_romaji;
use fiftysound::kana::{resolve_targets, selection_tree, KanaTable};
use fiftysound::pool::SamplePool;
use fiftysound::selection::Selection;
use fiftysound::session::{KanaMode, KanaQuiz};
use fiftysound::targets::MinTargets;
use fiftysound::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn glyphs(entries: &[fiftysound::kana::KanaEntry]) -> Vec<&'static str> {
    entries.iter().map(|e| e.glyph).collect()
}

#[test]
fn six_draws_are_two_rounds_without_a_seam_repeat() {
    let table = KanaTable::standard();
    let targets = resolve_targets(&table, &["あ", "い", "う"], true, false);
    let expected: HashSet<&str> = ["あ", "い", "う"].into_iter().collect();

    for seed in 0..200 {
        let mut pool = SamplePool::with_rng(&targets, StdRng::seed_from_u64(seed)).unwrap();
        let draws: Vec<&str> = (0..6).map(|_| pool.next_item().glyph).collect();

        let first: HashSet<&str> = draws[..3].iter().copied().collect();
        let second: HashSet<&str> = draws[3..].iter().copied().collect();
        assert_eq!(first, expected, "seed {seed}: {draws:?}");
        assert_eq!(second, expected, "seed {seed}: {draws:?}");
        assert!(draws.windows(2).all(|w| w[0] != w[1]), "seed {seed}: {draws:?}");
    }
}

#[test]
fn row_selection_resolves_in_script_order() {
    let table = KanaTable::standard();
    let tree = selection_tree(&table).unwrap();
    let mut selection = Selection::new();
    selection.toggle_leaf(&tree, "か", true).unwrap();
    selection.toggle_leaf(&tree, "あ", true).unwrap();

    // checked leaves come back in table order
    let selected = selection.checked_leaves(&tree);
    assert_eq!(selected, vec!["あ", "か"]);

    assert_eq!(glyphs(&resolve_targets(&table, &selected, true, false)), vec!["あ", "か"]);
    assert_eq!(
        glyphs(&resolve_targets(&table, &selected, true, true)),
        vec!["あ", "か", "ア", "カ"]
    );
    assert_eq!(glyphs(&resolve_targets(&table, &selected, false, true)), vec!["ア", "カ"]);
}

#[test]
fn whole_row_check_and_uncheck() {
    let table = KanaTable::standard();
    let tree = selection_tree(&table).unwrap();
    let mut selection = Selection::new();

    for glyph in ["さ", "し", "す", "せ", "そ"] {
        selection.toggle_leaf(&tree, glyph, true).unwrap();
    }
    assert!(selection.is_checked("sa"));

    selection.toggle_leaf(&tree, "す", false).unwrap();
    assert!(!selection.is_checked("sa"));
}

#[test]
fn shi_accepts_both_spellings() {
    let table = KanaTable::standard();
    let shi = table.entry("し").unwrap();
    assert!(check_romaji(&shi, "shi"));
    assert!(check_romaji(&shi, "SI"));
    assert!(!check_romaji(&shi, "chi"));
}

#[test]
fn quiz_threshold_is_configurable() {
    let table = KanaTable::standard();
    let targets = resolve_targets(&table, &["あ", "い"], true, false);

    assert!(KanaQuiz::new(&targets, KanaMode::KanaToRomaji, MinTargets(2)).is_ok());
    assert_matches!(
        KanaQuiz::new(&targets, KanaMode::KanaToRomaji, MinTargets(3)),
        Err(Error::InsufficientTargets { found: 2, required: 3 })
    );
}
