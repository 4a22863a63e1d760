use crate::kana::KanaEntry;
use crate::vocab::WordItem;

/// Case-insensitive match of the trimmed answer against any accepted spelling.
pub fn check_romaji(entry: &KanaEntry, answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    entry
        .accepted_romaji
        .iter()
        .any(|romaji| romaji.to_lowercase() == answer)
}

/// Exact match of the trimmed answer against any meaning.
pub fn check_meaning(word: &WordItem, answer: &str) -> bool {
    let answer = answer.trim();
    word.meanings.iter().any(|meaning| meaning == answer)
}

/// Both fields must match exactly once surrounding whitespace is removed.
pub fn check_kana_and_kanji(word: &WordItem, kana: &str, kanji: &str) -> bool {
    kana.trim() == word.kana && kanji.trim() == word.kanji
}
