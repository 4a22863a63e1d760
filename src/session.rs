//! Quiz sessions over a resolved target list, independent of any front-end.

use itertools::Itertools;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::judge::{check_kana_and_kanji, check_meaning, check_romaji};
use crate::kana::KanaEntry;
use crate::pool::SamplePool;
use crate::targets::MinTargets;
use crate::vocab::WordItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub correct: usize,
}

impl Stats {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Percentage of correct answers, 0 before the first answer.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
pub enum KanaMode {
    /// Show a glyph, type its romaji.
    #[default]
    #[strum(serialize = "kana → romaji")]
    KanaToRomaji,
    /// Show a romaji spelling, write the glyph by hand.
    #[strum(serialize = "romaji → handwritten kana")]
    RomajiToKana,
}

impl KanaMode {
    pub const ALL: [KanaMode; 2] = [KanaMode::KanaToRomaji, KanaMode::RomajiToKana];

    pub fn is_judged(self) -> bool {
        self == KanaMode::KanaToRomaji
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
pub enum WordMode {
    /// Show the meanings, type kana and kanji.
    #[default]
    #[strum(serialize = "meaning → kana & kanji")]
    MeaningToWord,
    /// Show kana and kanji, type one meaning.
    #[strum(serialize = "kana (kanji) → meaning")]
    WordToMeaning,
    /// Flash cards, nothing to type.
    #[strum(serialize = "review")]
    Review,
}

impl WordMode {
    pub const ALL: [WordMode; 3] = [WordMode::MeaningToWord, WordMode::WordToMeaning, WordMode::Review];

    pub fn is_judged(self) -> bool {
        self != WordMode::Review
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanaQuestion {
    pub entry: KanaEntry,
    /// Spelling shown when asking for the glyph.
    pub romaji: &'static str,
}

#[derive(Debug)]
pub struct KanaQuiz<R = ThreadRng> {
    mode: KanaMode,
    pool: SamplePool<KanaEntry, R>,
    rng: R,
    current: KanaQuestion,
    stats: Stats,
}

impl KanaQuiz<ThreadRng> {
    pub fn new(targets: &[KanaEntry], mode: KanaMode, min: MinTargets) -> Result<Self> {
        Self::with_rng(targets, mode, min, rand::thread_rng(), rand::thread_rng())
    }
}

impl<R: Rng> KanaQuiz<R> {
    /// `pool_rng` orders the questions; `rng` picks among alternative spellings.
    pub fn with_rng(
        targets: &[KanaEntry],
        mode: KanaMode,
        min: MinTargets,
        pool_rng: R,
        rng: R,
    ) -> Result<Self> {
        min.check(targets)?;
        let mut pool = SamplePool::with_rng(targets, pool_rng)?;
        let mut rng = rng;
        let current = ask(pool.next_item(), &mut rng);
        info!(targets = targets.len(), %mode, "kana session started");

        Ok(Self {
            mode,
            pool,
            rng,
            current,
            stats: Stats::default(),
        })
    }

    pub fn mode(&self) -> KanaMode {
        self.mode
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn current(&self) -> &KanaQuestion {
        &self.current
    }

    pub fn next_question(&mut self) -> &KanaQuestion {
        self.current = ask(self.pool.next_item(), &mut self.rng);
        &self.current
    }

    pub fn prompt(&self) -> String {
        let entry = &self.current.entry;
        match self.mode {
            KanaMode::KanaToRomaji => format!("Type the romaji for {} {}", entry.script, entry.glyph),
            KanaMode::RomajiToKana => format!("Write {} {}", entry.script, self.current.romaji),
        }
    }

    /// Judges a typed answer. Handwriting mode has nothing to judge.
    pub fn answer(&mut self, answer: &str) -> Option<Verdict> {
        if !self.mode.is_judged() {
            return None;
        }
        let correct = check_romaji(&self.current.entry, answer);
        self.stats.record(correct);
        Some(if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect {
                expected: self.reveal(),
            }
        })
    }

    pub fn reveal(&self) -> String {
        match self.mode {
            KanaMode::KanaToRomaji => self.current.entry.accepted_romaji.iter().join("/"),
            KanaMode::RomajiToKana => self.current.entry.glyph.to_string(),
        }
    }
}

fn ask<R: Rng>(entry: KanaEntry, rng: &mut R) -> KanaQuestion {
    let romaji = entry
        .accepted_romaji
        .choose(rng)
        .copied()
        .unwrap_or_else(|| entry.canonical_romaji());
    KanaQuestion { entry, romaji }
}

#[derive(Debug)]
pub struct WordQuiz<R = ThreadRng> {
    mode: WordMode,
    pool: SamplePool<WordItem, R>,
    current: WordItem,
    stats: Stats,
}

impl WordQuiz<ThreadRng> {
    pub fn new(words: &[WordItem], mode: WordMode, min: MinTargets) -> Result<Self> {
        Self::with_rng(words, mode, min, rand::thread_rng())
    }
}

impl<R: Rng> WordQuiz<R> {
    pub fn with_rng(words: &[WordItem], mode: WordMode, min: MinTargets, rng: R) -> Result<Self> {
        min.check(words)?;
        let mut pool = SamplePool::with_rng(words, rng)?;
        let current = pool.next_item();
        info!(words = words.len(), %mode, "word session started");

        Ok(Self {
            mode,
            pool,
            current,
            stats: Stats::default(),
        })
    }

    pub fn mode(&self) -> WordMode {
        self.mode
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn current(&self) -> &WordItem {
        &self.current
    }

    pub fn next_word(&mut self) -> &WordItem {
        self.current = self.pool.next_item();
        &self.current
    }

    pub fn prompt(&self) -> String {
        let word = &self.current;
        match self.mode {
            WordMode::MeaningToWord => format!("Meaning: {}", word.meanings_joined()),
            WordMode::WordToMeaning => format!("Give a meaning for {}", reading(word)),
            WordMode::Review => format!(
                "[meaning] {}\n[kana] {}\n[kanji] {}",
                word.meanings_joined(),
                word.kana,
                word.kanji
            ),
        }
    }

    pub fn answer_meaning(&mut self, answer: &str) -> Option<Verdict> {
        if self.mode != WordMode::WordToMeaning {
            return None;
        }
        let correct = check_meaning(&self.current, answer);
        Some(self.judge(correct))
    }

    pub fn answer_word(&mut self, kana: &str, kanji: &str) -> Option<Verdict> {
        if self.mode != WordMode::MeaningToWord {
            return None;
        }
        let correct = check_kana_and_kanji(&self.current, kana, kanji);
        Some(self.judge(correct))
    }

    fn judge(&mut self, correct: bool) -> Verdict {
        self.stats.record(correct);
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect {
                expected: self.reveal(),
            }
        }
    }

    pub fn reveal(&self) -> String {
        let word = &self.current;
        match self.mode {
            WordMode::MeaningToWord if word.kanji.is_empty() => word.kana.clone(),
            WordMode::MeaningToWord => format!("{} / {}", word.kana, word.kanji),
            WordMode::WordToMeaning => word.meanings_joined(),
            WordMode::Review => self.prompt(),
        }
    }
}

fn reading(word: &WordItem) -> String {
    if word.kanji.is_empty() {
        word.kana.clone()
    } else {
        format!("{} ({})", word.kana, word.kanji)
    }
}
